// src/config/subst.rs

//! `${name}` variable substitution for configuration values.
//!
//! Values read from the installed configuration may reference other
//! properties (or process environment variables) as `${name}`. Resolution is
//! repeated left-to-right on the rewritten string until no token remains.
//!
//! Each top-level call keeps a "seen" set of property names. Meeting the same
//! name twice aborts with an error. This catches cycles (`a = "${a}"`), but it
//! also rejects an expression that legitimately references one property twice.
//! That stricter behaviour is deliberate: it matches the tool this replaces,
//! and relaxing it would silently change what existing configurations mean.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{HadctlError, Result};

/// `${name}`, where the name is non-empty and contains no `}`, `$` or space.
static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{[^}$ ]+\}").expect("variable pattern is valid"));

/// Resolve every `${name}` token in `expr`.
///
/// Names are looked up in the process environment first, then in `conf`.
/// Unresolved names substitute the empty string.
pub fn substitute(expr: &str, conf: &HashMap<String, String>) -> Result<String> {
    let mut result = expr.to_string();
    let mut seen: HashSet<String> = HashSet::new();

    // Termination is guaranteed by the seen set, not by a step bound: every
    // iteration either consumes a fresh name or errors out.
    loop {
        let Some((start, end)) = VARIABLE_PATTERN
            .find(&result)
            .map(|m| (m.start(), m.end()))
        else {
            break;
        };

        let name = result[start + 2..end - 1].to_string();
        if !seen.insert(name.clone()) {
            return Err(HadctlError::Config(format!(
                "`{expr}` contains a cycle or uses the same property substitution more than once \
                 (property `{name}`)"
            )));
        }

        let value = resolve(&name, conf).unwrap_or_default();
        result.replace_range(start..end, &value);
    }

    Ok(result)
}

fn resolve(name: &str, conf: &HashMap<String, String>) -> Option<String> {
    std::env::var(name).ok().or_else(|| conf.get(name).cloned())
}
