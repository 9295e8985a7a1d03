// src/config/site.rs

//! Parsing of the installed Hadoop configuration document.
//!
//! A site file is a flat list of `<property>` records, each carrying a
//! `<name>` and a `<value>` child. We deliberately ignore everything else in
//! the document (the XSLT header, `<final>` markers, comments): unrecognized
//! structure is tolerated and records missing a name or value are skipped.

use std::collections::HashMap;

use crate::errors::{HadctlError, Result};

/// Parse a site document into a flat key/value map.
///
/// Duplicate names are a caller error; last-defined-wins.
pub fn parse_site_xml(text: &str) -> Result<HashMap<String, String>> {
    let doc = roxmltree::Document::parse(text)
        .map_err(|e| HadctlError::Config(format!("malformed configuration document: {e}")))?;

    let mut configurations = HashMap::new();
    for property in doc
        .root_element()
        .descendants()
        .filter(|n| n.has_tag_name("property"))
    {
        let name = child_text(property, "name");
        let value = child_text(property, "value");
        if let (Some(name), Some(value)) = (name, value) {
            configurations.insert(name, value);
        }
    }
    Ok(configurations)
}

fn child_text(node: roxmltree::Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name(tag))
        .and_then(|c| c.text())
        .map(|t| t.trim().to_string())
}
