// src/config/mod.rs

pub mod settings;
pub mod site;
pub mod subst;

pub use settings::Settings;
