pub mod align_ops;
pub mod compound_ops;
pub mod config_ops;
pub mod reconcile_ops;

use std::path::Path;

use pron_core::g2p::{config::parse_mappings_toml, default_mappings, SpecialMappings};
use pron_core::settings::{self, Settings};

use crate::io::read_text;
use crate::CliError;

/// Global settings, from `path` when given.
pub fn load_settings(path: Option<&Path>) -> Result<&'static Settings, CliError> {
    if let Some(path) = path {
        settings::init_custom(read_text(path)?)?;
    }
    Ok(settings::settings())
}

/// Special mappings, from `path` when given.
pub fn load_mappings(path: Option<&Path>) -> Result<SpecialMappings, CliError> {
    match path {
        Some(path) => Ok(parse_mappings_toml(&read_text(path)?)?),
        None => Ok(default_mappings().clone()),
    }
}
