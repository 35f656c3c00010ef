use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Runtime settings for one invocation, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub paths: Paths,
}

/// Named path entries: the data directory, each lookup table file, and each
/// dataset's output directory. Every key is required; a missing key is a
/// deserialization error that propagates to the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub output_pathmatics: PathBuf,
    pub output_vivvix: PathBuf,
    pub brandroot_lookup_table: PathBuf,
    pub airline_lookup_table: PathBuf,
    pub publisher_lookup_table: PathBuf,
    pub region_lookup_table: PathBuf,
    pub media_format_lookup_table: PathBuf,
    pub brand_lookup_table: PathBuf,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
