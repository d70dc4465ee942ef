// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Knobs for one run. The binary always uses `RunOptions::default()`;
/// library callers (tests) point it somewhere else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub base_url: String,
    pub data_dir: PathBuf,
    /// Season directory name, e.g. `season_2024_2025`.
    /// Derived from the issue date when `None`.
    pub season: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            season: None,
        }
    }
}

/// Full URL of a dashboard resource, tolerating a base URL with or without
/// the trailing slash.
pub fn resource_url(base_url: &str, resource: &str) -> String {
    if base_url.ends_with('/') {
        join!(base_url, resource)
    } else {
        join!(base_url, "/", resource)
    }
}
