// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file: which endpoint to
//! search, how long to wait for it, and whether to read results from a local
//! fixture instead of the network.

use std::{path::{Path, PathBuf}, time::Duration};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tunetap";

pub(crate) const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub search_url: String,
    pub media: Option<String>,
    pub country: Option<String>,
    pub limit: Option<u32>,
    pub request_timeout_secs: u64,
    /// Search for a blank term instead of clearing the results.
    pub allow_empty_search: bool,
    /// Read search results from this JSON file instead of the network.
    pub fixture_file: Option<PathBuf>,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            media: None,
            country: None,
            limit: None,
            request_timeout_secs: 60,
            allow_empty_search: false,
            fixture_file: None,
            log_dir: ".logs".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn load_config_from(path: &Path) -> AppConfig {
    confy::load_path(path).unwrap_or_default()
}

pub fn save_config_to(path: &Path, cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store_path(path, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("tunetap.toml");

        let cfg = AppConfig {
            media: Some("music".to_string()),
            limit: Some(25),
            allow_empty_search: true,
            fixture_file: Some(PathBuf::from("results.json")),
            ..AppConfig::default()
        };

        save_config_to(&path, &cfg).expect("store config");
        assert_eq!(load_config_from(&path), cfg);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let cfg = load_config_from(&dir.path().join("absent.toml"));

        assert_eq!(cfg.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(60));
        assert!(!cfg.allow_empty_search);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "request_timeout_secs = 5\n").expect("write config");

        let cfg = load_config_from(&path);
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.search_url, DEFAULT_SEARCH_URL);
    }
}
