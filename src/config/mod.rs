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
//! This module manages the application configuration file. The API key may
//! also come from the `SPOONACULAR_API_KEY` environment variable, which takes
//! precedence over the file.

use std::{env, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::model::request::StalePolicy;

pub(crate) const CONFIG_NAME: &str = "pantrui";

pub(crate) const API_KEY_VAR: &str = "SPOONACULAR_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub suggestion_delay_ms: u64,
    pub suggestion_limit: Option<u32>,
    pub recipe_limit: Option<u32>,
    pub request_timeout_secs: u64,
    pub stale_responses: StalePolicy,
    pub map: MapConfig,
}

/// The static supermarket map page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MapConfig {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: None,
            api_base_url: "https://api.spoonacular.com".to_string(),
            suggestion_delay_ms: 2000,
            suggestion_limit: None,
            recipe_limit: None,
            request_timeout_secs: 10,
            stale_responses: StalePolicy::Accept,
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Nearby supermarkets".to_string(),
            description: "This map shows the supermarkets close to Fatec Indaiatuba.".to_string(),
            image: "images/supermarket-map.png".to_string(),
        }
    }
}

impl AppConfig {
    /// The API key from the environment, falling back to the configuration
    /// file. Blank values count as missing.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(env::var(API_KEY_VAR).ok(), self.api_key.as_deref())
    }

    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<&str>) -> Option<String> {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_file.map(str::to_string))
        .filter(|key| !key.trim().is_empty())
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the log file, alongside the configuration file.
pub fn log_file_path() -> Option<PathBuf> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None).ok()?;
    Some(config_path.parent()?.join(format!("{CONFIG_NAME}.log")))
}
