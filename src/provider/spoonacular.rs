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

//! Spoonacular food API client.
//!
//! Implements [`RecipeProvider`] on top of a blocking `reqwest` client. The
//! client is only ever used from task worker threads, never from the UI
//! thread.
//!
//! Any JSON payload other than an array is read as "no results".

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;
use url::{Url, form_urlencoded};

use crate::{
    config::AppConfig,
    model::{Recipe, Suggestion},
    provider::{ProviderError, RecipeProvider},
};

const AUTOCOMPLETE_PATH: &str = "food/ingredients/autocomplete";
const FIND_BY_INGREDIENTS_PATH: &str = "recipes/findByIngredients";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) struct SpoonacularClient {
    client: Client,
    base_url: Url,
    api_key: String,
    suggestion_limit: Option<u32>,
    recipe_limit: Option<u32>,
}

impl SpoonacularClient {
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url(&config.api_base_url)?,
            api_key: config.api_key().unwrap_or_default(),
            suggestion_limit: config.suggestion_limit,
            recipe_limit: config.recipe_limit,
        })
    }

    fn suggestion_url(&self, query: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.join(AUTOCOMPLETE_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apiKey", &self.api_key);
            pairs.append_pair("query", query);
            if let Some(limit) = self.suggestion_limit {
                pairs.append_pair("number", &limit.to_string());
            }
        }

        Ok(url)
    }

    fn recipe_url(&self, ingredients: &[String]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.join(FIND_BY_INGREDIENTS_PATH)?;

        // Built by hand: the ",+" separator must reach the provider unescaped.
        let mut query = format!(
            "apiKey={}&ingredients={}",
            encode(&self.api_key),
            encode_ingredients(ingredients)
        );
        if let Some(limit) = self.recipe_limit {
            query.push_str(&format!("&number={limit}"));
        }
        url.set_query(Some(&query));

        Ok(url)
    }

    fn get(&self, url: Url) -> Result<String, ProviderError> {
        debug!(path = url.path(), "provider request");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body });
        }

        Ok(body)
    }
}

impl RecipeProvider for SpoonacularClient {
    fn suggest_ingredients(&self, query: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let body = self.get(self.suggestion_url(query)?)?;
        Ok(parse_suggestions(&body)?)
    }

    fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>, ProviderError> {
        let body = self.get(self.recipe_url(ingredients)?)?;
        Ok(parse_recipes(&body)?)
    }
}

/// Parses the configured base URL, making sure relative endpoint paths are
/// appended rather than replacing its last segment.
fn base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes ingredient names for the `ingredients` parameter: each name is
/// form-encoded and the names are joined with `,+`.
pub(crate) fn encode_ingredients(ingredients: &[String]) -> String {
    ingredients
        .iter()
        .map(|name| encode(name))
        .collect::<Vec<_>>()
        .join(",+")
}

pub(crate) fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, serde_json::Error> {
    let Value::Array(items) = serde_json::from_str::<Value>(body)? else {
        return Ok(vec![]);
    };

    let suggestions = items
        .iter()
        .filter_map(|item| item.get("name").and_then(Value::as_str))
        .map(Suggestion::new)
        .collect();

    Ok(suggestions)
}

pub(crate) fn parse_recipes(body: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    match serde_json::from_str::<Value>(body)? {
        array @ Value::Array(_) => serde_json::from_value(array),
        _ => Ok(vec![]),
    }
}
