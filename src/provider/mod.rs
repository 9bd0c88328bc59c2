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

//! External food API access.
//!
//! The application talks to two remote capabilities, ingredient autocomplete
//! and recipe lookup by ingredients, both behind the [`RecipeProvider`] trait.
//! The task worker only depends on the trait, so tests substitute an in-memory
//! provider for the HTTP client.

pub(crate) mod spoonacular;

use thiserror::Error;

use crate::model::{Recipe, Suggestion};

pub(crate) use spoonacular::SpoonacularClient;

#[derive(Debug, Error)]
pub(crate) enum ProviderError {
    #[error("invalid provider url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response: {0}")]
    Payload(#[from] serde_json::Error),
}

pub(crate) trait RecipeProvider: Send + Sync {
    /// Ingredient names completing `query`, in the provider's order.
    fn suggest_ingredients(&self, query: &str) -> Result<Vec<Suggestion>, ProviderError>;

    /// Recipes that use the given ingredients, in the provider's ranking.
    fn find_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>, ProviderError>;
}
