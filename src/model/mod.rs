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

//! Domain models and core data structures.
//!
//! This module defines the entities exchanged with the food API, ingredient
//! suggestions and recipes, together with the search state machine that owns
//! them for the lifetime of the application.

pub(crate) mod ingredients;
pub(crate) mod request;
pub(crate) mod search;

use serde::Deserialize;

/// An ingredient name offered by the autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Suggestion {
    pub(crate) name: String,
}

impl Suggestion {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A recipe matching a set of ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Recipe {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) image: String,
    #[serde(default)]
    pub(crate) used_ingredient_count: u32,
    #[serde(default)]
    pub(crate) missed_ingredient_count: u32,
    #[serde(default)]
    pub(crate) likes: u32,
}

#[cfg(test)]
impl Recipe {
    pub(crate) fn new(id: u64, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            used_ingredient_count: 0,
            missed_ingredient_count: 0,
            likes: 0,
        }
    }
}
