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

//! Ingredient list management.
//!
//! An ordered list of distinct ingredient names. Order only matters for
//! display; the recipe search treats the list as a set.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed `text` unless it is empty or already present
    /// (exact, case-sensitive match).
    ///
    /// Returns `true` if the list changed.
    pub(crate) fn commit(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }

        self.items.push(trimmed.to_string());
        true
    }

    /// Removes the ingredient at `index` of the current list.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub(crate) fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub(crate) fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
