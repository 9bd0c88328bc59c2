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

//! Input handling and event processing for the recipe table.
//!
//! This module maps raw terminal keyboard events to table navigation and to
//! the action of opening the highlighted recipe.

use crossterm::event::{Event, KeyCode};

use crate::components::recipe_table::{RecipeTable, RecipeTableAction};

impl RecipeTable {
    /// Returns `None` when the key is not a table key.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<RecipeTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

            KeyCode::Enter => {
                return Some(match self.selected().filter(|&i| i < len) {
                    Some(i) => RecipeTableAction::Open(i),
                    None => RecipeTableAction::Moved,
                });
            }

            _ => return None,
        }

        Some(RecipeTableAction::Moved)
    }
}
