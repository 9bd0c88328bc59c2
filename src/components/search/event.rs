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

//! Event routing for the search view.
//!
//! Keys are interpreted according to the focused pane. The view never mutates
//! the search state itself, it only returns the [`SearchAction`] to apply.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{
        SearchPane, SearchView, SearchViewAction, recipe_table::RecipeTableAction,
    },
    model::search::{SearchAction, SearchState},
};

impl SearchView {
    /// Returns `None` when the key means nothing to the focused pane, leaving
    /// it to the global bindings.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        search: &SearchState,
    ) -> Option<SearchViewAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if let Some(action) = self.process_pane_switch(key_event, search) {
            return Some(action);
        }

        match self.active_pane {
            SearchPane::Input => Some(self.process_input_event(event, key_event, search)),
            SearchPane::Suggestions => self.process_suggestions_event(key_event, search),
            SearchPane::Ingredients => self.process_ingredients_event(key_event, search),
            SearchPane::Recipes => self.process_recipes_event(event, key_event, search),
        }
    }

    fn process_pane_switch(
        &mut self,
        key_event: &KeyEvent,
        search: &SearchState,
    ) -> Option<SearchViewAction> {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Tab, _) => self.next_pane(search),
            (KeyCode::BackTab, _) => self.previous_pane(search),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                return Some(SearchViewAction::Dispatch(SearchAction::SearchRecipes));
            }
            _ => return None,
        }

        Some(SearchViewAction::Handled)
    }

    fn process_input_event(
        &mut self,
        event: &Event,
        key_event: &KeyEvent,
        search: &SearchState,
    ) -> SearchViewAction {
        match key_event.code {
            KeyCode::Enter => SearchViewAction::Dispatch(SearchAction::Commit),

            KeyCode::Esc => {
                self.active_pane = SearchPane::Ingredients;
                SearchViewAction::Handled
            }

            KeyCode::Down if !search.visible_suggestions().is_empty() => {
                self.active_pane = SearchPane::Suggestions;
                SearchViewAction::Handled
            }

            _ => {
                self.input.handle_event(event);

                if self.input.value() != search.query() {
                    SearchViewAction::Dispatch(SearchAction::EditQuery {
                        text: self.input.value().to_string(),
                        now: Instant::now(),
                    })
                } else {
                    SearchViewAction::Handled
                }
            }
        }
    }

    fn process_suggestions_event(
        &mut self,
        key_event: &KeyEvent,
        search: &SearchState,
    ) -> Option<SearchViewAction> {
        let suggestions = search.visible_suggestions();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next_suggestion(suggestions.len()),
            KeyCode::Char('k') | KeyCode::Up => self.previous_suggestion(suggestions.len()),

            KeyCode::Enter => {
                self.active_pane = SearchPane::Input;
                let selected = self
                    .suggestions_state
                    .selected()
                    .and_then(|i| suggestions.get(i));
                return Some(match selected {
                    Some(suggestion) => {
                        SearchViewAction::Dispatch(SearchAction::SelectSuggestion {
                            name: suggestion.name.clone(),
                            now: Instant::now(),
                        })
                    }
                    None => SearchViewAction::Handled,
                });
            }

            KeyCode::Esc => self.active_pane = SearchPane::Input,

            _ => return self.process_common_event(key_event),
        }

        Some(SearchViewAction::Handled)
    }

    fn process_ingredients_event(
        &mut self,
        key_event: &KeyEvent,
        search: &SearchState,
    ) -> Option<SearchViewAction> {
        let len = search.ingredients().len();

        match key_event.code {
            KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Right | KeyCode::Down => {
                self.next_ingredient(len)
            }
            KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::Left | KeyCode::Up => {
                self.previous_ingredient(len)
            }

            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                return Some(match self.selected_ingredient.filter(|&i| i < len) {
                    Some(index) => {
                        SearchViewAction::Dispatch(SearchAction::RemoveIngredient(index))
                    }
                    None => SearchViewAction::Handled,
                });
            }

            _ => return self.process_common_event(key_event),
        }

        Some(SearchViewAction::Handled)
    }

    fn process_recipes_event(
        &mut self,
        event: &Event,
        key_event: &KeyEvent,
        search: &SearchState,
    ) -> Option<SearchViewAction> {
        let recipes = search.recipes();

        match self.recipe_table.process_event(event, recipes.len()) {
            Some(RecipeTableAction::Open(index)) => Some(match recipes.get(index) {
                Some(recipe) => SearchViewAction::OpenImage(recipe.image.clone()),
                None => SearchViewAction::Handled,
            }),
            Some(RecipeTableAction::Moved) => Some(SearchViewAction::Handled),
            None => self.process_common_event(key_event),
        }
    }

    /// Keys shared by every pane except the text input.
    fn process_common_event(&mut self, key_event: &KeyEvent) -> Option<SearchViewAction> {
        match key_event.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.active_pane = SearchPane::Input;
                Some(SearchViewAction::Handled)
            }
            KeyCode::Char('s') => Some(SearchViewAction::Dispatch(SearchAction::SearchRecipes)),
            _ => None,
        }
    }
}
