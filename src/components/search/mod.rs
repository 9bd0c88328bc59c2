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

//! Ingredient search view.
//!
//! This module holds the widget state of the search view: the text input,
//! which pane has focus, and the cursors into the suggestion dropdown, the
//! ingredient chips and the recipe table. The data itself lives in
//! [`SearchState`]; the view calls [`SearchView::sync`] after every change to
//! keep the input text and the cursors consistent with it.

mod event;
mod render;

use ratatui::widgets::ListState;
use tui_input::Input;

use crate::{
    components::RecipeTable,
    model::search::{SearchAction, SearchState},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchPane {
    #[default]
    Input,
    Suggestions,
    Ingredients,
    Recipes,
}

/// What the application should do in response to a key handled by the view.
#[derive(Debug, PartialEq)]
pub(crate) enum SearchViewAction {
    Dispatch(SearchAction),
    OpenImage(String),
    Handled,
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) active_pane: SearchPane,
    pub(crate) suggestions_state: ListState,
    pub(crate) selected_ingredient: Option<usize>,
    pub(crate) recipe_table: RecipeTable,
    pub(crate) is_active: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            active_pane: SearchPane::Input,
            suggestions_state: ListState::default(),
            selected_ingredient: None,
            recipe_table: RecipeTable::new(),
            is_active: false,
        }
    }

    /// Whether keystrokes are currently going into the text input.
    pub(crate) fn is_typing(&self) -> bool {
        self.active_pane == SearchPane::Input
    }

    /// Brings the widget state in line with `search`.
    pub(crate) fn sync(&mut self, search: &SearchState) {
        if self.input.value() != search.query() {
            self.input = Input::new(search.query().to_string());
        }

        let suggestions = search.visible_suggestions().len();
        if suggestions == 0 {
            self.suggestions_state.select(None);
            if self.active_pane == SearchPane::Suggestions {
                self.active_pane = SearchPane::Input;
            }
        } else if self.suggestions_state.selected().is_none_or(|i| i >= suggestions) {
            self.suggestions_state.select(Some(0));
        }

        let ingredients = search.ingredients().len();
        self.selected_ingredient = match self.selected_ingredient {
            _ if ingredients == 0 => None,
            Some(i) => Some(i.min(ingredients - 1)),
            None => Some(0),
        };

        self.recipe_table.ensure_selection(search.recipes().len());
    }

    fn next_pane(&mut self, search: &SearchState) {
        self.active_pane = match self.active_pane {
            SearchPane::Input if !search.visible_suggestions().is_empty() => SearchPane::Suggestions,
            SearchPane::Input | SearchPane::Suggestions => SearchPane::Ingredients,
            SearchPane::Ingredients => SearchPane::Recipes,
            SearchPane::Recipes => SearchPane::Input,
        };
    }

    fn previous_pane(&mut self, search: &SearchState) {
        self.active_pane = match self.active_pane {
            SearchPane::Input => SearchPane::Recipes,
            SearchPane::Suggestions => SearchPane::Input,
            SearchPane::Ingredients if !search.visible_suggestions().is_empty() => {
                SearchPane::Suggestions
            }
            SearchPane::Ingredients => SearchPane::Input,
            SearchPane::Recipes => SearchPane::Ingredients,
        };
    }

    fn next_suggestion(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.suggestions_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.suggestions_state.select(Some(i));
    }

    fn previous_suggestion(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.suggestions_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.suggestions_state.select(Some(i));
    }

    fn next_ingredient(&mut self, len: usize) {
        if len == 0 { return; }
        self.selected_ingredient = Some(match self.selected_ingredient {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    fn previous_ingredient(&mut self, len: usize) {
        if len == 0 { return; }
        self.selected_ingredient = Some(match self.selected_ingredient {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::model::{Recipe, Suggestion, request::StalePolicy};

    fn search_with_suggestions() -> SearchState {
        let mut search = SearchState::new(Duration::ZERO, StalePolicy::Discard);
        let now = Instant::now();
        search.reduce(SearchAction::EditQuery {
            text: "to".to_string(),
            now,
        });
        search.reduce(SearchAction::Tick(now));
        search.reduce(SearchAction::SuggestionsLoaded {
            seq: 1,
            suggestions: vec![Suggestion::new("tomato"), Suggestion::new("tofu")],
        });
        search
    }

    #[test]
    fn sync_copies_the_query_into_the_input() {
        let mut view = SearchView::new();
        let search = search_with_suggestions();

        view.sync(&search);
        assert_eq!(view.input.value(), "to");
        assert_eq!(view.suggestions_state.selected(), Some(0));
    }

    #[test]
    fn sync_clamps_cursors() {
        let mut view = SearchView::new();
        let mut search = SearchState::default();
        for name in ["egg", "flour", "milk"] {
            search.reduce(SearchAction::CommitText(name.to_string()));
        }
        view.sync(&search);
        view.selected_ingredient = Some(2);

        search.reduce(SearchAction::RemoveIngredient(2));
        view.sync(&search);
        assert_eq!(view.selected_ingredient, Some(1));

        search.reduce(SearchAction::ClearIngredients);
        view.sync(&search);
        assert_eq!(view.selected_ingredient, None);
    }

    #[test]
    fn suggestions_pane_is_skipped_when_empty() {
        let mut view = SearchView::new();
        let search = SearchState::default();

        view.next_pane(&search);
        assert_eq!(view.active_pane, SearchPane::Ingredients);
        view.previous_pane(&search);
        assert_eq!(view.active_pane, SearchPane::Input);

        let search = search_with_suggestions();
        view.next_pane(&search);
        assert_eq!(view.active_pane, SearchPane::Suggestions);
    }

    #[test]
    fn leaving_suggestions_when_they_disappear() {
        let mut view = SearchView::new();
        let mut search = search_with_suggestions();
        view.sync(&search);
        view.active_pane = SearchPane::Suggestions;

        search.reduce(SearchAction::SelectSuggestion {
            name: "tofu".to_string(),
            now: Instant::now(),
        });
        view.sync(&search);
        assert_eq!(view.active_pane, SearchPane::Input);
        assert_eq!(view.input.value(), "tofu");
    }

    #[test]
    fn recipe_cursor_starts_on_the_first_result() {
        let mut view = SearchView::new();
        let mut search = SearchState::default();
        search.reduce(SearchAction::SearchRecipes);
        search.reduce(SearchAction::RecipesLoaded {
            seq: 1,
            recipes: vec![Recipe::new(1, "Pancakes", "p.png")],
        });

        view.sync(&search);
        assert_eq!(view.recipe_table.selected(), Some(0));
    }
}
