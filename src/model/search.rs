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

//! Ingredient search state machine.
//!
//! [`SearchState`] owns the query text, the suggestion dropdown, the
//! ingredient list, the recipe results and the loading flag. Every change goes
//! through [`SearchState::reduce`], which applies one [`SearchAction`] and
//! reports whether anything changed together with the network requests
//! ([`SearchEffect`]s) the caller must issue. The state never performs I/O or
//! reads the clock itself, so every flow can be driven step by step in tests.
//!
//! # Flows
//!
//! * **Suggestions**: each change of the query text, typed or selected from
//!   the dropdown, cancels the pending fetch and, for non-blank text,
//!   schedules a new one after the quiet period. Ticks fire the fetch.
//! * **Ingredients**: commit the query text, select a suggestion into the
//!   query text, or remove by index.
//! * **Recipes**: an explicit search snapshots the ingredient list; a non-empty
//!   result replaces the recipe list, anything else leaves it alone.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    model::{
        Recipe, Suggestion,
        ingredients::IngredientSet,
        request::{RequestTracker, StalePolicy},
    },
    util::timer::{DeferredQueue, TaskHandle},
};

pub(crate) const DEFAULT_SUGGESTION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchAction {
    EditQuery { text: String, now: Instant },
    Tick(Instant),

    SuggestionsLoaded { seq: u64, suggestions: Vec<Suggestion> },
    SuggestionsFailed { seq: u64, reason: String },
    SelectSuggestion { name: String, now: Instant },

    Commit,
    CommitText(String),
    RemoveIngredient(usize),
    ClearIngredients,

    SearchRecipes,
    RecipesLoaded { seq: u64, recipes: Vec<Recipe> },
    RecipesFailed { seq: u64, reason: String },
}

/// Network requests produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchEffect {
    FetchSuggestions { seq: u64, query: String },
    FetchRecipes { seq: u64, ingredients: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    FetchSuggestions,
}

/// The result of applying one action.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Update {
    pub(crate) changed: bool,
    pub(crate) effects: Vec<SearchEffect>,
}

impl Update {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    fn changed_if(changed: bool) -> Self {
        Self {
            changed,
            effects: vec![],
        }
    }

    fn with_effect(effect: SearchEffect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchState {
    query: String,
    suggestions: Vec<Suggestion>,
    ingredients: IngredientSet,
    recipes: Vec<Recipe>,

    suggestion_delay: Duration,
    stale_policy: StalePolicy,

    timers: DeferredQueue<Deferred>,
    pending_fetch: Option<TaskHandle>,

    suggestion_requests: RequestTracker,
    recipe_requests: RequestTracker,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_DELAY, StalePolicy::default())
    }
}

impl SearchState {
    pub(crate) fn new(suggestion_delay: Duration, stale_policy: StalePolicy) -> Self {
        Self {
            query: String::new(),
            suggestions: vec![],
            ingredients: IngredientSet::new(),
            recipes: vec![],
            suggestion_delay,
            stale_policy,
            timers: DeferredQueue::new(),
            pending_fetch: None,
            suggestion_requests: RequestTracker::new(),
            recipe_requests: RequestTracker::new(),
        }
    }

    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self::new(config.suggestion_delay(), config.stale_responses)
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub(crate) fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// The suggestions to display; always empty while the query is blank.
    pub(crate) fn visible_suggestions(&self) -> &[Suggestion] {
        if self.query.trim().is_empty() {
            &[]
        } else {
            &self.suggestions
        }
    }

    pub(crate) fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    pub(crate) fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.suggestion_requests.is_pending()
    }

    #[cfg(test)]
    pub(crate) fn has_pending_fetch(&self) -> bool {
        self.pending_fetch.is_some()
    }

    /// Applies a single action.
    pub(crate) fn reduce(&mut self, action: SearchAction) -> Update {
        match action {
            SearchAction::EditQuery { text, now } => self.edit_query(text, now),
            SearchAction::Tick(now) => self.tick(now),

            SearchAction::SuggestionsLoaded { seq, suggestions } => {
                self.suggestions_loaded(seq, suggestions)
            }
            SearchAction::SuggestionsFailed { seq, reason } => self.suggestions_failed(seq, reason),
            SearchAction::SelectSuggestion { name, now } => self.select_suggestion(name, now),

            SearchAction::Commit => {
                let text = self.query.clone();
                self.commit(&text)
            }
            SearchAction::CommitText(text) => self.commit(&text),
            SearchAction::RemoveIngredient(index) => self.remove_ingredient(index),
            SearchAction::ClearIngredients => {
                let changed = !self.ingredients.is_empty();
                self.ingredients.clear();
                Update::changed_if(changed)
            }

            SearchAction::SearchRecipes => self.search_recipes(),
            SearchAction::RecipesLoaded { seq, recipes } => self.recipes_loaded(seq, recipes),
            SearchAction::RecipesFailed { seq, reason } => self.recipes_failed(seq, reason),
        }
    }

    fn edit_query(&mut self, text: String, now: Instant) -> Update {
        if text == self.query {
            return Update::unchanged();
        }

        self.query = text;
        self.cancel_pending_fetch();

        if self.query.trim().is_empty() {
            self.suggestions.clear();
            self.suggestion_requests.invalidate();
        } else {
            self.schedule_fetch(now);
        }

        Update::changed()
    }

    fn tick(&mut self, now: Instant) -> Update {
        let mut update = Update::unchanged();

        for deferred in self.timers.poll_due(now) {
            match deferred {
                Deferred::FetchSuggestions => {
                    self.pending_fetch = None;
                    let seq = self.suggestion_requests.issue();
                    debug!(seq, query = %self.query, "fetching ingredient suggestions");

                    update.changed = true;
                    update.effects.push(SearchEffect::FetchSuggestions {
                        seq,
                        query: self.query.clone(),
                    });
                }
            }
        }

        update
    }

    fn suggestions_loaded(&mut self, seq: u64, suggestions: Vec<Suggestion>) -> Update {
        let was_loading = self.is_loading();

        if !self.suggestion_requests.complete(seq, self.stale_policy) {
            debug!(seq, "discarding stale suggestions");
            return Update::changed_if(was_loading != self.is_loading());
        }

        self.suggestions = suggestions;
        Update::changed()
    }

    fn suggestions_failed(&mut self, seq: u64, reason: String) -> Update {
        let was_loading = self.is_loading();
        self.suggestion_requests.complete(seq, self.stale_policy);
        warn!(seq, %reason, "failed to fetch ingredient suggestions");

        Update::changed_if(was_loading != self.is_loading())
    }

    fn select_suggestion(&mut self, name: String, now: Instant) -> Update {
        self.cancel_pending_fetch();
        self.suggestion_requests.invalidate();
        self.suggestions.clear();
        self.query = name;

        if !self.query.trim().is_empty() {
            self.schedule_fetch(now);
        }

        Update::changed()
    }

    fn commit(&mut self, text: &str) -> Update {
        if !self.ingredients.commit(text) {
            debug!(text, "ignoring blank or duplicate ingredient");
            return Update::unchanged();
        }

        self.cancel_pending_fetch();
        self.suggestion_requests.invalidate();
        self.query.clear();
        self.suggestions.clear();

        Update::changed()
    }

    fn remove_ingredient(&mut self, index: usize) -> Update {
        match self.ingredients.remove_at(index) {
            Some(_) => Update::changed(),
            None => {
                warn!(index, len = self.ingredients.len(), "ingredient index out of range");
                Update::unchanged()
            }
        }
    }

    fn search_recipes(&mut self) -> Update {
        let seq = self.recipe_requests.issue();
        let ingredients = self.ingredients.to_vec();
        debug!(seq, ?ingredients, "searching recipes");

        Update::with_effect(SearchEffect::FetchRecipes { seq, ingredients })
    }

    fn recipes_loaded(&mut self, seq: u64, recipes: Vec<Recipe>) -> Update {
        if !self.recipe_requests.complete(seq, self.stale_policy) {
            debug!(seq, "discarding stale recipes");
            return Update::unchanged();
        }

        if recipes.is_empty() {
            info!(seq, "No recipes found.");
            return Update::unchanged();
        }

        self.recipes = recipes;
        Update::changed()
    }

    fn recipes_failed(&mut self, seq: u64, reason: String) -> Update {
        self.recipe_requests.complete(seq, self.stale_policy);
        warn!(seq, %reason, "failed to fetch recipes");

        Update::unchanged()
    }

    fn schedule_fetch(&mut self, now: Instant) {
        let handle = self
            .timers
            .schedule(now, self.suggestion_delay, Deferred::FetchSuggestions);
        self.pending_fetch = Some(handle);
    }

    fn cancel_pending_fetch(&mut self) {
        if let Some(handle) = self.pending_fetch.take() {
            self.timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    fn state(policy: StalePolicy) -> SearchState {
        SearchState::new(DELAY, policy)
    }

    fn edit(state: &mut SearchState, text: &str, now: Instant) -> Update {
        state.reduce(SearchAction::EditQuery {
            text: text.to_string(),
            now,
        })
    }

    fn fetched_query(update: &Update) -> Option<(u64, String)> {
        update.effects.iter().find_map(|effect| match effect {
            SearchEffect::FetchSuggestions { seq, query } => Some((*seq, query.clone())),
            _ => None,
        })
    }

    fn names(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn fetch_fires_after_quiet_period() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "tom", start);
        assert!(search.has_pending_fetch());
        assert!(!search.is_loading());

        let early = search.reduce(SearchAction::Tick(start + Duration::from_millis(1999)));
        assert!(early.effects.is_empty());

        let due = search.reduce(SearchAction::Tick(start + DELAY));
        assert_eq!(fetched_query(&due), Some((1, "tom".to_string())));
        assert!(search.is_loading());
        assert!(!search.has_pending_fetch());
    }

    #[test]
    fn rapid_edits_coalesce_into_one_fetch() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        for (i, text) in ["t", "to", "tom", "toma"].iter().enumerate() {
            edit(&mut search, text, start + Duration::from_millis(500 * i as u64));
        }

        // The first edit's deadline has passed but it was cancelled.
        let update = search.reduce(SearchAction::Tick(start + DELAY + Duration::from_millis(100)));
        assert!(update.effects.is_empty());

        let update = search.reduce(SearchAction::Tick(start + Duration::from_millis(1500) + DELAY));
        assert_eq!(update.effects.len(), 1);
        assert_eq!(fetched_query(&update), Some((1, "toma".to_string())));
    }

    #[test]
    fn blank_query_clears_suggestions_without_fetching() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "egg", start);
        let due = search.reduce(SearchAction::Tick(start + DELAY));
        let (seq, _) = fetched_query(&due).unwrap();
        search.reduce(SearchAction::SuggestionsLoaded {
            seq,
            suggestions: vec![Suggestion::new("egg"), Suggestion::new("eggplant")],
        });
        assert_eq!(search.suggestions().len(), 2);

        for blank in ["", "   ", "\t"] {
            edit(&mut search, blank, start + DELAY);
            assert!(search.suggestions().is_empty());
            assert!(!search.has_pending_fetch());

            let later = search.reduce(SearchAction::Tick(start + 10 * DELAY));
            assert!(later.effects.is_empty());
        }
    }

    #[test]
    fn loaded_suggestions_keep_response_order() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "to", start);
        let (seq, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();

        let update = search.reduce(SearchAction::SuggestionsLoaded {
            seq,
            suggestions: vec![Suggestion::new("tomato"), Suggestion::new("tofu")],
        });
        assert!(update.changed);
        assert_eq!(names(search.visible_suggestions()), ["tomato", "tofu"]);
        assert!(!search.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_suggestions_and_clears_loading() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "to", start);
        let (seq, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        search.reduce(SearchAction::SuggestionsLoaded {
            seq,
            suggestions: vec![Suggestion::new("tomato")],
        });

        edit(&mut search, "tom", start + DELAY);
        let (seq, _) =
            fetched_query(&search.reduce(SearchAction::Tick(start + 2 * DELAY))).unwrap();
        assert!(search.is_loading());

        search.reduce(SearchAction::SuggestionsFailed {
            seq,
            reason: "connection reset".to_string(),
        });
        assert!(!search.is_loading());
        assert_eq!(names(search.suggestions()), ["tomato"]);
    }

    #[test]
    fn stale_suggestions_are_discarded() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "to", start);
        let (old, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        edit(&mut search, "tofu", start + DELAY);
        let (new, _) =
            fetched_query(&search.reduce(SearchAction::Tick(start + 2 * DELAY))).unwrap();

        search.reduce(SearchAction::SuggestionsLoaded {
            seq: new,
            suggestions: vec![Suggestion::new("tofu")],
        });
        let update = search.reduce(SearchAction::SuggestionsLoaded {
            seq: old,
            suggestions: vec![Suggestion::new("tomato")],
        });

        assert!(!update.changed);
        assert_eq!(names(search.suggestions()), ["tofu"]);
    }

    #[test]
    fn stale_suggestions_are_applied_when_accepted() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Accept);

        edit(&mut search, "to", start);
        let (old, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        edit(&mut search, "tofu", start + DELAY);
        let (new, _) =
            fetched_query(&search.reduce(SearchAction::Tick(start + 2 * DELAY))).unwrap();

        search.reduce(SearchAction::SuggestionsLoaded {
            seq: new,
            suggestions: vec![Suggestion::new("tofu")],
        });
        search.reduce(SearchAction::SuggestionsLoaded {
            seq: old,
            suggestions: vec![Suggestion::new("tomato")],
        });

        assert_eq!(names(search.suggestions()), ["tomato"]);
        assert!(!search.is_loading());
    }

    #[test]
    fn select_then_commit_round_trip() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "tom", start);
        let (seq, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        search.reduce(SearchAction::SuggestionsLoaded {
            seq,
            suggestions: vec![Suggestion::new("tomato"), Suggestion::new("tomatillo")],
        });

        search.reduce(SearchAction::SelectSuggestion {
            name: "tomato".to_string(),
            now: start + DELAY,
        });
        assert_eq!(search.query(), "tomato");
        assert!(search.suggestions().is_empty());
        assert!(search.ingredients().is_empty());
        assert!(search.has_pending_fetch());

        let update = search.reduce(SearchAction::Commit);
        assert!(update.changed);
        assert_eq!(search.ingredients().as_slice(), ["tomato"]);
        assert_eq!(search.query(), "");
    }

    #[test]
    fn selected_suggestion_is_fetched_after_quiet_period() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Accept);

        edit(&mut search, "tom", start);
        let (seq, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        search.reduce(SearchAction::SuggestionsLoaded {
            seq,
            suggestions: vec![Suggestion::new("tomato")],
        });

        let selected_at = start + 2 * DELAY;
        search.reduce(SearchAction::SelectSuggestion {
            name: "tomato".to_string(),
            now: selected_at,
        });
        assert!(search.has_pending_fetch());

        let early = search.reduce(SearchAction::Tick(selected_at + Duration::from_millis(1999)));
        assert!(early.effects.is_empty());

        let due = search.reduce(SearchAction::Tick(selected_at + Duration::from_secs(20)));
        assert_eq!(fetched_query(&due), Some((2, "tomato".to_string())));
        assert!(search.is_loading());
    }

    #[test]
    fn selection_replaces_a_pending_keystroke_fetch() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Accept);

        edit(&mut search, "tom", start);
        search.reduce(SearchAction::SelectSuggestion {
            name: "tomatillo".to_string(),
            now: start + Duration::from_millis(500),
        });

        let update = search.reduce(SearchAction::Tick(start + DELAY));
        assert!(update.effects.is_empty());

        let update =
            search.reduce(SearchAction::Tick(start + Duration::from_millis(500) + DELAY));
        assert_eq!(update.effects.len(), 1);
        assert_eq!(fetched_query(&update), Some((1, "tomatillo".to_string())));
    }

    #[test]
    fn default_config_applies_late_responses() {
        let config = AppConfig::default();
        let start = Instant::now();
        let mut search = SearchState::from_config(&config);

        edit(&mut search, "to", start);
        let (old, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        edit(&mut search, "tofu", start + DELAY);
        let (new, _) =
            fetched_query(&search.reduce(SearchAction::Tick(start + 2 * DELAY))).unwrap();

        search.reduce(SearchAction::SuggestionsLoaded {
            seq: new,
            suggestions: vec![Suggestion::new("tofu")],
        });
        let update = search.reduce(SearchAction::SuggestionsLoaded {
            seq: old,
            suggestions: vec![Suggestion::new("tomato")],
        });

        assert!(update.changed);
        assert_eq!(names(search.visible_suggestions()), ["tomato"]);
        assert!(!search.is_loading());
    }

    #[test]
    fn duplicate_commit_is_a_no_op() {
        let mut search = state(StalePolicy::Discard);
        let now = Instant::now();

        edit(&mut search, "egg", now);
        assert!(search.reduce(SearchAction::Commit).changed);

        edit(&mut search, " egg ", now);
        let update = search.reduce(SearchAction::Commit);
        assert!(!update.changed);
        assert_eq!(search.ingredients().as_slice(), ["egg"]);
        // The query text is kept when nothing was committed.
        assert_eq!(search.query(), " egg ");
    }

    #[test]
    fn blank_commit_is_a_no_op() {
        let mut search = state(StalePolicy::Discard);
        assert_eq!(search.reduce(SearchAction::Commit), Update::unchanged());
        assert_eq!(
            search.reduce(SearchAction::CommitText("   ".to_string())),
            Update::unchanged()
        );
    }

    #[test]
    fn commit_cancels_pending_fetch() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "flour", start);
        search.reduce(SearchAction::Commit);

        assert!(!search.has_pending_fetch());
        assert!(search.reduce(SearchAction::Tick(start + DELAY)).effects.is_empty());
    }

    #[test]
    fn suggestions_arriving_after_commit_are_hidden() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Accept);

        edit(&mut search, "flo", start);
        let (seq, _) = fetched_query(&search.reduce(SearchAction::Tick(start + DELAY))).unwrap();
        search.reduce(SearchAction::CommitText("flour".to_string()));

        search.reduce(SearchAction::SuggestionsLoaded {
            seq,
            suggestions: vec![Suggestion::new("flour")],
        });
        assert!(search.visible_suggestions().is_empty());
    }

    #[test]
    fn remove_twice_removes_two_distinct_elements() {
        let mut search = state(StalePolicy::Discard);
        for name in ["a", "b", "c"] {
            search.reduce(SearchAction::CommitText(name.to_string()));
        }

        search.reduce(SearchAction::RemoveIngredient(0));
        search.reduce(SearchAction::RemoveIngredient(0));
        assert_eq!(search.ingredients().as_slice(), ["c"]);

        assert!(!search.reduce(SearchAction::RemoveIngredient(5)).changed);
    }

    #[test]
    fn search_snapshots_ingredients() {
        let mut search = state(StalePolicy::Discard);
        search.reduce(SearchAction::CommitText("egg".to_string()));
        search.reduce(SearchAction::CommitText("flour".to_string()));

        let update = search.reduce(SearchAction::SearchRecipes);
        assert_eq!(
            update.effects,
            vec![SearchEffect::FetchRecipes {
                seq: 1,
                ingredients: vec!["egg".to_string(), "flour".to_string()],
            }]
        );

        let update = search.reduce(SearchAction::RecipesLoaded {
            seq: 1,
            recipes: vec![Recipe::new(1, "Pancakes", "p.png")],
        });
        assert!(update.changed);
        assert_eq!(search.recipes(), [Recipe::new(1, "Pancakes", "p.png")]);
    }

    #[test]
    fn empty_recipe_result_keeps_previous_recipes() {
        let mut search = state(StalePolicy::Discard);

        search.reduce(SearchAction::SearchRecipes);
        search.reduce(SearchAction::RecipesLoaded {
            seq: 1,
            recipes: vec![Recipe::new(1, "Pancakes", "p.png")],
        });

        search.reduce(SearchAction::SearchRecipes);
        let update = search.reduce(SearchAction::RecipesLoaded {
            seq: 2,
            recipes: vec![],
        });
        assert!(!update.changed);
        assert_eq!(search.recipes(), [Recipe::new(1, "Pancakes", "p.png")]);

        search.reduce(SearchAction::SearchRecipes);
        search.reduce(SearchAction::RecipesFailed {
            seq: 3,
            reason: "timeout".to_string(),
        });
        assert_eq!(search.recipes().len(), 1);
    }

    #[test]
    fn stale_recipes_are_discarded() {
        let mut search = state(StalePolicy::Discard);

        search.reduce(SearchAction::SearchRecipes);
        search.reduce(SearchAction::SearchRecipes);

        search.reduce(SearchAction::RecipesLoaded {
            seq: 2,
            recipes: vec![Recipe::new(2, "Bread", "b.png")],
        });
        search.reduce(SearchAction::RecipesLoaded {
            seq: 1,
            recipes: vec![Recipe::new(1, "Pancakes", "p.png")],
        });

        assert_eq!(search.recipes(), [Recipe::new(2, "Bread", "b.png")]);
    }

    #[test]
    fn recipe_search_does_not_touch_suggestion_flow() {
        let start = Instant::now();
        let mut search = state(StalePolicy::Discard);

        edit(&mut search, "egg", start);
        search.reduce(SearchAction::Tick(start + DELAY));
        assert!(search.is_loading());

        search.reduce(SearchAction::SearchRecipes);
        search.reduce(SearchAction::RecipesLoaded {
            seq: 1,
            recipes: vec![Recipe::new(1, "Pancakes", "p.png")],
        });
        assert!(search.is_loading());
        assert_eq!(search.query(), "egg");
    }

    #[test]
    fn clear_ingredients_reports_change_only_when_non_empty() {
        let mut search = state(StalePolicy::Discard);
        assert!(!search.reduce(SearchAction::ClearIngredients).changed);

        search.reduce(SearchAction::CommitText("salt".to_string()));
        assert!(search.reduce(SearchAction::ClearIngredients).changed);
        assert!(search.ingredients().is_empty());
    }
}
