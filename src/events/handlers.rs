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

use std::time::Instant;

use anyhow::Result;
use tracing::warn;

use crate::{App, MainView, model::search::SearchAction, tasks::AppTask};

pub(super) fn handle_tick(app: &mut App) -> Result<()> {
    handle_search_action(app, SearchAction::Tick(Instant::now()))
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.search_view.is_active = matches!(main_view, MainView::Search);
    app.map_view.is_active = matches!(main_view, MainView::Map);
    app.main_view = main_view;
}

/// Applies a search action and forwards the resulting requests to the task
/// worker.
pub(super) fn handle_search_action(app: &mut App, action: SearchAction) -> Result<()> {
    match &action {
        SearchAction::SuggestionsFailed { reason, .. } => {
            app.status = Some(format!("Could not load suggestions: {reason}"));
        }
        SearchAction::RecipesFailed { reason, .. } => {
            app.status = Some(format!("Could not load recipes: {reason}"));
        }
        SearchAction::SuggestionsLoaded { .. } | SearchAction::RecipesLoaded { .. } => {
            app.status = None;
        }
        _ => {}
    }

    let update = app.search.reduce(action);
    if update.changed {
        app.search_view.sync(&app.search);
    }

    for effect in update.effects {
        app.task_tx.send(AppTask::from(effect))?;
    }

    Ok(())
}

pub(super) fn handle_open_image(app: &mut App, target: &str) {
    if let Err(e) = open::that_detached(target) {
        warn!(target, error = %e, "failed to open image");
        app.status = Some(format!("Could not open {target}: {e}"));
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "application error");
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{Recipe, Suggestion},
    };

    fn app() -> (App, mpsc::Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    #[test]
    fn due_fetch_is_sent_to_the_worker() {
        let (mut app, task_rx) = app();
        let start = Instant::now();

        handle_search_action(
            &mut app,
            SearchAction::EditQuery {
                text: "egg".to_string(),
                now: start,
            },
        )
        .unwrap();
        assert!(task_rx.try_recv().is_err());

        handle_search_action(&mut app, SearchAction::Tick(start + Duration::from_secs(3))).unwrap();
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::FetchSuggestions {
                seq: 1,
                query: "egg".to_string()
            }
        );
    }

    #[test]
    fn committing_resets_the_input_widget() {
        let (mut app, _task_rx) = app();

        handle_search_action(
            &mut app,
            SearchAction::SelectSuggestion {
                name: "tomato".to_string(),
                now: Instant::now(),
            },
        )
        .unwrap();
        assert_eq!(app.search_view.input.value(), "tomato");

        handle_search_action(&mut app, SearchAction::Commit).unwrap();
        assert_eq!(app.search_view.input.value(), "");
        assert_eq!(app.search.ingredients().as_slice(), ["tomato"]);
    }

    #[test]
    fn failures_are_shown_and_cleared_by_success() {
        let (mut app, _task_rx) = app();

        handle_search_action(
            &mut app,
            SearchAction::RecipesFailed {
                seq: 1,
                reason: "timeout".to_string(),
            },
        )
        .unwrap();
        assert_eq!(app.status.as_deref(), Some("Could not load recipes: timeout"));

        handle_search_action(
            &mut app,
            SearchAction::SuggestionsLoaded {
                seq: 1,
                suggestions: vec![Suggestion::new("egg")],
            },
        )
        .unwrap();
        assert!(app.status.is_none());
    }

    #[test]
    fn search_request_goes_to_the_worker() {
        let (mut app, task_rx) = app();
        handle_search_action(&mut app, SearchAction::CommitText("egg".to_string())).unwrap();
        handle_search_action(&mut app, SearchAction::SearchRecipes).unwrap();

        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::FetchRecipes {
                seq: 1,
                ingredients: vec!["egg".to_string()]
            }
        );

        handle_search_action(
            &mut app,
            SearchAction::RecipesLoaded {
                seq: 1,
                recipes: vec![Recipe::new(1, "Omelette", "o.png")],
            },
        )
        .unwrap();
        assert_eq!(app.search_view.recipe_table.selected(), Some(0));
    }

    #[test]
    fn switching_views_toggles_activity() {
        let (mut app, _task_rx) = app();

        handle_set_main_view(&mut app, MainView::Map);
        assert!(app.map_view.is_active);
        assert!(!app.search_view.is_active);

        handle_set_main_view(&mut app, MainView::Search);
        assert!(app.search_view.is_active);
        assert!(!app.map_view.is_active);
    }
}
