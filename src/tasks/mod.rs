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

//! Asynchronous application task processing.
//!
//! This module offloads network requests to the food API from the main UI
//! thread. A dedicated worker loop receives [`AppTask`] requests and runs each
//! one on its own thread, so a slow recipe search never holds up a suggestion
//! lookup (and vice versa). Results are broadcast back to the application as
//! [`AppEvent::Search`] events carrying the request's sequence number.
//!
//! Only actions that may block should be implemented as tasks. Everything
//! else is handled directly by events.

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use tracing::{debug, warn};

use crate::{
    events::AppEvent,
    model::search::{SearchAction, SearchEffect},
    provider::RecipeProvider,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    FetchSuggestions { seq: u64, query: String },
    FetchRecipes { seq: u64, ingredients: Vec<String> },
}

impl From<SearchEffect> for AppTask {
    fn from(effect: SearchEffect) -> Self {
        match effect {
            SearchEffect::FetchSuggestions { seq, query } => AppTask::FetchSuggestions { seq, query },
            SearchEffect::FetchRecipes { seq, ingredients } => {
                AppTask::FetchRecipes { seq, ingredients }
            }
        }
    }
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `provider` - The food API used to serve every task.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    provider: Arc<dyn RecipeProvider>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let provider = Arc::clone(&provider);
            let event_tx = event_tx.clone();

            thread::spawn(move || {
                let event = handle_task(provider.as_ref(), task);
                // The receiver only goes away when the application exits.
                let _ = event_tx.send(event);
            });
        }

        debug!("task channel closed, worker exiting");
    })
}

/// Executes a single task, turning the provider's answer into the search
/// action that reports it.
fn handle_task(provider: &dyn RecipeProvider, task: AppTask) -> AppEvent {
    let action = match task {
        AppTask::FetchSuggestions { seq, query } => match provider.suggest_ingredients(&query) {
            Ok(suggestions) => SearchAction::SuggestionsLoaded { seq, suggestions },
            Err(e) => {
                warn!(seq, error = %e, "Error suggesting ingredients");
                SearchAction::SuggestionsFailed {
                    seq,
                    reason: e.to_string(),
                }
            }
        },

        AppTask::FetchRecipes { seq, ingredients } => match provider.find_recipes(&ingredients) {
            Ok(recipes) => SearchAction::RecipesLoaded { seq, recipes },
            Err(e) => {
                warn!(seq, error = %e, "Error fetching recipes");
                SearchAction::RecipesFailed {
                    seq,
                    reason: e.to_string(),
                }
            }
        },
    };

    AppEvent::Search(action)
}
