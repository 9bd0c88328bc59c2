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

//! Command-line input logic and state management.
//!
//! This module implements the command-line component: a text input opened
//! with `:` that dispatches the corresponding application event when a command
//! is submitted with Enter.
//!
//! | Command            | Effect                               |
//! |--------------------|--------------------------------------|
//! | `q`, `quit`        | exit                                 |
//! | `add <ingredient>` | add an ingredient                    |
//! | `rm <n>`           | remove the n-th ingredient (from 1)  |
//! | `clear`            | remove every ingredient              |
//! | `search`, `s`      | search recipes                       |
//! | `1`, `recipes`     | show the recipe search view          |
//! | `2`, `map`         | show the supermarket map             |

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent, model::search::SearchAction};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if the command line consumed
    /// it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_sender: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                if let Some(event) = parse_command(self.input.value()) {
                    // The receiver only goes away when the application exits.
                    let _ = event_sender.send(event);
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }
}

/// Translates a command line into the application event it requests.
fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return None,

        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["add"] => AppEvent::Error("Usage: add <ingredient>".to_string()),
        ["add", ..] => AppEvent::Search(SearchAction::CommitText(argument(buffer, "add"))),

        ["rm", number] => match number.parse::<usize>() {
            Ok(n) if n >= 1 => AppEvent::Search(SearchAction::RemoveIngredient(n - 1)),
            _ => AppEvent::Error(format!("Not an ingredient number: {number}")),
        },

        ["clear"] => AppEvent::Search(SearchAction::ClearIngredients),

        ["search"] | ["s"] => AppEvent::Search(SearchAction::SearchRecipes),

        ["1"] | ["recipes"] => AppEvent::SetMainView(MainView::Search),
        ["2"] | ["map"] => AppEvent::SetMainView(MainView::Map),

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {cmd}")),
    };

    Some(event)
}

/// The text after `command`, with inner whitespace kept as typed.
fn argument(buffer: &str, command: &str) -> String {
    buffer
        .trim_start()
        .strip_prefix(command)
        .unwrap_or_default()
        .trim()
        .to_string()
}
