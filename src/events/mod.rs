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

//! The event loop.
//!
//! Key presses, ticks, command-line requests and API results all arrive as
//! [`AppEvent`]s on one channel. Each is applied to the [`App`] in arrival
//! order and the screen is redrawn afterwards, so the UI never observes a
//! half-applied change.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, MainView, model::search::SearchAction, render::draw};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    SetMainView(MainView),

    Search(SearchAction),

    OpenImage(String),

    Error(String),

    ExitApplication,
}

/// Draws once, then handles and redraws per event until
/// [`AppEvent::ExitApplication`] arrives or every sender is gone.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app)?,
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::Search(action) => handle_search_action(app, action)?,
        AppEvent::OpenImage(target) => handle_open_image(app, &target),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
