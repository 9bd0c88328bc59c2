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

//! Keyboard routing.
//!
//! Keys go to the first interested party: the command line when it is open,
//! the search input while it has focus, the command line trigger, the active
//! view, and finally the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App, MainView,
    components::{MapViewAction, SearchViewAction},
    events::AppEvent,
};

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if an event fails to send to the event loop or a request
/// fails to reach the task worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.active() {
        app.commander.handle_event(&event, &app.event_tx);
        return Ok(());
    }

    let typing = app.search_view.is_active && app.search_view.is_typing();
    if !typing && app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if app.search_view.is_active {
        if let Some(action) = app.search_view.process_event(&event, &app.search) {
            return dispatch_search_view_action(app, action);
        }
    }

    if app.map_view.is_active {
        if let Some(MapViewAction::OpenImage) = app.map_view.process_event(&event) {
            app.event_tx
                .send(AppEvent::OpenImage(app.config.map.image.clone()))?;
            return Ok(());
        }
    }

    process_global_key_event(app, key)
}

fn dispatch_search_view_action(app: &mut App, action: SearchViewAction) -> Result<()> {
    match action {
        // Applied immediately so the next keystroke sees the updated query.
        SearchViewAction::Dispatch(action) => super::handle_search_action(app, action)?,
        SearchViewAction::OpenImage(image) => app.event_tx.send(AppEvent::OpenImage(image))?,
        SearchViewAction::Handled => {}
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('1'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Search))?,
        (KeyCode::Char('2'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Map))?,

        _ => {}
    }

    Ok(())
}
