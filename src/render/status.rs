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

//! Render the status line.
//!
//! Shows the last error when there is one, otherwise a summary of the search
//! and a reminder of the main key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App, MainView,
    render::icons::{ICON_LOADING, ICON_WARNING},
};

const SEARCH_HINT: &str = "Tab pane  Enter add  Ctrl+R search  : command  q quit";
const MAP_HINT: &str = "Enter open map  1 recipes  : command  q quit";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let base = Style::default().bg(theme.status_bar_colour);

    let line = if let Some(message) = &app.status {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{ICON_WARNING} {message}"),
                Style::default().fg(theme.error_colour),
            ),
        ])
    } else {
        let mut spans = vec![Span::raw(" ")];

        if app.search.is_loading() {
            spans.push(Span::styled(
                format!("{ICON_LOADING} Loading...  "),
                Style::default().fg(theme.accent_colour),
            ));
        }

        spans.push(Span::styled(
            format!(
                "{} ingredients, {} recipes  ",
                app.search.ingredients().len(),
                app.search.recipes().len()
            ),
            Style::default().fg(theme.commander_colour),
        ));

        let hint = match app.main_view {
            MainView::Search => SEARCH_HINT,
            MainView::Map => MAP_HINT,
        };
        spans.push(Span::styled(hint, Style::default().fg(theme.muted_colour)));

        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).style(base), area);
}
