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

//! Screen composition.
//!
//! [`draw`] lays out the frame and asks each part to paint itself. Views keep
//! their own cursor state, which is why drawing needs `&mut App`.

mod commander;
pub(crate) mod icons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::{
    App, MainView,
    render::{
        commander::draw_commander,
        icons::{ICON_MAP, ICON_SEARCH},
        status::draw_status,
    },
};

/// Paints, top to bottom, the view tabs, the active view, the status line and
/// the command line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, outer[0], app);

    match app.main_view {
        MainView::Search => app.search_view.draw(f, outer[1], &app.search, &app.theme),
        MainView::Map => app.map_view.draw(f, outer[1], &app.config.map, &app.theme),
    };

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.main_view {
        MainView::Search => 0,
        MainView::Map => 1,
    };

    let tabs = Tabs::new(vec![
        Line::from(format!("{ICON_SEARCH} 1 Recipes")),
        Line::from(format!("{ICON_MAP} 2 Map")),
    ])
    .select(selected)
    .style(Style::default().fg(app.theme.muted_colour))
    .highlight_style(
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border_colour)),
    );

    f.render_widget(tabs, area);
}
