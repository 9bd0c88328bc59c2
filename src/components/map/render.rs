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

//! UI rendering logic for the map view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{components::MapView, config::MapConfig, theme::Theme};

impl MapView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, map: &MapConfig, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(map.title.as_str())
            .style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .block(header_block);

        f.render_widget(header, chunks[0]);

        let body = vec![
            Line::from(map.description.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Map: ", Style::default().fg(theme.muted_colour)),
                Span::styled(map.image.as_str(), Style::default().fg(theme.table_image_fg)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to open the map image.",
                Style::default().fg(theme.muted_colour),
            )),
        ];

        let content = Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1)));

        f.render_widget(content, chunks[1]);
    }
}
