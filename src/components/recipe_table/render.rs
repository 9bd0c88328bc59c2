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

//! UI rendering logic for the recipe table.
//!
//! Each recipe is one row ("card") with its identifier, title, how many of
//! its ingredients are on hand, its likes and the image location.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    components::recipe_table::RecipeTable,
    model::Recipe,
    theme::Theme,
    util::format::{format_match, truncate},
};

const MAX_TITLE_WIDTH: usize = 60;

impl RecipeTable {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        recipes: &[Recipe],
        is_focused: bool,
        theme: &Theme,
    ) {
        let rows = recipes.iter().map(|recipe| {
            Row::new(vec![
                Cell::from(
                    Line::from(recipe.id.to_string())
                        .style(Style::default().fg(theme.table_id_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(
                    Line::from(truncate(&recipe.title, MAX_TITLE_WIDTH))
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(format_match(recipe))
                        .style(Style::default().fg(theme.table_match_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(recipe.likes.to_string())
                        .style(Style::default().fg(theme.table_likes_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(
                    Line::from(recipe.image.as_str()).style(Style::default().fg(theme.table_image_fg)),
                ),
            ])
        });

        let border_colour = if is_focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(1),
                Constraint::Percentage(50),
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Percentage(50),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Id").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Recipe"),
                Cell::from(Line::from("Have").alignment(Alignment::Right)),
                Cell::from(Line::from("Likes").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Image"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Recipes ({}) ", recipes.len()))
                .border_style(Style::default().fg(border_colour)),
        );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
