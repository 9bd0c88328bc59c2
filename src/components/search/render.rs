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

//! UI rendering logic for the search view.
//!
//! From top to bottom: the ingredient input, the suggestion dropdown (only
//! while there is something to suggest), the ingredient chips and the recipe
//! table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::{
    components::{SearchPane, SearchView},
    model::search::SearchState,
    render::icons::ICON_LOADING,
    theme::Theme,
    util::format::format_chip,
};

const MAX_SUGGESTION_ROWS: u16 = 6;

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
        let suggestions = search.visible_suggestions();
        let suggestion_height = if suggestions.is_empty() {
            0
        } else {
            (suggestions.len() as u16).min(MAX_SUGGESTION_ROWS) + 2
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(suggestion_height),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_input(f, chunks[0], search, theme);
        if suggestion_height > 0 {
            self.draw_suggestions(f, chunks[1], search, theme);
        }
        self.draw_ingredients(f, chunks[2], search, theme);

        self.recipe_table.draw(
            f,
            chunks[3],
            search.recipes(),
            self.active_pane == SearchPane::Recipes,
            theme,
        );
    }

    fn pane_block(&self, pane: SearchPane, title: String, theme: &Theme) -> Block<'static> {
        let border_colour = if self.active_pane == pane {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
        let mut block = self.pane_block(SearchPane::Input, " Ingredient ".to_string(), theme);
        if search.is_loading() {
            block = block.title_bottom(
                Line::from(format!(" {ICON_LOADING} Loading... "))
                    .style(Style::default().fg(theme.muted_colour))
                    .right_aligned(),
            );
        }

        let inner = block.inner(area);

        // Keep the cursor visible when the text is wider than the box.
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let paragraph = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(paragraph, area);

        if self.is_active && self.active_pane == SearchPane::Input {
            let cursor = self.input.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((inner.x + cursor as u16, inner.y));
        }
    }

    fn draw_suggestions(&mut self, f: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
        let items: Vec<ListItem> = search
            .visible_suggestions()
            .iter()
            .map(|suggestion| ListItem::new(suggestion.name.as_str()))
            .collect();

        let list = List::new(items)
            .block(self.pane_block(SearchPane::Suggestions, " Suggestions ".to_string(), theme))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg),
            );

        f.render_stateful_widget(list, area, &mut self.suggestions_state);
    }

    fn draw_ingredients(&self, f: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
        let ingredients = search.ingredients();
        let title = format!(" Ingredients ({}) ", ingredients.len());
        let block = self.pane_block(SearchPane::Ingredients, title, theme);

        if ingredients.is_empty() {
            let hint = Paragraph::new("Type an ingredient and press Enter to add it.")
                .style(Style::default().fg(theme.muted_colour))
                .block(block);
            f.render_widget(hint, area);
            return;
        }

        let show_cursor = self.active_pane == SearchPane::Ingredients;
        let mut spans = Vec::with_capacity(ingredients.len() * 2);
        for (index, name) in ingredients.as_slice().iter().enumerate() {
            let style = if show_cursor && self.selected_ingredient == Some(index) {
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(theme.chip_bg).fg(theme.chip_fg)
            };

            spans.push(Span::styled(format!(" {} ", format_chip(index, name)), style));
            spans.push(Span::raw(" "));
        }

        let chips = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(block);
        f.render_widget(chips, area);
    }
}
