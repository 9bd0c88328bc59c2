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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) status_bar_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) chip_bg: Color,
    pub(crate) chip_fg: Color,

    pub(crate) table_id_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_match_fg: Color,
    pub(crate) table_likes_fg: Color,
    pub(crate) table_image_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            status_bar_colour: Color::Rgb(38, 50, 36),
            commander_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(162, 161, 166),
            error_colour: Color::Rgb(239, 83, 80),

            highlight_bg: Color::Rgb(76, 110, 60),
            highlight_fg: Color::Rgb(255, 255, 255),

            chip_bg: Color::Rgb(56, 80, 48),
            chip_fg: Color::Rgb(220, 237, 200),

            table_id_fg: Color::Rgb(162, 161, 166),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_match_fg: Color::Rgb(174, 213, 129),
            table_likes_fg: Color::Rgb(255, 215, 0),
            table_image_fg: Color::Rgb(179, 157, 219),
        }
    }
}
