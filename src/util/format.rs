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

use crate::model::Recipe;

/// Formats an ingredient chip label, numbered from one as used by the `rm`
/// command.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_chip(0, "egg"), "1 egg ✕");
/// ```
pub(crate) fn format_chip(index: usize, name: &str) -> String {
    format!("{} {} \u{2715}", index + 1, name)
}

/// Formats how many of a recipe's ingredients are on hand, as `used/total`.
pub(crate) fn format_match(recipe: &Recipe) -> String {
    let total = recipe.used_ingredient_count + recipe.missed_ingredient_count;
    if total == 0 {
        return "-".to_string();
    }
    format!("{}/{}", recipe.used_ingredient_count, total)
}

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(width - 1).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_are_numbered_from_one() {
        assert_eq!(format_chip(0, "egg"), "1 egg \u{2715}");
        assert_eq!(format_chip(9, "flour"), "10 flour \u{2715}");
    }

    #[test]
    fn match_counts() {
        let mut recipe = Recipe::new(1, "Pancakes", "p.png");
        assert_eq!(format_match(&recipe), "-");

        recipe.used_ingredient_count = 2;
        recipe.missed_ingredient_count = 3;
        assert_eq!(format_match(&recipe), "2/5");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("Pancakes", 20), "Pancakes");
        assert_eq!(truncate("Pancakes", 5), "Panc\u{2026}");
        assert_eq!(truncate("Pão de queijo", 4), "Pão\u{2026}");
        assert_eq!(truncate("x", 0), "");
    }
}
