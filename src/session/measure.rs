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

//! Result card measurement.
//!
//! Cards are as wide as the results pane. Their height is the word-wrapped
//! height of the track name plus that of the long description, plus the
//! fixed lines every card has (borders, subtitle, play status).

use ratatui::text::Span;

use crate::model::RowPresentation;

/// Top and bottom border, the subtitle line and the play status line.
pub(crate) const CARD_CHROME_HEIGHT: u16 = 4;

/// Left and right border plus one column of padding on each side.
pub(crate) const CARD_CHROME_WIDTH: u16 = 4;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CardSize {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

/// Width available to the wrapped text inside a card.
pub(crate) fn text_width(card_width: u16) -> u16 {
    card_width.saturating_sub(CARD_CHROME_WIDTH).max(1)
}

pub(crate) fn measure_row(row: &RowPresentation, card_width: u16) -> CardSize {
    let width = text_width(card_width);
    let text_lines = wrapped_line_count(&row.track_name, width)
        .saturating_add(wrapped_line_count(&row.long_description, width));

    CardSize {
        width: card_width,
        height: text_lines.saturating_add(CARD_CHROME_HEIGHT),
    }
}

pub(crate) fn measure_rows(rows: &[RowPresentation], card_width: u16) -> Vec<CardSize> {
    rows.iter().map(|row| measure_row(row, card_width)).collect()
}

/// Number of lines `text` occupies when greedily word-wrapped at `width`
/// columns. Blank text still takes one line, words wider than the line are
/// broken across as many lines as they need.
pub(crate) fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut total = 0usize;

    for paragraph in text.split('\n') {
        let mut lines = 1usize;
        let mut current = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = Span::raw(word).width();

            if current > 0 && current + 1 + word_width <= width {
                current += 1 + word_width;
                continue;
            }
            if current > 0 {
                lines += 1;
            }

            lines += word_width.saturating_sub(1) / width;
            current = match word_width % width {
                0 if word_width > 0 => width,
                rem => rem,
            };
        }

        total += lines;
    }

    u16::try_from(total).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_takes_one_line() {
        assert_eq!(wrapped_line_count("", 20), 1);
        assert_eq!(wrapped_line_count("   ", 20), 1);
    }

    #[test]
    fn short_text_fits_one_line() {
        assert_eq!(wrapped_line_count("Iron Man", 20), 1);
        assert_eq!(wrapped_line_count("exactly ten", 11), 1);
    }

    #[test]
    fn words_wrap_greedily() {
        // "aaaa bbbb" | "cccc dddd" | "ee"
        assert_eq!(wrapped_line_count("aaaa bbbb cccc dddd ee", 9), 3);
    }

    #[test]
    fn long_words_are_broken() {
        assert_eq!(wrapped_line_count("abcdefghijklmnopqrstuvwxy", 10), 3);
        assert_eq!(wrapped_line_count("abcdefghijklmnopqrst", 10), 2);
        // The broken word fills its last line, the next word starts fresh
        assert_eq!(wrapped_line_count("abcdefghijklmnopqrst uv", 10), 3);
    }

    #[test]
    fn newlines_start_new_paragraphs() {
        assert_eq!(wrapped_line_count("one\ntwo\n\nfour", 40), 4);
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK character is two columns wide
        assert_eq!(wrapped_line_count("鋼鐵人", 6), 1);
        assert_eq!(wrapped_line_count("鋼鐵人", 4), 2);
    }

    #[test]
    fn card_height_adds_chrome_to_both_texts() {
        let row = RowPresentation {
            track_name: "Iron Man".to_string(),
            long_description: "aaaa bbbb cccc dddd ee".to_string(),
            ..Default::default()
        };

        let size = measure_row(&row, 9 + CARD_CHROME_WIDTH);

        assert_eq!(size.width, 13);
        assert_eq!(size.height, 1 + 3 + CARD_CHROME_HEIGHT);
    }

    #[test]
    fn narrow_cards_do_not_divide_by_zero() {
        let row = RowPresentation {
            track_name: "abc".to_string(),
            ..Default::default()
        };

        let size = measure_row(&row, 0);
        assert_eq!(size.height, 3 + 1 + CARD_CHROME_HEIGHT);
    }
}
