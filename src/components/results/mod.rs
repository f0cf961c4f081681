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

//! Search result card list.
//!
//! This module tracks which card is highlighted and which card is at the top
//! of the viewport. The cards themselves, and which of them is playing, are
//! owned by the search session; this view only navigates over them.

mod event;
mod render;

use crate::session::measure::CardSize;

#[derive(Debug, PartialEq)]
pub(crate) enum ResultsAction {
    /// Play, pause or resume the card at this index.
    Activate(usize),
    /// Release the player.
    Stop,
}

#[derive(Debug, Default)]
pub(crate) struct ResultsView {
    highlighted: Option<usize>,
    offset: usize,
}

impl ResultsView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Starts over for a fresh list of `len` cards.
    pub(crate) fn reset(&mut self, len: usize) {
        self.highlighted = (len > 0).then_some(0);
        self.offset = 0;
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.highlighted {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.highlighted = Some(i);
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.highlighted = Some(i.min(len - 1));
    }

    fn goto_first(&mut self, len: usize) {
        self.highlighted = (len > 0).then_some(0);
    }

    fn goto_last(&mut self, len: usize) {
        self.highlighted = len.checked_sub(1);
    }

    /// Scrolls just enough for the highlighted card to be fully visible in a
    /// viewport `height` lines tall, or at least to start at its top when the
    /// card is taller than the viewport.
    pub(crate) fn scroll_to_highlighted(&mut self, sizes: &[CardSize], height: u16) {
        if sizes.is_empty() {
            self.offset = 0;
            return;
        }

        self.offset = self.offset.min(sizes.len() - 1);

        let Some(target) = self.highlighted.filter(|&i| i < sizes.len()) else {
            return;
        };

        if target < self.offset {
            self.offset = target;
            return;
        }

        let visible = |from: usize| -> u32 {
            sizes[from..=target]
                .iter()
                .map(|size| u32::from(size.height))
                .sum()
        };

        while self.offset < target && visible(self.offset) > u32::from(height) {
            self.offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(heights: &[u16]) -> Vec<CardSize> {
        heights
            .iter()
            .map(|&height| CardSize { width: 40, height })
            .collect()
    }

    #[test]
    fn reset_highlights_the_first_card() {
        let mut view = ResultsView::new();
        view.reset(3);
        assert_eq!(view.highlighted(), Some(0));

        view.reset(0);
        assert_eq!(view.highlighted(), None);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut view = ResultsView::new();
        view.reset(3);

        view.goto_previous(3);
        assert_eq!(view.highlighted(), Some(2));
        view.goto_next(3);
        assert_eq!(view.highlighted(), Some(0));
        view.goto_last(3);
        assert_eq!(view.highlighted(), Some(2));
        view.goto_first(3);
        assert_eq!(view.highlighted(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_does_nothing() {
        let mut view = ResultsView::new();
        view.goto_next(0);
        view.goto_previous(0);
        view.goto_last(0);
        assert_eq!(view.highlighted(), None);
    }

    #[test]
    fn scrolls_down_until_highlight_fits() {
        let mut view = ResultsView::new();
        view.reset(4);
        view.goto_last(4);

        // 6 + 6 + 6 + 6 lines in a 13 line viewport: cards 2 and 3 fit
        view.scroll_to_highlighted(&sizes(&[6, 6, 6, 6]), 13);
        assert_eq!(view.offset(), 2);
    }

    #[test]
    fn scrolls_up_to_highlight() {
        let mut view = ResultsView::new();
        view.reset(4);
        view.goto_last(4);
        view.scroll_to_highlighted(&sizes(&[6, 6, 6, 6]), 13);

        view.goto_first(4);
        view.scroll_to_highlighted(&sizes(&[6, 6, 6, 6]), 13);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn oversized_card_starts_at_the_top() {
        let mut view = ResultsView::new();
        view.reset(2);
        view.goto_next(2);

        view.scroll_to_highlighted(&sizes(&[5, 40]), 10);
        assert_eq!(view.offset(), 1);
    }

    #[test]
    fn offset_is_clamped_when_the_list_shrinks() {
        let mut view = ResultsView::new();
        view.reset(4);
        view.goto_last(4);
        view.scroll_to_highlighted(&sizes(&[6, 6, 6, 6]), 6);
        assert_eq!(view.offset(), 3);

        view.scroll_to_highlighted(&sizes(&[6]), 6);
        assert_eq!(view.offset(), 0);

        view.scroll_to_highlighted(&[], 6);
        assert_eq!(view.offset(), 0);
    }
}
