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

//! Input handling and event processing for the result cards.
//!
//! This module maps raw terminal keyboard events to card navigation and to
//! the playback actions the cards trigger.

use crossterm::event::{Event, KeyCode};

use crate::components::{ResultsAction, ResultsView};

impl ResultsView {
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<ResultsAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

            KeyCode::Enter | KeyCode::Char(' ') => {
                return self
                    .highlighted
                    .filter(|&i| i < len)
                    .map(ResultsAction::Activate);
            }

            KeyCode::Char('s') => return Some(ResultsAction::Stop),

            _ => {}
        }

        None
    }
}
