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

//! Input handling for the search term input.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchInput, SearchInputAction};

impl SearchInput {
    /// Feeds a terminal event to the input while it is active.
    ///
    /// `Enter` submits the current text and `Esc` leaves the input, both hand
    /// focus back. An edit that empties the input submits the empty term
    /// straight away.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchInputAction> {
        if !self.is_active {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => {
                self.is_active = false;
                Some(SearchInputAction::Submit(self.input.value().to_string()))
            }

            KeyCode::Esc => {
                self.is_active = false;
                Some(SearchInputAction::Dismiss)
            }

            _ => {
                // Delegate all other key events to the managed input component
                let was_empty = self.input.value().is_empty();
                self.input.handle_event(event);

                (!was_empty && self.input.value().is_empty())
                    .then(|| SearchInputAction::Submit(String::new()))
            }
        }
    }
}
