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

//! Search term input.
//!
//! A single-line text input that holds keyboard focus while active, and
//! reports back when a term should be searched for.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq)]
pub(crate) enum SearchInputAction {
    /// Search for the given term. Enter hands focus back to the results,
    /// clearing the input keeps it.
    Submit(String),
    /// The input was left without searching.
    Dismiss,
}

pub(crate) struct SearchInput {
    pub(crate) input: Input,
    pub(crate) is_active: bool,
}

impl SearchInput {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: true,
        }
    }

    pub(crate) fn activate(&mut self) {
        self.is_active = true;
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
