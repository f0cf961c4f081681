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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{App, render::player::draw_player};

/// Height of the search input, borders included.
const SEARCH_HEIGHT: u16 = 3;

/// Height of the status bar, border included.
const STATUS_HEIGHT: u16 = 4;

/// Width available to a card in a results pane `pane_width` columns wide.
///
/// One column is kept for the scrollbar.
pub(crate) fn card_width(pane_width: u16) -> u16 {
    pane_width.saturating_sub(1)
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the search input at the top, the result cards in
/// the middle and the player status bar at the bottom. The card list reports
/// its width back to the session first, so a resized terminal re-measures the
/// cards before they are drawn.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let loading = app.session.is_loading().then_some(app.spinner_frame);
    app.search_input.draw(f, outer[0], loading, &app.theme);

    app.session.set_content_width(card_width(outer[1].width));
    app.results_view.draw(
        f,
        outer[1],
        app.session.rows(),
        app.session.sizes(),
        &app.theme,
    );

    draw_player(f, outer[2], app);
}
