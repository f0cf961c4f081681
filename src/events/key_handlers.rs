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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::{
    App,
    components::{ResultsAction, SearchInputAction},
    events::{
        AppEvent,
        handlers::{handle_select_row, handle_submit_search},
    },
};

/// Maps keyboard input to application actions and playback commands.
///
/// While the search input has focus it receives every key. Otherwise keys
/// go to the result cards first, then to the global bindings:
///
/// * **Application Control**: `q` exits the program.
/// * **Focus**: `/` moves focus to the search input.
/// * **Alerts**: `Esc` dismisses the current alert.
///
/// # Errors
///
/// Returns an error if a command fails to send to a background worker.
pub(super) fn process_key_event(app: &mut App, key: crossterm::event::KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.search_input.is_active {
        return match app.search_input.process_event(&event) {
            Some(SearchInputAction::Submit(term)) => handle_submit_search(app, &term),
            Some(SearchInputAction::Dismiss) | None => Ok(()),
        };
    }

    let len = app.session.rows().len();
    if let Some(action) = app.results_view.process_event(&event, len) {
        return match action {
            ResultsAction::Activate(row) => handle_select_row(app, Some(row)),
            ResultsAction::Stop => handle_select_row(app, None),
        };
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('/') => app.search_input.activate(),
        KeyCode::Esc => app.alert = None,
        _ => {}
    }

    Ok(())
}
