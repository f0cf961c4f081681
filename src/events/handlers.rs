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
use tracing::{debug, warn};

use crate::{
    Alert, App,
    error::SearchError,
    model::SearchResultModel,
    player::PlayerState,
    render,
    session::SessionEvent,
};

pub(super) fn handle_resize(app: &mut App, width: u16, height: u16) {
    debug!(width, height, "Terminal resized");
    app.session.set_content_width(render::card_width(width));
}

pub(super) fn handle_submit_search(app: &mut App, term: &str) -> Result<()> {
    let events = app.session.submit(term);
    apply_session_events(app, events)
}

pub(super) fn handle_search_completed(
    app: &mut App,
    generation: u64,
    result: Result<SearchResultModel, SearchError>,
) -> Result<()> {
    let events = app.session.apply_result(generation, result);
    apply_session_events(app, events)
}

pub(super) fn handle_select_row(app: &mut App, row: Option<usize>) -> Result<()> {
    let action = app.session.select_row(row, app.player_state.is_playing());
    app.audio_player.apply(&action)
}

/// Reflects what the session did on screen and in the player.
fn apply_session_events(app: &mut App, events: Vec<SessionEvent>) -> Result<()> {
    for event in events {
        match event {
            SessionEvent::LoadingStarted => {
                app.alert = None;
                app.spinner_frame = 0;
            }
            SessionEvent::LoadingStopped => {}
            SessionEvent::ResultsReady { rows, .. } => app.results_view.reset(rows.len()),
            SessionEvent::ResultsCleared => app.results_view.reset(0),
            SessionEvent::AlertRequested { title, message } => {
                app.alert = Some(Alert { title, message });
            }
            SessionEvent::Playback(action) => app.audio_player.apply(&action)?,
        }
    }

    Ok(())
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
    if state == PlayerState::Stopped {
        app.player_time = None;
        app.player_duration = None;
        app.player_position = None;
    }
}

pub(super) fn handle_duration_changed(app: &mut App, dur: u64) {
    app.player_duration = Some(dur);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

pub(super) fn handle_track_finished(app: &mut App) {
    app.player_time = app.player_duration;
    app.session.on_playback_finished();
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Application error");
    app.alert = Some(Alert {
        title: "Error".to_string(),
        message,
    });
}

pub(super) fn handle_tick(app: &mut App) {
    if app.session.is_loading() {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
}
