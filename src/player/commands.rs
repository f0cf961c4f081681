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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the core audio playback logic, leveraging `libmpv` to
//! stream and decode preview clips straight from their URLs. It manages a
//! background worker thread that bridges the gap between the application's
//! command-based interface and the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the UI to
//!    control playback.
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the UI of state
//!    changes, such as track progress and the end of a preview.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{debug, error, info, warn};

use crate::{events::AppEvent, playback::PlaybackAction, player::PlayerState};

#[derive(Debug, PartialEq)]
pub(crate) enum AudioPlayerCommand {
    PlayUrl(String),
    Pause,
    Resume,
    Stop,
}

impl AudioPlayerCommand {
    pub(crate) fn for_action(action: &PlaybackAction) -> Option<Self> {
        match action {
            PlaybackAction::LoadAndPlay(url) => Some(Self::PlayUrl(url.to_string())),
            PlaybackAction::PauseCurrent => Some(Self::Pause),
            PlaybackAction::ResumeCurrent => Some(Self::Resume),
            PlaybackAction::Stop => Some(Self::Stop),
            PlaybackAction::NoOp => None,
        }
    }
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            error!(error = ?e, "MPV worker failure");
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining incoming commands and waiting briefly for MPV events.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the internal
/// command/event loops encounter an unrecoverable failure.
fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    info!("Audio player ready");

    let mut is_paused = false;
    let mut is_idle = true;

    let mut player_state = PlayerState::Stopped;

    loop {
        if !process_commands(&mut handler, &command_rx)? {
            debug!("Player command channel closed, audio worker exiting");
            return Ok(());
        }
        process_mpv_events(
            &mut handler,
            &mut is_paused,
            &mut is_idle,
            &mut player_state,
            &event_tx,
        )?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// Returns `false` once the application has dropped its player handle.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<AudioPlayerCommand>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(mpsc::TryRecvError::Empty) => return Ok(true),
            Err(mpsc::TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            AudioPlayerCommand::PlayUrl(url) => {
                handler
                    .command(&["loadfile", &url, "replace"])
                    .context(format!("Failed to load preview: {}", &url))?;
                handler
                    .set_property("pause", false)
                    .context("Failed to start playback")?;
            }
            AudioPlayerCommand::Pause => {
                handler
                    .set_property("pause", true)
                    .context("Failed to pause")?;
            }
            AudioPlayerCommand::Resume => {
                handler
                    .set_property("pause", false)
                    .context("Failed to resume")?;
            }
            AudioPlayerCommand::Stop => {
                handler.command(&["stop"]).context("Failed to stop")?;
            }
        }
    }
}

/// Polls for MPV events and synchronizes the application state.
///
/// This function waits for up to 50ms for an event from the MPV context.
/// If an event occurs, it updates internal flags and broadcasts any necessary
/// [`AppEvent`]s to the UI.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    is_paused: &mut bool,
    is_idle: &mut bool,
    current_state: &mut PlayerState,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_events = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(duration)) => {
                    vec![AppEvent::DurationChanged(duration.max(0.0) as u64)]
                }
                ("pause", Format::Flag(pause)) => {
                    *is_paused = pause;
                    vec![]
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    vec![AppEvent::TimeChanged(seconds)]
                }
                ("idle-active", Format::Flag(idle_active)) => {
                    *is_idle = idle_active;
                    vec![]
                }
                _ => vec![],
            },
            mpv::Event::EndFile(result) => end_file_events(result),
            _ => vec![],
        };

        let new_player_state = PlayerState::from_flags(*is_paused, *is_idle);

        if new_player_state != *current_state {
            *current_state = new_player_state;
            event_tx
                .send(AppEvent::PlayerStateChanged(new_player_state))
                .context("Failed to send player state event")?;
        }

        for event in app_events {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}

/// Maps the end of a preview to application events.
///
/// A preview that ends on its own, or fails to stream, releases its row. A
/// stop or a `loadfile replace` also ends the current file, but by then the
/// application has already moved the selection on, so those are ignored.
fn end_file_events(result: mpv::Result<mpv::EndFileReason>) -> Vec<AppEvent> {
    match result {
        Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => vec![AppEvent::TrackFinished],
        Ok(_) => vec![],
        Err(e) => {
            warn!(error = %e, "Preview playback failed");
            vec![
                AppEvent::TrackFinished,
                AppEvent::Error(format!("Preview could not be played: {e}")),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;

    use super::*;

    #[test]
    fn actions_map_to_commands() {
        let url = Url::parse("https://audio.example.com/a.m4a").unwrap();

        assert_eq!(
            AudioPlayerCommand::for_action(&PlaybackAction::LoadAndPlay(url)),
            Some(AudioPlayerCommand::PlayUrl("https://audio.example.com/a.m4a".to_string()))
        );
        assert_eq!(
            AudioPlayerCommand::for_action(&PlaybackAction::PauseCurrent),
            Some(AudioPlayerCommand::Pause)
        );
        assert_eq!(
            AudioPlayerCommand::for_action(&PlaybackAction::ResumeCurrent),
            Some(AudioPlayerCommand::Resume)
        );
        assert_eq!(
            AudioPlayerCommand::for_action(&PlaybackAction::Stop),
            Some(AudioPlayerCommand::Stop)
        );
        assert_eq!(AudioPlayerCommand::for_action(&PlaybackAction::NoOp), None);
    }

    #[test]
    fn finished_previews_release_their_row() {
        let events = end_file_events(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF));
        assert!(matches!(events.as_slice(), [AppEvent::TrackFinished]));
    }

    #[test]
    fn failed_previews_release_their_row_and_report() {
        let events = end_file_events(Err(mpv::Error::MPV_ERROR_LOADING_FAILED));

        assert!(matches!(
            events.as_slice(),
            [AppEvent::TrackFinished, AppEvent::Error(message)] if message.starts_with("Preview could not be played")
        ));
    }

    #[test]
    fn replaced_or_stopped_previews_are_ignored() {
        assert!(end_file_events(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_STOP)).is_empty());
        assert!(end_file_events(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_REDIRECT)).is_empty());
    }
}
