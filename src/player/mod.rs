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

//! Audio playback control and state management.
//!
//! This module provides the high-level [`AudioPlayer`] interface used by the
//! UI to control preview playback. It manages a background worker thread that
//! interfaces with the underlying audio library (MPV), ensuring that network
//! streaming and decoding do not block the main application thread.

mod commands;

use std::sync::mpsc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{events::AppEvent, playback::PlaybackAction, player::commands::AudioPlayerCommand};

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl PlayerState {
    // Maps internal audio backend flags to a simplified [`PlayerState`].
    fn from_flags(is_paused: bool, is_idle: bool) -> Self {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Whether audio is audibly playing right now.
    pub(crate) fn is_playing(self) -> bool {
        self == PlayerState::Playing
    }
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    /// Carries out a playback action decided by the result list.
    pub(crate) fn apply(&self, action: &PlaybackAction) -> Result<()> {
        if let Some(command) = AudioPlayerCommand::for_action(action) {
            debug!(?command, "Player command");
            self.command_tx
                .send(command)
                .context("Audio player worker is not running")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_wins_over_pause() {
        assert_eq!(PlayerState::from_flags(true, true), PlayerState::Stopped);
        assert_eq!(PlayerState::from_flags(false, true), PlayerState::Stopped);
        assert_eq!(PlayerState::from_flags(true, false), PlayerState::Paused);
        assert_eq!(PlayerState::from_flags(false, false), PlayerState::Playing);
    }

    #[test]
    fn only_playing_counts_as_playing() {
        assert!(PlayerState::Playing.is_playing());
        assert!(!PlayerState::Paused.is_playing());
        assert!(!PlayerState::default().is_playing());
    }
}
