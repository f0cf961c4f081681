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

//! Playback selection.
//!
//! The [`PlaybackSelector`] decides which result row owns the player and
//! what the player should do when the user activates a row. Starting a new
//! preview, switching to another row, and pausing or resuming the current one
//! all go through the single [`PlaybackSelector::select_row`] entry point.
//!
//! There is one audio output, so at most one row is ever `Playing` or
//! `Paused`; every other row is `NotPlaying`. The selector is the only code
//! that changes row indicators.
//!
//! The selector does not talk to the player. It returns a [`PlaybackAction`]
//! and the caller forwards it to whatever is producing sound.

use reqwest::Url;
use tracing::{debug, warn};

use crate::model::{PlayIndicator, RowPresentation};

/// Instruction for the media player host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackAction {
    /// Replace whatever is loaded with this preview and start it.
    LoadAndPlay(Url),
    PauseCurrent,
    ResumeCurrent,
    /// Halt and release the player.
    Stop,
    NoOp,
}

#[derive(Debug, Default)]
pub(crate) struct PlaybackSelector {
    selected_row: Option<usize>,
}

impl PlaybackSelector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// Applies a row activation and returns the matching player action.
    ///
    /// # Arguments
    ///
    /// * `rows` - The current result rows, whose indicators are updated.
    /// * `new_row` - The activated row, or `None` to release the player.
    /// * `playing` - Whether the player is audibly playing right now.
    pub(crate) fn select_row(
        &mut self,
        rows: &mut [RowPresentation],
        new_row: Option<usize>,
        playing: bool,
    ) -> PlaybackAction {
        if rows.is_empty() {
            self.selected_row = None;
            return PlaybackAction::NoOp;
        }

        let Some(new_idx) = new_row else {
            return self.release(rows);
        };

        let Some(row) = rows.get(new_idx) else {
            warn!(row = new_idx, len = rows.len(), "Ignoring selection outside the result list");
            return PlaybackAction::NoOp;
        };

        if self.selected_row == Some(new_idx) {
            return self.toggle(rows, new_idx, playing);
        }

        let url = match Url::parse(&row.preview_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(row = new_idx, preview_url = %row.preview_url, error = %e, "Row has no playable preview");
                return PlaybackAction::NoOp;
            }
        };

        if let Some(previous) = self.selected_row {
            set_indicator(rows, previous, PlayIndicator::NotPlaying);
        }
        set_indicator(rows, new_idx, PlayIndicator::Playing);
        self.selected_row = Some(new_idx);

        debug!(row = new_idx, %url, "Loading preview");
        PlaybackAction::LoadAndPlay(url)
    }

    /// The player reached the end of the preview.
    pub(crate) fn on_playback_finished(&mut self, rows: &mut [RowPresentation]) {
        if let Some(current) = self.selected_row.take() {
            set_indicator(rows, current, PlayIndicator::NotPlaying);
            debug!(row = current, "Preview finished");
        }
    }

    /// Drops the selection, stopping the player if a row owned it.
    pub(crate) fn reset(&mut self, rows: &mut [RowPresentation]) -> PlaybackAction {
        self.select_row(rows, None, false)
    }

    fn release(&mut self, rows: &mut [RowPresentation]) -> PlaybackAction {
        match self.selected_row.take() {
            Some(current) => {
                set_indicator(rows, current, PlayIndicator::NotPlaying);
                PlaybackAction::Stop
            }
            None => PlaybackAction::NoOp,
        }
    }

    fn toggle(&mut self, rows: &mut [RowPresentation], idx: usize, playing: bool) -> PlaybackAction {
        if playing {
            set_indicator(rows, idx, PlayIndicator::Paused);
            PlaybackAction::PauseCurrent
        } else {
            set_indicator(rows, idx, PlayIndicator::Playing);
            PlaybackAction::ResumeCurrent
        }
    }
}

fn set_indicator(rows: &mut [RowPresentation], idx: usize, indicator: PlayIndicator) {
    if let Some(row) = rows.get_mut(idx) {
        row.play_indicator = indicator;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<RowPresentation> {
        (0..count)
            .map(|i| RowPresentation {
                track_name: format!("track {i}"),
                preview_url: format!("https://audio.example.com/preview/{i}.m4a"),
                ..Default::default()
            })
            .collect()
    }

    fn url(i: usize) -> Url {
        Url::parse(&format!("https://audio.example.com/preview/{i}.m4a")).unwrap()
    }

    fn indicators(rows: &[RowPresentation]) -> Vec<PlayIndicator> {
        rows.iter().map(|r| r.play_indicator).collect()
    }

    fn active_count(rows: &[RowPresentation]) -> usize {
        rows.iter().filter(|r| r.play_indicator.is_active()).count()
    }

    #[test]
    fn first_selection_loads_and_plays() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();

        let action = selector.select_row(&mut rows, Some(1), false);

        assert_eq!(action, PlaybackAction::LoadAndPlay(url(1)));
        assert_eq!(selector.selected_row(), Some(1));
        assert_eq!(
            indicators(&rows),
            [PlayIndicator::NotPlaying, PlayIndicator::Playing, PlayIndicator::NotPlaying]
        );
    }

    #[test]
    fn reselecting_while_playing_pauses() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(1), false);

        let action = selector.select_row(&mut rows, Some(1), true);

        assert_eq!(action, PlaybackAction::PauseCurrent);
        assert_eq!(selector.selected_row(), Some(1));
        assert_eq!(rows[1].play_indicator, PlayIndicator::Paused);
    }

    #[test]
    fn repeated_selection_toggles_without_moving() {
        let mut rows = rows(2);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(0), false);

        let mut playing = true;
        for expected in [
            PlayIndicator::Paused,
            PlayIndicator::Playing,
            PlayIndicator::Paused,
            PlayIndicator::Playing,
        ] {
            let action = selector.select_row(&mut rows, Some(0), playing);
            let expected_action = if playing {
                PlaybackAction::PauseCurrent
            } else {
                PlaybackAction::ResumeCurrent
            };
            assert_eq!(action, expected_action);
            assert_eq!(rows[0].play_indicator, expected);
            assert_eq!(selector.selected_row(), Some(0));
            playing = !playing;
        }
    }

    #[test]
    fn selecting_another_row_switches_tracks() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(1), false);

        let action = selector.select_row(&mut rows, Some(2), true);

        assert_eq!(action, PlaybackAction::LoadAndPlay(url(2)));
        assert_eq!(selector.selected_row(), Some(2));
        assert_eq!(
            indicators(&rows),
            [PlayIndicator::NotPlaying, PlayIndicator::NotPlaying, PlayIndicator::Playing]
        );
    }

    #[test]
    fn switching_away_from_a_paused_row_clears_it() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(0), false);
        selector.select_row(&mut rows, Some(0), true);
        assert_eq!(rows[0].play_indicator, PlayIndicator::Paused);

        selector.select_row(&mut rows, Some(2), false);

        assert_eq!(rows[0].play_indicator, PlayIndicator::NotPlaying);
        assert_eq!(active_count(&rows), 1);
    }

    #[test]
    fn playback_finished_releases_the_row() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(1), false);

        selector.on_playback_finished(&mut rows);

        assert_eq!(selector.selected_row(), None);
        assert_eq!(active_count(&rows), 0);
    }

    #[test]
    fn playback_finished_without_selection_is_harmless() {
        let mut rows = rows(2);
        let mut selector = PlaybackSelector::new();

        selector.on_playback_finished(&mut rows);

        assert_eq!(selector.selected_row(), None);
        assert_eq!(active_count(&rows), 0);
    }

    #[test]
    fn selecting_after_finish_loads_again() {
        let mut rows = rows(2);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(1), false);
        selector.on_playback_finished(&mut rows);

        let action = selector.select_row(&mut rows, Some(1), false);

        assert_eq!(action, PlaybackAction::LoadAndPlay(url(1)));
    }

    #[test]
    fn releasing_a_selection_stops() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(2), false);

        let action = selector.select_row(&mut rows, None, true);

        assert_eq!(action, PlaybackAction::Stop);
        assert_eq!(selector.selected_row(), None);
        assert_eq!(active_count(&rows), 0);
    }

    #[test]
    fn releasing_without_selection_is_a_noop() {
        let mut rows = rows(3);
        let mut selector = PlaybackSelector::new();

        assert_eq!(selector.select_row(&mut rows, None, false), PlaybackAction::NoOp);
        assert_eq!(selector.reset(&mut rows), PlaybackAction::NoOp);
    }

    #[test]
    fn empty_list_never_selects() {
        let mut rows: Vec<RowPresentation> = vec![];
        let mut selector = PlaybackSelector::new();

        assert_eq!(selector.select_row(&mut rows, Some(0), false), PlaybackAction::NoOp);
        assert_eq!(selector.selected_row(), None);
    }

    #[test]
    fn out_of_range_row_is_ignored() {
        let mut rows = rows(2);
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(0), false);

        let action = selector.select_row(&mut rows, Some(5), true);

        assert_eq!(action, PlaybackAction::NoOp);
        assert_eq!(selector.selected_row(), Some(0));
        assert_eq!(rows[0].play_indicator, PlayIndicator::Playing);
    }

    #[test]
    fn unplayable_preview_keeps_prior_selection() {
        let mut rows = rows(3);
        rows[2].preview_url = String::new();
        let mut selector = PlaybackSelector::new();
        selector.select_row(&mut rows, Some(0), false);

        let action = selector.select_row(&mut rows, Some(2), true);

        assert_eq!(action, PlaybackAction::NoOp);
        assert_eq!(selector.selected_row(), Some(0));
        assert_eq!(
            indicators(&rows),
            [PlayIndicator::Playing, PlayIndicator::NotPlaying, PlayIndicator::NotPlaying]
        );
    }

    #[test]
    fn unplayable_preview_with_no_selection_claims_nothing() {
        let mut rows = rows(1);
        rows[0].preview_url = "not a url".to_string();
        let mut selector = PlaybackSelector::new();

        assert_eq!(selector.select_row(&mut rows, Some(0), false), PlaybackAction::NoOp);
        assert_eq!(selector.selected_row(), None);
        assert_eq!(active_count(&rows), 0);
    }

    #[test]
    fn at_most_one_row_is_ever_active() {
        let mut rows = rows(4);
        let mut selector = PlaybackSelector::new();
        let taps = [
            Some(0), Some(0), Some(3), Some(1), Some(1), None, Some(2), Some(9), Some(2), Some(0),
        ];

        let mut playing = false;
        for tap in taps {
            let action = selector.select_row(&mut rows, tap, playing);
            playing = matches!(action, PlaybackAction::LoadAndPlay(_) | PlaybackAction::ResumeCurrent)
                || (playing && action == PlaybackAction::NoOp);
            assert!(active_count(&rows) <= 1);
            if let Some(selected) = selector.selected_row() {
                assert!(rows[selected].play_indicator.is_active());
            } else {
                assert_eq!(active_count(&rows), 0);
            }
        }
    }
}
