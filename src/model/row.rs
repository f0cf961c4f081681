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

//! Per-row presentation state.
//!
//! A [`RowPresentation`] is built for each search result and carries the
//! display strings for one result card together with its play indicator.
//! Rows never outlive the search that produced them.

use crate::{model::ResultItem, util::format::format_duration};

/// Play state shown on a result card.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum PlayIndicator {
    #[default]
    NotPlaying,
    Playing,
    Paused,
}

impl PlayIndicator {
    pub(crate) fn label(self) -> &'static str {
        match self {
            PlayIndicator::NotPlaying => "",
            PlayIndicator::Playing => "Now playing \u{25B6}",
            PlayIndicator::Paused => "Paused \u{23F8}",
        }
    }

    /// Playing or paused, i.e. the row owns the player.
    pub(crate) fn is_active(self) -> bool {
        !matches!(self, PlayIndicator::NotPlaying)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RowPresentation {
    pub(crate) track_name: String,
    pub(crate) long_description: String,
    pub(crate) artist_name: String,
    pub(crate) collection_name: String,
    pub(crate) duration: String,
    pub(crate) preview_url: String,
    pub(crate) artwork_url: Option<String>,
    pub(crate) play_indicator: PlayIndicator,
}

impl RowPresentation {
    pub(crate) fn from_item(item: &ResultItem) -> Self {
        Self {
            track_name: item.track_name.clone().unwrap_or_default(),
            long_description: item.long_description.clone().unwrap_or_default(),
            artist_name: item.artist_name.clone().unwrap_or_default(),
            collection_name: item.collection_name.clone().unwrap_or_default(),
            duration: format_duration(item.duration_secs()),
            preview_url: item.preview_url.clone().unwrap_or_default(),
            artwork_url: item.artwork_url100.clone(),
            play_indicator: PlayIndicator::NotPlaying,
        }
    }

    /// Builds the rows for a result set, preserving server order.
    pub(crate) fn from_items(items: &[ResultItem]) -> Vec<Self> {
        items.iter().map(Self::from_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_empty_strings() {
        let row = RowPresentation::from_item(&ResultItem::default());

        assert_eq!(row.track_name, "");
        assert_eq!(row.long_description, "");
        assert_eq!(row.preview_url, "");
        assert_eq!(row.duration, "0:00");
        assert_eq!(row.artwork_url, None);
        assert_eq!(row.play_indicator, PlayIndicator::NotPlaying);
    }

    #[test]
    fn rows_keep_server_order() {
        let items: Vec<ResultItem> = ["one", "two", "three"]
            .iter()
            .map(|name| ResultItem {
                track_name: Some(name.to_string()),
                track_time_millis: Some(65_000),
                artwork_url100: Some(format!("https://art/{name}.jpg")),
                ..Default::default()
            })
            .collect();

        let rows = RowPresentation::from_items(&items);

        let names: Vec<&str> = rows.iter().map(|r| r.track_name.as_str()).collect();
        assert_eq!(names, ["one", "two", "three"]);
        assert_eq!(rows[1].duration, "1:05");
        assert_eq!(rows[2].artwork_url.as_deref(), Some("https://art/three.jpg"));
    }

    #[test]
    fn only_not_playing_has_no_label() {
        assert!(PlayIndicator::NotPlaying.label().is_empty());
        assert!(!PlayIndicator::Playing.label().is_empty());
        assert!(PlayIndicator::Paused.is_active());
        assert!(!PlayIndicator::NotPlaying.is_active());
    }
}
