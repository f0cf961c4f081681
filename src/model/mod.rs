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

//! Domain models and core data structures.
//!
//! This module defines the shape of a catalog search response as returned by
//! the search endpoint, and the per-row presentation state derived from it.
//!
//! The upstream API may omit any field of a result item, so every field is
//! optional and unknown fields are ignored.

pub(crate) mod row;

use serde::{Deserialize, Serialize};

pub(crate) use row::{PlayIndicator, RowPresentation};

/// A decoded search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResultModel {
    /// Advisory only, the server count may disagree with `results`.
    pub(crate) result_count: Option<i64>,
    pub(crate) results: Option<Vec<ResultItem>>,
}

impl SearchResultModel {
    /// Result items in server order, an absent list is treated as empty.
    pub(crate) fn items(&self) -> &[ResultItem] {
        self.results.as_deref().unwrap_or_default()
    }
}

/// A single catalog entry (track, music video, audiobook and so on).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultItem {
    // Identity and display
    pub(crate) wrapper_type: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) artist_name: Option<String>,
    pub(crate) collection_name: Option<String>,
    pub(crate) track_name: Option<String>,
    pub(crate) collection_censored_name: Option<String>,
    pub(crate) track_censored_name: Option<String>,
    pub(crate) collection_id: Option<i64>,
    pub(crate) track_id: Option<i64>,
    pub(crate) collection_artist_id: Option<i64>,
    pub(crate) collection_artist_view_url: Option<String>,
    pub(crate) collection_view_url: Option<String>,
    pub(crate) track_view_url: Option<String>,
    pub(crate) preview_url: Option<String>,
    pub(crate) artwork_url30: Option<String>,
    pub(crate) artwork_url60: Option<String>,
    pub(crate) artwork_url100: Option<String>,

    // Commerce
    pub(crate) collection_price: Option<f64>,
    pub(crate) track_price: Option<f64>,
    pub(crate) track_rental_price: Option<f64>,
    pub(crate) collection_hd_price: Option<f64>,
    pub(crate) track_hd_price: Option<f64>,
    pub(crate) track_hd_rental_price: Option<f64>,
    pub(crate) currency: Option<String>,

    // Metadata
    pub(crate) release_date: Option<String>,
    pub(crate) collection_explicitness: Option<String>,
    pub(crate) track_explicitness: Option<String>,
    pub(crate) disc_count: Option<i64>,
    pub(crate) disc_number: Option<i64>,
    pub(crate) track_count: Option<i64>,
    pub(crate) track_number: Option<i64>,
    pub(crate) track_time_millis: Option<i64>,
    pub(crate) country: Option<String>,
    pub(crate) primary_genre_name: Option<String>,
    pub(crate) content_advisory_rating: Option<String>,
    pub(crate) short_description: Option<String>,
    pub(crate) long_description: Option<String>,
    #[serde(rename = "hasITunesExtras")]
    pub(crate) has_itunes_extras: Option<bool>,
}

impl ResultItem {
    /// Whole seconds of the track duration, negative values clamp to zero.
    pub(crate) fn duration_secs(&self) -> u64 {
        self.track_time_millis
            .map(|millis| (millis.max(0) / 1000) as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK_JSON: &str = r#"{
        "resultCount": 1,
        "results": [{
            "wrapperType": "track",
            "kind": "feature-movie",
            "trackId": 1440768522,
            "artistName": "Jon Favreau",
            "trackName": "Iron Man",
            "previewUrl": "https://video-ssl.itunes.apple.com/preview.m4v",
            "artworkUrl100": "https://is1-ssl.mzstatic.com/100x100bb.jpg",
            "trackPrice": 9.99,
            "releaseDate": "2008-05-02T07:00:00Z",
            "trackTimeMillis": 7571539,
            "country": "USA",
            "longDescription": "Tony Stark builds a suit.",
            "hasITunesExtras": true,
            "someFieldNobodyModels": [1, 2, 3]
        }]
    }"#;

    #[test]
    fn decodes_camel_case_fields() {
        let model: SearchResultModel = serde_json::from_str(TRACK_JSON).unwrap();

        assert_eq!(model.result_count, Some(1));
        let item = &model.items()[0];
        assert_eq!(item.wrapper_type.as_deref(), Some("track"));
        assert_eq!(item.track_id, Some(1440768522));
        assert_eq!(item.track_name.as_deref(), Some("Iron Man"));
        assert_eq!(item.track_price, Some(9.99));
        assert_eq!(item.has_itunes_extras, Some(true));
        assert_eq!(item.collection_name, None);
    }

    #[test]
    fn absent_results_are_empty() {
        let model: SearchResultModel = serde_json::from_str(r#"{"resultCount": 0}"#).unwrap();
        assert!(model.items().is_empty());
        assert_eq!(model.result_count, Some(0));
    }

    #[test]
    fn empty_object_decodes() {
        let model: SearchResultModel = serde_json::from_str("{}").unwrap();
        assert_eq!(model, SearchResultModel::default());
    }

    #[test]
    fn duration_is_floored_and_never_negative() {
        let mut item = ResultItem::default();
        assert_eq!(item.duration_secs(), 0);

        item.track_time_millis = Some(185_999);
        assert_eq!(item.duration_secs(), 185);

        item.track_time_millis = Some(-500);
        assert_eq!(item.duration_secs(), 0);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<SearchResultModel>(r#"{"results": "nope"}"#);
        assert!(result.is_err());
    }
}
