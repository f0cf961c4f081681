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

//! Catalog search clients.
//!
//! A [`SearchClient`] turns a search term into a decoded
//! [`SearchResultModel`]. Clients are blocking and are only ever called from
//! the search worker thread, never from the UI thread.
//!
//! * [`itunes`]: the HTTP client for the public search endpoint.
//! * [`fixture`]: reads a canned response from a local JSON file.

pub(crate) mod fixture;
pub(crate) mod itunes;

pub(crate) use fixture::FixtureClient;
pub(crate) use itunes::ItunesClient;

use crate::{config::AppConfig, error::SearchError, model::SearchResultModel};

pub(crate) trait SearchClient: Send {
    /// Runs one search. An empty result set is a success.
    fn search(&self, term: &str) -> Result<SearchResultModel, SearchError>;
}

/// Decodes a response body, shared by every client so that the network and
/// fixture paths agree on what counts as a malformed response.
pub(crate) fn decode(body: &[u8]) -> Result<SearchResultModel, SearchError> {
    Ok(serde_json::from_slice(body)?)
}

/// Builds the client selected by the configuration.
pub(crate) fn from_config(config: &AppConfig) -> Result<Box<dyn SearchClient>, SearchError> {
    match &config.fixture_file {
        Some(path) => Ok(Box::new(FixtureClient::new(path.clone()))),
        None => Ok(Box::new(ItunesClient::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_decode_as_success() {
        let model = decode(br#"{"resultCount":0,"results":[]}"#).unwrap();
        assert!(model.items().is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode(b"<html>busy</html>").unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }
}
