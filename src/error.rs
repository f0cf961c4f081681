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

//! Error types for catalog searches.

use thiserror::Error;

/// Failure of a single search request.
#[derive(Debug, Error)]
pub(crate) enum SearchError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    /// The response body does not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local fixture file could not be read.
    #[error("fixture unavailable: {0}")]
    Fixture(#[from] std::io::Error),
}

impl SearchError {
    /// Transport-level failure, as opposed to a body that did not decode.
    pub(crate) fn is_network(&self) -> bool {
        matches!(self, SearchError::Network(_) | SearchError::Status(_))
    }
}
