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

//! Offline search client backed by a JSON file.
//!
//! The term is ignored, every search answers with the file's current
//! contents. The file is re-read on each search so it can be edited while
//! the application runs.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    client::{SearchClient, decode},
    error::SearchError,
    model::SearchResultModel,
};

pub(crate) struct FixtureClient {
    path: PathBuf,
}

impl FixtureClient {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SearchClient for FixtureClient {
    fn search(&self, term: &str) -> Result<SearchResultModel, SearchError> {
        debug!(term, path = %self.path.display(), "Loading search fixture");
        let body = std::fs::read(&self.path)?;
        decode(&body)
    }
}
