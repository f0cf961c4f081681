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

//! Search session lifecycle.
//!
//! The [`SearchSession`] owns the current result rows and the
//! [`PlaybackSelector`] that operates on them. It coordinates what happens
//! when the user submits a new term:
//!
//! 1. Any selection is dropped, a new search invalidates every row.
//! 2. A [`SearchRequest`] tagged with a fresh generation is handed to the
//!    injected [`SearchDispatcher`], which runs it off the UI thread.
//! 3. When a result comes back it is applied only if its generation is still
//!    current. Results of superseded requests are dropped, not cancelled.
//!
//! Every operation returns the [`SessionEvent`]s it produced, in order, for
//! the caller to act on.

pub(crate) mod measure;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    error::SearchError,
    model::{RowPresentation, SearchResultModel},
    playback::{PlaybackAction, PlaybackSelector},
    session::measure::{CardSize, measure_rows},
};

pub(crate) const NO_DATA_TITLE: &str = "No data";
pub(crate) const REQUEST_FAILED_TITLE: &str = "Request failed";

/// A search to run on behalf of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) generation: u64,
    pub(crate) term: String,
}

/// Hands search requests to whatever executes them.
pub(crate) trait SearchDispatcher {
    fn dispatch(&self, request: SearchRequest) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SessionEvent {
    LoadingStarted,
    LoadingStopped,
    ResultsReady {
        rows: Vec<RowPresentation>,
        sizes: Vec<CardSize>,
    },
    ResultsCleared,
    AlertRequested {
        title: String,
        message: String,
    },
    Playback(PlaybackAction),
}

pub(crate) struct SearchSession {
    dispatcher: Box<dyn SearchDispatcher>,
    selector: PlaybackSelector,
    rows: Vec<RowPresentation>,
    sizes: Vec<CardSize>,
    card_width: u16,
    generation: u64,
    loading: bool,
    allow_empty_search: bool,
    term: String,
}

impl SearchSession {
    pub(crate) fn new(
        dispatcher: Box<dyn SearchDispatcher>,
        card_width: u16,
        allow_empty_search: bool,
    ) -> Self {
        Self {
            dispatcher,
            selector: PlaybackSelector::new(),
            rows: vec![],
            sizes: vec![],
            card_width,
            generation: 0,
            loading: false,
            allow_empty_search,
            term: String::new(),
        }
    }

    pub(crate) fn rows(&self) -> &[RowPresentation] {
        &self.rows
    }

    pub(crate) fn sizes(&self) -> &[CardSize] {
        &self.sizes
    }

    pub(crate) fn selected_row(&self) -> Option<usize> {
        self.selector.selected_row()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a new search, superseding any search still outstanding.
    pub(crate) fn submit(&mut self, term: &str) -> Vec<SessionEvent> {
        let mut events = vec![];

        self.generation += 1;
        self.term = term.trim().to_string();

        let action = self.selector.reset(&mut self.rows);
        if action != PlaybackAction::NoOp {
            events.push(SessionEvent::Playback(action));
        }

        if self.term.is_empty() && !self.allow_empty_search {
            debug!(generation = self.generation, "Blank search term, clearing results");
            self.rows.clear();
            self.sizes.clear();
            events.push(SessionEvent::ResultsCleared);
            if self.loading {
                self.loading = false;
                events.push(SessionEvent::LoadingStopped);
            }
            return events;
        }

        let request = SearchRequest {
            generation: self.generation,
            term: self.term.clone(),
        };

        info!(generation = request.generation, term = %request.term, "Submitting search");
        self.loading = true;
        events.push(SessionEvent::LoadingStarted);

        if let Err(e) = self.dispatcher.dispatch(request) {
            warn!(error = %e, "Failed to dispatch search");
            self.loading = false;
            events.push(SessionEvent::LoadingStopped);
            events.push(alert(REQUEST_FAILED_TITLE, format!("{e:#}")));
        }

        events
    }

    /// Applies the outcome of the search tagged `generation`.
    ///
    /// Outcomes of superseded searches produce no events and change nothing.
    pub(crate) fn apply_result(
        &mut self,
        generation: u64,
        result: Result<SearchResultModel, SearchError>,
    ) -> Vec<SessionEvent> {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Dropping superseded search result");
            return vec![];
        }

        self.loading = false;

        // A row may have been activated while the search was in flight
        let mut events = vec![];
        let action = self.selector.reset(&mut self.rows);
        if action != PlaybackAction::NoOp {
            events.push(SessionEvent::Playback(action));
        }

        match result {
            Ok(model) => {
                self.rows = RowPresentation::from_items(model.items());
                self.sizes = measure_rows(&self.rows, self.card_width);
                info!(generation, rows = self.rows.len(), "Search results ready");

                events.push(SessionEvent::ResultsReady {
                    rows: self.rows.clone(),
                    sizes: self.sizes.clone(),
                });
                events.push(SessionEvent::LoadingStopped);

                if self.rows.is_empty() {
                    events.push(alert(
                        NO_DATA_TITLE,
                        format!("Nothing matched \"{}\", please search again.", self.term),
                    ));
                }

                events
            }
            Err(e) => {
                warn!(generation, error = %e, network = e.is_network(), "Search failed");
                events.push(SessionEvent::LoadingStopped);
                events.push(alert(REQUEST_FAILED_TITLE, e.to_string()));
                events
            }
        }
    }

    /// Activates `row`, or releases the player when `row` is `None`.
    pub(crate) fn select_row(&mut self, row: Option<usize>, playing: bool) -> PlaybackAction {
        self.selector.select_row(&mut self.rows, row, playing)
    }

    pub(crate) fn on_playback_finished(&mut self) {
        self.selector.on_playback_finished(&mut self.rows);
    }

    /// Re-measures the cards after the results pane changed width.
    pub(crate) fn set_content_width(&mut self, card_width: u16) {
        if card_width != self.card_width {
            self.card_width = card_width;
            self.sizes = measure_rows(&self.rows, card_width);
        }
    }
}

fn alert(title: &str, message: String) -> SessionEvent {
    SessionEvent::AlertRequested {
        title: title.to_string(),
        message,
    }
}
