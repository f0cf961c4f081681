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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! i.e. search requests over the network, from the main UI thread. It
//! provides a dedicated worker loop that translates [`AppTask`] requests into
//! search client calls and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use anyhow::{Result, anyhow};
use tracing::{debug, error};

use crate::{
    client::SearchClient,
    events::AppEvent,
    session::{SearchDispatcher, SearchRequest},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(SearchRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the search client and enters a blocking loop, listening
/// for incoming [`AppTask`]s. Searches that queued up while a previous one was
/// running are collapsed, only the most recent of them is executed.
///
/// # Arguments
///
/// * `client` - The search client used to execute searches.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    client: Box<dyn SearchClient>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let task = newest_task(task, &task_rx);

            let ctx = TaskContext {
                client: client.as_ref(),
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!(error = %e, "Task failed");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        debug!("Task channel closed, task worker exiting");
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    client: &'a dyn SearchClient,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::Search(request) => handlers::search(ctx, request),
    }
}

// Drains whatever else is already queued, keeping the last one
fn newest_task(mut task: AppTask, task_rx: &Receiver<AppTask>) -> AppTask {
    while let Ok(next) = task_rx.try_recv() {
        debug!(superseded = ?task, "Skipping superseded task");
        task = next;
    }
    task
}

impl SearchDispatcher for Sender<AppTask> {
    fn dispatch(&self, request: SearchRequest) -> Result<()> {
        self.send(AppTask::Search(request))
            .map_err(|_| anyhow!("Search worker is not running"))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex, mpsc},
        time::Duration,
    };

    use super::*;
    use crate::{
        error::SearchError,
        model::{ResultItem, SearchResultModel},
    };

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Answers every term with a single row named after the term, and records
    /// which terms it was asked for.
    #[derive(Clone, Default)]
    struct EchoClient {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl SearchClient for EchoClient {
        fn search(&self, term: &str) -> Result<SearchResultModel, SearchError> {
            self.seen.lock().unwrap().push(term.to_string());
            if term == "fail" {
                return Err(SearchError::Status(reqwest::StatusCode::BAD_GATEWAY));
            }
            Ok(SearchResultModel {
                result_count: Some(1),
                results: Some(vec![ResultItem {
                    track_name: Some(term.to_string()),
                    ..Default::default()
                }]),
            })
        }
    }

    fn request(generation: u64, term: &str) -> SearchRequest {
        SearchRequest {
            generation,
            term: term.to_string(),
        }
    }

    fn completed(event: AppEvent) -> (u64, Result<SearchResultModel, SearchError>) {
        match event {
            AppEvent::SearchCompleted { generation, result } => (generation, result),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn search_results_are_posted_with_their_generation() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = spawn_task_worker(Box::new(EchoClient::default()), task_rx, event_tx);

        task_tx.dispatch(request(7, "rain")).unwrap();

        let (generation, result) = completed(event_rx.recv_timeout(TIMEOUT).unwrap());
        assert_eq!(generation, 7);
        assert_eq!(result.unwrap().items()[0].track_name.as_deref(), Some("rain"));

        drop(task_tx);
        worker.join().unwrap();
    }

    #[test]
    fn failures_are_posted_as_results() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = spawn_task_worker(Box::new(EchoClient::default()), task_rx, event_tx);

        task_tx.dispatch(request(1, "fail")).unwrap();

        let (generation, result) = completed(event_rx.recv_timeout(TIMEOUT).unwrap());
        assert_eq!(generation, 1);
        assert!(matches!(result, Err(SearchError::Status(_))));

        drop(task_tx);
        worker.join().unwrap();
    }

    #[test]
    fn queued_searches_collapse_to_the_newest() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        // Queue everything before the worker starts so it finds a backlog
        task_tx.dispatch(request(1, "a")).unwrap();
        task_tx.dispatch(request(2, "ab")).unwrap();
        task_tx.dispatch(request(3, "abc")).unwrap();
        drop(task_tx);

        let client = EchoClient::default();
        let seen = client.seen.clone();
        spawn_task_worker(Box::new(client), task_rx, event_tx)
            .join()
            .unwrap();

        let events: Vec<_> = event_rx.try_iter().map(completed).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, 3);
        assert_eq!(*seen.lock().unwrap(), vec!["abc".to_string()]);
    }

    #[test]
    fn dispatch_fails_once_the_worker_is_gone() {
        let (task_tx, task_rx) = mpsc::channel::<AppTask>();
        drop(task_rx);

        assert!(task_tx.dispatch(request(1, "x")).is_err());
    }
}
