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

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::{events::AppEvent, session::SearchRequest, tasks::TaskContext};

pub(super) fn search(ctx: &TaskContext, request: SearchRequest) -> Result<()> {
    let SearchRequest { generation, term } = request;

    let started = Instant::now();
    let result = ctx.client.search(&term);

    info!(
        generation,
        term = %term,
        ok = result.is_ok(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Search finished"
    );

    ctx.event_tx
        .send(AppEvent::SearchCompleted { generation, result })
        .context("Failed to post search result")?;

    Ok(())
}
