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

//! HTTP client for the iTunes search endpoint.
//!
//! One GET per search, the term travels as the `term` query parameter.
//! Request and response are recorded with `tracing`: method, URL and headers
//! at `debug`, the pretty-printed response body at `trace`.

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Request},
    header::{CONTENT_TYPE, HeaderValue},
};
use tracing::{debug, instrument, trace, warn};

use crate::{
    client::{SearchClient, decode},
    config::AppConfig,
    error::SearchError,
    model::SearchResultModel,
};

const USER_AGENT: &str = concat!("tunetap/", env!("CARGO_PKG_VERSION"));

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub(crate) struct ItunesClient {
    client: Client,
    search_url: String,
    extra_params: Vec<(&'static str, String)>,
}

impl ItunesClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;

        let mut extra_params = Vec::new();
        if let Some(media) = &config.media {
            extra_params.push(("media", media.clone()));
        }
        if let Some(country) = &config.country {
            extra_params.push(("country", country.clone()));
        }
        if let Some(limit) = config.limit {
            extra_params.push(("limit", limit.to_string()));
        }

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            extra_params,
        })
    }

    fn build_request(&self, term: &str) -> Result<Request, SearchError> {
        let mut params: Vec<(&str, &str)> = vec![("term", term)];
        params.extend(self.extra_params.iter().map(|(k, v)| (*k, v.as_str())));

        let request = self
            .client
            .get(&self.search_url)
            .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .query(&params)
            .build()?;

        Ok(request)
    }
}

impl SearchClient for ItunesClient {
    #[instrument(skip(self))]
    fn search(&self, term: &str) -> Result<SearchResultModel, SearchError> {
        let request = self.build_request(term)?;
        log_request(&request);

        let response = self.client.execute(request)?;
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            warn!(%url, %status, "Search request rejected");
            return Err(SearchError::Status(status));
        }

        let body = response.bytes()?;
        log_response(&url, status, &body);

        decode(&body)
    }
}

fn log_request(request: &Request) {
    debug!(
        method = %request.method(),
        url = %request.url(),
        headers = ?request.headers(),
        "Search request"
    );
}

fn log_response(url: &Url, status: StatusCode, body: &[u8]) {
    debug!(%url, %status, bytes = body.len(), "Search response");

    if tracing::enabled!(tracing::Level::TRACE) {
        match serde_json::from_slice::<serde_json::Value>(body)
            .and_then(|value| serde_json::to_string_pretty(&value))
        {
            Ok(pretty) => trace!(%url, body = %pretty, "Search response body"),
            Err(_) => trace!(%url, "Search response body is not JSON"),
        }
    }
}
