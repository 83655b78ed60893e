//! HTTP client for the remote event store.
//!
//! The store is a plain REST collection: `GET /events`, `GET /events/{id}`,
//! `POST /events`, `PUT /events/{id}`, `DELETE /events/{id}`. Records come
//! back exactly as stored; no coercion happens here. Transport and status
//! failures are classified into the [`StoreError`] taxonomy, with the raw
//! detail kept in the debug log.

use std::time::Duration;

use eventdeck_core::error::{StoreError, StoreResult};
use eventdeck_core::{Event, EventDraft};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for one event store.
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape the store uses for rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        StoreClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /events
    ///
    /// A failed attempt is retried exactly once; every other operation
    /// fails fast.
    pub async fn list_events(&self) -> StoreResult<Vec<Event>> {
        match self.fetch_events().await {
            Ok(events) => Ok(events),
            Err(first) => {
                tracing::debug!(error = %first, "event list fetch failed, retrying once");
                self.fetch_events().await
            }
        }
    }

    async fn fetch_events(&self) -> StoreResult<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| self.connectivity(err))?;

        decode(check(resp, None).await?).await
    }

    /// GET /events/{id}
    pub async fn get_event(&self, id: &str) -> StoreResult<Event> {
        let resp = self
            .http
            .get(format!("{}/events/{}", self.base_url, id))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| self.connectivity(err))?;

        decode(check(resp, Some(id)).await?).await
    }

    /// POST /events. The store assigns the id and returns the full record.
    pub async fn create_event(&self, draft: &EventDraft) -> StoreResult<Event> {
        let resp = self
            .http
            .post(format!("{}/events", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .json(draft)
            .send()
            .await
            .map_err(|err| self.connectivity(err))?;

        decode(check(resp, None).await?).await
    }

    /// PUT /events/{id} with the full record (no partial updates).
    pub async fn update_event(&self, event: &Event) -> StoreResult<Event> {
        let resp = self
            .http
            .put(format!("{}/events/{}", self.base_url, event.id))
            .timeout(REQUEST_TIMEOUT)
            .json(event)
            .send()
            .await
            .map_err(|err| self.connectivity(err))?;

        decode(check(resp, Some(&event.id)).await?).await
    }

    /// DELETE /events/{id}
    pub async fn delete_event(&self, id: &str) -> StoreResult<()> {
        let resp = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| self.connectivity(err))?;

        check(resp, Some(id)).await?;
        Ok(())
    }

    fn connectivity(&self, err: reqwest::Error) -> StoreError {
        tracing::debug!(error = %err, "transport failure");
        StoreError::Connectivity(format!("is the store running at {}?", self.base_url))
    }
}

/// Map a non-2xx response onto the error taxonomy. 404 on a specific id is
/// NotFound; everything else is a rejection with the store's message when
/// it sent one.
async fn check(resp: reqwest::Response, id: Option<&str>) -> StoreResult<reqwest::Response> {
    let status = resp.status();

    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::NOT_FOUND
        && let Some(id) = id
    {
        return Err(StoreError::NotFound(id.to_string()));
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(%status, %body, "store rejected request");

    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|err| err.message)
        .unwrap_or_else(|_| status.to_string());

    Err(StoreError::Rejected(message))
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> StoreResult<T> {
    resp.json().await.map_err(|err| {
        tracing::debug!(error = %err, "failed to decode store response");
        StoreError::Rejected("store returned an unreadable response".to_string())
    })
}
