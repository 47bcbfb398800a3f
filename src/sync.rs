//! # Sync Client
//!
//! Tells the backend a reaction was added or removed. Best effort, at most once:
//! - no retry, no backoff, no idempotency key
//! - failures are logged and returned, and the caller never rolls local state back
//! - no timeout beyond the transport default
use async_trait::async_trait;
use catalog::{Interaction, ReactionKind};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server answered {0}")]
    Status(StatusCode),

    #[error("Invalid API url {0}")]
    InvalidUrl(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, vlog_id: &str, kind: ReactionKind, active: bool)
    -> Result<(), SyncError>;
}

#[derive(Debug, Clone)]
pub struct SyncClient {
    http: Client,
    api_url: String,
}

impl SyncClient {
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Counter endpoint for one vlog. The id is a single escaped path segment, whatever it holds.
    pub fn endpoint(&self, vlog_id: &str, kind: ReactionKind) -> Result<Url, SyncError> {
        let invalid = || SyncError::InvalidUrl(self.api_url.clone());

        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(["vlogs", vlog_id, kind.path()]);

        Ok(url)
    }

    async fn send(&self, vlog_id: &str, kind: ReactionKind, active: bool) -> Result<(), SyncError> {
        let response = self
            .http
            .post(self.endpoint(vlog_id, kind)?)
            .json(&Interaction { active })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for SyncClient {
    async fn notify(
        &self,
        vlog_id: &str,
        kind: ReactionKind,
        active: bool,
    ) -> Result<(), SyncError> {
        let result = self.send(vlog_id, kind, active).await;

        match &result {
            Ok(()) => debug!("Synced {} active={active} for {vlog_id}", kind.path()),
            Err(e) => warn!("Failed to update {} for {vlog_id} on server: {e}", kind.path()),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CapturedLogs;

    #[test]
    fn test_endpoint() {
        let client = SyncClient::new(Client::new(), "http://localhost:5000/api/");

        assert_eq!(
            client.endpoint("abc", ReactionKind::Dislike).unwrap().as_str(),
            "http://localhost:5000/api/vlogs/abc/dislike"
        );
    }

    #[test]
    fn test_endpoint_escapes_id() {
        let client = SyncClient::new(Client::new(), "http://localhost:5000/api");

        assert_eq!(
            client.endpoint("trip#1/b?c", ReactionKind::Like).unwrap().as_str(),
            "http://localhost:5000/api/vlogs/trip%231%2Fb%3Fc/like"
        );
    }

    #[test]
    fn test_endpoint_rejects_bad_api_url() {
        let client = SyncClient::new(Client::new(), "localhost api");

        assert!(matches!(
            client.endpoint("abc", ReactionKind::Like),
            Err(SyncError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_reported_not_raised() {
        // nothing listens on the discard port
        let client = SyncClient::new(Client::new(), "http://127.0.0.1:9/api");

        let (logs, _guard) = CapturedLogs::install();
        let result = client.notify("abc", ReactionKind::Like, true).await;

        assert!(matches!(result, Err(SyncError::Network(_))));
        assert!(logs.contents().contains("Failed to update like for abc on server"));
    }
}
