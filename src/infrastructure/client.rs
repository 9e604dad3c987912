// src/infrastructure/client.rs
use crate::application::BoardBackend;
use crate::domain::{BoardError, Card, FlagChanges};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Talks to a running card service over HTTP. All failures, transport
/// or server-side, surface as `BoardError::Network`.
pub struct HttpBoardBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBoardBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn network(err: reqwest::Error) -> BoardError {
    BoardError::Network(err.to_string())
}

/// Turn non-2xx responses into errors, pulling the message out of the
/// service's `{error}` envelope when there is one.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, BoardError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body: serde_json::Value = resp.json().await.unwrap_or_default();
    let detail = body
        .get("error")
        .and_then(|v| v.as_str())
        .unwrap_or("no detail")
        .to_string();
    Err(BoardError::Network(format!(
        "service returned {status}: {detail}"
    )))
}

#[async_trait]
impl BoardBackend for HttpBoardBackend {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_cards(&self) -> Result<Vec<Card>, BoardError> {
        let resp = self
            .client
            .get(self.url("/api/cards"))
            .send()
            .await
            .map_err(network)?;
        let cards: Vec<Card> = check(resp).await?.json().await.map_err(network)?;
        debug!(count = cards.len(), "Fetched cards");
        Ok(cards)
    }

    #[instrument(level = "debug", skip(self))]
    async fn update_flags(
        &self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, BoardError> {
        let resp = self
            .client
            .put(self.url(&format!("/api/cards/{id}")))
            .json(&changes)
            .send()
            .await
            .map_err(network)?;
        check(resp).await?.json().await.map_err(network)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_card(&self, id: i64) -> Result<(), BoardError> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/cards/{id}")))
            .send()
            .await
            .map_err(network)?;
        check(resp).await?;
        Ok(())
    }
}
