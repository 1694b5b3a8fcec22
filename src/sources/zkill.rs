//! zKillboard HTTP client
//!
//! One blocking GET per character, no pagination and no retries.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use std::time::Duration;

use super::KillSource;
use crate::services::Config;
use crate::types::{Killmail, Result, ZkillError};

/// Public zKillboard API root
pub const DEFAULT_BASE_URL: &str = "https://zkillboard.com/api";

/// User-Agent sent with every request (zKillboard asks clients to identify themselves)
pub const USER_AGENT: &str = "zkillboard-isk-calculator";

/// Default HTTP request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Blocking client for `/kills/characterID/{id}/`
pub struct ZkillClient {
    client: Client,
    base_url: String,
}

impl ZkillClient {
    /// Client built from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_settings(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    pub fn with_settings(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for one character
    pub fn kills_url(&self, character_id: u64) -> String {
        format!("{}/kills/characterID/{}/", self.base_url, character_id)
    }

    /// Fetch one character's killmails, surfacing every failure
    pub fn try_fetch_kills(&self, character_id: u64) -> Result<Vec<Killmail>> {
        let url = self.kills_url(character_id);
        tracing::debug!(%url, "fetching killmails");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ZkillError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_kills(&body)
    }
}

impl KillSource for ZkillClient {
    fn name(&self) -> &str {
        "zkillboard"
    }

    fn fetch_kills(&self, character_id: u64) -> Vec<Killmail> {
        match self.try_fetch_kills(character_id) {
            Ok(kills) => {
                tracing::debug!(character_id, count = kills.len(), "fetched killmails");
                kills
            }
            Err(e) => {
                tracing::warn!(
                    source = self.name(),
                    character_id,
                    error = %e,
                    "failed to fetch data"
                );
                Vec::new()
            }
        }
    }
}

/// Parse a kill list body.
///
/// The body must be a JSON array. Elements that do not look like a killmail
/// are skipped with a warning instead of failing the whole list.
pub fn parse_kills(body: &str) -> Result<Vec<Killmail>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ZkillError::Parse(e.to_string()))?;

    let kills = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Killmail>(value) {
            Ok(km) => Some(km),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed killmail");
                None
            }
        })
        .collect();

    Ok(kills)
}
