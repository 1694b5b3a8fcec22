//! Kill sources: where killmail lists come from

mod zkill;

pub use zkill::{parse_kills, ZkillClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};

use crate::types::Killmail;

/// Trait for anything that can list a character's killmails
pub trait KillSource: Send + Sync {
    /// Source name (e.g., "zkillboard")
    fn name(&self) -> &str;

    /// Fetch the killmails for one character.
    ///
    /// Failures are absorbed: an unreachable or misbehaving source yields an
    /// empty list and a logged warning, never an error.
    fn fetch_kills(&self, character_id: u64) -> Vec<Killmail>;
}
