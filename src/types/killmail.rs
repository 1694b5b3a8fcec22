//! Killmail types for the zKillboard API

use serde::{Deserialize, Serialize};

/// zKillboard metadata attached to a killmail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ZkbMeta {
    #[serde(rename = "destroyedValue", default)]
    pub destroyed_value: Option<f64>,
}

/// One killmail as returned by `/api/kills/characterID/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Killmail {
    #[serde(default)]
    pub killmail_id: Option<u64>,
    #[serde(default)]
    pub zkb: Option<ZkbMeta>,
}

impl Killmail {
    pub fn new(killmail_id: Option<u64>, destroyed_value: Option<f64>) -> Self {
        Self {
            killmail_id,
            zkb: Some(ZkbMeta { destroyed_value }),
        }
    }

    /// Usable dedup key. `None` for absent ids and for id 0.
    pub fn id(&self) -> Option<u64> {
        self.killmail_id.filter(|id| *id != 0)
    }

    /// Destroyed value in ISK, 0 when the value or the whole `zkb` block is absent
    pub fn destroyed_value(&self) -> f64 {
        self.zkb
            .as_ref()
            .and_then(|zkb| zkb.destroyed_value)
            .unwrap_or(0.0)
    }
}

/// Result of one aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct IskSummary {
    pub character_ids: Vec<u64>,
    pub total_isk: f64,
    /// Distinct killmails counted in `total_isk`
    pub unique_kills: usize,
    /// Records dropped because their id was already counted
    pub duplicate_kills: usize,
    /// Records dropped for lacking a usable id
    pub skipped_kills: usize,
}
