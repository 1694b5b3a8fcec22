//! Total ISK destroyed across zKillboard characters, counting each killmail once

pub mod cli;
pub mod logging;
pub mod services;
pub mod sources;
pub mod tui;
pub mod types;
