//! Services for ISK aggregation and its inputs/outputs

pub mod aggregator;
pub mod config;
pub mod input;
pub mod report;

pub use aggregator::{Aggregator, KillLedger};
pub use config::Config;
pub use input::{parse_character_args, parse_character_ids};
pub use report::{format_isk, format_number, report_line};
