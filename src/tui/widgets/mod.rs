//! TUI widgets

pub mod calculator;
pub mod error_popup;
pub mod spinner;
