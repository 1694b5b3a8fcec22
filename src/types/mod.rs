//! Type definitions for zkill-isk

mod error;
mod killmail;

pub use error::*;
pub use killmail::*;
