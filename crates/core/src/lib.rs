//! gav-reader - coordinate extraction records for build modules
//!
//! This crate provides functionality to:
//! - Format a module's GAV, parent GAV and descriptor path as one JSON line
//! - Write that line to an output stream in a single, all-or-nothing write
//! - Read records back and index them by descriptor path
pub mod error;
pub mod reader;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use reader::{RecordIndex, parse_record, parse_records};
