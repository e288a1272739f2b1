//! Logical grid layout
//!
//! Turns an ordered list of fields into grid positions: hints are resolved to
//! spans, the configured matrix places them, and each field receives its
//! rectangle.

pub mod config;
pub mod engine;
pub mod error;
pub mod hints;

pub use config::{GridConfig, DEFAULT_ROW_LIMIT};
pub use engine::{layout_fields, layout_fields_with, GridLayout};
pub use error::GridError;
pub use hints::{GridDataBuilder, GridField, GridHints, HintResolver, FULL_WIDTH};
