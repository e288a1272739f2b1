//! Text renderer for inspecting layout results
//!
//! This module takes a GridLayout and produces a plain-text map of the grid
//! and a placement table. It is meant for debugging, not for pixel output.

pub mod config;
pub mod text;

pub use config::TextConfig;
pub use text::{render_map, render_table};
