//! Self-play runner for checkers engines
//!
//! This crate provides infrastructure for:
//! - Loading match settings from TOML
//! - Playing games between engines with every move validated
//! - Recording games and summarising them as text or JSON
//!
//! # Usage
//!
//! ```bash
//! # Default match: minimax depth 4 against minimax depth 3
//! cargo run -p self_play
//!
//! # Match described by a config file, with debug logging
//! RUST_LOG=debug cargo run -p self_play -- match.toml
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
