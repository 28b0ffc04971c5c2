//! Self-play arena for the rules engine
//!
//! This crate provides infrastructure for:
//! - Running matches between engines through [`chess_rules::GameState`]
//! - Loading match settings from TOML
//! - Writing per-game records as JSON
//!
//! # Usage
//!
//! ```bash
//! cargo run -p arena -- match greedy random --games 20 --seed 7
//! ```

mod config;
mod engines;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use engines::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
