//! Engine lookup by name.

use chess_rules::Engine;
use greedy_engine::GreedyEngine;
use random_engine::RandomEngine;

use crate::error::{ArenaError, Result};

pub const ENGINE_NAMES: [&str; 2] = ["greedy", "random"];

/// Build an engine from its command-line name, optionally seeded.
pub fn create_engine(spec: &str, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "greedy" | "capture" => Ok(match seed {
            Some(s) => Box::new(GreedyEngine::seeded(s)),
            None => Box::new(GreedyEngine::new()),
        }),
        "random" => Ok(match seed {
            Some(s) => Box::new(RandomEngine::seeded(s)),
            None => Box::new(RandomEngine::new()),
        }),
        _ => Err(ArenaError::UnknownEngine(spec.to_string())),
    }
}
