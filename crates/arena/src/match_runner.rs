//! Match runner for playing games between engines

use chess_rules::{Color, Engine, GameState, GameStatus};
use tracing::{debug, info};

use crate::config::ArenaConfig;
use crate::error::{ArenaError, Result};
use crate::results::{GameRecord, GameResult, MatchResult};

/// Mixed into the game seed for engine2 so the two engines never share a stream.
const ENGINE2_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeds for engine1 and engine2 in game `game_index` of a match seeded with `seed`.
///
/// engine1 gets `seed + game_index`; engine2 gets the same value salted.
pub fn game_seeds(seed: u64, game_index: u32) -> (u64, u64) {
    let game_seed = seed.wrapping_add(u64::from(game_index));
    (game_seed, game_seed ^ ENGINE2_SALT)
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: ArenaConfig,
}

impl MatchRunner {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective. With a configured seed
    /// both engines are reseeded before every game, see [`game_seeds`].
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> Result<MatchResult> {
        let mut result = MatchResult::new(engine1.name(), engine2.name());

        for game_num in 0..self.config.games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            if let Some(seed) = self.config.seed {
                let (seed1, seed2) = game_seeds(seed, game_num);
                engine1.reseed(seed1);
                engine2.reseed(seed2);
            }

            let record = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };

            let engine1_color = if engine1_white { Color::White } else { Color::Black };
            let game_result = match record.winner() {
                Some(c) if c == engine1_color => GameResult::Win,
                Some(_) => GameResult::Loss,
                None => GameResult::Draw,
            };

            let outcome = match game_result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            result.record(game_result, record);
            info!(
                "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                game_num + 1,
                self.config.games,
                outcome,
                if engine1_white { "W" } else { "B" },
                result.wins,
                result.losses,
                result.draws
            );
        }

        Ok(result)
    }

    /// Play a single game to completion or the ply limit
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> Result<GameRecord> {
        let mut game = GameState::new();
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let mut outcome = None;

        for _ in 0..self.config.max_plies {
            let Some(mover) = game.side_to_move() else {
                break;
            };
            let (choice, name) = match mover {
                Color::White => (white.choose_move(game.board(), mover), white.name()),
                Color::Black => (black.choose_move(game.board(), mover), black.name()),
            };

            let status = match choice {
                Some(mv) => {
                    let status = game.play(mv.from, mv.to).map_err(|source| ArenaError::Rules {
                        engine: name.to_string(),
                        source,
                    })?;
                    moves.push(mv.to_string());
                    status
                }
                None => game.evaluate_terminal_state(),
            };

            if let GameStatus::Over(o) = status {
                outcome = Some(o);
                break;
            }
        }

        debug!(?outcome, plies = moves.len(), "game finished");
        Ok(GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            outcome,
            moves,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
