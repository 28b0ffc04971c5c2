//! Match results storage and reporting

use chess_rules::{Color, Outcome};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Result of a single game from engine1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// None when the ply limit ran out first
    pub outcome: Option<Outcome>,
    /// Moves in coordinate notation, e.g. `e2e4`
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(Outcome::winner)
    }

    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            games: Vec::new(),
        }
    }

    pub fn record(&mut self, result: GameResult, game: GameRecord) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Load results from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save results to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print a summary to stdout
    pub fn print_summary(&self) {
        println!("\n=== Final Result ===");
        println!(
            "{}: {} wins, {} losses, {} draws",
            self.engine1, self.wins, self.losses, self.draws
        );
        println!("Score: {:.1}%", self.score() * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score() {
        let mut result = MatchResult::new("greedy", "random");
        assert_eq!(result.score(), 0.5);

        let game = GameRecord {
            white: "greedy".into(),
            black: "random".into(),
            outcome: Some(Outcome::Checkmate {
                winner: Color::White,
            }),
            moves: vec!["e2e4".into()],
        };
        result.record(GameResult::Win, game.clone());
        result.record(GameResult::Draw, game);
        assert_eq!(result.total_games(), 2);
        assert!((result.score() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_save_and_load() {
        let mut result = MatchResult::new("greedy", "random");
        result.record(
            GameResult::Draw,
            GameRecord {
                white: "random".into(),
                black: "greedy".into(),
                outcome: Some(Outcome::Stalemate),
                moves: vec!["e2e4".into(), "e7e5".into()],
            },
        );

        let path = std::env::temp_dir().join(format!("arena_results_{}.json", std::process::id()));
        result.save(&path).unwrap();
        let loaded = MatchResult::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, result);
        assert_eq!(loaded.games[0].plies(), 2);
        assert_eq!(loaded.games[0].winner(), None);
    }
}
