//! Game records and match summaries

use serde::{Deserialize, Serialize};
use std::path::Path;

use checkers_core::{Move, Side, Square};

use crate::error::MatchError;

/// Result of a single game from engine1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEnd {
    /// The loser has no pieces left
    Eliminated { winner: Side },
    /// The loser was to move and had no legal move
    Blocked { winner: Side },
    /// Only kings left, equal numbers on both sides
    AllKingsDraw,
    /// `max_plies` reached without a result
    PlyLimit,
    /// An engine returned no move in a position that still had moves
    Forfeit { winner: Side },
}

impl GameEnd {
    pub fn winner(self) -> Option<Side> {
        match self {
            GameEnd::Eliminated { winner }
            | GameEnd::Blocked { winner }
            | GameEnd::Forfeit { winner } => Some(winner),
            GameEnd::AllKingsDraw | GameEnd::PlyLimit => None,
        }
    }
}

/// One executed move with the statistics of the search that chose it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlyRecord {
    pub ply: u32,
    pub side: Side,
    pub mv: Move,
    pub score: f64,
    pub nodes: u64,
    pub cutoffs: u64,
    pub captured: Option<Square>,
    pub promoted: bool,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub game: u32,
    pub dark: String,
    pub light: String,
    /// Side engine1 played
    pub engine1_side: Side,
    pub plies: Vec<PlyRecord>,
    pub end: GameEnd,
    /// Final position as a text diagram
    pub final_position: String,
}

impl GameRecord {
    pub fn result_for(&self, side: Side) -> GameResult {
        match self.end.winner() {
            Some(winner) if winner == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }

    pub fn engine1_result(&self) -> GameResult {
        self.result_for(self.engine1_side)
    }

    pub fn captures(&self) -> usize {
        self.plies.iter().filter(|p| p.captured.is_some()).count()
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
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
}

/// Complete match results with aggregated search statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSummary {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, game: GameRecord) {
        self.result.record(game.engine1_result());
        self.games.push(game);
    }

    fn plies(&self) -> impl Iterator<Item = &PlyRecord> {
        self.games.iter().flat_map(|g| g.plies.iter())
    }

    pub fn total_plies(&self) -> usize {
        self.plies().count()
    }

    pub fn total_nodes(&self) -> u64 {
        self.plies().map(|p| p.nodes).sum()
    }

    pub fn total_cutoffs(&self) -> u64 {
        self.plies().map(|p| p.cutoffs).sum()
    }

    /// Cutoffs per visited node, as a percentage
    pub fn cutoff_ratio(&self) -> f64 {
        let nodes = self.total_nodes();
        if nodes == 0 {
            return 0.0;
        }
        self.total_cutoffs() as f64 / nodes as f64 * 100.0
    }

    pub fn avg_move_ms(&self) -> f64 {
        let plies = self.total_plies();
        if plies == 0 {
            return 0.0;
        }
        self.plies().map(|p| p.elapsed_ms).sum::<f64>() / plies as f64
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), MatchError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, MatchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));

        report.push_str(&format!(
            "{:<6} {:<8} {:<24} {:>6} {:>9}\n",
            "Game", "Engine1", "End", "Plies", "Captures"
        ));
        report.push_str(&"-".repeat(57));
        report.push('\n');
        for game in &self.games {
            report.push_str(&format!(
                "{:<6} {:<8} {:<24} {:>6} {:>9}\n",
                game.game + 1,
                game.engine1_side.to_string(),
                format!("{:?}", game.end),
                game.plies.len(),
                game.captures()
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report.push_str(&format!(
            "Nodes: {}, cutoffs: {} ({:.1}%), avg move time: {:.3} ms\n",
            self.total_nodes(),
            self.total_cutoffs(),
            self.cutoff_ratio(),
            self.avg_move_ms()
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
