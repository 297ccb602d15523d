//! Match runner for playing games between engines

use checkers_core::{status, Engine, GameStatus, Position, Side, WinReason};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::results::{GameEnd, GameRecord, MatchSummary, PlyRecord};

/// An engine sitting at the board, with the depth it searches to
pub struct Seat<'a> {
    pub engine: &'a mut dyn Engine,
    pub depth: u8,
    /// Name used in logs and records
    pub label: String,
}

impl<'a> Seat<'a> {
    pub fn new(engine: &'a mut dyn Engine, depth: u8, label: impl Into<String>) -> Self {
        Self {
            engine,
            depth,
            label: label.into(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results are kept from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchSummary, MatchError> {
        let label1 = self.config.engine1.label();
        let label2 = self.config.engine2.label();
        let mut summary = MatchSummary::new(&label1, &label2);

        for game_num in 0..self.config.num_games {
            let engine1_dark = !self.config.alternate_sides || game_num % 2 == 0;

            let seat1 = Seat::new(&mut *engine1, self.config.engine1.depth, label1.as_str());
            let seat2 = Seat::new(&mut *engine2, self.config.engine2.depth, label2.as_str());

            let record = if engine1_dark {
                self.play_game(game_num, Position::startpos(), seat1, seat2)?
            } else {
                let mut record = self.play_game(game_num, Position::startpos(), seat2, seat1)?;
                record.engine1_side = Side::Light;
                record
            };

            let engine1_side = record.engine1_side;
            summary.add_game(record);
            info!(
                game = game_num + 1,
                of = self.config.num_games,
                %engine1_side,
                wins = summary.result.wins,
                losses = summary.result.losses,
                draws = summary.result.draws,
                "game finished"
            );
        }

        Ok(summary)
    }

    /// Play one game from `start`, Dark moving first.
    ///
    /// The returned record counts the Dark seat as engine1.
    pub fn play_game<'a>(
        &self,
        game: u32,
        start: Position,
        mut dark: Seat<'a>,
        mut light: Seat<'a>,
    ) -> Result<GameRecord, MatchError> {
        dark.engine.new_game();
        light.engine.new_game();

        let mut pos = start;
        let mut side = Side::Dark;
        let mut plies = Vec::new();

        let end = loop {
            match status(&pos, side) {
                GameStatus::Won {
                    winner,
                    reason: WinReason::OpponentEliminated,
                } => break GameEnd::Eliminated { winner },
                GameStatus::Won {
                    winner,
                    reason: WinReason::NoLegalMoves,
                } => break GameEnd::Blocked { winner },
                GameStatus::Drawn => break GameEnd::AllKingsDraw,
                GameStatus::InProgress => {}
            }
            if plies.len() as u32 >= self.config.max_plies {
                break GameEnd::PlyLimit;
            }

            let seat = match side {
                Side::Dark => &mut dark,
                Side::Light => &mut light,
            };

            let started = Instant::now();
            let result = seat.engine.search(&pos, side, seat.depth);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            let Some(mv) = result.best_move else {
                warn!(engine = %seat.label, %side, "engine returned no move, forfeiting");
                break GameEnd::Forfeit {
                    winner: side.opponent(),
                };
            };

            let next = pos.apply(side, mv).map_err(|source| MatchError::IllegalMove {
                engine: seat.label.clone(),
                source,
            })?;

            let ply = PlyRecord {
                ply: plies.len() as u32 + 1,
                side,
                mv,
                score: result.score,
                nodes: result.nodes,
                cutoffs: result.cutoffs,
                captured: mv.captured_square(),
                promoted: pos.promotes(mv),
                elapsed_ms,
            };
            info!(
                game = game + 1,
                ply = ply.ply,
                %side,
                mv = %mv,
                captured = ?ply.captured,
                score = ply.score,
                nodes = ply.nodes,
                "move"
            );
            if ply.promoted {
                debug!(%side, square = %mv.to, "promoted to king");
            }

            plies.push(ply);
            pos = next;
            side = side.opponent();
        };

        info!(game = game + 1, ?end, plies = plies.len(), "game over");

        Ok(GameRecord {
            game,
            dark: dark.label,
            light: light.label,
            engine1_side: Side::Dark,
            plies,
            end,
            final_position: pos.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
