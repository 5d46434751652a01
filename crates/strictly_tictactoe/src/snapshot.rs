//! Serializable game snapshots for save and restore.

use super::error::SnapshotError;
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet};
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The complete engine state: every history entry plus the viewed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Boards from the empty start to the latest move.
    pub history: Vec<Board>,
    /// Index of the board being viewed.
    pub current_step: usize,
}

impl Game {
    /// Exports the engine state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.history.clone(), self.current_step)
    }

    /// Rebuilds a game from a snapshot, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::InvariantViolation`] listing each invariant
    /// the snapshot breaks.
    #[instrument(skip(snapshot), fields(len = snapshot.history.len(), current_step = snapshot.current_step))]
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let game = Self {
            history: snapshot.history,
            current_step: snapshot.current_step,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SnapshotError::InvariantViolation(descriptions)
        })?;
        debug!("Snapshot restored");
        Ok(game)
    }

    /// Rebuilds a game from an optional snapshot, falling back to a new game
    /// when there is none or it is invalid.
    #[instrument(skip(snapshot))]
    pub fn restore_or_default(snapshot: Option<GameSnapshot>) -> Self {
        match snapshot.map(Self::from_snapshot) {
            Some(Ok(game)) => game,
            Some(Err(e)) => {
                warn!(error = %e, "Discarding invalid snapshot");
                Self::new()
            }
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_snapshot_restores_identical_game() {
        let mut game = Game::new();
        for index in [4, 0, 8] {
            game.select_square(index);
        }
        game.jump_to_step(2).unwrap();
        let restored = Game::from_snapshot(game.snapshot()).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut game = Game::new();
        game.select_square(0);
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["currentStep"], 1);
        assert_eq!(json["history"][1][0], "X");
        assert!(json["history"][0][0].is_null());
    }

    #[test]
    fn test_out_of_range_step_rejected() {
        let snapshot = GameSnapshot::new(vec![Board::new()], 1);
        assert!(matches!(
            Game::from_snapshot(snapshot),
            Err(SnapshotError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_restore_or_default_falls_back() {
        let bogus = GameSnapshot::new(
            vec![Board::new().with_mark(Position::Center, Mark::O)],
            0,
        );
        assert_eq!(Game::restore_or_default(Some(bogus)), Game::new());
        assert_eq!(Game::restore_or_default(None), Game::new());
    }
}
