//! Placement rejection taxonomy.
//!
//! The engine has no external failure sources; the only errors are
//! caller-contract violations, and every rejection is a no-op that
//! leaves state untouched.

use thiserror::Error;

use crate::core::PieceId;

/// Why a `place` call was rejected.
///
/// Rejections are all-or-nothing: no grid, queue, or score mutation
/// happens on any of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The session is in the game-over state; only `reset` is accepted.
    #[error("game is over; reset to continue")]
    GameOver,

    /// The piece id is not in the current queue (already placed, or
    /// from a stale snapshot).
    #[error("{0} is not in the queue")]
    NotQueued(PieceId),

    /// Some occupied cell of the shape falls out of bounds or onto a
    /// filled cell at the requested anchor.
    #[error("piece does not fit at ({row}, {col})")]
    DoesNotFit {
        /// Requested anchor row.
        row: i8,
        /// Requested anchor column.
        col: i8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PlaceError::GameOver.to_string(),
            "game is over; reset to continue"
        );
        assert_eq!(
            PlaceError::NotQueued(PieceId::new(7)).to_string(),
            "Piece(7) is not in the queue"
        );
        assert_eq!(
            PlaceError::DoesNotFit { row: -1, col: 9 }.to_string(),
            "piece does not fit at (-1, 9)"
        );
    }
}
