//! Placement reports and history records.
//!
//! A successful `place` returns a `Placement` describing exactly what
//! changed; the engine also appends a `PlacementRecord` to its history
//! so observers can replay the event stream instead of diffing grids.

use serde::{Deserialize, Serialize};

use crate::core::{LineClear, Piece};

/// What a successful placement did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The piece that was placed (already removed from the queue).
    pub piece: Piece,
    /// Anchor row of the shape's top-left corner.
    pub row: i8,
    /// Anchor column of the shape's top-left corner.
    pub col: i8,
    /// Rows and columns cleared by this placement.
    pub clear: LineClear,
    /// Points awarded (100 per cleared line; 0 if nothing cleared).
    pub points: u32,
}

impl Placement {
    /// Number of lines this placement cleared.
    #[must_use]
    pub fn lines_cleared(&self) -> usize {
        self.clear.line_count()
    }
}

/// A placement in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Position in the session's placement sequence, starting at 0.
    /// Survives refills; resets with the session.
    pub sequence: u32,
    /// The placement itself.
    pub placement: Placement,
}
