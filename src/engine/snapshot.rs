//! Serializable read-only view of a session.
//!
//! Presentation layers hold no game state; they re-read after each
//! command. `EngineSnapshot` packages one consistent view (grid,
//! queue, score, terminal flag) in plain owned collections so it can
//! cross any boundary (JSON to a web view, a channel to a render
//! thread) without borrowing the engine.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameRngState, Piece};

/// One consistent observer view of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Grid rows, top to bottom; `Some(color)` iff filled.
    pub grid: Vec<Vec<Cell>>,
    /// The piece queue, in order.
    pub queue: Vec<Piece>,
    /// Current score.
    pub score: u32,
    /// Is the session over?
    pub game_over: bool,
    /// Number of successful placements so far this session.
    pub placements: u32,
    /// RNG position, for diagnostics and replay tooling.
    pub rng: GameRngState,
}
