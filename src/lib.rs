//! # blockgrid
//!
//! A block-placement puzzle game engine: a fixed 10×10 grid accepts
//! irregular pieces, fully filled rows and columns clear for score,
//! and the game ends when no queued piece fits anywhere.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: Rendering, drag-and-drop, and styling are
//!    external collaborators. They call the engine's commands and
//!    re-read state (or take a `snapshot`) after each one.
//!
//! 2. **All-or-nothing commands**: Every mutating operation either
//!    applies completely or rejects as a no-op with a typed error.
//!    There are no partial-failure states.
//!
//! 3. **Deterministic**: All randomness flows through one seeded RNG,
//!    so a whole session replays from a single `u64`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im` vectors back the queue and
//!   history, so cloning an engine for lookahead is cheap.
//!
//! - **Identity over structure**: Pieces with identical shape and
//!   color are distinguished by a unique `PieceId`; queue removal keys
//!   on identity.
//!
//! ## Modules
//!
//! - `core`: Shape catalog, pieces, grid, RNG
//! - `engine`: The `GameEngine` state machine, errors, reports,
//!   observer snapshots
//!
//! ## Example
//!
//! ```
//! use blockgrid::GameEngine;
//!
//! let mut engine = GameEngine::new(42);
//! let piece = engine.queue()[0];
//!
//! // Preview before committing, the way a drag handler would.
//! assert!(engine.can_place(&piece, 0, 0));
//! let placement = engine.place(piece.id, 0, 0).unwrap();
//! assert_eq!(placement.points % 100, 0);
//!
//! assert!(!engine.is_game_over());
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Cell, ColorId, GameRng, GameRngState, Grid, LineClear, Piece, PieceId, Shape, ShapeKind,
    COLOR_COUNT, GRID_SIZE, SHAPE_COUNT,
};

pub use crate::engine::{
    EngineSnapshot, GameEngine, PlaceError, Placement, PlacementRecord, BATCH_SIZE,
    POINTS_PER_LINE,
};
