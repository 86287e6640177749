//! Core engine types: shapes, pieces, grid, RNG.
//!
//! This module contains the value types the engine is built from. The
//! state machine that owns and mutates them lives in `crate::engine`.

pub mod grid;
pub mod piece;
pub mod rng;
pub mod shape;

pub use grid::{Cell, Grid, LineClear, GRID_SIZE};
pub use piece::{ColorId, Piece, PieceId, COLOR_COUNT};
pub use rng::{GameRng, GameRngState};
pub use shape::{Shape, ShapeKind, SHAPE_COUNT};
