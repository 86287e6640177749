//! The game-state engine: placement legality, grid mutation, line
//! clearing, scoring, and terminal-state detection.

pub mod error;
pub mod game;
pub mod placement;
pub mod snapshot;

pub use error::PlaceError;
pub use game::{GameEngine, BATCH_SIZE, POINTS_PER_LINE};
pub use placement::{Placement, PlacementRecord};
pub use snapshot::EngineSnapshot;
