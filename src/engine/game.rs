//! The game engine state machine.
//!
//! ## Ownership
//!
//! `GameEngine` is the sole owner of the grid, the piece queue, the
//! score, and the game-over flag. Presentation layers hold no state of
//! their own; they call commands and re-read (or `snapshot`) after each
//! one.
//!
//! ## States
//!
//! `Playing` and `GameOver`. The only transition into `GameOver` is an
//! exhaustive placement scan failing after a placement+refill cycle;
//! the only way back is `reset`. A `place` call while over is rejected
//! as a no-op.
//!
//! ## Queue discipline
//!
//! The queue holds at most `BATCH_SIZE` pieces and is refilled as a
//! whole batch only when the last piece is placed, never partially.

use im::Vector;

use crate::core::{
    ColorId, GameRng, Grid, Piece, PieceId, ShapeKind, COLOR_COUNT, GRID_SIZE, SHAPE_COUNT,
};
use crate::engine::error::PlaceError;
use crate::engine::placement::{Placement, PlacementRecord};
use crate::engine::snapshot::EngineSnapshot;

/// Pieces per generated batch.
pub const BATCH_SIZE: usize = 3;

/// Points awarded per cleared line.
pub const POINTS_PER_LINE: u32 = 100;

/// The block-placement game engine.
///
/// Persistent data structures back the queue and history, so `Clone`
/// is cheap enough for lookahead callers to fork the engine and try
/// placements without touching the live session.
#[derive(Clone, Debug)]
pub struct GameEngine {
    grid: Grid,
    queue: Vector<Piece>,
    history: Vector<PlacementRecord>,
    score: u32,
    game_over: bool,
    rng: GameRng,
    next_piece_id: u32,
}

impl GameEngine {
    /// Create a new session with the given RNG seed.
    ///
    /// Starts in `Playing` with an empty grid and a fresh batch of
    /// `BATCH_SIZE` pieces.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a new session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(rng: GameRng) -> Self {
        let mut engine = Self {
            grid: Grid::new(),
            queue: Vector::new(),
            history: Vector::new(),
            score: 0,
            game_over: false,
            rng,
            next_piece_id: 0,
        };
        engine.queue = engine.generate_pieces();
        engine
    }

    /// Create a session from an explicit grid and queue.
    ///
    /// Intended for tests and fixtures. The game-over flag is evaluated
    /// from the given state; an empty queue is replaced by a fresh
    /// batch, mirroring the refill rule.
    ///
    /// # Panics
    ///
    /// Panics if more than `BATCH_SIZE` pieces are supplied.
    #[must_use]
    pub fn from_parts(grid: Grid, pieces: impl IntoIterator<Item = Piece>, seed: u64) -> Self {
        let queue: Vector<Piece> = pieces.into_iter().collect();
        assert!(
            queue.len() <= BATCH_SIZE,
            "queue holds at most {BATCH_SIZE} pieces"
        );

        let next_piece_id = queue
            .iter()
            .map(|piece| piece.id.raw().wrapping_add(1))
            .max()
            .unwrap_or(0);

        let mut engine = Self {
            grid,
            queue,
            history: Vector::new(),
            score: 0,
            game_over: false,
            rng: GameRng::new(seed),
            next_piece_id,
        };
        if engine.queue.is_empty() {
            engine.queue = engine.generate_pieces();
        }
        engine.game_over = engine.check_game_over();
        engine
    }

    // === Queries ===

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Is the session in the game-over state?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The current piece queue, in order.
    #[must_use]
    pub fn queue(&self) -> &Vector<Piece> {
        &self.queue
    }

    /// The playing field.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every successful placement this session, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    /// The seed this session was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A serializable read-only view for observers.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            grid: self.grid.rows().map(<[_]>::to_vec).collect(),
            queue: self.queue.iter().copied().collect(),
            score: self.score,
            game_over: self.game_over,
            placements: self.history.len() as u32,
            rng: self.rng.state(),
        }
    }

    // === Piece generation ===

    /// Produce a fresh batch of `BATCH_SIZE` pieces.
    ///
    /// Shape and color are sampled independently and uniformly per
    /// piece; repeats are allowed. Each piece gets a distinct id. Pure
    /// factory with respect to grid, queue, and score; the caller
    /// assigns the result.
    pub fn generate_pieces(&mut self) -> Vector<Piece> {
        (0..BATCH_SIZE)
            .map(|_| {
                let kind = ShapeKind::ALL[self.rng.sample_index(SHAPE_COUNT)];
                let color = ColorId::new(self.rng.sample_index(COLOR_COUNT) as u8);
                Piece::new(self.alloc_piece_id(), kind, color)
            })
            .collect()
    }

    fn alloc_piece_id(&mut self) -> PieceId {
        let id = PieceId::new(self.next_piece_id);
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        id
    }

    // === Placement ===

    /// Can `piece` be placed with its top-left corner at `(row, col)`?
    ///
    /// True only if every occupied cell of the shape maps in-bounds
    /// onto an unfilled grid cell. Pure and total: any anchor in the
    /// signed domain answers false rather than panicking, so unclamped
    /// drag candidates and the exhaustive game-over scan are both safe.
    #[must_use]
    pub fn can_place(&self, piece: &Piece, row: i8, col: i8) -> bool {
        piece.shape().occupied().all(|(dr, dc)| {
            match (row.checked_add(dr as i8), col.checked_add(dc as i8)) {
                (Some(r), Some(c)) => self.grid.is_open(r, c),
                // Offsets past i8::MAX cannot land on the grid.
                _ => false,
            }
        })
    }

    /// Place a queued piece with its top-left corner at `(row, col)`.
    ///
    /// All-or-nothing: on any rejection nothing changes. On success the
    /// piece's cells are stamped with its color, the piece leaves the
    /// queue, complete lines clear, the score grows by 100 per line,
    /// an emptied queue refills as a whole batch, and the game-over
    /// flag is re-evaluated against the new queue.
    pub fn place(&mut self, piece: PieceId, row: i8, col: i8) -> Result<Placement, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        let index = self
            .queue
            .iter()
            .position(|queued| queued.id == piece)
            .ok_or(PlaceError::NotQueued(piece))?;
        let piece = self.queue[index];
        if !self.can_place(&piece, row, col) {
            return Err(PlaceError::DoesNotFit { row, col });
        }

        for (dr, dc) in piece.shape().occupied() {
            let stamped = self.grid.set(row + dr as i8, col + dc as i8, Some(piece.color));
            debug_assert!(stamped);
        }
        self.queue.remove(index);

        let clear = self.grid.clear_complete_lines();
        let points = clear.line_count() as u32 * POINTS_PER_LINE;
        self.score += points;

        self.refill_if_empty();
        self.game_over = self.check_game_over();

        let placement = Placement {
            piece,
            row,
            col,
            clear,
            points,
        };
        self.history.push_back(PlacementRecord {
            sequence: self.history.len() as u32,
            placement: placement.clone(),
        });

        Ok(placement)
    }

    fn refill_if_empty(&mut self) {
        if self.queue.is_empty() {
            self.queue = self.generate_pieces();
        }
    }

    // === Terminal state ===

    /// Does no queued piece fit anywhere on the grid?
    ///
    /// Exhaustively tries every in-bounds anchor for every queued
    /// piece, O(pieces × N²). An empty queue is vacuously "not over"
    /// (a refill is pending).
    #[must_use]
    pub fn check_game_over(&self) -> bool {
        for piece in &self.queue {
            let shape = piece.shape();
            let max_row = GRID_SIZE - shape.height() as usize;
            let max_col = GRID_SIZE - shape.width() as usize;
            for row in 0..=max_row {
                for col in 0..=max_col {
                    if self.can_place(piece, row as i8, col as i8) {
                        return false;
                    }
                }
            }
        }
        !self.queue.is_empty()
    }

    /// Restore the initial state: empty grid, score 0, playing, a
    /// fresh batch of pieces, empty history.
    ///
    /// The RNG stream continues; a brand-new engine with the same seed
    /// reproduces an entire multi-reset session.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.game_over = false;
        self.history = Vector::new();
        self.queue = self.generate_pieces();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}
