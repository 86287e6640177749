//! Property tests for placement legality and engine invariants.
//!
//! Fuzz-like coverage over generated grids, pieces, and anchors,
//! locking the invariants that must hold regardless of session
//! history:
//!
//! - `can_place` agrees with the cell-by-cell definition and never
//!   mutates.
//! - `place` is all-or-nothing: success stamps exactly the shape's
//!   cells, rejection changes nothing.
//! - Score stays a multiple of 100 and never decreases.
//! - The queue always holds between 1 and `BATCH_SIZE` pieces.

use proptest::prelude::*;

use blockgrid::{
    ColorId, GameEngine, Grid, Piece, PieceId, ShapeKind, BATCH_SIZE, GRID_SIZE, POINTS_PER_LINE,
    SHAPE_COUNT,
};

fn arb_kind() -> impl Strategy<Value = ShapeKind> {
    (0..SHAPE_COUNT).prop_map(|idx| ShapeKind::ALL[idx])
}

/// Anchors over the whole signed domain, weighted toward the grid
/// neighborhood so placements still succeed often, with the extremes
/// always reachable.
fn arb_anchor() -> impl Strategy<Value = i8> {
    prop_oneof![
        4 => -4i8..14,
        2 => any::<i8>(),
        1 => Just(i8::MIN),
        1 => Just(i8::MAX),
    ]
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(proptest::option::of(0u8..8), GRID_SIZE * GRID_SIZE).prop_map(
        |cells| {
            let rows: Vec<Vec<_>> = cells
                .chunks(GRID_SIZE)
                .map(|chunk| chunk.iter().map(|c| c.map(ColorId::new)).collect())
                .collect();
            Grid::from_rows(&rows)
        },
    )
}

proptest! {
    #[test]
    fn can_place_matches_cell_by_cell_definition(
        grid in arb_grid(),
        kind in arb_kind(),
        row in arb_anchor(),
        col in arb_anchor(),
    ) {
        let piece = Piece::new(PieceId::new(0), kind, ColorId::new(0));
        let engine = GameEngine::from_parts(grid.clone(), [piece], 0);

        let expected = kind.shape().occupied().all(|(dr, dc)| {
            let (gr, gc) = (row as i16 + dr as i16, col as i16 + dc as i16);
            (0..GRID_SIZE as i16).contains(&gr)
                && (0..GRID_SIZE as i16).contains(&gc)
                && !grid.is_filled(gr as i8, gc as i8)
        });

        prop_assert_eq!(engine.can_place(&piece, row, col), expected);
        // Pure predicate: the grid is untouched.
        prop_assert_eq!(engine.grid(), &grid);
    }

    #[test]
    fn place_is_all_or_nothing(
        grid in arb_grid(),
        kind in arb_kind(),
        row in arb_anchor(),
        col in arb_anchor(),
    ) {
        let piece = Piece::new(PieceId::new(0), kind, ColorId::new(7));
        let mut engine = GameEngine::from_parts(grid.clone(), [piece], 0);
        let fits = engine.can_place(&piece, row, col);
        let was_over = engine.is_game_over();

        match engine.place(piece.id, row, col) {
            Ok(placement) => {
                prop_assert!(fits && !was_over);
                // Every shape cell was stamped with the piece's color,
                // unless a clear emptied it again.
                for (dr, dc) in kind.shape().occupied() {
                    let (gr, gc) = (row + dr as i8, col + dc as i8);
                    let cleared = placement.clear.rows.contains(&(gr as u8))
                        || placement.clear.cols.contains(&(gc as u8));
                    let expected = if cleared { None } else { Some(ColorId::new(7)) };
                    prop_assert_eq!(engine.grid().get(gr, gc), Some(expected));
                }
                prop_assert!(engine.queue().iter().all(|p| p.id != piece.id));
                prop_assert_eq!(placement.points,
                    placement.clear.line_count() as u32 * POINTS_PER_LINE);
            }
            Err(_) => {
                prop_assert!(!fits || was_over);
                // Rejection is a no-op.
                prop_assert_eq!(engine.grid(), &grid);
                prop_assert_eq!(engine.score(), 0);
                prop_assert_eq!(engine.queue().len(), 1);
            }
        }
    }

    #[test]
    fn random_session_respects_invariants(
        seed in any::<u64>(),
        steps in 1usize..60,
    ) {
        let mut engine = GameEngine::new(seed);
        let mut last_score = 0u32;

        for _ in 0..steps {
            if engine.is_game_over() {
                break;
            }
            prop_assert!(!engine.queue().is_empty());
            prop_assert!(engine.queue().len() <= BATCH_SIZE);

            let queued: Vec<Piece> = engine.queue().iter().copied().collect();
            let mut placed = false;
            'outer: for piece in queued {
                for row in 0..GRID_SIZE as i8 {
                    for col in 0..GRID_SIZE as i8 {
                        if engine.can_place(&piece, row, col) {
                            engine.place(piece.id, row, col).unwrap();
                            placed = true;
                            break 'outer;
                        }
                    }
                }
            }
            prop_assert!(placed || engine.is_game_over());

            prop_assert_eq!(engine.score() % POINTS_PER_LINE, 0);
            prop_assert!(engine.score() >= last_score);
            last_score = engine.score();

            // The cached flag always agrees with the exhaustive scan.
            prop_assert_eq!(engine.is_game_over(), engine.check_game_over());
        }
    }

    #[test]
    fn generated_batches_stay_in_catalog(seed in any::<u64>()) {
        let mut engine = GameEngine::new(seed);
        let batch = engine.generate_pieces();

        prop_assert_eq!(batch.len(), BATCH_SIZE);
        for piece in &batch {
            prop_assert!(ShapeKind::ALL.contains(&piece.kind));
            prop_assert!((piece.color.raw() as usize) < 8);
        }
    }
}
