//! The fixed shape catalog.
//!
//! Every placeable piece uses one of 13 immutable templates: a single
//! cell, lines of length 2 and 3 in both orientations, four elbow
//! (corner) variants, the 2×2 square, the T, and the two skew variants.
//! Shapes are never rotated or resized; each orientation that exists in
//! the game is its own template.
//!
//! A `Shape` is a static binary occupancy matrix. `ShapeKind` is the
//! enum identity used everywhere else in the crate; it stays cheap to
//! copy, hash, and serialize while `Shape` carries the geometry.

use serde::{Deserialize, Serialize};

/// Number of templates in the catalog.
pub const SHAPE_COUNT: usize = 13;

/// Identity of a shape template.
///
/// Variant order matches the catalog table below, so
/// `kind as usize` indexes it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Single cell.
    Dot,
    /// Horizontal line of 2.
    RowTwo,
    /// Horizontal line of 3.
    RowThree,
    /// Vertical line of 2.
    ColumnTwo,
    /// Vertical line of 3.
    ColumnThree,
    /// 2×2 elbow, bend in the north-west corner.
    ElbowNw,
    /// 2×2 elbow, bend in the south-west corner.
    ElbowSw,
    /// 2×2 elbow, bend in the north-east corner.
    ElbowNe,
    /// 2×2 elbow, bend in the south-east corner.
    ElbowSe,
    /// 2×2 square.
    Square,
    /// T shape (3 wide, stem down).
    Tee,
    /// Z-like skew.
    SkewLeft,
    /// S-like skew.
    SkewRight,
}

impl ShapeKind {
    /// All catalog entries in order.
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::Dot,
        ShapeKind::RowTwo,
        ShapeKind::RowThree,
        ShapeKind::ColumnTwo,
        ShapeKind::ColumnThree,
        ShapeKind::ElbowNw,
        ShapeKind::ElbowSw,
        ShapeKind::ElbowNe,
        ShapeKind::ElbowSe,
        ShapeKind::Square,
        ShapeKind::Tee,
        ShapeKind::SkewLeft,
        ShapeKind::SkewRight,
    ];

    /// The occupancy matrix for this template.
    #[must_use]
    pub fn shape(self) -> &'static Shape {
        &SHAPES[self as usize]
    }
}

/// An immutable binary occupancy matrix (rows × cols, row-major).
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    height: u8,
    width: u8,
    cells: &'static [u8],
}

impl Shape {
    const fn new(height: u8, width: u8, cells: &'static [u8]) -> Self {
        Self {
            height,
            width,
            cells,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Is the cell at `(row, col)` occupied?
    ///
    /// Out-of-matrix coordinates are unoccupied.
    #[must_use]
    pub fn is_set(&self, row: u8, col: u8) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        self.cells[row as usize * self.width as usize + col as usize] == 1
    }

    /// Iterate over occupied `(row, col)` offsets.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 1)
            .map(|(idx, _)| {
                let row = (idx / self.width as usize) as u8;
                let col = (idx % self.width as usize) as u8;
                (row, col)
            })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }
}

/// The catalog, indexed by `ShapeKind as usize`.
static SHAPES: [Shape; SHAPE_COUNT] = [
    // Dot
    Shape::new(1, 1, &[1]),
    // RowTwo
    Shape::new(1, 2, &[1, 1]),
    // RowThree
    Shape::new(1, 3, &[1, 1, 1]),
    // ColumnTwo
    Shape::new(2, 1, &[1, 1]),
    // ColumnThree
    Shape::new(3, 1, &[1, 1, 1]),
    // ElbowNw
    Shape::new(2, 2, &[1, 1, 1, 0]),
    // ElbowSw
    Shape::new(2, 2, &[1, 0, 1, 1]),
    // ElbowNe
    Shape::new(2, 2, &[1, 1, 0, 1]),
    // ElbowSe
    Shape::new(2, 2, &[0, 1, 1, 1]),
    // Square
    Shape::new(2, 2, &[1, 1, 1, 1]),
    // Tee
    Shape::new(2, 3, &[1, 1, 1, 0, 1, 0]),
    // SkewLeft
    Shape::new(2, 3, &[1, 1, 0, 0, 1, 1]),
    // SkewRight
    Shape::new(2, 3, &[0, 1, 1, 1, 1, 0]),
];
