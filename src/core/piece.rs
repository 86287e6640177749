//! Pieces and their identifiers.
//!
//! ## PieceId
//!
//! Two generated pieces may share shape and color, so queue membership
//! is tracked by a unique per-piece token assigned at generation time,
//! never by structural equality.
//!
//! ## ColorId
//!
//! Colors are opaque indices into a presentation-owned palette. The
//! engine only guarantees that a filled cell carries the color of the
//! piece that filled it.

use serde::{Deserialize, Serialize};

use super::shape::{Shape, ShapeKind};

/// Number of entries in the color catalog.
pub const COLOR_COUNT: usize = 8;

/// Unique identifier for a generated piece.
///
/// Monotonically allocated by the engine; identity survives duplicate
/// shape/color combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Opaque color index in `0..COLOR_COUNT`.
///
/// The engine doesn't interpret colors; the presentation layer maps
/// them to its palette. Deserialization validates against the catalog,
/// so a snapshot cannot smuggle in an out-of-range index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create a new color ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is outside the catalog.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < COLOR_COUNT, "color index out of catalog");
        Self(id)
    }

    /// Get the raw color index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

impl TryFrom<u8> for ColorId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < COLOR_COUNT {
            Ok(Self(id))
        } else {
            Err(format!("color index {id} out of catalog"))
        }
    }
}

impl From<ColorId> for u8 {
    fn from(color: ColorId) -> Self {
        color.0
    }
}

/// A placeable piece: shape template, color, and unique identity.
///
/// Immutable after creation; destroyed (removed from the queue) once
/// placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Unique identity token.
    pub id: PieceId,
    /// Shape template.
    pub kind: ShapeKind,
    /// Color stamped onto the grid on placement.
    pub color: ColorId,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(id: PieceId, kind: ShapeKind, color: ColorId) -> Self {
        Self { id, kind, color }
    }

    /// The occupancy matrix of this piece's template.
    #[must_use]
    pub fn shape(&self) -> &'static Shape {
        self.kind.shape()
    }
}
