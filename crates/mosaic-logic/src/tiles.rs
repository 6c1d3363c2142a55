//! Tile data model — authored fixed tiles, the random shape palette, and
//! the placed tiles a generation pass emits.
//!
//! Authored coordinates may be negative; they are normalized against the
//! usable span during placement (see [`crate::grid::normalize_coord`]).
//! Placed tiles always carry absolute, in-bounds coordinates.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A rectangle in grid cells. Row/col may be negative while still authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRect {
    pub row: i32,
    pub col: i32,
    pub width: u32,
    pub height: u32,
}

impl TileRect {
    pub fn new(row: i32, col: i32, width: u32, height: u32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }
}

/// A randomly placeable tile footprint with its sampling weight.
///
/// The palette is a fixed ordered sequence; weights are walked cumulatively
/// in declaration order and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileShape {
    pub width: u32,
    pub height: u32,
    pub weight: f32,
}

/// Alternate anchor for a fixed tile. Omitted dimensions inherit the
/// primary rectangle's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltPosition {
    pub row: i32,
    pub col: i32,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// An authored content tile with a primary and optional alternate anchor.
///
/// Immutable input, authored per page. `essential` marks the one tile
/// (identity/home label) that still renders under fallback placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedTileSpec {
    pub primary: TileRect,
    pub alternate: Option<AltPosition>,
    pub color: u8,
    pub text: Option<String>,
    pub url: Option<String>,
    pub font_size: Option<f32>,
    pub essential: bool,
}

impl FixedTileSpec {
    pub fn new(primary: TileRect, color: u8, text: &str) -> Self {
        Self {
            primary,
            alternate: None,
            color,
            text: Some(text.to_string()),
            url: None,
            font_size: None,
            essential: false,
        }
    }

    pub fn with_alternate(mut self, row: i32, col: i32) -> Self {
        self.alternate = Some(AltPosition {
            row,
            col,
            width: None,
            height: None,
        });
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn essential(mut self) -> Self {
        self.essential = true;
        self
    }

    /// The alternate rectangle, with omitted dimensions inherited from the
    /// primary. `None` when no alternate anchor was authored.
    pub fn alternate_rect(&self) -> Option<TileRect> {
        self.alternate.map(|alt| TileRect {
            row: alt.row,
            col: alt.col,
            width: alt.width.unwrap_or(self.primary.width),
            height: alt.height.unwrap_or(self.primary.height),
        })
    }
}

/// One laid-out tile, ready for the consumer to render as a rectangle
/// spanning `[col, col+width) × [row, row+height)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// Unique within one generation pass.
    pub id: String,
    pub row: u32,
    pub col: u32,
    pub width: u32,
    pub height: u32,
    pub color: u8,
    pub text: Option<String>,
    pub url: Option<String>,
    pub font_size: Option<f32>,
}

/// Per-pass tile id source — a random pass nonce plus a counter.
///
/// Uniqueness within one `generate_pattern` call is the contract; the
/// format is incidental.
#[derive(Debug)]
pub struct TileIdSource {
    nonce: u32,
    next: u32,
}

impl TileIdSource {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            nonce: rng.gen(),
            next: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("tile-{:08x}-{}", self.nonce, self.next);
        self.next += 1;
        id
    }
}

/// The fixed weighted palette of random tile footprints.
///
/// Listed in cumulative-sampling order; the small square at the end is the
/// catch-all that keeps the random phase dense.
pub fn default_shape_palette() -> Vec<TileShape> {
    vec![
        TileShape {
            width: 3,
            height: 2,
            weight: 0.05,
        },
        TileShape {
            width: 2,
            height: 2,
            weight: 0.15,
        },
        TileShape {
            width: 2,
            height: 1,
            weight: 0.20,
        },
        TileShape {
            width: 1,
            height: 2,
            weight: 0.20,
        },
        TileShape {
            width: 1,
            height: 1,
            weight: 0.40,
        },
    ]
}
