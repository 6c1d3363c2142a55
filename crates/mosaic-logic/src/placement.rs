//! Fixed-tile placement strategy — the batch decision between primary,
//! alternate, and essential-only layouts.
//!
//! Fixed tiles are placed as a unit: either every tile sits at its primary
//! anchor, or every tile falls back to its alternate, never a mix. A half-
//! moved navigation batch after a resize reads as broken, so partial success
//! is worse than a uniform fallback. When neither layout fits, only tiles
//! marked essential are kept and the rest are dropped from the layout.
//!
//! Fixed tiles are validated against the usable span (grid dimension minus
//! [`crate::constants::FIXED_EDGE_MARGIN`]); random and gap tiles are not.

use crate::grid::{normalize_coord, GridOccupancy, GridSpec};
use crate::tiles::{FixedTileSpec, PlacedTile, TileIdSource, TileRect};

/// Which anchor set a fixed-tile batch lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedStrategy {
    /// Every tile fits at its primary anchor.
    Primary,
    /// Every tile fits at its alternate anchor (primary where none declared).
    Alternate,
    /// Neither layout fits as a batch; only essential tiles are placed.
    EssentialOnly,
}

/// Normalize an authored rectangle's anchor against the usable spans.
fn normalized(rect: TileRect, spec: GridSpec) -> TileRect {
    TileRect {
        row: normalize_coord(rect.row, spec.usable_height()),
        col: normalize_coord(rect.col, spec.usable_width()),
        ..rect
    }
}

/// The rectangle a tile occupies under the given strategy, normalized.
/// Tiles without an alternate anchor keep their primary under `Alternate`.
fn chosen_rect(tile: &FixedTileSpec, strategy: FixedStrategy, spec: GridSpec) -> TileRect {
    let rect = match strategy {
        FixedStrategy::Primary | FixedStrategy::EssentialOnly => tile.primary,
        FixedStrategy::Alternate => tile.alternate_rect().unwrap_or(tile.primary),
    };
    normalized(rect, spec)
}

/// True iff the rectangle lies within the usable span and is unoccupied.
fn is_valid_fixed_placement(occ: &GridOccupancy, rect: TileRect, spec: GridSpec) -> bool {
    rect.row >= 0
        && rect.col >= 0
        && rect.row + rect.height as i32 <= spec.usable_height()
        && rect.col + rect.width as i32 <= spec.usable_width()
        && occ.can_place(rect.row, rect.col, rect.width, rect.height)
}

/// Whether the whole batch fits under `strategy`, counting tiles against
/// each other (two overlapping anchors fail even on an empty grid).
fn batch_fits(
    occ: &GridOccupancy,
    spec: GridSpec,
    fixed: &[FixedTileSpec],
    strategy: FixedStrategy,
) -> bool {
    let mut scratch = occ.clone();
    for tile in fixed {
        let rect = chosen_rect(tile, strategy, spec);
        if !is_valid_fixed_placement(&scratch, rect, spec) {
            return false;
        }
        scratch.place(rect.row as u32, rect.col as u32, rect.width, rect.height);
    }
    true
}

/// Decide the batch strategy: all primaries → `Primary`, else all
/// alternates-where-declared → `Alternate`, else `EssentialOnly`.
pub fn determine_strategy(
    occ: &GridOccupancy,
    spec: GridSpec,
    fixed: &[FixedTileSpec],
) -> FixedStrategy {
    if batch_fits(occ, spec, fixed, FixedStrategy::Primary) {
        FixedStrategy::Primary
    } else if batch_fits(occ, spec, fixed, FixedStrategy::Alternate) {
        FixedStrategy::Alternate
    } else {
        FixedStrategy::EssentialOnly
    }
}

/// Place the fixed-tile batch under the decided strategy and emit the
/// resulting tiles in authoring order.
///
/// Under `EssentialOnly`, non-essential tiles are dropped entirely and an
/// essential tile that does not individually fit is dropped too — an
/// unplaceable fixed tile is not an error, the layout completes without it.
pub fn place_fixed_tiles(
    occ: &mut GridOccupancy,
    spec: GridSpec,
    fixed: &[FixedTileSpec],
    ids: &mut TileIdSource,
) -> Vec<PlacedTile> {
    let strategy = determine_strategy(occ, spec, fixed);
    let mut placed = Vec::new();
    for tile in fixed {
        if strategy == FixedStrategy::EssentialOnly && !tile.essential {
            continue;
        }
        let rect = chosen_rect(tile, strategy, spec);
        // Re-validate individually; guards against inconsistent state.
        if !is_valid_fixed_placement(occ, rect, spec) {
            continue;
        }
        occ.place(rect.row as u32, rect.col as u32, rect.width, rect.height);
        placed.push(PlacedTile {
            id: ids.next_id(),
            row: rect.row as u32,
            col: rect.col as u32,
            width: rect.width,
            height: rect.height,
            color: tile.color,
            text: tile.text.clone(),
            url: tile.url.clone(),
            font_size: tile.font_size,
        });
    }
    placed
}
