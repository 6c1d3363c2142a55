//! Weighted random sampling over the tile shape palette.

use rand::Rng;

use crate::tiles::TileShape;

/// Draw one shape from the palette by cumulative weight.
///
/// A uniform draw in `[0,1)` is walked against the palette's weights in
/// declaration order; the first shape whose cumulative weight exceeds the
/// draw wins. If floating-point rounding exhausts the palette without a
/// match (weights summing below 1), the first entry is the documented
/// deterministic fallback.
///
/// The palette must be non-empty.
pub fn sample_shape<'a>(palette: &'a [TileShape], rng: &mut impl Rng) -> &'a TileShape {
    debug_assert!(!palette.is_empty());
    let draw: f32 = rng.gen();
    let mut cumulative = 0.0;
    for shape in palette {
        cumulative += shape.weight;
        if draw < cumulative {
            return shape;
        }
    }
    &palette[0]
}
