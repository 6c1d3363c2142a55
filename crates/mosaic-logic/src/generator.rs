//! The generation pipeline: reset → fixed tiles → bounded random fill →
//! gap fill.
//!
//! Each `generate_pattern` call owns a fresh occupancy matrix, so repeated
//! calls (viewport resizes, page changes) never share mutable state. The
//! random phase is best-effort and bounded; the gap filler makes the pass
//! total — every cell ends up covered by exactly one tile.

use rand::Rng;

use crate::constants::{DEFAULT_ATTEMPT_BUDGET, DEFAULT_COLOR_MAX, DEFAULT_COLOR_MIN};
use crate::grid::{GridOccupancy, GridSpec, GridSpecError};
use crate::placement::place_fixed_tiles;
use crate::sampler::sample_shape;
use crate::tiles::{default_shape_palette, FixedTileSpec, PlacedTile, TileIdSource, TileShape};

/// Tunables for the random phase.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum random placement attempts per pass.
    pub attempt_budget: u32,
    /// Inclusive random color index range for filler tiles.
    pub color_min: u8,
    pub color_max: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            color_min: DEFAULT_COLOR_MIN,
            color_max: DEFAULT_COLOR_MAX,
        }
    }
}

/// Mosaic layout generator for one grid size and fixed-tile set.
///
/// Immutable once constructed; `generate_pattern` may be called repeatedly
/// and each call starts from a clean occupancy state.
#[derive(Debug, Clone)]
pub struct MosaicGenerator {
    spec: GridSpec,
    fixed: Vec<FixedTileSpec>,
    palette: Vec<TileShape>,
    config: GeneratorConfig,
}

impl MosaicGenerator {
    /// Build a generator. Fails fast on non-positive grid dimensions.
    pub fn new(
        grid_width: i32,
        grid_height: i32,
        fixed: Vec<FixedTileSpec>,
    ) -> Result<Self, GridSpecError> {
        let spec = GridSpec::new(grid_width, grid_height)?;
        Ok(Self {
            spec,
            fixed,
            palette: default_shape_palette(),
            config: GeneratorConfig::default(),
        })
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the shape palette. Must be non-empty.
    pub fn with_palette(mut self, palette: Vec<TileShape>) -> Self {
        debug_assert!(!palette.is_empty());
        self.palette = palette;
        self
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Lay out one complete mosaic.
    ///
    /// Pipeline: fixed tiles first (they take placement priority), then the
    /// bounded random fill, then the row-major gap filler. The returned
    /// tiles exactly cover `[0,width) × [0,height)` with no overlaps.
    pub fn generate_pattern(&self, rng: &mut impl Rng) -> Vec<PlacedTile> {
        // Fresh matrix per pass — the reset that keeps calls independent.
        let mut occ = GridOccupancy::new(self.spec);
        let mut ids = TileIdSource::new(rng);

        let mut tiles = place_fixed_tiles(&mut occ, self.spec, &self.fixed, &mut ids);
        self.fill_random(&mut occ, &mut ids, &mut tiles, rng);
        self.fill_gaps(&mut occ, &mut ids, &mut tiles, rng);
        tiles
    }

    /// Best-effort stochastic fill: up to `attempt_budget` tries, each
    /// sampling a shape and a uniform position over the full grid (fixed
    /// tiles' edge margin does not apply here).
    fn fill_random(
        &self,
        occ: &mut GridOccupancy,
        ids: &mut TileIdSource,
        tiles: &mut Vec<PlacedTile>,
        rng: &mut impl Rng,
    ) {
        let height = self.spec.height();
        let width = self.spec.width();
        for _ in 0..self.config.attempt_budget {
            let shape = *sample_shape(&self.palette, rng);
            let row = rng.gen_range(0..height);
            let col = rng.gen_range(0..width);
            if !occ.can_place(row as i32, col as i32, shape.width, shape.height) {
                continue;
            }
            occ.place(row, col, shape.width, shape.height);
            tiles.push(self.filler_tile(ids, rng, row, col, shape.width, shape.height));
        }
    }

    /// Deterministic totality pass: a unit tile on every still-free cell,
    /// scanned in row-major order.
    fn fill_gaps(
        &self,
        occ: &mut GridOccupancy,
        ids: &mut TileIdSource,
        tiles: &mut Vec<PlacedTile>,
        rng: &mut impl Rng,
    ) {
        for row in 0..self.spec.height() {
            for col in 0..self.spec.width() {
                if occ.is_occupied(row, col) {
                    continue;
                }
                occ.place(row, col, 1, 1);
                tiles.push(self.filler_tile(ids, rng, row, col, 1, 1));
            }
        }
    }

    fn filler_tile(
        &self,
        ids: &mut TileIdSource,
        rng: &mut impl Rng,
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    ) -> PlacedTile {
        PlacedTile {
            id: ids.next_id(),
            row,
            col,
            width,
            height,
            color: rng.gen_range(self.config.color_min..=self.config.color_max),
            text: None,
            url: None,
            font_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TileRect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn nav_tiles() -> Vec<FixedTileSpec> {
        vec![
            FixedTileSpec::new(TileRect::new(0, 0, 3, 2), 1, "home")
                .with_alternate(0, 0)
                .essential(),
            FixedTileSpec::new(TileRect::new(0, 4, 2, 1), 2, "projects").with_alternate(3, 0),
            FixedTileSpec::new(TileRect::new(-1, -2, 2, 1), 3, "about"),
        ]
    }

    /// Every cell covered by exactly one tile, all tiles in bounds.
    fn assert_exact_cover(tiles: &[PlacedTile], width: u32, height: u32) {
        let mut covered = HashSet::new();
        for t in tiles {
            assert!(t.row + t.height <= height, "tile {} out of bounds", t.id);
            assert!(t.col + t.width <= width, "tile {} out of bounds", t.id);
            for r in t.row..t.row + t.height {
                for c in t.col..t.col + t.width {
                    assert!(covered.insert((r, c)), "cell ({},{}) covered twice", r, c);
                }
            }
        }
        assert_eq!(covered.len() as u32, width * height);
    }

    #[test]
    fn test_rejects_invalid_grid() {
        assert!(MosaicGenerator::new(0, 10, vec![]).is_err());
        assert!(MosaicGenerator::new(10, -1, vec![]).is_err());
    }

    #[test]
    fn test_exact_cover_across_sizes_and_seeds() {
        for &(w, h) in &[(1, 1), (2, 3), (7, 5), (15, 10), (33, 19)] {
            for seed in 0..10 {
                let gen = MosaicGenerator::new(w, h, nav_tiles()).unwrap();
                let mut rng = StdRng::seed_from_u64(seed);
                let tiles = gen.generate_pattern(&mut rng);
                assert_exact_cover(&tiles, w as u32, h as u32);
            }
        }
    }

    #[test]
    fn test_fixed_tile_at_primary_when_it_fits() {
        let gen = MosaicGenerator::new(20, 15, nav_tiles()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let tiles = gen.generate_pattern(&mut rng);
        let home = tiles
            .iter()
            .find(|t| t.text.as_deref() == Some("home"))
            .unwrap();
        assert_eq!((home.row, home.col, home.width, home.height), (0, 0, 3, 2));
        // Negative anchor normalized against usable span 14x19.
        let about = tiles
            .iter()
            .find(|t| t.text.as_deref() == Some("about"))
            .unwrap();
        assert_eq!((about.row, about.col), (13, 17));
    }

    #[test]
    fn test_fixed_tiles_emitted_before_fillers() {
        let gen = MosaicGenerator::new(20, 15, nav_tiles()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let tiles = gen.generate_pattern(&mut rng);
        let first_filler = tiles.iter().position(|t| t.text.is_none()).unwrap();
        assert!(tiles[..first_filler]
            .iter()
            .all(|t| t.text.is_some()));
        assert_eq!(first_filler, 3);
    }

    #[test]
    fn test_zero_attempt_budget_yields_unit_tiling() {
        let gen = MosaicGenerator::new(6, 4, vec![])
            .unwrap()
            .with_config(GeneratorConfig {
                attempt_budget: 0,
                ..GeneratorConfig::default()
            });
        let mut rng = StdRng::seed_from_u64(5);
        let tiles = gen.generate_pattern(&mut rng);
        assert_eq!(tiles.len(), 24);
        assert!(tiles.iter().all(|t| t.width == 1 && t.height == 1));
        assert_exact_cover(&tiles, 6, 4);
    }

    #[test]
    fn test_colors_within_configured_range() {
        let gen = MosaicGenerator::new(12, 12, vec![]).unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let tiles = gen.generate_pattern(&mut rng);
        assert!(tiles.iter().all(|t| (1..=8).contains(&t.color)));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let gen = MosaicGenerator::new(25, 18, nav_tiles()).unwrap();
        let a = gen.generate_pattern(&mut StdRng::seed_from_u64(77));
        let b = gen.generate_pattern(&mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_unique_per_pass() {
        let gen = MosaicGenerator::new(20, 20, nav_tiles()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let tiles = gen.generate_pattern(&mut rng);
        let ids: HashSet<_> = tiles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tiles.len());
    }

    #[test]
    fn test_tiny_grid_drops_all_fixed_tiles() {
        // 1x1 grid: usable span 0, so even the essential tile is dropped;
        // the gap filler still covers the lone cell.
        let gen = MosaicGenerator::new(1, 1, nav_tiles()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let tiles = gen.generate_pattern(&mut rng);
        assert!(tiles.iter().all(|t| t.text.is_none()));
        assert_exact_cover(&tiles, 1, 1);
    }
}
