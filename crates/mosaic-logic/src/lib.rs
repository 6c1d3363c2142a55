//! Procedural tile mosaic layout engine.
//!
//! This crate lays out a non-overlapping mosaic over a fixed grid: authored
//! fixed tiles (navigation and labels, with primary and alternate anchors)
//! go first, then weighted-random filler tiles, then a gap filler that
//! guarantees full coverage. No rendering, no UI state — consumers call
//! [`MosaicGenerator::generate_pattern`] once per layout request and render
//! the returned flat tile list.
//!
//! Randomness is injected as `&mut impl Rng`, so seeded runs reproduce
//! identical layouts.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Attempt budget, color range, cell size, edge margin |
//! | [`generator`] | The generation pipeline and its config |
//! | [`grid`] | Grid spec, occupancy matrix, coordinate normalization |
//! | [`pages`] | Authored per-page fixed-tile sets |
//! | [`placement`] | Batch fixed-tile strategy (primary/alternate/essential) |
//! | [`sampler`] | Weighted random shape sampling |
//! | [`tiles`] | Tile data model: specs, shapes, placed tiles, ids |

pub mod constants;
pub mod generator;
pub mod grid;
pub mod pages;
pub mod placement;
pub mod sampler;
pub mod tiles;

pub use generator::{GeneratorConfig, MosaicGenerator};
pub use grid::{GridSpec, GridSpecError};
pub use tiles::{FixedTileSpec, PlacedTile, TileShape};
