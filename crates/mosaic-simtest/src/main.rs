//! Mosaic Headless Layout Harness
//!
//! Validates the placement engine without any rendering or UI.
//! Runs entirely in-process — no windowing, no networking.
//!
//! Usage:
//!   cargo run -p mosaic-simtest
//!   cargo run -p mosaic-simtest -- --verbose
//!   cargo run -p mosaic-simtest -- --json
//!   cargo run -p mosaic-simtest -- --dump

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use mosaic_logic::grid::{normalize_coord, GridOccupancy, GridSpec};
use mosaic_logic::pages::{fixed_tiles_for, Page};
use mosaic_logic::placement::{determine_strategy, FixedStrategy};
use mosaic_logic::sampler::sample_shape;
use mosaic_logic::tiles::{default_shape_palette, FixedTileSpec, PlacedTile, TileRect};
use mosaic_logic::{GeneratorConfig, MosaicGenerator};

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    if std::env::args().any(|a| a == "--dump") {
        dump_layout();
        return;
    }

    if !json {
        println!("=== Mosaic Layout Harness ===\n");
    }

    let sections: [(&str, fn() -> Vec<TestResult>); 6] = [
        ("Occupancy", validate_occupancy),
        ("Normalization", validate_normalization),
        ("Fixed-tile strategies", validate_strategies),
        ("Generation sweep", validate_generation_sweep),
        ("Sampler", validate_sampler),
        ("Pages", validate_pages),
    ];

    let mut results = Vec::new();
    for (name, run) in sections {
        if !json {
            println!("--- {} ---", name);
        }
        results.extend(run());
    }

    let failed = results.iter().filter(|r| !r.passed).count();

    // Machine-readable summary for CI.
    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("serialize error: {}", e);
                std::process::exit(1);
            }
        }
        if failed > 0 {
            std::process::exit(1);
        }
        return;
    }

    // ── Summary ──
    println!();
    let passed = results.len() - failed;
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Print one Home-page layout as JSON for eyeballing or piping to a viewer.
fn dump_layout() {
    let gen = MosaicGenerator::new(33, 19, fixed_tiles_for(Page::Home)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let tiles = gen.generate_pattern(&mut rng);
    match serde_json::to_string_pretty(&tiles) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("serialize error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Exact-cover check: every cell covered once, every tile in bounds.
fn check_exact_cover(tiles: &[PlacedTile], width: u32, height: u32) -> Result<(), String> {
    let mut covered = HashSet::new();
    for t in tiles {
        if t.row + t.height > height || t.col + t.width > width {
            return Err(format!("tile {} out of bounds", t.id));
        }
        for r in t.row..t.row + t.height {
            for c in t.col..t.col + t.width {
                if !covered.insert((r, c)) {
                    return Err(format!("cell ({},{}) covered twice", r, c));
                }
            }
        }
    }
    if covered.len() as u32 != width * height {
        return Err(format!(
            "covered {} of {} cells",
            covered.len(),
            width * height
        ));
    }
    Ok(())
}

// ── 1. Occupancy primitives ─────────────────────────────────────────────

fn validate_occupancy() -> Vec<TestResult> {
    let mut results = Vec::new();

    let spec = GridSpec::new(8, 6).unwrap();
    let mut occ = GridOccupancy::new(spec);

    results.push(TestResult {
        name: "occupancy_full_rect_fits".into(),
        passed: occ.can_place(0, 0, 8, 6),
        detail: "whole grid placeable when empty".into(),
    });

    results.push(TestResult {
        name: "occupancy_bounds_rejected".into(),
        passed: !occ.can_place(0, 0, 9, 1) && !occ.can_place(5, 0, 1, 2) && !occ.can_place(-1, 0, 1, 1),
        detail: "out-of-bounds rectangles rejected".into(),
    });

    occ.place(2, 2, 3, 2);
    results.push(TestResult {
        name: "occupancy_overlap_rejected".into(),
        passed: !occ.can_place(3, 3, 1, 1) && occ.can_place(0, 0, 2, 2),
        detail: "overlap blocked, free space open".into(),
    });

    occ.reset();
    results.push(TestResult {
        name: "occupancy_reset_clears".into(),
        passed: occ.can_place(0, 0, 8, 6),
        detail: "reset restores all-unoccupied".into(),
    });

    results.push(TestResult {
        name: "grid_spec_rejects_non_positive".into(),
        passed: GridSpec::new(0, 5).is_err() && GridSpec::new(5, -2).is_err(),
        detail: "non-positive dimensions fail fast".into(),
    });

    results
}

// ── 2. Coordinate normalization ─────────────────────────────────────────

fn validate_normalization() -> Vec<TestResult> {
    let mut results = Vec::new();

    let cases = [
        (0, 14, 0),
        (5, 14, 5),
        (-1, 14, 13),
        (-7, 14, 7),
        (-14, 14, 0),
    ];
    let all_match = cases
        .iter()
        .all(|&(c, span, want)| normalize_coord(c, span) == want);
    results.push(TestResult {
        name: "normalize_sweep".into(),
        passed: all_match,
        detail: format!("{} coordinate cases", cases.len()),
    });

    results
}

// ── 3. Fixed-tile strategies ────────────────────────────────────────────

fn validate_strategies() -> Vec<TestResult> {
    let mut results = Vec::new();

    let spec = GridSpec::new(20, 15).unwrap();
    let occ = GridOccupancy::new(spec);

    let disjoint = vec![
        FixedTileSpec::new(TileRect::new(0, 0, 3, 2), 1, "a").with_alternate(5, 0),
        FixedTileSpec::new(TileRect::new(0, 4, 3, 2), 2, "b").with_alternate(5, 4),
    ];
    results.push(TestResult {
        name: "strategy_primary_when_disjoint".into(),
        passed: determine_strategy(&occ, spec, &disjoint) == FixedStrategy::Primary,
        detail: "disjoint primaries chosen".into(),
    });

    let colliding = vec![
        FixedTileSpec::new(TileRect::new(0, 0, 4, 2), 1, "a").with_alternate(5, 0),
        FixedTileSpec::new(TileRect::new(1, 1, 4, 2), 2, "b").with_alternate(5, 6),
    ];
    results.push(TestResult {
        name: "strategy_alternate_on_collision".into(),
        passed: determine_strategy(&occ, spec, &colliding) == FixedStrategy::Alternate,
        detail: "colliding primaries fall back as a batch".into(),
    });

    let small_spec = GridSpec::new(5, 5).unwrap();
    let small_occ = GridOccupancy::new(small_spec);
    let cramped = vec![
        FixedTileSpec::new(TileRect::new(0, 0, 3, 2), 1, "a")
            .with_alternate(0, 1)
            .essential(),
        FixedTileSpec::new(TileRect::new(0, 2, 3, 2), 2, "b").with_alternate(1, 1),
    ];
    results.push(TestResult {
        name: "strategy_essential_only_when_cramped".into(),
        passed: determine_strategy(&small_occ, small_spec, &cramped) == FixedStrategy::EssentialOnly,
        detail: "neither batch layout fits on 5x5".into(),
    });

    results
}

// ── 4. Generation sweep ─────────────────────────────────────────────────

fn validate_generation_sweep() -> Vec<TestResult> {
    let mut results = Vec::new();

    let grids = [(1, 1), (2, 2), (3, 7), (10, 10), (23, 13), (33, 19), (65, 37)];
    let mut failures = Vec::new();
    let mut layouts = 0u32;

    for &(w, h) in &grids {
        for seed in 0..25u64 {
            let gen = MosaicGenerator::new(w, h, fixed_tiles_for(Page::Home)).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let tiles = gen.generate_pattern(&mut rng);
            layouts += 1;
            if let Err(e) = check_exact_cover(&tiles, w as u32, h as u32) {
                failures.push(format!("{}x{} seed {}: {}", w, h, seed, e));
            }
            let ids: HashSet<_> = tiles.iter().map(|t| t.id.as_str()).collect();
            if ids.len() != tiles.len() {
                failures.push(format!("{}x{} seed {}: duplicate ids", w, h, seed));
            }
        }
    }

    results.push(TestResult {
        name: "generation_exact_cover".into(),
        passed: failures.is_empty(),
        detail: if failures.is_empty() {
            format!("{} layouts, all exact covers with unique ids", layouts)
        } else {
            failures.join("; ")
        },
    });

    // Attempt budget 0 → pure unit tiling.
    let gen = MosaicGenerator::new(9, 4, vec![])
        .unwrap()
        .with_config(GeneratorConfig {
            attempt_budget: 0,
            ..GeneratorConfig::default()
        });
    let tiles = gen.generate_pattern(&mut StdRng::seed_from_u64(0));
    results.push(TestResult {
        name: "generation_zero_budget_unit_tiles".into(),
        passed: tiles.len() == 36 && tiles.iter().all(|t| t.width == 1 && t.height == 1),
        detail: format!("{} unit tiles on 9x4", tiles.len()),
    });

    // Same seed, same layout.
    let gen = MosaicGenerator::new(25, 18, fixed_tiles_for(Page::About)).unwrap();
    let a = gen.generate_pattern(&mut StdRng::seed_from_u64(99));
    let b = gen.generate_pattern(&mut StdRng::seed_from_u64(99));
    results.push(TestResult {
        name: "generation_seeded_determinism".into(),
        passed: a == b,
        detail: "identical layouts from identical seeds".into(),
    });

    results
}

// ── 5. Sampler distribution ─────────────────────────────────────────────

fn validate_sampler() -> Vec<TestResult> {
    let mut results = Vec::new();

    let palette = default_shape_palette();
    let mut rng = StdRng::seed_from_u64(4);
    let n = 100_000u32;
    let mut counts = vec![0u32; palette.len()];
    for _ in 0..n {
        let s = sample_shape(&palette, &mut rng);
        if let Some(idx) = palette.iter().position(|p| p == s) {
            counts[idx] += 1;
        }
    }
    let worst = palette
        .iter()
        .zip(&counts)
        .map(|(shape, &count)| (count as f32 / n as f32 - shape.weight).abs())
        .fold(0.0f32, f32::max);
    results.push(TestResult {
        name: "sampler_tracks_weights".into(),
        passed: worst < 0.01,
        detail: format!("worst deviation {:.4} over {} draws", worst, n),
    });

    results
}

// ── 6. Page tile sets ───────────────────────────────────────────────────

fn validate_pages() -> Vec<TestResult> {
    let mut results = Vec::new();

    for page in Page::all() {
        let fixed = fixed_tiles_for(page);
        let gen = MosaicGenerator::new(33, 19, fixed.clone()).unwrap();
        let tiles = gen.generate_pattern(&mut StdRng::seed_from_u64(1));
        let labeled = tiles.iter().filter(|t| t.text.is_some()).count();
        results.push(TestResult {
            name: format!("page_{}_all_fixed_placed", page.label()),
            passed: labeled == fixed.len(),
            detail: format!("{}/{} fixed tiles placed on 33x19", labeled, fixed.len()),
        });
    }

    results
}
