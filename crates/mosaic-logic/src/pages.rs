//! Authored fixed-tile sets, one per page.
//!
//! The engine itself is page-agnostic — consumers pick the active page from
//! navigation state and hand its tile set to [`crate::MosaicGenerator`].
//! Primary anchors pin the navigation strip to the top-left; alternates
//! shift the strip down one row band for cramped viewports. The identity
//! tile is the essential one: it survives even the essential-only fallback.

use serde::{Deserialize, Serialize};

use crate::tiles::{FixedTileSpec, TileRect};

/// Pages the consumer can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Home,
    Projects,
    About,
}

impl Page {
    pub fn all() -> [Page; 3] {
        [Page::Home, Page::Projects, Page::About]
    }

    /// Navigation label consumers match against placed-tile text.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::About => "about",
        }
    }
}

/// The identity tile shared by every page — large, top-left, essential.
fn identity_tile() -> FixedTileSpec {
    FixedTileSpec::new(TileRect::new(0, 0, 4, 2), 1, "mosaic")
        .with_alternate(0, 0)
        .with_font_size(2.0)
        .essential()
}

/// Fixed tiles for one page: the identity tile, the navigation labels for
/// the other pages, and the page's own content tiles.
pub fn fixed_tiles_for(page: Page) -> Vec<FixedTileSpec> {
    let mut tiles = vec![identity_tile()];

    // Navigation strip: primaries continue the top row, alternates drop to
    // the row band below the identity tile.
    let mut col = 5;
    for nav in Page::all() {
        if nav == page {
            continue;
        }
        tiles.push(
            FixedTileSpec::new(TileRect::new(0, col, 2, 1), 6, nav.label())
                .with_alternate(2, col - 5),
        );
        col += 3;
    }

    match page {
        Page::Home => {
            tiles.push(
                FixedTileSpec::new(TileRect::new(-2, -3, 3, 1), 4, "github")
                    .with_alternate(-1, -3)
                    .with_url("https://github.com/drewmacphee"),
            );
        }
        Page::Projects => {
            tiles.push(
                FixedTileSpec::new(TileRect::new(3, 0, 3, 2), 2, "progship")
                    .with_alternate(4, 0)
                    .with_url("https://github.com/drewmacphee/progship"),
            );
            tiles.push(
                FixedTileSpec::new(TileRect::new(3, 4, 3, 2), 3, "mosaic")
                    .with_alternate(4, 4)
                    .with_url("https://github.com/drewmacphee/mosaic"),
            );
        }
        Page::About => {
            let bio = "systems programmer, tile enthusiast";
            tiles.push(
                FixedTileSpec::new(TileRect::new(3, 0, 5, 2), 5, bio)
                    .with_alternate(4, 0)
                    .with_font_size(0.8),
            );
            tiles.push(
                FixedTileSpec::new(TileRect::new(-1, -3, 3, 1), 4, "email")
                    .with_url("mailto:hello@example.com"),
            );
        }
    }

    tiles
}
