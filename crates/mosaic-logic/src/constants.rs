//! Engine tunables — attempt budgets, color ranges, margins.
//!
//! These are plain constants with no UI dependency. Both the layout
//! consumers and the native simtest use these.

/// Maximum random placement attempts per generation pass.
///
/// Not a hard law — the gap filler guarantees total coverage however many
/// attempts succeed. Raising this packs more large tiles at the cost of time.
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 1000;

/// Inclusive lower bound of the random color index range.
pub const DEFAULT_COLOR_MIN: u8 = 1;

/// Inclusive upper bound of the random color index range.
pub const DEFAULT_COLOR_MAX: u8 = 8;

/// Cell edge length in pixels used by consumers to size the grid from a
/// viewport: `dimension_px / DEFAULT_CELL_SIZE_PX + 1` cells.
pub const DEFAULT_CELL_SIZE_PX: u32 = 60;

/// One-cell margin reserved on the far edge when validating fixed tiles.
///
/// Random and gap tiles may use the full grid; fixed content is kept one
/// cell off the bottom/right edge. The asymmetry is deliberate — it keeps
/// authored content away from the viewport clip edge.
pub const FIXED_EDGE_MARGIN: i32 = 1;
