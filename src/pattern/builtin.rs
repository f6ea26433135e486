//! The builtin animation library: five chaser patterns for a 16-LED strip.
//!
//! Each row below is one 16-bit frame, split across two bytes (left strip
//! half first). Entries are named after the animation they draw:
//!
//! - [`KITT`]: a single lit LED sweeping left to right.
//! - [`IN_N_OUT`]: two lit LEDs converging to the center and back out.
//! - [`FOUR_CHASER`]: four evenly spaced LEDs marching together.
//! - [`WATERFALL`]: the strip filling edge-to-center, then draining.
//! - [`CHASER`]: scattered sparkles tumbling along the strip.
//!
//! # Example
//!
//! ```rust
//! use chaser_kit::pattern::builtin;
//!
//! let catalog = builtin::catalog()?;
//! assert_eq!(catalog.len(), 5);
//! assert_eq!(catalog.entry(0), builtin::KITT);
//! # Ok::<(), chaser_kit::Error>(())
//! ```

use crate::pattern::{PatternCatalog, PatternEntry};
use crate::Result;

/// Concatenated frame data for all builtin animations.
pub const PATTERN_DATA: [u8; 120] = [
    // Kitt
    0b1000_0000, 0b0000_0000, 0b0100_0000, 0b0000_0000,
    0b0010_0000, 0b0000_0000, 0b0001_0000, 0b0000_0000,
    0b0000_1000, 0b0000_0000, 0b0000_0100, 0b0000_0000,
    0b0000_0010, 0b0000_0000, 0b0000_0001, 0b0000_0000,
    0b0000_0000, 0b1000_0000, 0b0000_0000, 0b0100_0000,
    0b0000_0000, 0b0010_0000, 0b0000_0000, 0b0001_0000,
    0b0000_0000, 0b0000_1000, 0b0000_0000, 0b0000_0100,
    0b0000_0000, 0b0000_0010, 0b0000_0000, 0b0000_0001,
    // In N Out
    0b1000_0000, 0b0000_0001, 0b0100_0000, 0b0000_0010,
    0b0010_0000, 0b0000_0100, 0b0001_0000, 0b0000_1000,
    0b0000_1000, 0b0001_0000, 0b0000_0100, 0b0010_0000,
    0b0000_0010, 0b0100_0000, 0b0000_0001, 0b1000_0000,
    // Four Chaser
    0b1000_1000, 0b1000_1000, 0b0100_0100, 0b0100_0100,
    0b0010_0010, 0b0010_0010, 0b0001_0001, 0b0001_0001,
    // Waterfall
    0b1000_0000, 0b0000_0001, 0b1100_0000, 0b0000_0011,
    0b1110_0000, 0b0000_0111, 0b1111_0000, 0b0000_1111,
    0b1111_1000, 0b0001_1111, 0b1111_1100, 0b0011_1111,
    0b1111_1110, 0b0111_1111, 0b1111_1111, 0b1111_1111,
    0b0111_1111, 0b1111_1110, 0b0011_1111, 0b1111_1100,
    0b0001_1111, 0b1111_1000, 0b0000_1111, 0b1111_0000,
    0b0000_0111, 0b1110_0000, 0b0000_0011, 0b1100_0000,
    0b0000_0001, 0b1000_0000, 0b0000_0000, 0b0000_0000,
    // Chaser
    0b0000_0000, 0b0011_0000, 0b0000_0000, 0b0001_0100,
    0b0000_0000, 0b0000_1001, 0b0100_0000, 0b0000_0100,
    0b0001_0000, 0b0000_0010, 0b0000_0100, 0b0000_0001,
    0b1000_0001, 0b0000_0000, 0b0100_0000, 0b0100_0000,
    0b0010_0000, 0b0001_0000, 0b0001_0000, 0b0000_0100,
    0b0000_1000, 0b0000_0001, 0b0100_0100, 0b0000_0000,
    0b0001_0010, 0b0000_0000, 0b0000_0101, 0b0000_0000,
    0b0000_0001, 0b1000_0000, 0b0000_0000, 0b0100_0000,
];

/// Single LED sweeping the full strip and back.
pub const KITT: PatternEntry = PatternEntry::new(0, 32);

/// Two LEDs converging from the edges to the center and back out.
pub const IN_N_OUT: PatternEntry = PatternEntry::new(32, 16);

/// Four evenly spaced LEDs marching together.
pub const FOUR_CHASER: PatternEntry = PatternEntry::new(48, 8);

/// Strip filling from both edges, then draining.
pub const WATERFALL: PatternEntry = PatternEntry::new(56, 32);

/// Scattered sparkles tumbling along the strip.
pub const CHASER: PatternEntry = PatternEntry::new(88, 32);

/// All builtin entries, in playback order.
pub const ENTRIES: [PatternEntry; 5] = [KITT, IN_N_OUT, FOUR_CHASER, WATERFALL, CHASER];

/// Builds the validated catalog of all builtin animations.
///
/// # Errors
///
/// Never fails for the builtin table; the `Result` is the ordinary
/// [`PatternCatalog::new`] contract.
pub fn catalog() -> Result<PatternCatalog<5>> {
    PatternCatalog::new(ENTRIES, PATTERN_DATA.len())
}
