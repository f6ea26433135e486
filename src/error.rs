//! Error and result types for catalog construction.
//!
//! Pattern playback itself cannot fail: every address the scanner computes
//! is inside a range that was validated when the catalog was built. The
//! variants here all describe a catalog entry that was rejected at
//! construction time.

use core::convert::Infallible;

use derive_more::{Display, Error as DeriveError};

/// Result type for this crate, defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported while building a [`PatternCatalog`](crate::pattern::PatternCatalog).
#[derive(Clone, Copy, Debug, Display, DeriveError, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The catalog holds no entries, so there is nothing to play.
    #[display("catalog holds no entries")]
    EmptyCatalog,

    /// A pattern's byte count is odd; frames are two bytes wide.
    #[display("pattern length {length} is odd; frames are two bytes wide")]
    OddPatternLength {
        /// Length of the rejected entry, in bytes.
        length: usize,
    },

    /// A pattern is shorter than the two frames a reverse pass needs.
    #[display("pattern length {length} is shorter than two frames")]
    PatternTooShort {
        /// Length of the rejected entry, in bytes.
        length: usize,
    },

    /// A pattern's byte range extends past the end of the pattern store.
    #[display(
        "pattern range {start_offset}+{length} exceeds store capacity {capacity}"
    )]
    PatternOutOfRange {
        /// First byte offset of the rejected entry.
        start_offset: usize,
        /// Length of the rejected entry, in bytes.
        length: usize,
        /// Total capacity of the pattern store, in bytes.
        capacity: usize,
    },
}

// Lets firmware `?` infallible pin results and catalog results into one type.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
