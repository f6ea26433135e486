//! Playback selection state: active pattern, direction, and frame delay.
//!
//! [`Playback`] is an explicit state struct owned by the control loop and
//! mutated only by the two button actions and the pass-boundary reset. It
//! never lives in a global; tests drive each transition in isolation.
//!
//! # Example
//!
//! ```rust
//! use chaser_kit::playback::{DelayLevel, Playback};
//!
//! let mut playback = Playback::new();
//! assert_eq!(playback.delay(), DelayLevel::BASE);
//!
//! // First press arms the reverse pass; the second finalizes the switch.
//! playback.press_pattern(5);
//! assert!(playback.reversing());
//! assert_eq!(playback.active_index(), 0);
//!
//! playback.press_pattern(5);
//! assert!(!playback.reversing());
//! assert_eq!(playback.active_index(), 1);
//! assert!(playback.switch_requested());
//! ```

// ============================================================================
// DelayLevel - the discrete frame-delay setting
// ============================================================================

/// Post-frame delay, counted in fixed 5 ms ticks.
///
/// Only six levels exist: 3, 9, 15, 21, 27 and 33 ticks. Advancing past the
/// top level wraps back to the base, so the speed button cycles through all
/// settings.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DelayLevel(u8);

impl DelayLevel {
    /// The fastest setting, 3 ticks per frame.
    pub const BASE: Self = Self(3);

    /// Ticks added per speed-button press.
    const STEP: u8 = 6;

    /// Levels that reach this bound wrap back to [`BASE`](Self::BASE).
    const LIMIT: u8 = 39;

    /// The next slower setting, wrapping past the top back to the base.
    #[must_use]
    pub const fn next(self) -> Self {
        let bumped = self.0 + Self::STEP;
        if bumped >= Self::LIMIT {
            Self::BASE
        } else {
            Self(bumped)
        }
    }

    /// Number of delay ticks this level inserts after each frame.
    #[must_use]
    pub const fn ticks(self) -> u8 {
        self.0
    }
}

impl Default for DelayLevel {
    fn default() -> Self {
        Self::BASE
    }
}

// ============================================================================
// Playback - selection state mutated by the button actions
// ============================================================================

/// Selection state for the pattern player.
///
/// Created once at startup and owned by the control loop for the life of
/// the process. `active_index` is always a valid index into the catalog the
/// loop plays from: [`press_pattern`](Self::press_pattern) wraps it below
/// the count it is given.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Playback {
    active_index: usize,
    reversing: bool,
    delay: DelayLevel,
    switch_requested: bool,
}

impl Playback {
    /// Starting state: first pattern, forward only, base delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_index: 0,
            reversing: false,
            delay: DelayLevel::BASE,
            switch_requested: false,
        }
    }

    /// Index of the catalog entry currently playing.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether the current pattern also plays backward after its forward
    /// pass.
    #[must_use]
    pub const fn reversing(&self) -> bool {
        self.reversing
    }

    /// The current frame-delay setting.
    #[must_use]
    pub const fn delay(&self) -> DelayLevel {
        self.delay
    }

    /// Whether a finalized pattern switch is waiting for the scanner to
    /// reach a pair boundary.
    #[must_use]
    pub const fn switch_requested(&self) -> bool {
        self.switch_requested
    }

    /// Speed-button action: step to the next delay level.
    pub fn press_speed(&mut self) {
        self.delay = self.delay.next();
    }

    /// Pattern-button action.
    ///
    /// The first press on a pattern arms the reverse pass and nothing else.
    /// The second press disarms it, advances `active_index` by one (wrapping
    /// below `pattern_count`), and raises the switch request that tells the
    /// scanner to stop at its next pair boundary. Splitting the press latch
    /// from the switch request keeps the decision of *when* to switch with
    /// the control loop, so a pattern never changes mid-scan.
    pub fn press_pattern(&mut self, pattern_count: usize) {
        if self.reversing {
            self.reversing = false;
            self.active_index += 1;
            if self.active_index >= pattern_count {
                self.active_index = 0;
            }
            self.switch_requested = true;
        } else {
            self.reversing = true;
        }
    }

    /// Clears the switch request at the end of a forward-or-reverse pass.
    pub fn finish_pass(&mut self) {
        self.switch_requested = false;
    }
}
