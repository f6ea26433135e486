//! A device abstraction for the pattern player: scanner plus control loop.
//!
//! [`Chaser`] composes the pattern store, the validated catalog, the
//! shift-register chain, the two debounced buttons, and a delay source into
//! one perpetual playback loop. Each catalog entry is walked forward two
//! bytes at a time, one latched frame per pair. When the reverse pass is
//! armed, the same range is walked backward before the next cycle.
//!
//! Buttons are polled between frames and around every delay block, so the
//! worst-case input latency is one frame-delay period. A finalized pattern
//! switch stops the running scan at its next pair boundary, never mid-pair.
//!
//! # Example
//!
//! Playing a four-byte pattern through the host doubles:
//!
//! ```rust
//! use chaser_kit::button::{Button, PressedTo};
//! use chaser_kit::chaser::{Chaser, Direction};
//! use chaser_kit::host::{CountingDelay, LineRole, ScriptedLevel, VirtualChain};
//! use chaser_kit::pattern::{PatternCatalog, PatternEntry};
//! use chaser_kit::shift_register::ShiftRegister;
//!
//! let store: [u8; 4] = [0x01, 0x80, 0x02, 0x40];
//! let catalog = PatternCatalog::new([PatternEntry::new(0, 4)], store.len())?;
//!
//! let chain = VirtualChain::new();
//! let register = ShiftRegister::new(
//!     chain.line(LineRole::Data),
//!     chain.line(LineRole::Clock),
//!     chain.line(LineRole::Latch),
//! )?;
//!
//! let mut chaser = Chaser::new(
//!     store,
//!     catalog,
//!     register,
//!     Button::new(ScriptedLevel::released(), PressedTo::Voltage),
//!     Button::new(ScriptedLevel::released(), PressedTo::Voltage),
//!     CountingDelay::new(),
//! );
//!
//! chaser.scan(catalog.entry(0), Direction::Forward)?;
//! assert_eq!(chain.frames(), [[0x01, 0x80], [0x02, 0x40]]);
//! # Ok::<(), chaser_kit::Error>(())
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::button::Button;
use crate::logging::{debug, info};
use crate::pattern::{PatternCatalog, PatternEntry, PatternStore};
use crate::playback::Playback;
use crate::shift_register::ShiftRegister;

/// Bytes per latched frame: two chained 8-bit registers drive 16 outputs.
pub const FRAME_BYTES: usize = 2;

/// Duration of one delay tick, in milliseconds.
///
/// The delay primitive only sleeps for this fixed unit; the frame delay is
/// a [`DelayLevel`](crate::playback::DelayLevel) count of these ticks.
pub const DELAY_TICK_MS: u32 = 5;

// ============================================================================
// Direction - which way a scan walks the pattern
// ============================================================================

/// Which way a scan walks the active pattern.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Ascending byte offsets, from the first frame to the last.
    Forward,
    /// Descending byte offsets, replaying the frames between the
    /// turnaround and the first frame.
    Reverse,
}

// ============================================================================
// Chaser - the composed pattern player
// ============================================================================

/// The pattern player: store, catalog, register chain, buttons, and delay,
/// driven by one synchronous loop.
///
/// The catalog passed to [`new`](Self::new) has already validated every
/// entry, so playback computes no address outside the store and no scan
/// bound underflows.
pub struct Chaser<S, O, I, D, const N: usize> {
    store: S,
    catalog: PatternCatalog<N>,
    register: ShiftRegister<O, { FRAME_BYTES }>,
    speed_button: Button<I>,
    pattern_button: Button<I>,
    delay: D,
    playback: Playback,
}

impl<S, O, I, D, const N: usize> Chaser<S, O, I, D, N>
where
    S: PatternStore,
    O: OutputPin,
    I: InputPin<Error = O::Error>,
    D: DelayNs,
{
    /// Composes a player from its parts, starting at the first catalog
    /// entry, forward only, base delay.
    #[must_use]
    pub fn new(
        store: S,
        catalog: PatternCatalog<N>,
        register: ShiftRegister<O, { FRAME_BYTES }>,
        speed_button: Button<I>,
        pattern_button: Button<I>,
        delay: D,
    ) -> Self {
        Self {
            store,
            catalog,
            register,
            speed_button,
            pattern_button,
            delay,
            playback: Playback::new(),
        }
    }

    /// The current selection state.
    #[must_use]
    pub const fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Mutable selection state, for configuring the player before running
    /// it (starting pattern, delay level, reverse pass).
    #[must_use]
    pub const fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// The catalog this player selects from.
    #[must_use]
    pub const fn catalog(&self) -> &PatternCatalog<N> {
        &self.catalog
    }

    /// Runs the player forever: forward pass, optional reverse pass,
    /// repeat.
    ///
    /// Only returns if a pin fails; with infallible pins the loop is
    /// terminal until power loss.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn run(&mut self) -> Result<Infallible, O::Error> {
        info!("chaser running: {} patterns", N);
        loop {
            self.play_active()?;
        }
    }

    /// Plays one full cycle of the active pattern: a forward pass and,
    /// when the reverse pass is armed, a reverse pass over the same entry.
    /// Any pending switch request is consumed at the end of the cycle.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn play_active(&mut self) -> Result<(), O::Error> {
        let entry = self.catalog.entry(self.playback.active_index());
        self.scan(entry, Direction::Forward)?;
        if self.playback.reversing() {
            self.scan(entry, Direction::Reverse)?;
        }
        self.playback.finish_pass();
        Ok(())
    }

    /// Walks `entry` in `direction`, one latched two-byte frame at a time.
    ///
    /// The scan ends at the entry's boundary, or at the next pair boundary
    /// once a pattern switch has been finalized. The switch request is
    /// checked before each pair, so a frame is never split.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn scan(&mut self, entry: PatternEntry, direction: Direction) -> Result<(), O::Error> {
        match direction {
            Direction::Forward => self.scan_forward(entry),
            Direction::Reverse => self.scan_reverse(entry),
        }
    }

    fn scan_forward(&mut self, entry: PatternEntry) -> Result<(), O::Error> {
        let mut offset = entry.start_offset();
        let end = entry.end_offset();
        while offset < end && !self.playback.switch_requested() {
            let frame = [self.store.read(offset), self.store.read(offset + 1)];
            self.register.write_frame(frame)?;
            offset += FRAME_BYTES;
            self.frame_pause()?;
        }
        Ok(())
    }

    fn scan_reverse(&mut self, entry: PatternEntry) -> Result<(), O::Error> {
        // The final forward pair is still on the outputs, so start one pair
        // below it; stop above the first pair, which the next forward pass
        // re-shows.
        let mut offset = entry.end_offset() - 3;
        let lowest = entry.start_offset() + FRAME_BYTES;
        while offset >= lowest && !self.playback.switch_requested() {
            let frame = [self.store.read(offset - 1), self.store.read(offset)];
            self.register.write_frame(frame)?;
            offset -= FRAME_BYTES;
            self.frame_pause()?;
        }
        Ok(())
    }

    /// Holds the latched frame for the configured delay, polling the
    /// buttons before and after the delay block.
    fn frame_pause(&mut self) -> Result<(), O::Error> {
        self.poll_buttons()?;
        for _ in 0..self.playback.delay().ticks() {
            self.delay.delay_ms(DELAY_TICK_MS);
        }
        self.poll_buttons()
    }

    /// Samples both buttons once and applies their actions.
    fn poll_buttons(&mut self) -> Result<(), O::Error> {
        if self.speed_button.poll()? {
            self.playback.press_speed();
            debug!("frame delay set to {} ticks", self.playback.delay().ticks());
        }
        if self.pattern_button.poll()? {
            self.playback.press_pattern(N);
            if self.playback.reversing() {
                info!(
                    "reverse pass armed for pattern {}",
                    self.playback.active_index()
                );
            } else {
                info!("pattern {} selected", self.playback.active_index());
            }
        }
        Ok(())
    }
}
