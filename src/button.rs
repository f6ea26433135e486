//! A device abstraction for polled pushbuttons with level+latch debouncing.
//!
//! Unlike a timer-based debounce, [`PressLatch`] registers a press on the
//! first active sample and then ignores the level until it returns to
//! released. Contact chatter never re-fires because the control loop samples
//! each button only once per iteration, at millisecond cadence; by the next
//! sample a real press is still held and a bounce has settled.
//!
//! # Example
//!
//! ```rust
//! use chaser_kit::button::PressLatch;
//!
//! let mut latch = PressLatch::new();
//! assert!(latch.update(true)); // press registers once...
//! assert!(!latch.update(true)); // ...and holding does not re-fire
//! assert!(!latch.update(false)); // release re-arms
//! assert!(latch.update(true)); // next press registers again
//! ```

use embedded_hal::digital::InputPin;

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Use a pull-down resistor. Pin reads HIGH when pressed.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Use a pull-up resistor. Pin reads LOW when pressed.
    Ground,
}

// ============================================================================
// PressLatch - the two-state debounce automaton
// ============================================================================

/// Two-state press detector: released, or pressed-and-latched.
///
/// [`update`](Self::update) returns `true` exactly once per physical press:
/// on the sample where the level is active and the latch was clear. The
/// latch clears only when the level goes inactive, so a held button cannot
/// re-trigger.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressLatch {
    latched: bool,
}

impl PressLatch {
    /// Creates the detector in the released state.
    #[must_use]
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Feeds one level sample; returns `true` on a new press.
    pub fn update(&mut self, active: bool) -> bool {
        if active {
            let fired = !self.latched;
            self.latched = true;
            fired
        } else {
            self.latched = false;
            false
        }
    }
}

// ============================================================================
// Button Virtual Device
// ============================================================================

/// A polled, debounced pushbutton over any [`InputPin`].
///
/// Combines the raw level sample, the wiring polarity, and a [`PressLatch`].
/// Poll it once per control-loop iteration; [`poll`](Self::poll) reports
/// `true` exactly once per physical press.
pub struct Button<P> {
    input: P,
    pressed_to: PressedTo,
    latch: PressLatch,
}

impl<P> Button<P>
where
    P: InputPin,
{
    /// Creates a `Button` from an already-configured input pin.
    ///
    /// Configure the pull to match `pressed_to`: pull-down for
    /// [`PressedTo::Voltage`], pull-up for [`PressedTo::Ground`].
    #[must_use]
    pub const fn new(input: P, pressed_to: PressedTo) -> Self {
        Self {
            input,
            pressed_to,
            latch: PressLatch::new(),
        }
    }

    /// Returns whether the button is currently pressed.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        let level = self.input.is_high()?;
        Ok(match self.pressed_to {
            PressedTo::Voltage => level,
            PressedTo::Ground => !level,
        })
    }

    /// Samples the button once; returns `true` on a new press.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        let active = self.is_pressed()?;
        Ok(self.latch.update(active))
    }
}
