#![cfg(feature = "std")]
//! Host-side doubles for the hardware seams, used by the integration tests.
//!
//! [`VirtualChain`] models the two daisy-chained shift registers at the pin
//! level: it records the data-line level at every clock rising edge and the
//! 16-bit frame captured by every latch pulse. [`ScriptedLevel`] plays a
//! prepared sequence of raw levels into a button, and [`CountingDelay`]
//! records delay requests instead of sleeping, so a whole playback scan
//! runs in microseconds on the host.

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

// ============================================================================
// VirtualChain - pin-level model of two chained registers
// ============================================================================

/// Which of the three chain lines an output pin drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineRole {
    /// Serial data in.
    Data,
    /// Shift clock; bits are absorbed on the rising edge.
    Clock,
    /// Latch; the internal bits appear on the outputs on the rising edge.
    Latch,
}

#[derive(Default)]
struct ChainState {
    bits: u16,
    data_level: bool,
    clock_level: bool,
    latch_level: bool,
    pulses: Vec<bool>,
    frames: Vec<[u8; 2]>,
}

impl ChainState {
    fn drive(&mut self, role: LineRole, level: bool) {
        match role {
            LineRole::Data => self.data_level = level,
            LineRole::Clock => {
                if level && !self.clock_level {
                    self.pulses.push(self.data_level);
                    self.bits = (self.bits << 1) | u16::from(self.data_level);
                }
                self.clock_level = level;
            }
            LineRole::Latch => {
                if level && !self.latch_level {
                    // Bytes enter LSB-first, so the wire order inside each
                    // half is the reverse of the byte's bit order.
                    let first = ((self.bits >> 8) as u8).reverse_bits();
                    let second = (self.bits as u8).reverse_bits();
                    self.frames.push([first, second]);
                }
                self.latch_level = level;
            }
        }
    }
}

/// A pin-level model of two daisy-chained 8-bit shift registers.
///
/// Hand its [`line`](Self::line)s to a
/// [`ShiftRegister`](crate::shift_register::ShiftRegister) and read back
/// what a scope on the real chain would show: the data level at each clock
/// rising edge, and the frame committed by each latch pulse (first-shifted
/// byte first).
#[derive(Clone, Default)]
pub struct VirtualChain {
    state: Rc<RefCell<ChainState>>,
}

impl VirtualChain {
    /// Creates a chain with all lines low and nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An output pin driving the given chain line.
    #[must_use]
    pub fn line(&self, role: LineRole) -> Line {
        Line {
            role,
            state: Rc::clone(&self.state),
        }
    }

    /// Data-line levels observed at each clock rising edge, in order.
    #[must_use]
    pub fn pulses(&self) -> Vec<bool> {
        self.state.borrow().pulses.clone()
    }

    /// Frames committed by latch pulses, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<[u8; 2]> {
        self.state.borrow().frames.clone()
    }
}

/// One output line of a [`VirtualChain`].
pub struct Line {
    role: LineRole,
    state: Rc<RefCell<ChainState>>,
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().drive(self.role, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().drive(self.role, true);
        Ok(())
    }
}

// ============================================================================
// ScriptedLevel - an input pin fed a prepared level sequence
// ============================================================================

/// An input pin that replays a prepared sequence of raw levels.
///
/// Each sample consumes the next scripted level; once the script runs out,
/// the last level repeats. A fresh pin with an empty script reads low
/// forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedLevel {
    script: VecDeque<bool>,
    current: bool,
}

impl ScriptedLevel {
    /// A pin that replays `levels`, then holds the last one.
    #[must_use]
    pub fn new(levels: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: levels.into_iter().collect(),
            current: false,
        }
    }

    /// A pin that reads low forever.
    #[must_use]
    pub fn released() -> Self {
        Self::default()
    }
}

impl ErrorType for ScriptedLevel {
    type Error = Infallible;
}

impl InputPin for ScriptedLevel {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if let Some(level) = self.script.pop_front() {
            self.current = level;
        }
        Ok(self.current)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|level| !level)
    }
}

// ============================================================================
// CountingDelay - a delay source that records instead of sleeping
// ============================================================================

/// A delay source that records each requested millisecond delay.
///
/// Clones share the same record, so tests can keep a handle while the
/// player owns the other.
#[derive(Clone, Default)]
pub struct CountingDelay {
    calls: Rc<RefCell<Vec<u32>>>,
}

impl CountingDelay {
    /// Creates a delay source with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The millisecond durations requested so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.calls.borrow_mut().push(ms);
    }
}
