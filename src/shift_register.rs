//! A device abstraction for daisy-chained 74HC595 shift registers.
//!
//! The 74HC595 converts serial bit input into eight parallel outputs. Bits
//! are clocked in on a shift-clock line; a separate latch line copies the
//! internal buffer to the output pins, so a whole frame appears at once.
//! Chaining registers (the overflow bit of one feeding the input of the
//! next) drives `CHAIN * 8` outputs from the same three GPIO lines.
//!
//! [`ShiftRegister`] is generic over [`embedded_hal::digital::OutputPin`],
//! so it runs on `embassy-rp` pins in firmware and on the doubles in
//! [`host`](crate::host) during tests.
//!
//! # Example
//!
//! Driving the pin-level double from [`host`](crate::host); firmware swaps
//! in `embassy_rp::gpio::Output` lines, which implement the same trait.
//!
//! ```rust
//! use chaser_kit::host::{LineRole, VirtualChain};
//! use chaser_kit::shift_register::ShiftRegister;
//!
//! let chain = VirtualChain::new();
//! let mut register = ShiftRegister::<_, 2>::new(
//!     chain.line(LineRole::Data),
//!     chain.line(LineRole::Clock),
//!     chain.line(LineRole::Latch),
//! )?;
//!
//! // Two chained registers: one 16-LED frame per latch.
//! register.write_frame([0b1000_0000, 0b0000_0001])?;
//! assert_eq!(chain.frames(), [[0b1000_0000, 0b0000_0001]]);
//! # Ok::<(), core::convert::Infallible>(())
//! ```

use embedded_hal::digital::{OutputPin, PinState};

/// Clock pulses issued per serialized byte.
const BITS_PER_BYTE: u8 = 8;

/// Serializes frames onto `CHAIN` daisy-chained shift registers.
///
/// Owns the three output lines. All lines are driven low at construction so
/// the first clock and latch edges are well-defined.
///
/// Calling convention: a frame is always `CHAIN` bytes between latch pulses.
/// Latching after fewer bytes shows a mix of old and new data on the
/// physical outputs; [`write_frame`](Self::write_frame) keeps the two steps
/// paired.
pub struct ShiftRegister<P, const CHAIN: usize> {
    data: P,
    clock: P,
    latch: P,
}

impl<P, const CHAIN: usize> ShiftRegister<P, CHAIN>
where
    P: OutputPin,
{
    /// Creates the driver and drives all three lines low.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn new(data: P, clock: P, latch: P) -> Result<Self, P::Error> {
        let mut chain = Self { data, clock, latch };
        chain.data.set_low()?;
        chain.clock.set_low()?;
        chain.latch.set_low()?;
        Ok(chain)
    }

    /// Shifts one byte into the chain, least-significant bit first.
    ///
    /// For each of the eight bits: the data line is driven to the bit's
    /// value, then the shift clock is pulsed high and low. After the call
    /// the most-recently-shifted bit sits nearest the chain's input; earlier
    /// bytes have moved one register further along.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn shift_out_byte(&mut self, byte: u8) -> Result<(), P::Error> {
        for bit in 0..BITS_PER_BYTE {
            let state = PinState::from((byte >> bit) & 1 == 1);
            self.data.set_state(state)?;
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }

    /// Pulses the latch line, copying the chain's internal bits to the
    /// parallel outputs.
    ///
    /// From the observer's perspective the outputs change atomically.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn latch_pulse(&mut self) -> Result<(), P::Error> {
        self.latch.set_high()?;
        self.latch.set_low()
    }

    /// Shifts out a full frame, then latches it.
    ///
    /// `frame[0]` is shifted first and ends up in the register furthest
    /// from the data line.
    ///
    /// # Errors
    ///
    /// Propagates the pin error type; infallible on `embassy-rp` pins.
    pub fn write_frame(&mut self, frame: [u8; CHAIN]) -> Result<(), P::Error> {
        for byte in frame {
            self.shift_out_byte(byte)?;
        }
        self.latch_pulse()
    }
}
