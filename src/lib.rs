//! Device abstractions for building LED chaser applications on the Pico 1 and 2.
//!
//! Two daisy-chained 74HC595 shift registers drive a strip of 16 LEDs through
//! three GPIO lines. Precomputed bit patterns are played forward (and,
//! optionally, backward) from a read-only byte store, while two debounced
//! pushbuttons select the active pattern and the playback speed.
//!
//! The state machines in this crate are written against the `embedded-hal`
//! traits, so they build and test on the host with the default features; the
//! firmware binaries in `demos/` bind them to `embassy-rp` pins.
//!
//! # Glossary
//!
//! - **Shift register:** hardware that accepts serial bit input and exposes it
//!   as parallel outputs once latched.
//! - **Latch pulse:** the signal transition that copies the shift register's
//!   internal buffer to its output pins.
//! - **Debounce:** converting a noisy digital input into a single clean
//!   logical event per physical press.
//! - **Pattern:** an ordered sequence of bytes, each bit one LED's on/off
//!   state in a frame.
//! - **Frame:** one full set of parallel outputs produced by one latch pulse.
#![cfg_attr(not(feature = "std"), no_std)]

// Compile-time checks: at most one board, and a board for the ARM runtime
#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(feature = "arm", not(any(feature = "pico1", feature = "pico2"))))]
compile_error!("The 'arm' feature requires a board feature: 'pico1' or 'pico2'");

#[cfg(all(not(feature = "defmt"), not(feature = "log")))]
compile_error!("Must enable a logging backend: 'defmt' (firmware) or 'log' (host)");

pub mod button;
pub mod chaser;
mod error;
#[cfg(feature = "std")]
pub mod host;
pub mod logging;
pub mod pattern;
pub mod playback;
pub mod shift_register;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
