#![allow(missing_docs)]
//! Pin-level tests for the shift-out driver, observed through the virtual
//! register chain.

use chaser_kit::host::{Line, LineRole, VirtualChain};
use chaser_kit::shift_register::ShiftRegister;

fn register_on(chain: &VirtualChain) -> ShiftRegister<Line, 2> {
    ShiftRegister::new(
        chain.line(LineRole::Data),
        chain.line(LineRole::Clock),
        chain.line(LineRole::Latch),
    )
    .expect("virtual lines are infallible")
}

#[test]
fn fresh_driver_records_nothing() {
    let chain = VirtualChain::new();
    let _register = register_on(&chain);
    assert!(chain.pulses().is_empty());
    assert!(chain.frames().is_empty());
}

#[test]
fn shift_out_byte_issues_eight_clock_pulses() {
    let chain = VirtualChain::new();
    let mut register = register_on(&chain);

    register
        .shift_out_byte(0x00)
        .expect("virtual lines are infallible");

    assert_eq!(chain.pulses().len(), 8);
    assert!(chain.frames().is_empty(), "no latch, no frame");
}

#[test]
fn data_line_follows_bits_least_significant_first() {
    let chain = VirtualChain::new();
    let mut register = register_on(&chain);

    register
        .shift_out_byte(0b1011_0001)
        .expect("virtual lines are infallible");

    // Bit 0 is driven during the first pulse, bit 7 during the last.
    let expected = [true, false, false, false, true, true, false, true];
    assert_eq!(chain.pulses(), expected);
}

#[test]
fn write_frame_latches_both_bytes_in_shift_order() {
    let chain = VirtualChain::new();
    let mut register = register_on(&chain);

    register
        .write_frame([0x2B, 0xC4])
        .expect("virtual lines are infallible");

    assert_eq!(chain.pulses().len(), 16);
    assert_eq!(chain.frames(), [[0x2B, 0xC4]]);
}

#[test]
fn latching_mid_update_shows_mixed_old_and_new_data() {
    let chain = VirtualChain::new();
    let mut register = register_on(&chain);

    register
        .write_frame([0xAA, 0x55])
        .expect("virtual lines are infallible");

    // One extra byte pushes the old frame halfway down the chain.
    register
        .shift_out_byte(0x0F)
        .expect("virtual lines are infallible");
    register
        .latch_pulse()
        .expect("virtual lines are infallible");

    assert_eq!(chain.frames(), [[0xAA, 0x55], [0x55, 0x0F]]);
}
