//! A single custom animation injected through the pattern-store seam.
//!
//! A bar rises across the left half of the strip, and because the reverse
//! pass is armed before the loop starts, drains back down every cycle.
//! Same wiring as the builtin demo.
#![no_std]
#![no_main]
#![cfg(not(feature = "std"))]

use core::convert::Infallible;

use chaser_kit::{
    Result,
    button::{Button, PressedTo},
    chaser::Chaser,
    pattern::{PatternCatalog, PatternEntry},
    shift_register::ShiftRegister,
};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

/// Eight frames: a bar rising LED by LED across the left strip half.
const RISING_BAR: [u8; 16] = [
    0b1000_0000, 0b0000_0000, 0b1100_0000, 0b0000_0000,
    0b1110_0000, 0b0000_0000, 0b1111_0000, 0b0000_0000,
    0b1111_1000, 0b0000_0000, 0b1111_1100, 0b0000_0000,
    0b1111_1110, 0b0000_0000, 0b1111_1111, 0b0000_0000,
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let data = Output::new(p.PIN_0, Level::Low);
    let latch = Output::new(p.PIN_1, Level::Low);
    let clock = Output::new(p.PIN_2, Level::Low);
    let speed_button = Button::new(Input::new(p.PIN_4, Pull::Down), PressedTo::Voltage);
    let pattern_button = Button::new(Input::new(p.PIN_5, Pull::Down), PressedTo::Voltage);

    let register = ShiftRegister::new(data, clock, latch)?;
    let catalog = PatternCatalog::new(
        [PatternEntry::new(0, RISING_BAR.len())],
        RISING_BAR.len(),
    )?;

    let mut chaser = Chaser::new(
        RISING_BAR,
        catalog,
        register,
        speed_button,
        pattern_button,
        Delay,
    );

    // One pattern-button press arms the reverse pass; the bar then drains
    // back down at the end of every rise.
    chaser.playback_mut().press_pattern(catalog.len());

    let never = chaser.run()?;
    match never {}
}
