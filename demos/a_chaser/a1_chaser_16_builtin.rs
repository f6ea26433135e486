//! The complete 16-LED chaser with the builtin animation catalog.
//!
//! Wiring: two 74HC595s in a daisy chain, serial data on PIN_0, latch on
//! PIN_1, shift clock on PIN_2. Two active-high pushbuttons: PIN_4 steps
//! the frame delay, PIN_5 arms the reverse pass / selects the next pattern.
#![no_std]
#![no_main]
#![cfg(not(feature = "std"))]

use core::convert::Infallible;

use chaser_kit::{
    Result,
    button::{Button, PressedTo},
    chaser::Chaser,
    pattern::builtin,
    shift_register::ShiftRegister,
};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

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
    let catalog = builtin::catalog()?;

    let mut chaser = Chaser::new(
        builtin::PATTERN_DATA,
        catalog,
        register,
        speed_button,
        pattern_button,
        Delay,
    );

    let never = chaser.run()?;
    match never {}
}
