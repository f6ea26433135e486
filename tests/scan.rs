#![allow(missing_docs)]
//! End-to-end playback tests: scanner, control loop, and button handling,
//! run against the host doubles.

use chaser_kit::button::{Button, PressedTo};
use chaser_kit::chaser::{Chaser, DELAY_TICK_MS, Direction};
use chaser_kit::host::{CountingDelay, Line, LineRole, ScriptedLevel, VirtualChain};
use chaser_kit::pattern::{PatternCatalog, PatternEntry};
use chaser_kit::shift_register::ShiftRegister;

const STORE: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

type HostChaser<const N: usize> = Chaser<[u8; 8], Line, ScriptedLevel, CountingDelay, N>;

fn chaser_with<const N: usize>(
    entries: [PatternEntry; N],
    speed: ScriptedLevel,
    pattern: ScriptedLevel,
) -> (HostChaser<N>, VirtualChain, CountingDelay) {
    let chain = VirtualChain::new();
    let register = ShiftRegister::new(
        chain.line(LineRole::Data),
        chain.line(LineRole::Clock),
        chain.line(LineRole::Latch),
    )
    .expect("virtual lines are infallible");
    let catalog = PatternCatalog::new(entries, STORE.len()).expect("test entries are valid");
    let delay = CountingDelay::new();
    let chaser = Chaser::new(
        STORE,
        catalog,
        register,
        Button::new(speed, PressedTo::Voltage),
        Button::new(pattern, PressedTo::Voltage),
        delay.clone(),
    );
    (chaser, chain, delay)
}

fn full_range() -> [PatternEntry; 1] {
    [PatternEntry::new(0, 8)]
}

#[test]
fn forward_scan_visits_every_pair_ascending() {
    let (mut chaser, chain, _delay) = chaser_with(
        full_range(),
        ScriptedLevel::released(),
        ScriptedLevel::released(),
    );
    let entry = chaser.catalog().entry(0);

    chaser
        .scan(entry, Direction::Forward)
        .expect("virtual lines are infallible");

    assert_eq!(chain.frames(), [[0, 1], [2, 3], [4, 5], [6, 7]]);
}

#[test]
fn reverse_scan_replays_interior_pairs_descending() {
    let (mut chaser, chain, _delay) = chaser_with(
        full_range(),
        ScriptedLevel::released(),
        ScriptedLevel::released(),
    );
    let entry = chaser.catalog().entry(0);

    chaser
        .scan(entry, Direction::Reverse)
        .expect("virtual lines are infallible");

    // The final forward pair and the first pair are both skipped: one is
    // still displayed, the other opens the next forward pass.
    assert_eq!(chain.frames(), [[4, 5], [2, 3]]);
}

#[test]
fn full_cycle_never_repeats_adjacent_frames() {
    let (mut chaser, chain, _delay) = chaser_with(
        full_range(),
        ScriptedLevel::released(),
        ScriptedLevel::released(),
    );
    chaser.playback_mut().press_pattern(1); // arm the reverse pass

    chaser.play_active().expect("virtual lines are infallible");

    let frames = chain.frames();
    assert_eq!(
        frames,
        [[0, 1], [2, 3], [4, 5], [6, 7], [4, 5], [2, 3]]
    );
    for pair in frames.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    // The next cycle opens with the first pair, which the reverse pass
    // deliberately left out.
    assert_ne!(frames[frames.len() - 1], [0, 1]);
}

#[test]
fn minimum_length_pattern_has_an_empty_reverse_pass() {
    let (mut chaser, chain, _delay) = chaser_with(
        [PatternEntry::new(0, 4)],
        ScriptedLevel::released(),
        ScriptedLevel::released(),
    );
    chaser.playback_mut().press_pattern(1);

    chaser.play_active().expect("virtual lines are infallible");

    // Both pairs were just shown forward; there is nothing to replay.
    assert_eq!(chain.frames(), [[0, 1], [2, 3]]);
}

#[test]
fn each_frame_pauses_for_the_delay_level() {
    let (mut chaser, _chain, delay) = chaser_with(
        full_range(),
        ScriptedLevel::released(),
        ScriptedLevel::released(),
    );
    let entry = chaser.catalog().entry(0);

    chaser
        .scan(entry, Direction::Forward)
        .expect("virtual lines are infallible");

    // Four frames at the base level of 3 ticks, 5 ms each.
    assert_eq!(delay.calls(), vec![DELAY_TICK_MS; 12]);
}

#[test]
fn speed_press_takes_effect_at_the_next_delay_block() {
    // The speed button goes active at the very first poll and stays held;
    // the latch turns that into a single step from 3 to 9 ticks.
    let (mut chaser, _chain, delay) = chaser_with(
        full_range(),
        ScriptedLevel::new([true]),
        ScriptedLevel::released(),
    );
    let entry = chaser.catalog().entry(0);

    chaser
        .scan(entry, Direction::Forward)
        .expect("virtual lines are infallible");

    assert_eq!(delay.calls().len(), 4 * 9);
    assert_eq!(chaser.playback().delay().ticks(), 9);
}

#[test]
fn finalized_switch_halts_the_scan_at_a_pair_boundary() {
    // Two presses with a release in between: the first poll of frame 0
    // arms the reverse pass, the first poll of frame 1 finalizes the
    // switch. The scan must still finish frame 1's pair.
    let (mut chaser, chain, _delay) = chaser_with(
        full_range(),
        ScriptedLevel::released(),
        ScriptedLevel::new([true, false, true]),
    );
    let entry = chaser.catalog().entry(0);

    chaser
        .scan(entry, Direction::Forward)
        .expect("virtual lines are infallible");

    assert_eq!(chain.frames(), [[0, 1], [2, 3]]);
    assert!(chaser.playback().switch_requested());
    assert!(!chaser.playback().reversing());
}

#[test]
fn pending_switch_is_consumed_at_the_cycle_boundary() {
    let (mut chaser, chain, _delay) = chaser_with(
        [PatternEntry::new(0, 4), PatternEntry::new(4, 4)],
        ScriptedLevel::released(),
        ScriptedLevel::released(),
    );
    // Finalize a switch to the second pattern before playing.
    chaser.playback_mut().press_pattern(2);
    chaser.playback_mut().press_pattern(2);

    // The pending request empties this cycle entirely...
    chaser.play_active().expect("virtual lines are infallible");
    assert!(chain.frames().is_empty());
    assert!(!chaser.playback().switch_requested());

    // ...and the next cycle plays the newly selected pattern.
    chaser.play_active().expect("virtual lines are infallible");
    assert_eq!(chain.frames(), [[4, 5], [6, 7]]);
}
