use std::{thread, time::Duration};

use tank_ngin::clock::Clock;

#[test]
fn should_start_without_elapsed_frames() {
    let clock = Clock::new();

    assert_eq!(clock.frames(), 0);
    assert_eq!(clock.delta(), Duration::ZERO);
    assert_eq!(clock.delta_secs(), 0.0);
}

#[test]
fn should_measure_time_between_ticks() {
    let mut clock = Clock::new();
    clock.tick();

    thread::sleep(Duration::from_millis(20));
    let delta = clock.tick();

    assert!(delta >= Duration::from_millis(20), "delta was {delta:?}");
    assert_eq!(clock.delta(), delta);
    assert_eq!(clock.frames(), 2);
}
