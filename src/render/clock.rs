//! Pauses between generations.

use std::thread;
use std::time::Duration;

/// Blocks the run loop between generations.
pub trait Clock {
    fn pause(&mut self, interval: Duration);
}

/// Sleeps the current thread for the full interval.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepClock;

impl Clock for SleepClock {
    fn pause(&mut self, interval: Duration) {
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
}

/// Returns immediately. Used for benchmarks and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClock;

impl Clock for NoopClock {
    fn pause(&mut self, _interval: Duration) {}
}
