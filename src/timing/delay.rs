// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait delays driven by the tick interrupt.
//!
//! Each wait clears the shared counter, starts the timer, spins until the ISR has counted
//! enough periods and stops the timer again. The timer only runs while a wait is in progress.

use core::hint;

use embedded_hal::delay::DelayNs;

use super::tick::{TickCounter, TickRate, TickTimer};

/// Blocking delay over a [`TickTimer`] and the counter its interrupt increments.
pub struct TickDelay<'a, T: TickTimer> {
    timer: T,
    ticks: &'a TickCounter,
}

impl<'a, T: TickTimer> TickDelay<'a, T> {
    pub fn new(timer: T, ticks: &'a TickCounter) -> Self {
        Self { timer, ticks }
    }

    /// Block for `ms` milliseconds.
    #[inline]
    pub fn wait_ms(&mut self, ms: u32) {
        self.wait_ticks(TickRate::Millisecond, ms);
    }

    /// Block until the timer has fired `ticks` times at `rate`.
    ///
    /// Returns immediately for zero ticks without starting the timer.
    pub fn wait_ticks(&mut self, rate: TickRate, ticks: u32) {
        if ticks == 0 {
            return;
        }

        self.ticks.reset();
        self.timer.start(rate);

        while self.ticks.get() < ticks {
            hint::spin_loop();
        }

        self.timer.stop();
    }

    /// Release the timer.
    pub fn free(self) -> T {
        self.timer
    }
}

impl<T: TickTimer> DelayNs for TickDelay<'_, T> {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = TickRate::Fast.ticks_for_ns(ns as u64);
        self.wait_ticks(TickRate::Fast, ticks);
    }

    fn delay_us(&mut self, us: u32) {
        let ticks = TickRate::Fast.ticks_for_ns(us as u64 * 1_000);
        self.wait_ticks(TickRate::Fast, ticks);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{with_ticking_isr, MockTimer};

    /// Run `f` against a delay whose timer is ticked by a simulated ISR; returns the rates the
    /// timer was started with and how often it was stopped.
    fn run_delay(
        counter: &TickCounter,
        f: impl FnOnce(&mut TickDelay<'_, MockTimer<'_>>),
    ) -> (Vec<TickRate>, usize) {
        with_ticking_isr(counter, |running| {
            let mut delay = TickDelay::new(MockTimer::new(running), counter);
            f(&mut delay);
            let timer = delay.free();
            (timer.starts, timer.stops)
        })
    }

    #[test]
    fn wait_ms_runs_timer_at_millisecond_rate() {
        let counter = TickCounter::new();

        let (starts, stops) = run_delay(&counter, |d| d.wait_ms(5));

        assert_eq!(starts, [TickRate::Millisecond]);
        assert_eq!(stops, 1);
        assert!(counter.get() >= 5);
    }

    #[test]
    fn zero_wait_leaves_timer_alone() {
        let counter = TickCounter::new();

        let (starts, stops) = run_delay(&counter, |d| {
            d.wait_ms(0);
            d.delay_us(0);
        });

        assert!(starts.is_empty());
        assert_eq!(stops, 0);
    }

    #[test]
    fn each_wait_starts_from_a_cleared_counter() {
        let counter = TickCounter::new();
        for _ in 0..100 {
            counter.tick();
        }

        let (starts, stops) = run_delay(&counter, |d| {
            d.wait_ms(3);
            d.wait_ms(2);
        });

        assert_eq!(starts.len(), 2);
        assert_eq!(stops, 2);
        assert!(counter.get() < 100);
    }

    #[test]
    fn delay_us_waits_the_rounded_up_fast_ticks() {
        let counter = TickCounter::new();

        let (starts, stops) = run_delay(&counter, |d| d.delay_us(100));

        assert_eq!(starts, [TickRate::Fast]);
        assert_eq!(stops, 1);
        // 100 µs is 6.4 fast ticks, rounded up to 7.
        assert!(counter.get() >= 7);
    }

    #[test]
    fn sub_millisecond_delays_use_fast_ticks() {
        let counter = TickCounter::new();

        let (starts, stops) = run_delay(&counter, |d| {
            d.delay_us(100);
            d.delay_ns(500);
            d.delay_ms(1);
        });

        assert_eq!(
            starts,
            [TickRate::Fast, TickRate::Fast, TickRate::Millisecond]
        );
        assert_eq!(stops, 3);
    }
}
