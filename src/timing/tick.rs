// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven tick counter.
//!
//! The counter is the only state shared with interrupt context. It is written by the timer ISR
//! and read or cleared from thread mode, so it is a single atomic word.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::{TICK_HZ_FAST, TICK_HZ_MILLIS};

/// Tick counter shared between the timer ISR and the delay loop.
///
/// Declare it as a `static` so the interrupt handler can reach it.
pub struct TickCounter {
    ticks: AtomicU32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Count one timer period. Call this from the timer interrupt only.
    #[inline]
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::AcqRel);
    }

    /// Ticks seen since the last reset.
    #[inline]
    pub fn get(&self) -> u32 {
        self.ticks.load(Ordering::Acquire)
    }

    #[inline]
    pub fn reset(&self) {
        self.ticks.store(0, Ordering::Release);
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt rate of the tick timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickRate {
    /// One tick per millisecond.
    Millisecond,
    /// 64 kHz, one tick every 15.625 µs.
    Fast,
}

impl TickRate {
    #[inline]
    pub fn hz(self) -> u32 {
        match self {
            TickRate::Millisecond => TICK_HZ_MILLIS,
            TickRate::Fast => TICK_HZ_FAST,
        }
    }

    /// Tick period, truncated to whole nanoseconds.
    #[inline]
    pub fn period_ns(self) -> u32 {
        1_000_000_000 / self.hz()
    }

    /// Number of ticks covering `ns` nanoseconds, rounded up.
    pub fn ticks_for_ns(self, ns: u64) -> u32 {
        let ticks = (ns * self.hz() as u64).div_ceil(1_000_000_000);
        ticks.min(u32::MAX as u64) as u32
    }
}

/// A hardware timer able to fire a periodic interrupt.
///
/// The interrupt handler is expected to call [`TickCounter::tick`] once per period.
pub trait TickTimer {
    /// Start the timer and enable its periodic interrupt at `rate`.
    fn start(&mut self, rate: TickRate);

    /// Disable the interrupt and halt the timer.
    fn stop(&mut self);
}
