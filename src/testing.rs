// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side stand-ins for pins, delays and the tick timer.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::timing::{TickCounter, TickRate, TickTimer};

/// Input pin whose level is set by the test through a cloned handle.
#[derive(Clone, Default)]
pub struct MockInput {
    high: Rc<Cell<bool>>,
}

impl MockInput {
    pub fn high() -> Self {
        let pin = Self::default();
        pin.set_high(true);
        pin
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }
}

impl ErrorType for MockInput {
    type Error = Infallible;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

/// Output pin that remembers its level and how often it was driven.
#[derive(Clone, Default)]
pub struct MockOutput {
    high: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MockOutput {
    pub fn is_set(&self) -> bool {
        self.high.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ErrorType for MockOutput {
    type Error = Infallible;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Pack four coil outputs into a nibble, coil 0 in bit 0.
pub fn coil_pattern(coils: &[MockOutput; 4]) -> u8 {
    coils
        .iter()
        .enumerate()
        .fold(0, |acc, (i, c)| acc | ((c.is_set() as u8) << i))
}

/// Delay that only records what it was asked to wait.
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
        self.calls += 1;
    }
}

/// Timer that flips a flag watched by the simulated ISR thread.
pub struct MockTimer<'a> {
    running: &'a AtomicBool,
    pub starts: Vec<TickRate>,
    pub stops: usize,
}

impl<'a> MockTimer<'a> {
    pub fn new(running: &'a AtomicBool) -> Self {
        Self {
            running,
            starts: Vec::new(),
            stops: 0,
        }
    }
}

impl TickTimer for MockTimer<'_> {
    fn start(&mut self, rate: TickRate) {
        self.starts.push(rate);
        self.running.store(true, Ordering::SeqCst);
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Run `f` while a background thread plays the timer ISR: it ticks `counter` whenever the
/// timer has been started.
pub fn with_ticking_isr<R>(
    counter: &TickCounter,
    f: impl FnOnce(&AtomicBool) -> R,
) -> R {
    let running = AtomicBool::new(false);
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            while !done.load(Ordering::SeqCst) {
                if running.load(Ordering::SeqCst) {
                    counter.tick();
                }
                thread::yield_now();
            }
        });

        let out = f(&running);
        done.store(true, Ordering::SeqCst);
        out
    })
}
