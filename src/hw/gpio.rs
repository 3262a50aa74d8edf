// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-bit port pins with one type per port.
//!
//! HAL pins carry their number in the type, which keeps them out of arrays. These wrappers take
//! a configured HAL pin, remember only its bit, and access the port registers directly: IDR for
//! reads and BSRR for atomic set/reset, so neighbouring pins on the port are never disturbed.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use stm32f7xx_hal::{
    gpio::{self, Input, Output, PullUp, PushPull},
    pac,
};

/// Pull-up input on GPIOC.
pub struct PortCInput {
    mask: u32,
}

impl PortCInput {
    pub fn new<const N: u8>(_pin: gpio::Pin<'C', N, Input<PullUp>>) -> Self {
        Self { mask: 1 << N }
    }

    #[inline]
    fn level(&self) -> bool {
        let gpioc = unsafe { &*pac::GPIOC::ptr() };
        gpioc.idr.read().bits() & self.mask != 0
    }
}

impl ErrorType for PortCInput {
    type Error = Infallible;
}

impl InputPin for PortCInput {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level())
    }
}

/// Push-pull output on GPIOE.
pub struct PortEOutput {
    bit: u8,
}

impl PortEOutput {
    /// Take over a configured output, driving it low.
    pub fn new<const N: u8>(_pin: gpio::Pin<'E', N, Output<PushPull>>) -> Self {
        let mut out = Self { bit: N };
        out.write_bsrr(1 << (N + 16));
        out
    }

    #[inline]
    fn write_bsrr(&mut self, bits: u32) {
        let gpioe = unsafe { &*pac::GPIOE::ptr() };
        gpioe.bsrr.write(|w| unsafe { w.bits(bits) });
    }
}

impl ErrorType for PortEOutput {
    type Error = Infallible;
}

impl OutputPin for PortEOutput {
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.write_bsrr(1 << (self.bit + 16));
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.write_bsrr(1 << self.bit);
        Ok(())
    }
}
