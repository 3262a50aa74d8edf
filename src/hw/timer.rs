// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIM2 as the delay tick timer.
//!
//! The timer runs with no prescaler and reloads at `timer_clk / rate`, raising an update
//! interrupt each period. With a 16 MHz timer clock that is a reload of 16 000 for the
//! millisecond rate and 250 for the fast rate.
//!
//! The application owns the ISR and must call [`Tim2Ticker::on_interrupt`] from it:
//!
//! ```ignore
//! #[interrupt]
//! fn TIM2() {
//!     Tim2Ticker::on_interrupt(&TICKS);
//! }
//! ```

use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac;

use crate::timing::{TickCounter, TickRate, TickTimer};

/// SR flags clear on 0 and ignore 1: write every bit but UIF high, never read-modify-write.
#[inline]
fn clear_update_flag(tim: &pac::tim2::RegisterBlock) {
    tim.sr.write(|w| unsafe { w.bits(!UIF) });
}

const UIF: u32 = 1 << 0;

pub struct Tim2Ticker {
    tim: pac::TIM2,
    clk_hz: u32,
}

impl Tim2Ticker {
    /// Power TIM2, leave it halted, and unmask its interrupt in the NVIC.
    ///
    /// `timer_clk_hz` is the APB1 timer clock.
    pub fn new(tim2: pac::TIM2, timer_clk_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;
        tim.cr1.modify(|_, w| w.cen().clear_bit());
        tim.dier.modify(|_, w| w.uie().clear_bit());
        clear_update_flag(&tim);

        unsafe { NVIC::unmask(pac::Interrupt::TIM2) };

        Self {
            tim,
            clk_hz: timer_clk_hz,
        }
    }

    /// Acknowledge the update interrupt and count one tick.
    #[inline]
    pub fn on_interrupt(ticks: &TickCounter) {
        let tim = unsafe { &*pac::TIM2::ptr() };
        clear_update_flag(tim);
        ticks.tick();
    }

    /// Release the timer peripheral.
    pub fn free(mut self) -> pac::TIM2 {
        self.stop();
        self.tim
    }
}

impl TickTimer for Tim2Ticker {
    fn start(&mut self, rate: TickRate) {
        let reload = (self.clk_hz / rate.hz()).saturating_sub(1);

        // Halt while reconfiguring
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());

        self.tim.psc.write(|w| unsafe { w.bits(0) });
        self.tim.arr.write(|w| w.bits(reload));
        self.tim.cnt.write(|w| w.bits(0));

        // Latch PSC, then drop the update flag that UG raised
        self.tim.egr.write(|w| w.ug().set_bit());
        clear_update_flag(&self.tim);

        self.tim.dier.modify(|_, w| w.uie().set_bit());
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }

    fn stop(&mut self) {
        self.tim.dier.modify(|_, w| w.uie().clear_bit());
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
    }
}
