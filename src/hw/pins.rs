// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the sorter board.
//!
//! | Function | Pins |
//! | -------- | ---- |
//! | Push buttons 1..6 | PC0..PC5, pull-up |
//! | Shaft encoder A/B | PC6 / PC7, pull-up |
//! | Stepper coils 0..3 | PE4..PE7 |
//! | Debug USART1 | PA9 (TX) / PA10 (RX) |

use stm32f7xx_hal::{
    gpio::{gpioa, Alternate},
    pac,
    prelude::*,
};

use super::gpio::{PortCInput, PortEOutput};
use crate::config::BUTTON_COUNT;

/// All board pins. Construct this once at startup:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub buttons: [PortCInput; BUTTON_COUNT],
    pub encoder: EncoderPins,
    pub coils: [PortEOutput; 4],
    pub usart1: Usart1Pins,
}

pub struct EncoderPins {
    pub a: PortCInput,
    pub b: PortCInput,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpioc: pac::GPIOC, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpioc = gpioc.split();
        let gpioe = gpioe.split();

        Self {
            buttons: [
                PortCInput::new(gpioc.pc0.into_pull_up_input()),
                PortCInput::new(gpioc.pc1.into_pull_up_input()),
                PortCInput::new(gpioc.pc2.into_pull_up_input()),
                PortCInput::new(gpioc.pc3.into_pull_up_input()),
                PortCInput::new(gpioc.pc4.into_pull_up_input()),
                PortCInput::new(gpioc.pc5.into_pull_up_input()),
            ],

            encoder: EncoderPins {
                a: PortCInput::new(gpioc.pc6.into_pull_up_input()),
                b: PortCInput::new(gpioc.pc7.into_pull_up_input()),
            },

            coils: [
                PortEOutput::new(gpioe.pe4.into_push_pull_output()),
                PortEOutput::new(gpioe.pe5.into_push_pull_output()),
                PortEOutput::new(gpioe.pe6.into_push_pull_output()),
                PortEOutput::new(gpioe.pe7.into_push_pull_output()),
            ],

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },
        }
    }
}
