// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bench firmware: buttons and the knob drive the stepper, events go to the debug USART.
//!
//! | Input | Action |
//! | ----- | ------ |
//! | Button 1 / 2 | Quarter turn clockwise / counter-clockwise |
//! | Button 3 | Full revolution clockwise |
//! | Button 4 | Re-home the stepper |
//! | Button 5 | Zero the knob position |
//! | Button 6 | Release the coils |
//! | Knob click | One step in the same direction |

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use sorter_util::{
    config::{DEBUG_BAUD, STEPS_PER_REV},
    hw::{BoardPins, Tim2Ticker, Usart},
    input::{PushButtons, Rotation, ShaftEncoder},
    motors::{Direction, Stepper},
    timing::{TickCounter, TickDelay},
};

static TICKS: TickCounter = TickCounter::new();

#[interrupt]
fn TIM2() {
    Tim2Ticker::on_interrupt(&TICKS);
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOE);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);

    // Tick timer
    let ticker = Tim2Ticker::new(dp.TIM2, clocks.timclk1().raw());
    let mut delay = TickDelay::new(ticker, &TICKS);

    let mut buttons = PushButtons::new(pins.buttons);
    let mut encoder = ShaftEncoder::new(pins.encoder.a, pins.encoder.b);
    let mut stepper = Stepper::new(pins.coils);

    stepper.init(&mut delay).ok();
    usart.println("sorter-util ready");

    loop {
        let rotation = encoder.read().unwrap_or(Rotation::Still);
        if let Some(direction) = Direction::from_sign(rotation.delta() as i32) {
            stepper.step(&mut delay, direction).ok();
            usart.log_rotation(rotation, encoder.position());
        }

        let Some(button) = buttons.poll_press().unwrap_or(None) else {
            continue;
        };
        usart.log_button(button);

        let moved = match button {
            1 => stepper.move_steps(&mut delay, STEPS_PER_REV / 4, Direction::Clockwise),
            2 => stepper.move_steps(&mut delay, STEPS_PER_REV / 4, Direction::CounterClockwise),
            3 => stepper.move_steps(&mut delay, STEPS_PER_REV, Direction::Clockwise),
            4 => stepper.init(&mut delay),
            5 => {
                encoder.reset();
                Ok(())
            }
            _ => stepper.release(),
        };
        if moved.is_ok() {
            usart.log_stepper(stepper.position(), stepper.pattern());
        }
    }
}
