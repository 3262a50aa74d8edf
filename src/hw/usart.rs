// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking debug output over USART.
//!
//! Lines end in CRLF. When using `writeln!`, include `\r` in the format string.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```

use core::fmt::{self, Write as _};
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

use crate::input::Rotation;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Report a button press.
    pub fn log_button(&mut self, position: u8) {
        let _ = write!(self, "button {}\r\n", position);
    }

    /// Report an encoder click and the resulting knob position.
    pub fn log_rotation(&mut self, rotation: Rotation, position: i32) {
        let dir = match rotation {
            Rotation::Clockwise => "cw",
            Rotation::CounterClockwise => "ccw",
            Rotation::Still => return,
        };
        let _ = write!(self, "encoder {} pos={}\r\n", dir, position);
    }

    /// Report where the stepper ended up.
    pub fn log_stepper(&mut self, position: i32, pattern: u8) {
        let _ = write!(self, "stepper pos={} coils={:04b}\r\n", position, pattern);
    }
}

impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
