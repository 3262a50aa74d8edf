// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Push-button bank.
//!
//! Buttons pull their input low when pressed. Position 1 is the rightmost button (pin index 0).
//! When several buttons are held at once the highest position is reported.

use embedded_hal::digital::InputPin;

/// `N` active-low push buttons sharing one pin type.
pub struct PushButtons<P, const N: usize> {
    pins: [P; N],
    /// Buttons held at the previous `poll_press`.
    held: u8,
}

impl<P: InputPin, const N: usize> PushButtons<P, N> {
    const FITS_MASK: () = assert!(N >= 1 && N <= 8, "button bank holds 1 to 8 buttons");

    pub fn new(pins: [P; N]) -> Self {
        let () = Self::FITS_MASK;
        Self { pins, held: 0 }
    }

    /// Position of the pressed button, `1..=N`, or `None` if nothing is pressed.
    pub fn read(&mut self) -> Result<Option<u8>, P::Error> {
        for i in (0..N).rev() {
            if self.pins[i].is_low()? {
                return Ok(Some(i as u8 + 1));
            }
        }
        Ok(None)
    }

    /// Bitmask of all held buttons; bit `i` is button `i + 1`.
    pub fn pressed_mask(&mut self) -> Result<u8, P::Error> {
        let mut mask = 0u8;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            if pin.is_low()? {
                mask |= 1 << i;
            }
        }
        Ok(mask)
    }

    /// Report a button once, when it goes down.
    ///
    /// Only buttons that were released at the previous poll count; of those the highest
    /// position wins. A held button is never reported again until it is released.
    pub fn poll_press(&mut self) -> Result<Option<u8>, P::Error> {
        let now = self.pressed_mask()?;
        let fresh = now & !self.held;
        self.held = now;

        if fresh == 0 {
            return Ok(None);
        }
        Ok(Some(8 - fresh.leading_zeros() as u8))
    }

    pub fn free(self) -> [P; N] {
        self.pins
    }
}
