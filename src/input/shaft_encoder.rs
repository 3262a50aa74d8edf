// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Detented two-channel shaft encoder.
//!
//! Both switches read high while the knob rests in a groove. Leaving a groove, the channel that
//! drops first gives the direction: B low with A still high is a clockwise click, A low with B
//! still high is counter-clockwise. Only the first transition out of a groove counts, so
//! [`ShaftEncoder::read`] has to be polled faster than the knob can be turned through a
//! whole click.

use embedded_hal::digital::InputPin;

const A_HIGH: u8 = 0b01;
const B_HIGH: u8 = 0b10;
const DETENT: u8 = A_HIGH | B_HIGH;

/// Movement seen by one encoder poll.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    Still,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Signed click count: 0, +1 or -1.
    #[inline]
    pub fn delta(self) -> i8 {
        match self {
            Rotation::Still => 0,
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => -1,
        }
    }
}

impl From<Rotation> for i8 {
    fn from(r: Rotation) -> Self {
        r.delta()
    }
}

/// Shaft encoder on two input channels.
pub struct ShaftEncoder<A, B> {
    a: A,
    b: B,
    /// Channel levels from the previous poll, A in bit 0 and B in bit 1.
    previous: u8,
    position: i32,
}

impl<A, B> ShaftEncoder<A, B>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    /// Wrap both channels. The knob is assumed to start in a groove.
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            previous: DETENT,
            position: 0,
        }
    }

    /// Sample both channels and compare with the previous sample.
    pub fn read(&mut self) -> Result<Rotation, A::Error> {
        let mut now = 0;
        if self.a.is_high()? {
            now |= A_HIGH;
        }
        if self.b.is_high()? {
            now |= B_HIGH;
        }

        let rotation = if self.previous == DETENT {
            match now {
                A_HIGH => Rotation::Clockwise,
                B_HIGH => Rotation::CounterClockwise,
                _ => Rotation::Still,
            }
        } else {
            Rotation::Still
        };

        self.previous = now;
        self.position = self.position.wrapping_add(rotation.delta() as i32);

        Ok(rotation)
    }

    /// Clicks accumulated since construction or the last `reset`.
    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Zero the accumulated position.
    #[inline]
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn free(self) -> (A, B) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockInput;

    fn encoder() -> (MockInput, MockInput, ShaftEncoder<MockInput, MockInput>) {
        let a = MockInput::high();
        let b = MockInput::high();
        let enc = ShaftEncoder::new(a.clone(), b.clone());
        (a, b, enc)
    }

    /// Drive the channels through `seq` and sum the clicks reported.
    fn click(
        a: &MockInput,
        b: &MockInput,
        enc: &mut ShaftEncoder<MockInput, MockInput>,
        seq: &[(bool, bool)],
    ) -> i32 {
        let mut sum = 0;
        for &(ah, bh) in seq {
            a.set_high(ah);
            b.set_high(bh);
            sum += enc.read().unwrap().delta() as i32;
        }
        sum
    }

    const CW: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (true, true)];
    const CCW: [(bool, bool); 4] = [(false, true), (false, false), (true, false), (true, true)];

    #[test]
    fn resting_knob_is_still() {
        let (_a, _b, mut enc) = encoder();
        assert_eq!(enc.read().unwrap(), Rotation::Still);
        assert_eq!(enc.read().unwrap(), Rotation::Still);
        assert_eq!(enc.position(), 0);
    }

    #[test]
    fn b_dropping_first_is_clockwise() {
        let (_a, b, mut enc) = encoder();
        b.set_high(false);
        assert_eq!(enc.read().unwrap(), Rotation::Clockwise);
        assert_eq!(i8::from(Rotation::Clockwise), 1);
    }

    #[test]
    fn a_dropping_first_is_counter_clockwise() {
        let (a, _b, mut enc) = encoder();
        a.set_high(false);
        assert_eq!(enc.read().unwrap(), Rotation::CounterClockwise);
    }

    #[test]
    fn full_click_counts_once() {
        let (a, b, mut enc) = encoder();

        assert_eq!(click(&a, &b, &mut enc, &CW), 1);
        assert_eq!(click(&a, &b, &mut enc, &CW), 1);
        assert_eq!(click(&a, &b, &mut enc, &CCW), -1);
        assert_eq!(enc.position(), 1);

        enc.reset();
        assert_eq!(enc.position(), 0);
    }

    #[test]
    fn both_channels_dropping_together_is_ignored() {
        let (a, b, mut enc) = encoder();
        a.set_high(false);
        b.set_high(false);
        assert_eq!(enc.read().unwrap(), Rotation::Still);
    }

    #[test]
    fn transition_outside_a_groove_is_ignored() {
        let (a, b, mut enc) = encoder();

        // Missed the groove: first poll already sees both low.
        a.set_high(false);
        b.set_high(false);
        enc.read().unwrap();

        a.set_high(true);
        assert_eq!(enc.read().unwrap(), Rotation::Still);
        assert_eq!(enc.position(), 0);
    }
}
