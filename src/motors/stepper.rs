// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Open-loop stepper sequencing on four coil outputs.
//!
//! Each step drives the next coil pattern of a [`StepSequence`] and holds it for the step
//! interval. Clockwise walks toward higher coil indices. Coils stay energized after a move to
//! keep holding torque until [`Stepper::release`] is called.
//!
//! The delay is passed to each call so the same timer can serve other users between moves.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use micromath::F32Ext;

use crate::config::{DEGREES_PER_STEP, STEP_INTERVAL_MS};

const WAVE: [u8; 4] = [0b0001, 0b0010, 0b0100, 0b1000];
const FULL: [u8; 4] = [0b0011, 0b0110, 0b1100, 0b1001];
const HALF: [u8; 8] = [
    0b0001, 0b0011, 0b0010, 0b0110, 0b0100, 0b1100, 0b1000, 0b1001,
];

/// Rotation direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Map `1` to clockwise and `-1` to counter-clockwise. Anything else is not a direction.
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Direction::Clockwise),
            -1 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Coil energizing pattern.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepSequence {
    /// One coil at a time.
    Wave,
    /// Two adjacent coils at a time; more torque, twice the current.
    FullStep,
    /// Alternates one and two coils; eight phases per electrical cycle.
    HalfStep,
}

impl StepSequence {
    /// Coil patterns in clockwise order, coil 0 in bit 0.
    pub fn table(self) -> &'static [u8] {
        match self {
            StepSequence::Wave => &WAVE,
            StepSequence::FullStep => &FULL,
            StepSequence::HalfStep => &HALF,
        }
    }

    /// Phases advanced per full mechanical step.
    #[inline]
    pub fn phases_per_step(self) -> u32 {
        match self {
            StepSequence::HalfStep => 2,
            _ => 1,
        }
    }
}

/// Four-coil stepper on GPIO outputs.
pub struct Stepper<P> {
    coils: [P; 4],
    sequence: StepSequence,
    /// Index into `sequence.table()` of the pattern last driven.
    phase: usize,
    /// Phases moved since `init`, clockwise positive.
    position: i32,
    step_interval_ms: u32,
}

impl<P: OutputPin> Stepper<P> {
    /// Wrap the coil outputs, coil 0 first. Nothing is driven until `init` or a move.
    pub fn new(coils: [P; 4]) -> Self {
        let sequence = StepSequence::Wave;
        Self {
            coils,
            sequence,
            phase: sequence.table().len() - 1,
            position: 0,
            step_interval_ms: STEP_INTERVAL_MS,
        }
    }

    /// Select the coil sequence.
    pub fn with_sequence(mut self, sequence: StepSequence) -> Self {
        self.sequence = sequence;
        self.phase = sequence.table().len() - 1;
        self
    }

    /// Set how long each phase is held.
    pub fn with_step_interval_ms(mut self, ms: u32) -> Self {
        self.step_interval_ms = ms;
        self
    }

    /// Pull the rotor onto the home phase, then de-energize.
    ///
    /// The home phase is the last pattern of the sequence, so the first clockwise step
    /// lands on the first pattern. Position is zeroed.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), P::Error> {
        self.phase = self.sequence.table().len() - 1;
        self.position = 0;

        self.drive(self.pattern())?;
        delay.delay_ms(self.step_interval_ms);
        self.release()
    }

    /// Advance one phase in `direction` and hold it for the step interval.
    pub fn step<D: DelayNs>(
        &mut self,
        delay: &mut D,
        direction: Direction,
    ) -> Result<(), P::Error> {
        let len = self.sequence.table().len();
        self.phase = match direction {
            Direction::Clockwise => (self.phase + 1) % len,
            Direction::CounterClockwise => (self.phase + len - 1) % len,
        };
        self.position = self.position.wrapping_add(direction.sign());

        self.drive(self.pattern())?;
        delay.delay_ms(self.step_interval_ms);
        Ok(())
    }

    /// Turn `steps` phases in `direction`. 200 wave or full steps make one revolution.
    pub fn move_steps<D: DelayNs>(
        &mut self,
        delay: &mut D,
        steps: u32,
        direction: Direction,
    ) -> Result<(), P::Error> {
        for _ in 0..steps {
            self.step(delay, direction)?;
        }
        Ok(())
    }

    /// Turn by an angle in degrees, positive clockwise. Rounded to the nearest phase.
    ///
    /// Returns the number of phases moved.
    pub fn move_degrees<D: DelayNs>(
        &mut self,
        delay: &mut D,
        degrees: f32,
    ) -> Result<u32, P::Error> {
        let steps = self.steps_for_degrees(degrees);
        let direction = if degrees < 0.0 {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        };
        self.move_steps(delay, steps, direction)?;
        Ok(steps)
    }

    /// Phases needed to turn `degrees` with the current sequence.
    pub fn steps_for_degrees(&self, degrees: f32) -> u32 {
        let per_phase = DEGREES_PER_STEP / self.sequence.phases_per_step() as f32;
        // micromath rounding on host and target alike.
        F32Ext::round(F32Ext::abs(degrees) / per_phase) as u32
    }

    /// De-energize all coils.
    pub fn release(&mut self) -> Result<(), P::Error> {
        self.drive(0)
    }

    /// Coil pattern of the current phase.
    #[inline]
    pub fn pattern(&self) -> u8 {
        self.sequence.table()[self.phase]
    }

    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[inline]
    pub fn sequence(&self) -> StepSequence {
        self.sequence
    }

    pub fn free(self) -> [P; 4] {
        self.coils
    }

    fn drive(&mut self, pattern: u8) -> Result<(), P::Error> {
        for (i, coil) in self.coils.iter_mut().enumerate() {
            coil.set_state(PinState::from(pattern & (1 << i) != 0))?;
        }
        Ok(())
    }
}
