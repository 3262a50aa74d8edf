// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! ## Modules
//!
//! - [`stepper`] - Open-loop four-coil unipolar stepper driven straight from GPIO.

pub mod stepper;

pub use stepper::{Direction, StepSequence, Stepper};
