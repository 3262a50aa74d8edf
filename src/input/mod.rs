// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Operator Inputs
//!
//! Polled inputs from the front panel. Both are active-low switches on pull-up inputs.
//!
//! ## Modules
//!
//! - [`buttons`] - Bank of push buttons, highest position wins.
//! - [`shaft_encoder`] - Two-channel detented rotary knob.

pub mod buttons;
pub mod shaft_encoder;

pub use buttons::PushButtons;
pub use shaft_encoder::{Rotation, ShaftEncoder};
