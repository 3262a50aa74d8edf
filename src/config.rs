// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board and timing constants.

/// Tick rate used by millisecond delays.
pub const TICK_HZ_MILLIS: u32 = 1_000;

/// Tick rate of the "fast" timer unit (16 MHz, prescaler 1, compare at 250).
pub const TICK_HZ_FAST: u32 = 64_000;

/// Hold time between stepper phases.
pub const STEP_INTERVAL_MS: u32 = 2;

/// Full steps per output revolution (1.8° motor).
pub const STEPS_PER_REV: u32 = 200;

/// Degrees turned by one full step.
pub const DEGREES_PER_STEP: f32 = 360.0 / STEPS_PER_REV as f32;

/// Number of push buttons wired on the panel.
pub const BUTTON_COUNT: usize = 6;

/// Debug USART baud rate.
pub const DEBUG_BAUD: u32 = 115_200;
