// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Timing
//!
//! A hardware timer interrupt increments a [`TickCounter`]; [`TickDelay`] busy-waits on it.
//!
//! ## Modules
//!
//! - [`tick`] - Tick counter, tick rates and the `TickTimer` hardware seam.
//! - [`delay`] - Blocking delays built on the tick counter.

pub mod delay;
pub mod tick;

pub use delay::TickDelay;
pub use tick::{TickCounter, TickRate, TickTimer};
