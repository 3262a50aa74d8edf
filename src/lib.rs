// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Sorter Utilities
//!
//! Low-level helpers for the object counting and size discrimination rig: a timer-driven
//! millisecond delay, push-button and shaft-encoder polling, and open-loop stepper sequencing.
//! The logic is written against `embedded-hal` traits; the STM32F7 bindings live in [`hw`]
//! behind the `board` feature.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`timing`] | Interrupt tick counter and busy-wait delay |
//! | [`input`] | Push buttons and shaft encoder |
//! | [`motors`] | Four-coil stepper sequencing |
//! | [`config`] | Board and timing constants |
//! | `hw` | STM32F7 register-level bindings (feature `board`) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod input;
pub mod motors;
pub mod timing;

#[cfg(feature = "board")]
pub mod hw;

#[cfg(test)]
mod testing;
