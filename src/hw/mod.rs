// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F7 bindings for the sorter board.

pub mod gpio;
pub mod pins;
pub mod timer;
pub mod usart;

pub use gpio::{PortCInput, PortEOutput};
pub use pins::BoardPins;
pub use timer::Tim2Ticker;
pub use usart::Usart;
