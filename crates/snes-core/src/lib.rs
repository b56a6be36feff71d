//! Capability contract and shared types for driving a SNES emulation core.
//!
//! The stepping core itself (CPU/PPU/APU cycle emulation) lives elsewhere.
//! This crate defines the narrow interface the control layer consumes, so
//! the sequencing logic can be driven against any conforming core — a real
//! machine or a scripted test double.

mod button;
mod log;
mod machine;

pub use button::Button;
pub use log::{CoreLog, NullLog};
pub use machine::{SCREEN_HEIGHT, SCREEN_WIDTH, SnesCore};
