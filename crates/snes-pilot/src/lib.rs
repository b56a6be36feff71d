//! Frame-stepped automation layer for a SNES emulation core.
//!
//! Sits between an automation client and a cycle-stepped core: translates
//! discrete intents ("press A for 25 frames", "load this ROM", "show me
//! the screen") into precise sequences of frame advances, then extracts
//! the rendered frame as a PNG still. The core itself is consumed through
//! the `snes-core` capability contract, so the sequencing logic runs
//! against any conforming implementation.

mod capture;
mod config;
mod error;
mod logging;
mod session;

pub use capture::{FrameCapture, FrameImage};
pub use config::{DEFAULT_PRIMING_FRAMES, SessionConfig};
pub use error::SessionError;
pub use logging::FacadeLog;
pub use session::Session;

pub use snes_core::{Button, SnesCore};
