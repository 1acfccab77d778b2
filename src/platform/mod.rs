//! Platform layer for the native host
//!
//! Handles:
//! - Frame timing (`clock`)
//! - Keyboard sampling into held-key input (`input`)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{HostCommand, KeyTracker};
