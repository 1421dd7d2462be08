//! Animation support for Swiperow.
//!
//! Time-based tweens with easing curves, driven by a host-pumped frame
//! clock. Nothing here spawns threads or sleeps: the host calls
//! [`FrameClock::drain_frame_callbacks`] once per frame with the frame
//! timestamp and every running [`Transition`] steps forward.

mod clock;
mod easing;
mod transition;

pub use clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use easing::Easing;
pub use transition::{AnimationSpec, Transition};
