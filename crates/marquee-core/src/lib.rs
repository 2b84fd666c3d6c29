#![forbid(unsafe_code)]

//! Timing and animation primitives shared by the marquee effect engines.
//!
//! Everything here is a pure state machine over elapsed time: callers feed
//! `Duration` deltas in and read values out. No threads, no timers, no I/O.
//! The host owns the clock and decides when (and whether) to tick.

pub mod animation;
pub mod easing;
pub mod error;

pub use animation::{Animation, Blink, Fade, Toggle};
pub use error::ConfigError;
