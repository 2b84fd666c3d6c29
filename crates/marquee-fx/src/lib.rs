#![forbid(unsafe_code)]

//! Presentation-effect engines.
//!
//! Small, deterministic state machines that turn a host-driven stream of
//! timer ticks and scroll samples into display state:
//!
//! - [`Typewriter`] — repeating type/pause/delete/pause cycle over a phrase
//!   list, with an independent blinking cursor.
//! - [`ScrollVisibility`] — edge-triggered "scrolled to bottom" signal for
//!   reveal-on-scroll footers.
//! - [`FlipCard`] and [`HoverFade`] — press-to-flip and hover-tint
//!   transitions for showcase cards.
//!
//! The engines never render, never block, and hold no shared state; each
//! screen owns its instances and drops them to dispose. Rendering, timers,
//! and input all belong to the host.
//!
//! # Example
//!
//! ```
//! use marquee_fx::{Typewriter, TypewriterConfig};
//!
//! let mut tw = Typewriter::new(["Hello"], TypewriterConfig::default()).unwrap();
//! let snap = tw.step();
//! assert_eq!(snap.text, "H");
//! ```

pub mod flip;
pub mod scroll;
pub mod typewriter;

pub use flip::{FlipAxis, FlipCard, HoverFade};
pub use scroll::{ScrollSample, ScrollVisibility, VisibilityEdge};
pub use typewriter::{Mode, Snapshot, Typewriter, TypewriterConfig};
