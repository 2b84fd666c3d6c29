#![forbid(unsafe_code)]

//! Composable animation primitives.
//!
//! Time-based animations that produce normalized `f32` values (0.0–1.0).
//! Zero allocation during tick; the host drives them from its frame loop or
//! timer and maps the output onto whatever it renders (opacity, rotation,
//! a cursor glyph).

use std::time::Duration;

use crate::easing::{EasingFn, ease_in_out, linear};

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached a resting state.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion. Returns [`Duration::ZERO`] for
    /// animations that never complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

/// Durations are used as divisors; zero is bumped to the smallest
/// representable span so progress math stays total.
fn non_zero(d: Duration) -> Duration {
    if d.is_zero() { Duration::from_nanos(1) } else { d }
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// One-shot reveal from 0.0 to 1.0 over a duration, with configurable
/// easing. Drives intro reveals: run it once, read [`Animation::value`]
/// until [`Animation::is_complete`].
///
/// Counts the duration down rather than accumulating elapsed time up:
/// `remaining` hits zero exactly on completion, and any time past that
/// point collects in `past_end` for [`Animation::overshoot`]. A host can
/// hand that overshoot to whatever starts next, so the frame that crosses
/// the finish line loses no time.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    duration: Duration,
    remaining: Duration,
    past_end: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a fade with the given duration and default linear easing.
    pub fn new(duration: Duration) -> Self {
        let duration = non_zero(duration);
        Self {
            duration,
            remaining: duration,
            past_end: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let done = self.duration.saturating_sub(self.remaining);
        (done.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        if dt <= self.remaining {
            self.remaining -= dt;
        } else {
            self.past_end = self.past_end.saturating_add(dt - self.remaining);
            self.remaining = Duration::ZERO;
        }
    }

    fn is_complete(&self) -> bool {
        self.remaining.is_zero()
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.remaining = self.duration;
        self.past_end = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.past_end
    }
}

// ---------------------------------------------------------------------------
// Blink
// ---------------------------------------------------------------------------

/// Default blink phase length, matching a text cursor's half-second cadence.
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(500);

/// Fixed-period on/off square wave. Never completes.
///
/// Starts in the "on" phase and flips each time a full period elapses. The
/// remainder of each tick is carried forward, so irregular frame deltas do
/// not drift the phase.
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    period: Duration,
    elapsed: Duration,
    on: bool,
}

impl Default for Blink {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_PERIOD)
    }
}

impl Blink {
    /// Create a blink with the given per-phase period.
    pub fn new(period: Duration) -> Self {
        Self {
            period: non_zero(period),
            elapsed: Duration::ZERO,
            on: true,
        }
    }

    /// Whether the blink is currently in its "on" phase.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Force a phase flip, as a host-driven blink timer would.
    pub fn flip(&mut self) {
        self.on = !self.on;
        self.elapsed = Duration::ZERO;
    }
}

impl Animation for Blink {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        let period = self.period.as_nanos().max(1);
        let flips = self.elapsed.as_nanos() / period;
        if flips > 0 {
            if flips % 2 == 1 {
                self.on = !self.on;
            }
            // Remainder always fits: it is strictly less than the period.
            self.elapsed = Duration::from_nanos((self.elapsed.as_nanos() % period) as u64);
        }
    }

    fn is_complete(&self) -> bool {
        false // Blinks never complete.
    }

    fn value(&self) -> f32 {
        if self.on { 1.0 } else { 0.0 }
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.on = true;
    }
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// Two-way, target-driven fade between 0.0 and 1.0.
///
/// The workhorse behind every "animate toward a boolean" in the engines:
/// footer opacity, hover tint, flip rotation. [`Toggle::set_target`] may be
/// called mid-flight; the value reverses from wherever it currently is, so
/// rapid toggling never jumps or restarts.
///
/// Progress moves linearly at a rate fixed by the configured duration for a
/// full 0-to-1 sweep; easing shapes the output only.
#[derive(Debug, Clone, Copy)]
pub struct Toggle {
    progress: f32,
    target: bool,
    duration: Duration,
    easing: EasingFn,
}

impl Toggle {
    /// Create a toggle resting at 0.0 with the given full-sweep duration.
    /// Defaults to quadratic ease-in-out.
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: 0.0,
            target: false,
            duration: non_zero(duration),
            easing: ease_in_out,
        }
    }

    /// Set the easing function applied to the output.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Set the end the toggle should move toward.
    pub fn set_target(&mut self, target: bool) {
        self.target = target;
    }

    /// The end currently being moved toward.
    pub fn target(&self) -> bool {
        self.target
    }

    /// Whether the value has settled at its target end.
    pub fn is_settled(&self) -> bool {
        if self.target {
            self.progress >= 1.0
        } else {
            self.progress <= 0.0
        }
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        self.progress
    }
}

impl Animation for Toggle {
    fn tick(&mut self, dt: Duration) {
        let rate = (dt.as_secs_f64() / self.duration.as_secs_f64()) as f32;
        if self.target {
            self.progress = (self.progress + rate).min(1.0);
        } else {
            self.progress = (self.progress - rate).max(0.0);
        }
    }

    fn is_complete(&self) -> bool {
        self.is_settled()
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress)
    }

    fn reset(&mut self) {
        self.progress = 0.0;
        self.target = false;
    }
}
