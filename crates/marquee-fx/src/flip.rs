#![forbid(unsafe_code)]

//! Flip-card and hover transitions for showcase cards.
//!
//! A card has a front face (title, embedded media) and a back face
//! (description, links). Pressing toggles a timed rotation between them;
//! hovering a link blends its tint. Both are thin state machines over a
//! [`Toggle`]: the engine reports angles and blend factors, the host applies
//! the transform and colors.

use std::time::Duration;

use marquee_core::{Animation, Toggle};

/// Default full flip duration.
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(500);
/// Default hover blend duration.
pub const DEFAULT_HOVER_DURATION: Duration = Duration::from_millis(200);

/// Axis the card rotates around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipAxis {
    /// Rotate around the horizontal axis (top-over-bottom).
    X,
    /// Rotate around the vertical axis (left-over-right).
    #[default]
    Y,
}

/// Press-to-flip card engine.
///
/// The front face rotates from 0 to 180 degrees as the card flips; the back
/// face rotates from 180 to 360 so it lands upright. Re-toggling mid-flip
/// reverses the rotation from its current angle.
#[derive(Debug, Clone, Copy)]
pub struct FlipCard {
    rotation: Toggle,
    axis: FlipAxis,
}

impl Default for FlipCard {
    fn default() -> Self {
        Self::new()
    }
}

impl FlipCard {
    /// Create an unflipped card with the default duration and axis.
    pub fn new() -> Self {
        Self {
            rotation: Toggle::new(DEFAULT_FLIP_DURATION),
            axis: FlipAxis::default(),
        }
    }

    /// Set the full flip duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        let target = self.rotation.target();
        self.rotation = Toggle::new(duration);
        self.rotation.set_target(target);
        self
    }

    /// Set the rotation axis.
    #[must_use]
    pub fn axis(mut self, axis: FlipAxis) -> Self {
        self.axis = axis;
        self
    }

    /// The axis the card rotates around.
    pub fn flip_axis(&self) -> FlipAxis {
        self.axis
    }

    /// Flip to the other face.
    pub fn toggle(&mut self) {
        self.rotation.set_target(!self.rotation.target());
    }

    /// Set the face explicitly.
    pub fn set_flipped(&mut self, flipped: bool) {
        self.rotation.set_target(flipped);
    }

    /// The face currently targeted (true = back).
    pub fn is_flipped(&self) -> bool {
        self.rotation.target()
    }

    /// Whether the rotation has settled on its target face.
    pub fn is_settled(&self) -> bool {
        self.rotation.is_settled()
    }

    /// Advance the rotation.
    pub fn tick(&mut self, dt: Duration) {
        self.rotation.tick(dt);
    }

    /// Front-face rotation in degrees: 0 when showing, 180 when flipped away.
    pub fn front_angle(&self) -> f32 {
        self.rotation.value() * 180.0
    }

    /// Back-face rotation in degrees: 180 when hidden, 360 when showing.
    pub fn back_angle(&self) -> f32 {
        180.0 + self.rotation.value() * 180.0
    }
}

/// Hover-driven tint blend for links and buttons.
///
/// Reports a 0.0–1.0 blend factor the host interpolates its colors with:
/// 0.0 is the resting tint, 1.0 the hovered tint.
#[derive(Debug, Clone, Copy)]
pub struct HoverFade {
    fade: Toggle,
}

impl Default for HoverFade {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverFade {
    /// Create an un-hovered fade with the default duration.
    pub fn new() -> Self {
        Self {
            fade: Toggle::new(DEFAULT_HOVER_DURATION),
        }
    }

    /// Set the full blend duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        let target = self.fade.target();
        self.fade = Toggle::new(duration);
        self.fade.set_target(target);
        self
    }

    /// Report a hover-in or hover-out.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.fade.set_target(hovered);
    }

    /// Whether the pointer is currently over the target.
    pub fn is_hovered(&self) -> bool {
        self.fade.target()
    }

    /// Advance the blend.
    pub fn tick(&mut self, dt: Duration) {
        self.fade.tick(dt);
    }

    /// Current blend factor in [0.0, 1.0].
    pub fn blend(&self) -> f32 {
        self.fade.value()
    }
}
