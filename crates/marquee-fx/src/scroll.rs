#![forbid(unsafe_code)]

//! Scroll-triggered visibility.
//!
//! Turns a stream of scroll-metric samples into an edge-triggered show/hide
//! signal for reveal-at-bottom content such as a page footer.
//! The engine only detects the edge; animating opacity toward the new state
//! is the host's job, typically with a [`marquee_core::Toggle`] over 300 ms.

/// Default distance from the bottom, in scroll units, within which content
/// counts as "at bottom".
pub const DEFAULT_BOTTOM_SLACK: f32 = 20.0;

/// One scroll reading, as reported by the host's scroll source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Height of the visible viewport.
    pub viewport_height: f32,
    /// Distance scrolled from the top.
    pub scroll_offset: f32,
    /// Total height of the scrollable content.
    pub content_height: f32,
}

impl ScrollSample {
    /// A sample is well-formed when every field is a non-negative number.
    fn is_well_formed(&self) -> bool {
        self.viewport_height >= 0.0 && self.scroll_offset >= 0.0 && self.content_height >= 0.0
    }
}

/// A visibility transition: emitted only when the at-bottom predicate
/// changes value between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEdge {
    /// Content scrolled to the bottom; fade the target in.
    Shown,
    /// Content left the bottom; fade the target out.
    Hidden,
}

/// Edge-triggered scroll-visibility engine.
#[derive(Debug, Clone, Copy)]
pub struct ScrollVisibility {
    visible: bool,
    slack: f32,
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollVisibility {
    /// Create an engine that starts hidden, with the default bottom slack.
    pub fn new() -> Self {
        Self {
            visible: false,
            slack: DEFAULT_BOTTOM_SLACK,
        }
    }

    /// Set the at-bottom slack distance.
    #[must_use]
    pub fn slack(mut self, slack: f32) -> Self {
        self.slack = slack;
        self
    }

    /// Currently reported visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one scroll reading.
    ///
    /// Returns an edge only when the at-bottom predicate flips relative to
    /// the current state; repeated readings on the same side emit nothing,
    /// so the host's fade is never restarted redundantly. Malformed samples
    /// (negative or NaN fields) are ignored outright: no state change, no
    /// event.
    pub fn on_sample(&mut self, sample: ScrollSample) -> Option<VisibilityEdge> {
        if !sample.is_well_formed() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?sample, "ignoring malformed scroll sample");
            return None;
        }

        let at_bottom =
            sample.viewport_height + sample.scroll_offset >= sample.content_height - self.slack;
        if at_bottom == self.visible {
            return None;
        }

        self.visible = at_bottom;
        #[cfg(feature = "tracing")]
        tracing::trace!(visible = self.visible, "scroll visibility edge");
        Some(if at_bottom {
            VisibilityEdge::Shown
        } else {
            VisibilityEdge::Hidden
        })
    }
}
