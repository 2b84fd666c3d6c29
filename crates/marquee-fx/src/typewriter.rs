#![forbid(unsafe_code)]

//! Typewriter text animator.
//!
//! Cycles through a phrase list forever: type the phrase one grapheme at a
//! time, hold it, delete it one grapheme at a time, hold the empty line,
//! advance to the next phrase. A blinking cursor runs on its own fixed
//! 500 ms cadence, independent of the type/delete machinery.
//!
//! The engine exposes two driving styles:
//!
//! - [`Typewriter::step`] performs exactly one scheduling step. Hosts with a
//!   rearming timer call it on each firing and rearm with
//!   [`Typewriter::interval`], which may change after every step. The cursor
//!   blink is advanced by the interval the host just waited.
//! - [`Typewriter::tick`] accumulates real frame deltas and performs the
//!   steps that elapsed time covers, advancing the cursor blink as it goes.
//!   Frame-loop hosts call only this.
//!
//! There is a single scheduling path either way: pauses are ordinary modes
//! with their own step interval, not nested timers.

use std::time::Duration;

use marquee_core::{Animation, Blink, ConfigError};
use unicode_segmentation::UnicodeSegmentation;

/// Upper bound on catch-up steps per `tick` call. A host that stalls (or
/// configures zero-length intervals) gets at most this many steps before the
/// remaining backlog is discarded.
const MAX_CATCHUP_STEPS: u32 = 64;

/// Default per-grapheme typing delay.
pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(200);
/// Default per-grapheme deleting delay.
pub const DEFAULT_DELETING_SPEED: Duration = Duration::from_millis(50);
/// Default hold after a phrase is fully typed.
pub const DEFAULT_PAUSE_AFTER_TYPING: Duration = Duration::from_millis(3000);
/// Default hold on the empty line before the next phrase.
pub const DEFAULT_PAUSE_AFTER_DELETING: Duration = Duration::from_millis(500);

/// Timing configuration for a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay between typed graphemes.
    pub typing_speed: Duration,
    /// Delay between deleted graphemes.
    pub deleting_speed: Duration,
    /// How long the fully-typed phrase is held.
    pub pause_after_typing: Duration,
    /// How long the empty line is held before the next phrase.
    pub pause_after_deleting: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_speed: DEFAULT_TYPING_SPEED,
            deleting_speed: DEFAULT_DELETING_SPEED,
            pause_after_typing: DEFAULT_PAUSE_AFTER_TYPING,
            pause_after_deleting: DEFAULT_PAUSE_AFTER_DELETING,
        }
    }
}

/// Phase of the type/delete cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Appending one grapheme per step.
    Typing,
    /// Holding the fully-typed phrase.
    PausedAfterTyping,
    /// Removing one grapheme per step.
    Deleting,
    /// Holding the empty line; the next step advances the phrase.
    PausedAfterDeleting,
}

/// Display state after a step: what to paint and whether the cursor glyph
/// is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Currently visible prefix of the active phrase.
    pub text: &'a str,
    /// Whether the cursor glyph should be painted.
    pub cursor_visible: bool,
}

/// A phrase with precomputed grapheme prefix boundaries, so the visible
/// text is always a zero-copy slice.
#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    /// `prefix_ends[k]` is the byte length of the first `k` graphemes;
    /// `prefix_ends[0]` is 0 and the last entry is `text.len()`.
    prefix_ends: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut prefix_ends = Vec::with_capacity(text.len() + 1);
        prefix_ends.push(0);
        for (start, g) in text.grapheme_indices(true) {
            prefix_ends.push(start + g.len());
        }
        Self { text, prefix_ends }
    }

    /// Number of graphemes.
    fn count(&self) -> usize {
        self.prefix_ends.len() - 1
    }

    /// Prefix containing the first `k` graphemes.
    fn prefix(&self, k: usize) -> &str {
        &self.text[..self.prefix_ends[k]]
    }
}

/// The typewriter engine.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Phrase>,
    config: TypewriterConfig,
    phrase_index: usize,
    /// Graphemes of the active phrase currently shown. Never exceeds the
    /// phrase's grapheme count.
    visible: usize,
    mode: Mode,
    /// Real time accumulated toward the next step (used by [`Typewriter::tick`]).
    elapsed: Duration,
    cursor: Blink,
}

impl Typewriter {
    /// Create an engine over `phrases` with the given timing.
    ///
    /// Fails with [`ConfigError::EmptyPhrases`] if the list is empty. An
    /// empty *phrase* is fine: it contributes zero typing and deleting
    /// steps but still passes through both pause holds.
    pub fn new<I>(phrases: I, config: TypewriterConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let phrases: Vec<Phrase> = phrases
            .into_iter()
            .map(|p| Phrase::new(p.into()))
            .collect();
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }

        let mode = if phrases[0].count() == 0 {
            Mode::PausedAfterTyping
        } else {
            Mode::Typing
        };

        Ok(Self {
            phrases,
            config,
            phrase_index: 0,
            visible: 0,
            mode,
            elapsed: Duration::ZERO,
            cursor: Blink::default(),
        })
    }

    /// Create an engine with the default timing.
    pub fn with_defaults<I>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(phrases, TypewriterConfig::default())
    }

    fn phrase(&self) -> &Phrase {
        &self.phrases[self.phrase_index]
    }

    /// Currently visible prefix of the active phrase. Idempotent; never
    /// advances state.
    pub fn text(&self) -> &str {
        self.phrase().prefix(self.visible)
    }

    /// Whether the cursor glyph is currently visible.
    pub fn cursor_visible(&self) -> bool {
        self.cursor.is_on()
    }

    /// Current cycle phase.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the active phrase.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Current display state without advancing.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            text: self.text(),
            cursor_visible: self.cursor.is_on(),
        }
    }

    /// Delay before the next step, per the current mode. Rearming hosts
    /// must re-read this after every [`Typewriter::step`]: the interval
    /// changes whenever the mode does.
    pub fn interval(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.config.typing_speed,
            Mode::PausedAfterTyping => self.config.pause_after_typing,
            Mode::Deleting => self.config.deleting_speed,
            Mode::PausedAfterDeleting => self.config.pause_after_deleting,
        }
    }

    /// Enter `Typing` for the active phrase, skipping straight to the
    /// post-typing hold when there is nothing to type.
    fn enter_typing(&mut self) {
        if self.phrase().count() == 0 {
            self.set_mode(Mode::PausedAfterTyping);
        } else {
            self.set_mode(Mode::Typing);
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        #[cfg(feature = "tracing")]
        if self.mode != mode {
            tracing::trace!(from = ?self.mode, to = ?mode, "typewriter transition");
        }
        self.mode = mode;
    }

    /// Advance the cycle by exactly one scheduling step and return the
    /// updated display state.
    ///
    /// One step is one grapheme typed or deleted, or one pause hold. The
    /// step that ends the post-deletion hold advances the phrase index and
    /// immediately types the first grapheme of the next phrase.
    ///
    /// A rearming host calling this has, by contract, just waited the full
    /// pre-step [`Typewriter::interval`], so the cursor blink is advanced by
    /// that span here. Frame-loop hosts use [`Typewriter::tick`], which
    /// advances the blink by real dt instead.
    pub fn step(&mut self) -> Snapshot<'_> {
        self.cursor.tick(self.interval());
        self.step_cycle();
        self.snapshot()
    }

    /// One cycle step without touching the cursor; both driving paths end
    /// up here after accounting for blink time their own way.
    fn step_cycle(&mut self) {
        match self.mode {
            Mode::Typing => self.step_typing(),
            Mode::PausedAfterTyping => {
                // Hold elapsed; start deleting. An empty phrase has nothing
                // to delete and falls through to the next hold.
                if self.visible == 0 {
                    self.set_mode(Mode::PausedAfterDeleting);
                } else {
                    self.set_mode(Mode::Deleting);
                }
            }
            Mode::Deleting => {
                if self.visible > 0 {
                    self.visible -= 1;
                }
                if self.visible == 0 {
                    self.set_mode(Mode::PausedAfterDeleting);
                }
            }
            Mode::PausedAfterDeleting => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                #[cfg(feature = "tracing")]
                tracing::trace!(phrase_index = self.phrase_index, "typewriter advanced phrase");
                self.enter_typing();
                if self.mode == Mode::Typing {
                    self.step_typing();
                }
            }
        }
    }

    fn step_typing(&mut self) {
        let count = self.phrase().count();
        if self.visible < count {
            self.visible += 1;
        }
        if self.visible == count {
            self.set_mode(Mode::PausedAfterTyping);
        }
    }

    /// Advance by a real frame delta: runs every step covered by the
    /// accumulated time and ticks the cursor blink.
    ///
    /// Steps are performed strictly in order. Catch-up is bounded; if the
    /// host stalls long enough to owe more than [`MAX_CATCHUP_STEPS`] steps,
    /// the remainder of the backlog is dropped rather than replayed.
    pub fn tick(&mut self, dt: Duration) -> Snapshot<'_> {
        self.cursor.tick(dt);
        self.elapsed = self.elapsed.saturating_add(dt);

        let mut steps = 0;
        loop {
            let interval = self.interval();
            if self.elapsed < interval && !interval.is_zero() {
                break;
            }
            self.elapsed = self.elapsed.saturating_sub(interval);
            self.step_cycle();
            steps += 1;
            if steps >= MAX_CATCHUP_STEPS {
                self.elapsed = Duration::ZERO;
                break;
            }
        }
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config where every step interval is one logical millisecond, so
    /// tests can drive the machine step-by-step.
    fn uniform_config() -> TypewriterConfig {
        TypewriterConfig {
            typing_speed: Duration::from_millis(1),
            deleting_speed: Duration::from_millis(1),
            pause_after_typing: Duration::from_millis(1),
            pause_after_deleting: Duration::from_millis(1),
        }
    }

    fn engine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().copied(), uniform_config()).unwrap()
    }

    // --- Construction tests ---

    #[test]
    fn empty_phrase_list_is_rejected() {
        let phrases: Vec<String> = Vec::new();
        let err = Typewriter::new(phrases, TypewriterConfig::default()).unwrap_err();
        assert_eq!(err, marquee_core::ConfigError::EmptyPhrases);
    }

    #[test]
    fn starts_empty_in_typing_mode() {
        let tw = engine(&["Hi"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn default_config_matches_documented_timing() {
        let config = TypewriterConfig::default();
        assert_eq!(config.typing_speed, Duration::from_millis(200));
        assert_eq!(config.deleting_speed, Duration::from_millis(50));
        assert_eq!(config.pause_after_typing, Duration::from_millis(3000));
        assert_eq!(config.pause_after_deleting, Duration::from_millis(500));
    }

    // --- Step sequence tests ---

    #[test]
    fn two_phrase_step_sequence() {
        let mut tw = engine(&["Hi", "Yo"]);
        let expected = ["H", "Hi", "Hi", "H", "", "Y", "Yo", "Yo", "Y", "", "H"];
        for want in expected {
            assert_eq!(tw.step().text, want);
        }
    }

    #[test]
    fn full_cycle_advances_phrase_index_by_one() {
        let mut tw = engine(&["Hi", "Yo"]);
        // len + 1 (pause) + len + 1 (pause) steps
        for _ in 0..6 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn single_phrase_cycles_without_stalling() {
        let mut tw = engine(&["Hi"]);
        for _ in 0..6 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.text(), "H");
    }

    #[test]
    fn phrase_index_never_skips() {
        let mut tw = engine(&["a", "b", "c"]);
        let mut seen = vec![tw.phrase_index()];
        for _ in 0..40 {
            tw.step();
            if *seen.last().unwrap() != tw.phrase_index() {
                seen.push(tw.phrase_index());
            }
        }
        for pair in seen.windows(2) {
            assert_eq!((pair[0] + 1) % 3, pair[1]);
        }
    }

    #[test]
    fn pause_holds_full_phrase() {
        let mut tw = engine(&["Go"]);
        tw.step(); // "G"
        tw.step(); // "Go" -> PausedAfterTyping
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
        let snap = tw.step(); // hold step
        assert_eq!(snap.text, "Go");
        assert_eq!(tw.mode(), Mode::Deleting);
    }

    #[test]
    fn text_is_idempotent() {
        let mut tw = engine(&["Hello"]);
        tw.step();
        tw.step();
        assert_eq!(tw.text(), tw.text());
        assert_eq!(tw.text(), "He");
    }

    // --- Empty phrase tests ---

    #[test]
    fn empty_phrase_skips_typing() {
        let tw = engine(&[""]);
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn empty_phrase_passes_both_pauses() {
        let mut tw = engine(&["", "Hi"]);
        tw.step(); // hold -> (nothing to delete) PausedAfterDeleting
        assert_eq!(tw.mode(), Mode::PausedAfterDeleting);
        let snap = tw.step(); // advance + type first grapheme of "Hi"
        assert_eq!(snap.text, "H");
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn advancing_into_empty_phrase_skips_typing() {
        let mut tw = engine(&["A", ""]);
        // A: type(1) + pause(1) + delete(1) + pause/advance(1)
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
        assert_eq!(tw.text(), "");
    }

    // --- Grapheme handling tests ---

    #[test]
    fn multibyte_phrase_steps_whole_graphemes() {
        let mut tw = engine(&["héllo"]);
        assert_eq!(tw.step().text, "h");
        assert_eq!(tw.step().text, "hé");
        assert_eq!(tw.step().text, "hél");
    }

    #[test]
    fn combining_marks_stay_attached() {
        // "e" + combining acute is one grapheme, two chars
        let mut tw = engine(&["e\u{301}x"]);
        assert_eq!(tw.step().text, "e\u{301}");
        assert_eq!(tw.step().text, "e\u{301}x");
    }

    #[test]
    fn emoji_phrase_types_and_deletes_cleanly() {
        let mut tw = engine(&["a🦀b"]);
        assert_eq!(tw.step().text, "a");
        assert_eq!(tw.step().text, "a🦀");
        assert_eq!(tw.step().text, "a🦀b");
        tw.step(); // hold
        assert_eq!(tw.step().text, "a🦀");
        assert_eq!(tw.step().text, "a");
        assert_eq!(tw.step().text, "");
    }

    // --- Interval tests ---

    #[test]
    fn interval_follows_mode() {
        let config = TypewriterConfig {
            typing_speed: Duration::from_millis(10),
            deleting_speed: Duration::from_millis(5),
            pause_after_typing: Duration::from_millis(100),
            pause_after_deleting: Duration::from_millis(50),
        };
        let mut tw = Typewriter::new(["ab"], config).unwrap();
        assert_eq!(tw.interval(), Duration::from_millis(10));
        tw.step();
        tw.step(); // fully typed
        assert_eq!(tw.interval(), Duration::from_millis(100));
        tw.step(); // hold elapsed
        assert_eq!(tw.interval(), Duration::from_millis(5));
        tw.step();
        tw.step(); // fully deleted
        assert_eq!(tw.interval(), Duration::from_millis(50));
    }

    // --- Cursor tests ---

    #[test]
    fn cursor_blinks_under_interval_driven_steps() {
        // 250 ms everywhere, so the 500 ms blink phase flips every 2 steps.
        let config = TypewriterConfig {
            typing_speed: Duration::from_millis(250),
            deleting_speed: Duration::from_millis(250),
            pause_after_typing: Duration::from_millis(250),
            pause_after_deleting: Duration::from_millis(250),
        };
        let mut tw = Typewriter::new(["Hello", "World"], config).unwrap();
        assert!(tw.cursor_visible());
        assert!(tw.step().cursor_visible);
        assert!(!tw.step().cursor_visible);
        tw.step();
        assert!(tw.step().cursor_visible);
    }

    #[test]
    fn cursor_blinks_under_default_interval_timing() {
        // A rearming host at the default 200/50/3000/500 ms intervals must
        // see the cursor go dark within a few steps.
        let mut tw = Typewriter::with_defaults(["Hi"]).unwrap();
        let mut saw_hidden = false;
        for _ in 0..20 {
            if !tw.step().cursor_visible {
                saw_hidden = true;
            }
        }
        assert!(saw_hidden);
    }

    // --- Tick tests ---

    #[test]
    fn tick_accumulates_to_steps() {
        let config = TypewriterConfig {
            typing_speed: Duration::from_millis(10),
            ..uniform_config()
        };
        let mut tw = Typewriter::new(["abc"], config).unwrap();
        tw.tick(Duration::from_millis(4));
        assert_eq!(tw.text(), "");
        tw.tick(Duration::from_millis(6));
        assert_eq!(tw.text(), "a");
        tw.tick(Duration::from_millis(20));
        assert_eq!(tw.text(), "abc");
    }

    #[test]
    fn tick_respects_pause_interval() {
        let config = TypewriterConfig {
            typing_speed: Duration::from_millis(10),
            deleting_speed: Duration::from_millis(10),
            pause_after_typing: Duration::from_millis(100),
            pause_after_deleting: Duration::from_millis(100),
        };
        let mut tw = Typewriter::new(["ab"], config).unwrap();
        tw.tick(Duration::from_millis(20)); // fully typed
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
        tw.tick(Duration::from_millis(50)); // hold not yet elapsed
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
        tw.tick(Duration::from_millis(50)); // hold elapsed
        assert_eq!(tw.mode(), Mode::Deleting);
    }

    #[test]
    fn tick_catchup_is_bounded() {
        let mut tw = engine(&["abcdefgh"]);
        // Owe far more steps than the cap; must not loop forever and must
        // leave the machine in a coherent state.
        tw.tick(Duration::from_secs(3600));
        let count = tw.text().chars().count();
        assert!(count <= 8);
    }

    #[test]
    fn tick_advances_cursor_blink() {
        let mut tw = engine(&["Hi"]);
        assert!(tw.cursor_visible());
        tw.tick(Duration::from_millis(500));
        assert!(!tw.cursor_visible());
        tw.tick(Duration::from_millis(500));
        assert!(tw.cursor_visible());
    }

    #[test]
    fn cursor_blinks_through_pauses() {
        let config = TypewriterConfig {
            typing_speed: Duration::from_millis(1),
            deleting_speed: Duration::from_millis(1),
            pause_after_typing: Duration::from_secs(10),
            pause_after_deleting: Duration::from_millis(1),
        };
        let mut tw = Typewriter::new(["a"], config).unwrap();
        tw.tick(Duration::from_millis(1)); // typed, now in long hold
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
        let before = tw.cursor_visible();
        tw.tick(Duration::from_millis(500));
        assert_ne!(tw.cursor_visible(), before);
        assert_eq!(tw.mode(), Mode::PausedAfterTyping);
    }

    // --- Snapshot tests ---

    #[test]
    fn snapshot_matches_accessors() {
        let mut tw = engine(&["Hi"]);
        tw.step();
        let snap = tw.snapshot();
        assert_eq!(snap.text, tw.text());
        assert_eq!(snap.cursor_visible, tw.cursor_visible());
    }
}
