#![forbid(unsafe_code)]

//! Terminal showcase for the marquee effect engines.
//!
//! Plays the portfolio intro in a terminal: a headline that fades in and
//! then types itself with a blinking cursor, a scrollable body, a flip-card
//! project entry, and a footer that fades in when scrolled to the bottom.
//!
//! Keys: Up/Down scroll, `f` flips the project card, `q` or Esc quits.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee_core::easing::ease_out_cubic;
use marquee_core::{Animation, Fade, Toggle};
use marquee_fx::{FlipCard, ScrollSample, ScrollVisibility, Typewriter, VisibilityEdge};

const HEADLINE_PHRASES: [&str; 3] = [
    "Software Developer",
    "Terminal UI Tinkerer",
    "Rust Enthusiast",
];

const FOOTER_TEXT: &str = "© Designed and developed with marquee";
const FOOTER_FADE: Duration = Duration::from_millis(300);
const INTRO_REVEAL: Duration = Duration::from_millis(600);
const FRAME: Duration = Duration::from_millis(16);

/// Everything the demo animates, plus the host-owned scroll position.
struct App {
    intro: Fade,
    typewriter: Typewriter,
    visibility: ScrollVisibility,
    footer_fade: Toggle,
    card: FlipCard,
    body: Vec<String>,
    scroll: usize,
}

impl App {
    fn new() -> io::Result<Self> {
        let typewriter = Typewriter::with_defaults(HEADLINE_PHRASES)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let body = (1..=48)
            .map(|i| format!("{i:>3}  Scroll to the bottom to reveal the footer."))
            .collect();
        Ok(Self {
            intro: Fade::new(INTRO_REVEAL).easing(ease_out_cubic),
            typewriter,
            visibility: ScrollVisibility::new().slack(1.0),
            footer_fade: Toggle::new(FOOTER_FADE),
            card: FlipCard::new(),
            body,
            scroll: 0,
        })
    }

    fn tick(&mut self, dt: Duration, view_rows: usize) {
        self.intro.tick(dt);
        // Typing starts once the reveal lands; the frame that crosses the
        // finish line contributes only its time past completion.
        if self.intro.is_complete() {
            self.typewriter.tick(dt.min(self.intro.overshoot()));
        }
        self.card.tick(dt);
        self.footer_fade.tick(dt);

        // Line counts stand in for pixel heights, so the at-bottom slack
        // is a single line rather than the pixel default.
        let sample = ScrollSample {
            viewport_height: view_rows as f32,
            scroll_offset: self.scroll as f32,
            content_height: self.body.len() as f32,
        };
        match self.visibility.on_sample(sample) {
            Some(VisibilityEdge::Shown) => self.footer_fade.set_target(true),
            Some(VisibilityEdge::Hidden) => self.footer_fade.set_target(false),
            None => {}
        }
    }

    fn scroll_by(&mut self, delta: isize, view_rows: usize) {
        let max = self.body.len().saturating_sub(view_rows);
        let next = self.scroll as isize + delta;
        self.scroll = next.clamp(0, max as isize) as usize;
    }
}

fn draw(out: &mut Stdout, app: &App, cols: u16, rows: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // Headline: typed text plus blinking cursor glyph, tinted up from
    // black while the intro reveal runs.
    let reveal = app.intro.value();
    let snap = app.typewriter.snapshot();
    queue!(
        out,
        SetForegroundColor(Color::Rgb {
            r: (0xfb as f32 * reveal) as u8,
            g: (0xed as f32 * reveal) as u8,
            b: (0xff as f32 * reveal) as u8,
        }),
        Print(snap.text),
    )?;
    if snap.cursor_visible {
        queue!(out, Print("|"))?;
    }
    queue!(out, ResetColor)?;

    // Project card: show whichever face is past the halfway angle.
    let face = if app.card.front_angle() < 90.0 {
        "[ PawSwipe — press f for details ]"
    } else {
        "[ Swipe cards to rate cats. Press f to flip back ]"
    };
    queue!(out, cursor::MoveTo(0, 1), Print(face))?;

    // Body viewport.
    let view_rows = view_rows(rows);
    for (row, line) in app
        .body
        .iter()
        .skip(app.scroll)
        .take(view_rows)
        .enumerate()
    {
        let mut line = line.as_str();
        if line.len() > cols as usize {
            line = &line[..cols as usize];
        }
        queue!(out, cursor::MoveTo(0, 2 + row as u16), Print(line))?;
    }

    // Footer, tinted by the fade value. At zero it is invisible.
    let v = app.footer_fade.value();
    if v > 0.0 {
        let tint = Color::Rgb {
            r: (0xfb as f32 * v) as u8,
            g: (0xed as f32 * v) as u8,
            b: (0xff as f32 * v) as u8,
        };
        queue!(
            out,
            cursor::MoveTo(0, rows.saturating_sub(1)),
            SetForegroundColor(tint),
            Print(FOOTER_TEXT),
            ResetColor,
        )?;
    }

    out.flush()
}

/// Rows available to the scrollable body: total minus headline, card line,
/// and footer line.
fn view_rows(rows: u16) -> usize {
    rows.saturating_sub(3) as usize
}

fn run(out: &mut Stdout) -> io::Result<()> {
    let mut app = App::new()?;
    let mut last = Instant::now();

    loop {
        let (cols, rows) = terminal::size()?;
        let view = view_rows(rows);

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('f') => app.card.toggle(),
                        KeyCode::Up => app.scroll_by(-1, view),
                        KeyCode::Down => app.scroll_by(1, view),
                        KeyCode::PageUp => app.scroll_by(-(view as isize), view),
                        KeyCode::PageDown => app.scroll_by(view as isize, view),
                        _ => {}
                    }
                }
            }
        }

        let now = Instant::now();
        app.tick(now - last, view);
        last = now;

        draw(out, &app, cols, rows)?;
    }
}

fn main() -> io::Result<()> {
    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut out);

    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
