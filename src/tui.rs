use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::error::Result;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const ERROR_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

pub const AMOUNT_NEG_STYLE: Style = Style::new().fg(Color::Red);
pub const PIGGY_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));

/// A formatted amount, red when the underlying value is negative.
pub fn amount_span(text: impl Into<String>, negative: bool) -> Span<'static> {
    if negative {
        Span::styled(text.into(), AMOUNT_NEG_STYLE)
    } else {
        Span::raw(text.into())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ViewAction {
    Continue,
    Reload,
    Close,
}

pub trait TuiView {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ViewAction;
    /// Re-read the underlying data. Failures belong in the view's own banner.
    fn reload(&mut self);
}

/// The key a view should see for a terminal event, if any. Releases and
/// repeats are dropped; Ctrl-C closes like Esc.
pub fn key_code(key: KeyEvent) -> Option<KeyCode> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyCode::Esc);
    }
    Some(key.code)
}

/// Puts the terminal back when the view loop ends, by error or otherwise.
/// Panics are covered by the hook `ratatui::init` installs.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Drive a view until it closes: draw, wait for a key, act on it.
pub fn run_view(view: &mut dyn TuiView) -> Result<()> {
    let _guard = TerminalGuard;
    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| view.draw(frame))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(code) = key_code(key) else {
            continue;
        };
        match view.handle_key(code) {
            ViewAction::Continue => {}
            ViewAction::Reload => view.reload(),
            ViewAction::Close => return Ok(()),
        }
    }
}
