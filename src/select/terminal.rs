//! Raw-mode terminal loop around the selection session.
//!
//! Renders the menu inline (no alternate screen): a header line with the
//! branch count and the live query, the visible window of rows, and an
//! optional key-binding hint. After every session transition the previously
//! drawn block is erased and redrawn, and the whole block is removed once the
//! session ends, so the shell scrollback stays clean.
//!
//! The loop is single-threaded and blocks on `event::read()`; cancellation is
//! an input event (Esc or Ctrl-C), not a timeout.

use crate::core::error::{CheckoutBranchError, Result};
use crate::select::candidate::Candidate;
use crate::select::highlight;
use crate::select::session::{SelectionSession, SessionConfig, SessionEvent, Step};
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    tty::IsTty,
};
use std::io::{self, Write};

const HELP_LINE: &str = "↑/↓ navigate · type to filter · enter select · esc cancel";

/// Run an interactive selection over `candidates`.
///
/// Returns `Ok(Some(candidate))` on confirmation, `Ok(None)` on cancellation,
/// and [`CheckoutBranchError::NotInteractive`] when stdin or stdout is not a
/// terminal. The terminal is restored on every exit path.
pub fn pick(candidates: Vec<Candidate>, config: SessionConfig) -> Result<Option<Candidate>> {
    let mut stdout = io::stdout();
    if !io::stdin().is_tty() || !stdout.is_tty() {
        return Err(CheckoutBranchError::NotInteractive);
    }

    enable_raw_mode()?;
    execute!(stdout, cursor::Hide).ok();

    let result = run_loop(&mut stdout, candidates, config);

    execute!(stdout, cursor::Show).ok();
    disable_raw_mode().ok();

    result
}

fn run_loop(
    stdout: &mut io::Stdout,
    candidates: Vec<Candidate>,
    config: SessionConfig,
) -> Result<Option<Candidate>> {
    let mut session = SelectionSession::new(candidates, config);
    let mut drawn_lines = 0u16;

    draw(stdout, &session, &mut drawn_lines)?;

    loop {
        let key = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            _ => continue,
        };

        let Some(session_event) = map_key(key) else {
            continue;
        };

        match session.handle(session_event) {
            Step::Continue => draw(stdout, &session, &mut drawn_lines)?,
            Step::Confirmed(candidate) => {
                erase(stdout, drawn_lines)?;
                return Ok(Some(candidate));
            }
            Step::Cancelled => {
                erase(stdout, drawn_lines)?;
                return Ok(None);
            }
        }
    }
}

fn map_key(key: KeyEvent) -> Option<SessionEvent> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(SessionEvent::Cancel),
        (KeyCode::Esc, _) => Some(SessionEvent::Cancel),
        (KeyCode::Enter, _) => Some(SessionEvent::Confirm),
        (KeyCode::Up, _) => Some(SessionEvent::Up),
        (KeyCode::Down, _) => Some(SessionEvent::Down),
        (KeyCode::Backspace, _) => Some(SessionEvent::Backspace),
        (KeyCode::Char(c), m)
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            Some(SessionEvent::Char(c))
        }
        _ => None,
    }
}

/// Redraw the whole block in place. The previous block is erased first so the
/// update is atomic as far as the user can observe.
fn draw(stdout: &mut io::Stdout, session: &SelectionSession, drawn_lines: &mut u16) -> Result<()> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        format!("{} Branches:", session.total()).bold(),
        session.query()
    ));

    for row in session.visible() {
        if row.active {
            lines.push(format!(
                "{} {} {}",
                "*".green(),
                row.candidate.ordinal.green(),
                row.candidate.name.green()
            ));
        } else {
            lines.push(format!(
                "  {} {}",
                row.candidate.ordinal,
                highlight::render(&row.candidate.name, row.span)
            ));
        }
    }

    if session.show_help() {
        lines.push(HELP_LINE.bright_black().to_string());
    }

    if *drawn_lines > 0 {
        queue!(stdout, cursor::MoveUp(*drawn_lines))?;
    }
    queue!(stdout, Clear(ClearType::FromCursorDown))?;
    for line in &lines {
        // Raw mode: carriage return is not implied by newline.
        write!(stdout, "{line}\r\n")?;
    }
    stdout.flush()?;

    *drawn_lines = lines.len() as u16;
    Ok(())
}

fn erase(stdout: &mut io::Stdout, drawn_lines: u16) -> Result<()> {
    if drawn_lines > 0 {
        queue!(stdout, cursor::MoveUp(drawn_lines))?;
    }
    queue!(stdout, Clear(ClearType::FromCursorDown))?;
    stdout.flush()?;
    Ok(())
}
