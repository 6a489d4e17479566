//! The interactive selection state machine.
//!
//! [`SelectionSession`] owns the query string, the filtered view, and the
//! viewport, and advances through discrete [`SessionEvent`]s: it starts in an
//! editing state and ends either confirmed (with the candidate under the
//! cursor) or cancelled. The session performs no I/O — feeding it events and
//! reading [`SelectionSession::visible`] rows is the whole interface, which
//! keeps every transition unit-testable.
//!
//! Transition summary:
//! - printable char: append to query, re-filter, cursor to first match
//! - backspace: drop last query char (no-op when empty), re-filter
//! - up/down: move the cursor with wraparound over the filtered list
//! - confirm: yield the candidate under the cursor; no-op on an empty view
//! - cancel: end with no selection
//!
//! Every transition is synchronous; the caller redraws after each one, so no
//! partial state is ever observable.

use crate::select::candidate::Candidate;
use crate::select::matcher;
use crate::select::viewport::{self, ViewportState};
use std::ops::Range;

/// Session configuration, passed explicitly into the constructor.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Number of rows visible at once
    pub window_size: usize,
    /// Whether to render the key-binding hint line below the list
    pub show_help: bool,
    /// Index of the entry to center on at startup (the current branch)
    pub initial_cursor: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            show_help: true,
            initial_cursor: 0,
        }
    }
}

/// A discrete input event driving the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Char(char),
    Backspace,
    Up,
    Down,
    Confirm,
    Cancel,
}

/// The outcome of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Still editing; redraw and read the next event
    Continue,
    /// Terminal state: the user confirmed this candidate
    Confirmed(Candidate),
    /// Terminal state: the user cancelled, nothing selected
    Cancelled,
}

/// One row of the visible window, ready for rendering.
pub struct VisibleRow<'a> {
    pub candidate: &'a Candidate,
    pub span: Option<&'a Range<usize>>,
    pub active: bool,
}

pub struct SelectionSession {
    candidates: Vec<Candidate>,
    config: SessionConfig,
    query: String,
    /// (candidate index, match span in the original name), in candidate order
    filtered: Vec<(usize, Option<Range<usize>>)>,
    viewport: ViewportState,
}

impl SelectionSession {
    pub fn new(candidates: Vec<Candidate>, config: SessionConfig) -> Self {
        let filtered: Vec<_> = (0..candidates.len()).map(|i| (i, None)).collect();
        let viewport = viewport::centered(filtered.len(), config.window_size, config.initial_cursor);
        Self {
            candidates,
            config,
            query: String::new(),
            filtered,
            viewport,
        }
    }

    /// Process one input event and report how the session moved.
    pub fn handle(&mut self, event: SessionEvent) -> Step {
        match event {
            SessionEvent::Char(c) => {
                self.query.push(c);
                self.refilter();
                // New query: jump to the first match.
                self.viewport =
                    viewport::compute_window(self.filtered.len(), self.config.window_size, 0, 0);
                Step::Continue
            }
            SessionEvent::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                    self.viewport = viewport::compute_window(
                        self.filtered.len(),
                        self.config.window_size,
                        self.viewport.top,
                        self.viewport.cursor,
                    );
                }
                Step::Continue
            }
            SessionEvent::Down => {
                self.move_cursor(1);
                Step::Continue
            }
            SessionEvent::Up => {
                self.move_cursor(-1);
                Step::Continue
            }
            SessionEvent::Confirm => match self.filtered.get(self.viewport.cursor) {
                Some((index, _)) => Step::Confirmed(self.candidates[*index].clone()),
                // Nothing matches: Enter is a no-op, editing continues.
                None => Step::Continue,
            },
            SessionEvent::Cancel => Step::Cancelled,
        }
    }

    fn move_cursor(&mut self, delta: i64) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        // Wrap past either end of the filtered list.
        let next = (self.viewport.cursor as i64 + delta).rem_euclid(len as i64) as usize;
        self.viewport = viewport::compute_window(
            len,
            self.config.window_size,
            self.viewport.top,
            next,
        );
    }

    fn refilter(&mut self) {
        self.filtered.clear();
        for (index, candidate) in self.candidates.iter().enumerate() {
            if matcher::matches(&self.query, candidate) {
                self.filtered
                    .push((index, matcher::match_span(&self.query, candidate)));
            }
        }
        log::debug!(
            "query {:?}: {}/{} candidates match",
            self.query,
            self.filtered.len(),
            self.candidates.len()
        );
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn show_help(&self) -> bool {
        self.config.show_help
    }

    /// The candidate currently under the cursor, if any.
    pub fn selected(&self) -> Option<&Candidate> {
        self.filtered
            .get(self.viewport.cursor)
            .map(|(index, _)| &self.candidates[*index])
    }

    /// The rows of the visible window, top to bottom.
    pub fn visible(&self) -> Vec<VisibleRow<'_>> {
        let range = self.viewport.visible_range(self.filtered.len());
        self.filtered[range.clone()]
            .iter()
            .zip(range)
            .map(|((index, span), at)| VisibleRow {
                candidate: &self.candidates[*index],
                span: span.as_ref(),
                active: at == self.viewport.cursor,
            })
            .collect()
    }
}
