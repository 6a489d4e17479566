//! Visible-window arithmetic over the filtered candidate list.
//!
//! The viewport tracks which slice of the filtered list is on screen and
//! where the cursor sits inside it. The invariant, enforced by every
//! [`compute_window`] call, is `0 <= cursor - top < window_size` whenever the
//! list is non-empty, with `top` clamped so the window never extends past
//! either end of the list.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    /// Effective window size, clamped to `[1, total]`
    pub window_size: usize,
    /// Index of the first visible row
    pub top: usize,
    /// Index of the highlighted row (absolute, not window-relative)
    pub cursor: usize,
}

impl ViewportState {
    /// The slice of the filtered list that is currently visible.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let end = (self.top + self.window_size).min(total);
        self.top.min(end)..end
    }
}

/// Clamp `window_size`, `top`, and `cursor` to a consistent state, shifting
/// `top` by the minimal amount needed to keep the cursor visible.
///
/// An empty list collapses to `top = cursor = 0`; the invariant only applies
/// to non-empty lists.
pub fn compute_window(
    total: usize,
    window_size: usize,
    top: usize,
    cursor: usize,
) -> ViewportState {
    if total == 0 {
        return ViewportState {
            window_size: window_size.max(1),
            top: 0,
            cursor: 0,
        };
    }

    let window_size = window_size.clamp(1, total);
    let cursor = cursor.min(total - 1);
    let max_top = total - window_size;

    let mut top = top.min(max_top);
    if cursor < top {
        top = cursor;
    } else if cursor >= top + window_size {
        top = cursor + 1 - window_size;
    }

    ViewportState {
        window_size,
        top,
        cursor,
    }
}

/// The startup window: the cursor row is vertically centered, then the window
/// is clamped to the ends of the list. The centering subtraction saturates at
/// zero, so a cursor in the top half can never produce a negative start.
pub fn centered(total: usize, window_size: usize, cursor: usize) -> ViewportState {
    if total == 0 {
        return compute_window(total, window_size, 0, 0);
    }
    let window_size = window_size.clamp(1, total);
    let cursor = cursor.min(total - 1);
    let top = cursor
        .saturating_sub(window_size / 2)
        .min(total - window_size);
    compute_window(total, window_size, top, cursor)
}
