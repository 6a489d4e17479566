//! Interactive branch selection: candidates, filtering, viewport math, the
//! event-driven session, and the raw-mode terminal front end.

pub mod candidate;
pub mod highlight;
pub mod matcher;
pub mod session;
pub mod terminal;
pub mod viewport;

// === Candidate list ===
pub use candidate::{build_candidates, Candidate};

// === Matching and rendering ===
pub use highlight::render;
pub use matcher::{match_span, matches};

// === Session state machine ===
pub use session::{SelectionSession, SessionConfig, SessionEvent, Step, VisibleRow};

// === Terminal front end ===
pub use terminal::pick;

// === Viewport ===
pub use viewport::{centered, compute_window, ViewportState};
