//! Query matching against candidate names.
//!
//! Matching is case-insensitive and whitespace-insensitive substring
//! containment: both the query and the candidate name are normalized by
//! lower-casing and stripping all whitespace before the containment check.
//! Alternatively, the raw query may equal the candidate's ordinal label
//! verbatim (an exact numeric jump). The two conditions are alternatives with
//! no precedence between them.
//!
//! Spans are found in the normalized text but reported as byte ranges into
//! the *original* name, so the highlighter never has to reason about casing
//! or stripped whitespace. [`Normalized`] keeps a per-byte offset map for
//! that translation.
//!
//! All functions here are deterministic and side-effect free.

use crate::select::candidate::Candidate;
use std::ops::Range;

/// A normalized string together with the byte-offset map back to its source.
struct Normalized {
    text: String,
    // Per normalized byte: start/end byte of the originating source char.
    starts: Vec<usize>,
    ends: Vec<usize>,
}

fn normalize(source: &str) -> Normalized {
    let mut text = String::with_capacity(source.len());
    let mut starts = Vec::with_capacity(source.len());
    let mut ends = Vec::with_capacity(source.len());

    for (at, ch) in source.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        let char_end = at + ch.len_utf8();
        for lowered in ch.to_lowercase() {
            let from = text.len();
            text.push(lowered);
            for _ in from..text.len() {
                starts.push(at);
                ends.push(char_end);
            }
        }
    }

    Normalized { text, starts, ends }
}

impl Normalized {
    /// Translate a byte range in the normalized text into a byte range in the
    /// original source string.
    fn project(&self, span: Range<usize>) -> Range<usize> {
        if span.is_empty() {
            return 0..0;
        }
        self.starts[span.start]..self.ends[span.end - 1]
    }
}

/// Whether the candidate matches the query. An empty (or whitespace-only)
/// query matches everything.
pub fn matches(query: &str, candidate: &Candidate) -> bool {
    let needle = normalize(query).text;
    if needle.is_empty() {
        return true;
    }
    normalize(&candidate.name).text.contains(&needle) || query == candidate.ordinal
}

/// The byte range within the candidate's original name that satisfied the
/// query, or `None` when there is nothing to highlight (empty query, or a
/// match through the ordinal label alone).
pub fn match_span(query: &str, candidate: &Candidate) -> Option<Range<usize>> {
    let needle = normalize(query).text;
    if needle.is_empty() {
        return None;
    }
    let name = normalize(&candidate.name);
    name.text
        .find(&needle)
        .map(|at| name.project(at..at + needle.len()))
}
