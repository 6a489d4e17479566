//! Label rendering with the matched substring visually distinguished.

use colored::*;
use std::ops::Range;

/// Render a candidate name with the matched byte range emphasized in green.
///
/// The span is a byte range into `name` itself (the matcher already projected
/// it back from normalized offsets), so slicing here is safe as long as the
/// span came from [`crate::select::matcher::match_span`]. With no span the
/// name is returned unstyled.
pub fn render(name: &str, span: Option<&Range<usize>>) -> String {
    match span {
        Some(range) if !range.is_empty() => {
            let (before, rest) = name.split_at(range.start);
            let (matched, after) = rest.split_at(range.end - range.start);
            format!("{before}{}{after}", matched.green())
        }
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_span_is_unstyled() {
        colored::control::set_override(true);
        let out = render("feature/login", None);
        assert_eq!(out, "feature/login");
        colored::control::unset_override();
    }

    #[test]
    fn test_render_with_span_wraps_the_match() {
        colored::control::set_override(true);
        let out = render("feature/login", Some(&(0..4)));
        assert!(out.contains("feat"));
        assert!(out.contains("\x1b["));
        assert!(out.ends_with("ure/login"));
        colored::control::unset_override();
    }

    #[test]
    fn test_render_with_empty_span_is_unstyled() {
        colored::control::set_override(true);
        let out = render("main", Some(&(0..0)));
        assert_eq!(out, "main");
        colored::control::unset_override();
    }

    #[test]
    fn test_render_full_span() {
        colored::control::set_override(false);
        let out = render("main", Some(&(0..4)));
        assert_eq!(out, "main");
        colored::control::unset_override();
    }
}
