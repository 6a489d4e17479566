//! Selectable branch entries and ordinal assignment.

/// One selectable branch entry: a display name plus the zero-padded ordinal
/// label assigned at list construction. The ordinal is immutable for the
/// session's lifetime and doubles as an exact "jump by number" search key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub ordinal: String,
}

/// Build the candidate list from an ordered, deduplicated set of branch names.
///
/// Ordinals are 1-based and zero-padded to a uniform width, at least two
/// digits ("01", "02", ...), so labels line up in the menu.
pub fn build_candidates<S: AsRef<str>>(names: &[S]) -> Vec<Candidate> {
    let width = ordinal_width(names.len());
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Candidate {
            name: name.as_ref().to_string(),
            ordinal: format!("{:0width$}", i + 1),
        })
        .collect()
}

fn ordinal_width(total: usize) -> usize {
    let mut digits = 1;
    let mut n = total;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits.max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_zero_padded() {
        let candidates = build_candidates(&["main", "develop", "feature/login"]);
        let ordinals: Vec<_> = candidates.iter().map(|c| c.ordinal.as_str()).collect();
        assert_eq!(ordinals, vec!["01", "02", "03"]);
    }

    #[test]
    fn test_ordinal_width_grows_with_total() {
        let names: Vec<String> = (0..120).map(|i| format!("branch-{i}")).collect();
        let candidates = build_candidates(&names);
        assert_eq!(candidates[0].ordinal, "001");
        assert_eq!(candidates[119].ordinal, "120");
    }

    #[test]
    fn test_names_keep_source_order() {
        let candidates = build_candidates(&["zeta", "alpha"]);
        assert_eq!(candidates[0].name, "zeta");
        assert_eq!(candidates[1].name, "alpha");
    }

    #[test]
    fn test_empty_list() {
        let candidates = build_candidates::<&str>(&[]);
        assert!(candidates.is_empty());
    }
}
