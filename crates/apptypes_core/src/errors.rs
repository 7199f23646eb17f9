//! The registry's single failure mode.

use thiserror::Error;

use crate::types::{self, TYPES};

/// Largest edit distance at which a known spelling is offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Raised when a name is neither a canonical type nor a known alias.
///
/// ## Examples
/// ```rust
/// use apptypes_core::types;
///
/// let err = types::resolve_alias("snap_kernal").unwrap_err();
/// assert_eq!(err.to_string(), "unknown type 'snap_kernal'");
/// assert_eq!(err.hint(), "did you mean 'snap_kernel'?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type '{name}'")]
pub struct UnknownType {
    name: String,
}

impl UnknownType {
    /// Create an error for the rejected `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected input, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the closest known spelling (canonical or alias), if any is close enough.
    ///
    /// Distance is measured case-insensitively so `APP` still suggests `app`; resolution itself stays
    /// case-sensitive.
    pub fn suggestion(&self) -> Option<&'static str> {
        let folded = self.name.to_lowercase();
        TYPES
            .iter()
            .flat_map(|t| t.spellings())
            .map(|s| (edit_distance(&folded, s), s))
            .filter(|&(d, _)| d <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|&(d, _)| d)
            .map(|(_, s)| s)
    }

    /// Return a one-line hint suitable for user-facing output.
    pub fn hint(&self) -> String {
        match self.suggestion() {
            Some(s) => format!("did you mean '{s}'?"),
            None => {
                let known: Vec<_> = types::list_types().collect();
                format!("expected one of: {}", known.join(", "))
            }
        }
    }
}

/// Levenshtein distance over Unicode scalar values.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("snap", "snap"), 0);
        assert_eq!(edit_distance("snap", "snp"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "app"), 3);
    }

    #[test]
    fn test_suggests_near_alias() {
        let err = UnknownType::new("snap_gadet");
        assert_eq!(err.suggestion(), Some("snap_gadget"));
    }

    #[test]
    fn test_tie_prefers_registry_order() {
        // `snappy` and `snap` are both one edit away; canonical spellings come first.
        let err = UnknownType::new("snapp");
        assert_eq!(err.suggestion(), Some("snappy"));
    }

    #[test]
    fn test_case_only_difference_still_suggests() {
        assert_eq!(UnknownType::new("APP").suggestion(), Some("app"));
        assert_eq!(UnknownType::new("SNAP_OS").hint(), "did you mean 'snap_os'?");
        assert_eq!(UnknownType::new("Application").suggestion(), Some("application"));
    }

    #[test]
    fn test_suggests_near_canonical() {
        let err = UnknownType::new("webap");
        assert_eq!(err.suggestion(), Some("webapp"));
    }

    #[test]
    fn test_far_name_lists_known_types() {
        let err = UnknownType::new("bogus_type");
        assert_eq!(err.suggestion(), None);
        assert!(err.hint().starts_with("expected one of: all_types, application,"));
        assert!(err.hint().ends_with("snappy_gadget"));
    }

    #[test]
    fn test_display() {
        assert_eq!(UnknownType::new("x").to_string(), "unknown type 'x'");
    }
}
