//! Shareable metadata for the type registry.
//!
//! The registry is **registry-first**: every entry carries its stable id, its canonical spelling and the aliases
//! that resolve to it. Keeping aliases on the entry they point at means an alias can never name a type that does
//! not exist.
//!
//! ## Notes
//! - These types are `Copy`-friendly so the registry can live in a `const` table.
//! - Metadata (description, stability) is meant for tooling and docs; resolution only looks at spellings.
//!
//! ## See also
//! - [`crate::types`]

/// Describe the lifecycle status of a registry entry.
///
/// ## Examples
/// ```rust
/// use apptypes_core::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(s.as_str(), "stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

impl Stability {
    /// Return the lowercase label used in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Deprecated => "deprecated",
        }
    }
}

/// Shared metadata shape for registry entries.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description`)
/// - grouping and lifecycle (`family`, `stability`)
///
/// ## Notes
/// - `description` is mandatory to keep generated docs consistent.
/// - Alias order is significant only for display.
#[derive(Debug, Clone, Copy)]
pub struct RegistryItemInfo<Id, Family> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub family: Family,
    pub stability: Stability,
}

impl<Id, Family> RegistryItemInfo<Id, Family> {
    /// Check whether `name` is this entry's canonical spelling or one of its aliases.
    pub fn is_spelled(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }

    /// Iterate the canonical spelling followed by every alias.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}
