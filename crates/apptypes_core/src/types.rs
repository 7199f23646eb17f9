//! Define the application type vocabulary.
//!
//! This module is the single source of truth for type names: a stable identifier ([`TypeId`]) plus a const
//! metadata table ([`TYPES`]) recording canonical spellings, aliases, families, and descriptions.
//!
//! ## Notes
//! - Lookup is exact and **case-sensitive**. Canonical and alias spellings never overlap.
//! - `all_types` is an ordinary canonical value. It is tagged [`TypeFamily::Wildcard`] for docs, but nothing here
//!   treats it as matching other types.
//!
//! ## Examples
//! ```rust
//! use apptypes_core::types::{self, TypeId};
//!
//! assert_eq!(types::resolve_alias("snap_app"), Ok("snappy_application"));
//! assert_eq!(types::resolve_alias("snap_application"), Ok("snappy_application"));
//! assert_eq!(types::as_str(TypeId::SnappyKernel), "snappy_kernel");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownType;
use crate::registry::{RegistryItemInfo, Stability};

/// Stable identifier for every canonical type.
///
/// ## Notes
/// - Variant order matches [`TYPES`] order.
/// - The canonical spelling is accessible via [`as_str`] or `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeId {
    AllTypes,
    Application,
    Webapp,
    Scope,
    Snappy,
    SnappyApplication,
    SnappyFramework,
    SnappyOem,
    SnappyOs,
    SnappyKernel,
    SnappyGadget,
}

/// Documentation grouping for canonical types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// The catch-all `all_types` value.
    Wildcard,
    /// Click-era types: applications, webapps, scopes.
    Classic,
    /// Snappy packages.
    Snappy,
}

impl TypeFamily {
    /// Return the lowercase label used in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeFamily::Wildcard => "wildcard",
            TypeFamily::Classic => "classic",
            TypeFamily::Snappy => "snappy",
        }
    }
}

/// Metadata entry for a canonical type.
pub type TypeInfo = RegistryItemInfo<TypeId, TypeFamily>;

/// Registry of canonical types, in display order.
pub const TYPES: &[TypeInfo] = &[
    info(
        TypeId::AllTypes,
        "all_types",
        &["all"],
        TypeFamily::Wildcard,
        "Every type; used by consumers that do not filter by type.",
    ),
    info(
        TypeId::Application,
        "application",
        &["app"],
        TypeFamily::Classic,
        "A click-packaged application.",
    ),
    info(TypeId::Webapp, "webapp", &[], TypeFamily::Classic, "A packaged web application."),
    info(TypeId::Scope, "scope", &[], TypeFamily::Classic, "A search scope."),
    info(
        TypeId::Snappy,
        "snappy",
        &["snap"],
        TypeFamily::Snappy,
        "Any snappy package.",
    ),
    info(
        TypeId::SnappyApplication,
        "snappy_application",
        &["snap_application", "snap_app"],
        TypeFamily::Snappy,
        "A snappy application package.",
    ),
    info(
        TypeId::SnappyFramework,
        "snappy_framework",
        &["snap_framework"],
        TypeFamily::Snappy,
        "A snappy framework package.",
    ),
    info(
        TypeId::SnappyOem,
        "snappy_oem",
        &["snap_oem"],
        TypeFamily::Snappy,
        "A snappy OEM customization package.",
    ),
    info(
        TypeId::SnappyOs,
        "snappy_os",
        &["snap_os"],
        TypeFamily::Snappy,
        "A snappy operating system package.",
    ),
    info(
        TypeId::SnappyKernel,
        "snappy_kernel",
        &["snap_kernel"],
        TypeFamily::Snappy,
        "A snappy kernel package.",
    ),
    info(
        TypeId::SnappyGadget,
        "snappy_gadget",
        &["snap_gadget"],
        TypeFamily::Snappy,
        "A snappy gadget package.",
    ),
];

/// Return the canonical type spellings in display order.
pub fn list_types() -> impl ExactSizeIterator<Item = &'static str> + Clone {
    TYPES.iter().map(|t| t.canonical)
}

/// Iterate every `(alias, target)` pair, grouped by target in registry order.
pub fn aliases() -> impl Iterator<Item = (&'static str, TypeId)> + Clone {
    TYPES
        .iter()
        .flat_map(|t| t.aliases.iter().map(move |&alias| (alias, t.id)))
}

/// Resolve a canonical spelling or an alias to a type identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
/// - Canonical and alias spellings are disjoint, so the first entry spelled `name` is the only one.
pub fn from_str(name: &str) -> Option<TypeId> {
    TYPES.iter().find(|t| t.is_spelled(name)).map(|t| t.id)
}

/// Resolve a spelling to a type identifier, failing with [`UnknownType`].
pub fn resolve(name: &str) -> Result<TypeId, UnknownType> {
    from_str(name).ok_or_else(|| UnknownType::new(name))
}

/// Normalize a canonical spelling or alias to its canonical spelling.
///
/// Canonical input is returned unchanged; an alias returns the type it maps to.
///
/// ## Errors
/// - [`UnknownType`] if `name` is neither a canonical type nor a known alias.
pub fn resolve_alias(name: &str) -> Result<&'static str, UnknownType> {
    resolve(name).map(as_str)
}

/// Check whether `name` is a canonical spelling or an alias.
pub fn is_known(name: &str) -> bool {
    TYPES.iter().any(|t| t.is_spelled(name))
}

/// Check whether `name` is a canonical spelling.
pub fn is_canonical(name: &str) -> bool {
    TYPES.iter().any(|t| t.canonical == name)
}

/// Check whether `name` is an alias spelling.
pub fn is_alias(name: &str) -> bool {
    TYPES.iter().any(|t| t.aliases.contains(&name))
}

/// Return the canonical types belonging to `family`, in registry order.
pub fn in_family(family: TypeFamily) -> impl Iterator<Item = TypeId> {
    TYPES.iter().filter(move |t| t.family == family).map(|t| t.id)
}

/// Return the canonical spelling for a type.
pub fn as_str(id: TypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: TypeId) -> &'static TypeInfo {
    TYPES.iter().find(|t| t.id == id).expect("type info missing")
}

impl TypeId {
    /// Return the canonical spelling.
    pub fn as_str(self) -> &'static str {
        as_str(self)
    }

    /// Return the registry family.
    pub fn family(self) -> TypeFamily {
        info_for(self).family
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeId {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

const fn info(
    id: TypeId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    family: TypeFamily,
    description: &'static str,
) -> TypeInfo {
    RegistryItemInfo {
        id,
        canonical,
        aliases,
        description,
        family,
        stability: Stability::Stable,
    }
}
