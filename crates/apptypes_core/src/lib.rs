//! Provide the canonical application type vocabulary shared by every `apptypes` consumer.
//!
//! The crate holds a single, fixed registry: the ordered list of canonical type names
//! (`application`, `webapp`, `snappy_kernel`, ...) and the short aliases that resolve to them
//! (`app`, `snap`, `snap_kernel`, ...).
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no mutable global state, no logging.
//! - Callers work with the stable [`types::TypeId`] and look up spellings through the registry instead of
//!   comparing strings by hand.
//!
//! ## Examples
//! ```rust
//! use apptypes_core::types::{self, TypeId};
//!
//! assert_eq!(types::resolve_alias("snap"), Ok("snappy"));
//! assert_eq!(types::from_str("app"), Some(TypeId::Application));
//! assert!(types::resolve_alias("bogus_type").is_err());
//! ```

pub mod errors;
pub mod reference;
pub mod registry;
pub mod types;

pub use errors::UnknownType;
pub use types::{TypeFamily, TypeId, TypeInfo};
