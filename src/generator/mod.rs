//! # Generator Module
//!
//! Turns a located record into the source text of its accessor wrapper.
//!
//! ## Pipeline
//!
//! ```text
//! Module Loading → Record Lookup → Field Mapping → Import Resolution → Rendering
//! ```
//!
//! 1. **Field Mapping** ([`map_fields`]) - walks the record's fields in
//!    declaration order and applies the annotation policy (include, exclude,
//!    rename), resolving each declared type against the source module scope.
//! 2. **Import Resolution** ([`resolve_imports`]) - collects every foreign
//!    module referenced by the mapped types, assigns stable local aliases,
//!    and strips the destination module's own path.
//! 3. **Rendering** ([`render_wrapper`]) - spells each return type for the
//!    destination module and runs the Askama template, entirely in memory.
//!
//! Declaration order is preserved end to end, and alias assignment is
//! first-seen, so regenerating from identical input is byte-identical.

mod fields;
mod generate;
mod imports;
mod templates;
mod types;

#[cfg(test)]
mod tests;

pub use fields::*;
pub use generate::*;
pub use imports::*;
pub use templates::*;
pub use types::*;
