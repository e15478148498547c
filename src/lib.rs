//! # wrapgen
//!
//! **wrapgen** is a one-shot code generator: given an annotated struct in one
//! module and a wrapper type name in another (possibly the same) module, it
//! emits the wrapper's declaration plus one getter-style accessor per
//! selected field. The point is to let a plain data struct stand behind a
//! getter-shaped trait it cannot implement directly, e.g. a config struct
//! whose fields must stay public for deserialization.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`module`]** - declaration-level module loading (`syn`-based, tolerant
//!   of code that does not compile) and record lookup
//! - **[`generator`]** - field mapping, import resolution, and template
//!   rendering
//! - **[`cli`]** - the `generate`/`inspect` command surface
//!
//! ## Generation Flow
//!
//! ```text
//! CLI → module::load_module (source, destination)
//!     → module::locate_record
//!     → generator::map_fields        (annotation policy, type resolution)
//!     → generator::resolve_imports   (alias assignment, self-exclusion)
//!     → generator::render_wrapper    (Askama template, in memory)
//!     → output sink (file or stdout)
//! ```
//!
//! The pipeline is strictly sequential and deterministic: field order is
//! declaration order, import aliases are assigned first-seen, and the import
//! block renders in lexicographic path order, so regenerating from identical
//! input produces byte-identical output.
//!
//! ## Field Annotations
//!
//! Generation is steered per field through an attribute named by the
//! configurable tag (default `wrapstruct`):
//!
//! ```rust,ignore
//! pub struct MyStruct {
//!     pub PropA: String,                                // -> PropA()
//!     #[cfg_attr(any(), wrapstruct("ValB"))]
//!     valB: i64,                                        // -> ValB()
//!     #[cfg_attr(any(), wrapstruct("-"))]
//!     pub Zzzz: serde_json::Value,                      // dropped
//! }
//! ```
//!
//! The `cfg_attr(any(), ...)` wrapping keeps the annotation invisible to
//! rustc; wrapgen reads it straight off the declaration. Bare
//! `#[wrapstruct("...")]` is honored too, since the loader never needs the
//! module to compile.

pub mod cli;
pub mod generator;
pub mod module;

pub use generator::{build_context, generate_wrapper, GenerateOptions, GenerationContext};
pub use module::{load_module, locate_record};
