//! # CLI Module
//!
//! Command-line surface for the wrapgen code generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the wrapper type and its accessors:
//!
//! ```bash
//! wrapgen generate --src MyStruct --dst MyStructWrapper -o src/mystruct_wrapper.rs
//! ```
//!
//! Options:
//! - `--src <NAME>` - source struct name (required)
//! - `--dst <NAME>` - wrapper type name (required)
//! - `--src-module <PATH>` - module declaring the struct (default: `.`)
//! - `--dst-module <PATH>` - module the wrapper is generated for (default: `.`)
//! - `--tag <KEY>` - field attribute key to honor (default: `wrapstruct`)
//! - `-o, --output <FILE>` - output file; omitted means stdout
//!
//! ### `inspect`
//!
//! Print the accessors and imports generation would produce, without
//! emitting code:
//!
//! ```bash
//! wrapgen inspect --src MyStruct --dst MyStructWrapper
//! ```
//!
//! Diagnostics go to stderr; stdout carries only generated code (or the
//! inspect listing), so the tool can sit in a shell pipeline.

mod commands;


pub use commands::{run_cli, Cli, Commands};
