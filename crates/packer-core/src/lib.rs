//! # packer-core
//!
//! A library for embedding binary data into C and C++ programs.
//!
//! This crate provides the core functionality for:
//! - Packing an arbitrary byte stream into a statically initialized array definition
//! - Emitting a companion header with `extern` declarations for that array
//! - Resolving input/output streams from a [`Config`] and running both steps
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`]: The immutable configuration value shared by every step
//! - [`pack`]: The byte packer producing the array definition
//! - [`declaration`]: The header emitter producing `extern` declarations
//! - [`pipeline`]: Stream resolution and the end-to-end run
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use packer_core::{emit_declaration, pack, GuardStyle};
//!
//! let mut source = Vec::new();
//! let result = pack(&[0x00u8, 0xFF, 0x10][..], &mut source, "logo", "const unsigned char")?;
//!
//! let mut header = Vec::new();
//! emit_declaration(
//!     &mut header,
//!     result.byte_count,
//!     "logo",
//!     "const unsigned char",
//!     GuardStyle::PragmaOnce,
//!     false,
//! )?;
//!
//! assert!(String::from_utf8_lossy(&header).contains("logo[3];"));
//! # Ok::<(), packer_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod config;
pub mod declaration;
pub mod error;
pub mod pack;
pub mod pipeline;

// Re-export primary types for convenience
pub use config::{Config, GuardStyle, InputSource, OutputSink};
pub use declaration::{emit_declaration, guard_macro};
pub use error::{Error, Result, StreamRole};
pub use pack::{pack, PackResult};
pub use pipeline::{run, RunSummary};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Suffix appended to the variable name for the length constant
pub const LENGTH_SUFFIX: &str = "_length";

/// Suffix appended to the upper-cased variable name for the include guard macro
pub const GUARD_SUFFIX: &str = "_HEADER";
