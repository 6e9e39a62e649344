//! Run configuration.
//!
//! A [`Config`] is built once (from command-line flags or directly in code)
//! and then only read. Both the packer and the declaration emitter take
//! their settings from it.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Variable name used when none is given
pub const DEFAULT_VARIABLE_NAME: &str = "var_name";

/// Element type used when none is given
pub const DEFAULT_VARIABLE_TYPE: &str = "const unsigned char";

/// Where the binary data is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    #[default]
    Stdin,
    /// A file opened in binary mode
    File(PathBuf),
}

/// Where the array definition is written to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

/// How the declaration file protects against multiple inclusion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardStyle {
    /// `#ifndef NAME_HEADER` / `#define NAME_HEADER` / `#endif`
    #[default]
    IncludeGuard,
    /// A single `#pragma once`
    PragmaOnce,
}

/// Configuration for a packing run
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the generated array; the length constant is derived from it
    pub variable_name: String,
    /// Element type of the generated array, emitted verbatim
    pub variable_type: String,
    /// Source of the binary data
    pub input: InputSource,
    /// Destination of the array definition
    pub output: OutputSink,
    /// Destination of the declaration file, if one should be produced
    pub declaration: Option<PathBuf>,
    /// Guard style of the declaration file
    pub guard: GuardStyle,
    /// Wrap the declarations in an `extern "C"` block
    pub extern_c: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            variable_type: DEFAULT_VARIABLE_TYPE.to_string(),
            input: InputSource::default(),
            output: OutputSink::default(),
            declaration: None,
            guard: GuardStyle::default(),
            extern_c: false,
        }
    }
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable name
    pub fn variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = name.into();
        self
    }

    /// Sets the variable type
    pub fn variable_type(mut self, ty: impl Into<String>) -> Self {
        self.variable_type = ty.into();
        self
    }

    /// Sets the input source
    pub fn input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    /// Sets the output sink
    pub fn output(mut self, output: OutputSink) -> Self {
        self.output = output;
        self
    }

    /// Sets the declaration file path
    pub fn declaration(mut self, path: Option<PathBuf>) -> Self {
        self.declaration = path;
        self
    }

    /// Sets the guard style
    pub fn guard(mut self, guard: GuardStyle) -> Self {
        self.guard = guard;
        self
    }

    /// Sets whether to emit the `extern "C"` wrapper
    pub fn extern_c(mut self, enabled: bool) -> Self {
        self.extern_c = enabled;
        self
    }

    /// Checks the config before any stream is touched.
    ///
    /// Only emptiness is checked; names and types are otherwise emitted
    /// as given.
    pub fn validate(&self) -> Result<()> {
        if self.variable_name.is_empty() {
            return Err(Error::invalid_config("variable name must not be empty"));
        }
        if self.variable_type.is_empty() {
            return Err(Error::invalid_config("variable type must not be empty"));
        }
        Ok(())
    }
}
