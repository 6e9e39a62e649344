//! End-to-end packing run.
//!
//! Resolves the streams named by a [`Config`], packs the input into the
//! array definition and, if requested, writes the declaration file.
//!
//! Files are opened in a fixed order: input, output, then (after packing)
//! the declaration file. A missing input therefore never creates an
//! output file.

use crate::config::{Config, InputSource, OutputSink};
use crate::declaration::emit_declaration;
use crate::error::{Error, Result, StreamRole};
use crate::pack::pack;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of bytes packed
    pub byte_count: usize,
    /// Path of the declaration file, if one was written
    pub declaration: Option<PathBuf>,
}

/// Runs a full packing pass as described by `config`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] before touching any stream, [`Error::Open`]
/// when a named file cannot be opened, and the packer's or emitter's errors
/// otherwise.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let input = open_input(&config.input)?;
    let output = open_output(&config.output)?;

    let packed = pack(input, output, &config.variable_name, &config.variable_type)?;

    let Some(path) = &config.declaration else {
        return Ok(RunSummary {
            byte_count: packed.byte_count,
            declaration: None,
        });
    };

    let file = create_file(StreamRole::Declaration, path)?;
    emit_declaration(
        BufWriter::new(file),
        packed.byte_count,
        &config.variable_name,
        &config.variable_type,
        config.guard,
        config.extern_c,
    )?;
    info!("Wrote declaration {}", path.display());

    Ok(RunSummary {
        byte_count: packed.byte_count,
        declaration: Some(path.clone()),
    })
}

fn open_input(source: &InputSource) -> Result<Box<dyn Read>> {
    match source {
        InputSource::Stdin => {
            debug!("Reading from standard input");
            Ok(Box::new(io::stdin().lock()))
        }
        InputSource::File(path) => {
            debug!("Opening input {}", path.display());
            let file = File::open(path).map_err(|e| Error::open(StreamRole::Input, path, e))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

fn open_output(sink: &OutputSink) -> Result<Box<dyn Write>> {
    match sink {
        OutputSink::Stdout => {
            debug!("Writing to standard output");
            Ok(Box::new(BufWriter::new(io::stdout().lock())))
        }
        OutputSink::File(path) => {
            let file = create_file(StreamRole::Output, path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

fn create_file(role: StreamRole, path: &Path) -> Result<File> {
    debug!("Creating {} file {}", role, path.display());
    File::create(path).map_err(|e| Error::open(role, path, e))
}
