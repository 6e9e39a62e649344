//! Byte packing.
//!
//! Turns a byte stream into an array definition:
//!
//! ```text
//! const unsigned char var_name[] = { 0x0, 0xFF, 0x10, };
//!
//! const size_t var_name_length = 3;
//!
//! ```
//!
//! Each byte becomes an uppercase, unpadded hex literal followed by `", "`.
//! An empty stream yields `{  }` and a length of `0`.

use crate::error::{Error, Result};
use crate::LENGTH_SUFFIX;
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, trace};

/// Size of the read buffer
const CHUNK_SIZE: usize = 8 * 1024;

/// Outcome of packing a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackResult {
    /// Number of bytes read from the input and written as array elements
    pub byte_count: usize,
}

/// Packs every byte of `input` into an array definition written to `output`.
///
/// `variable_name` and `variable_type` are written verbatim. The sink is
/// flushed before returning but neither stream is closed.
///
/// # Errors
///
/// Returns [`Error::Read`] if the input fails before end of stream and
/// [`Error::Write`] if the output rejects a write or the final flush.
pub fn pack<R, W>(
    mut input: R,
    mut output: W,
    variable_name: &str,
    variable_type: &str,
) -> Result<PackResult>
where
    R: Read,
    W: Write,
{
    write!(output, "{} {}[] = {{ ", variable_type, variable_name).map_err(Error::Write)?;

    let mut buf = [0u8; CHUNK_SIZE];
    let mut byte_count = 0usize;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Read(e)),
        };

        trace!("Read chunk of {} bytes", n);
        for byte in &buf[..n] {
            write!(output, "0x{:X}, ", byte).map_err(Error::Write)?;
        }
        byte_count += n;
    }

    if byte_count == 0 {
        // Empty arrays keep both padding spaces: `{  }`
        output.write_all(b" ").map_err(Error::Write)?;
    }

    write!(
        output,
        "}};\n\nconst size_t {}{} = {};\n\n",
        variable_name, LENGTH_SUFFIX, byte_count
    )
    .map_err(Error::Write)?;
    output.flush().map_err(Error::Write)?;

    debug!("Packed {} bytes into '{}'", byte_count, variable_name);

    Ok(PackResult { byte_count })
}
