//! Declaration (header) emission.
//!
//! Writes the companion header that exposes a packed array to other
//! translation units:
//!
//! ```text
//! #ifndef VAR_NAME_HEADER
//! #define VAR_NAME_HEADER
//! #include <stddef.h>
//!
//! extern const size_t var_name_length;
//! extern const unsigned char var_name[3];
//!
//! #endif
//! ```
//!
//! The array bound is always the byte count returned by [`crate::pack`]
//! for the same input.

use crate::config::GuardStyle;
use crate::error::Result;
use crate::{GUARD_SUFFIX, LENGTH_SUFFIX};
use std::io::Write;
use tracing::debug;

const EXTERN_C_OPEN: &str = "\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n";
const EXTERN_C_CLOSE: &str = "\n#ifdef __cplusplus\n}\n#endif\n\n";

/// Builds the include guard macro for a variable name.
///
/// Every ASCII letter is upper-cased; all other characters pass through.
///
/// # Errors
///
/// Returns [`crate::Error::GuardAllocation`] if the string cannot be allocated.
pub fn guard_macro(variable_name: &str) -> Result<String> {
    let mut guard = String::new();
    guard.try_reserve_exact(variable_name.len() + GUARD_SUFFIX.len())?;
    guard.extend(variable_name.chars().map(|c| c.to_ascii_uppercase()));
    guard.push_str(GUARD_SUFFIX);
    Ok(guard)
}

/// Writes the declaration file for an array of `byte_count` elements.
///
/// The guard name is computed before anything is written, so a failed
/// allocation leaves `output` untouched.
///
/// # Errors
///
/// Returns [`crate::Error::Write`] if the sink rejects a write and
/// [`crate::Error::GuardAllocation`] if the guard name cannot be built.
pub fn emit_declaration<W: Write>(
    mut output: W,
    byte_count: usize,
    variable_name: &str,
    variable_type: &str,
    guard: GuardStyle,
    extern_c: bool,
) -> Result<()> {
    let guard_name = match guard {
        GuardStyle::PragmaOnce => None,
        GuardStyle::IncludeGuard => Some(guard_macro(variable_name)?),
    };

    write_declaration(
        &mut output,
        guard_name.as_deref(),
        byte_count,
        variable_name,
        variable_type,
        extern_c,
    )
    .map_err(crate::Error::Write)?;

    debug!(
        "Declared '{}' with {} elements ({:?}, extern C: {})",
        variable_name, byte_count, guard, extern_c
    );

    Ok(())
}

fn write_declaration<W: Write>(
    out: &mut W,
    guard_name: Option<&str>,
    byte_count: usize,
    variable_name: &str,
    variable_type: &str,
    extern_c: bool,
) -> std::io::Result<()> {
    match guard_name {
        Some(name) => write!(out, "#ifndef {}\n#define {}\n", name, name)?,
        None => out.write_all(b"#pragma once\n")?,
    }

    if extern_c {
        out.write_all(EXTERN_C_OPEN.as_bytes())?;
    }

    out.write_all(b"#include <stddef.h>\n")?;

    write!(out, "\nextern const size_t {}{};\n", variable_name, LENGTH_SUFFIX)?;
    write!(out, "extern {} {}[{}];\n", variable_type, variable_name, byte_count)?;

    if extern_c {
        out.write_all(EXTERN_C_CLOSE.as_bytes())?;
    }

    if guard_name.is_some() {
        out.write_all(b"\n#endif\n")?;
    }

    out.flush()
}
