//! packer - Embed binary files into C and C++ sources
//!
//! This tool reads a binary blob and writes it out as a statically
//! initialized byte array, optionally with a header declaring it.

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use packer_core::config::{DEFAULT_VARIABLE_NAME, DEFAULT_VARIABLE_TYPE};
use packer_core::{Config, GuardStyle, InputSource, OutputSink, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Embed binary files into C/C++ sources as byte arrays
#[derive(Parser, Debug)]
#[command(name = "packer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file to pack [default: stdin]
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the array definition [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Name of the variable in the source file
    #[arg(
        short = 'v',
        long,
        value_name = "NAME",
        default_value = DEFAULT_VARIABLE_NAME,
        value_parser = NonEmptyStringValueParser::new()
    )]
    var_name: String,

    /// Type of the variable in the source file
    #[arg(
        short = 't',
        long,
        value_name = "TYPE",
        default_value = DEFAULT_VARIABLE_TYPE,
        value_parser = NonEmptyStringValueParser::new()
    )]
    var_type: String,

    /// Output file for the declaration header (not written by default)
    #[arg(short, long, value_name = "FILE")]
    declaration: Option<PathBuf>,

    /// Use #pragma once in the header instead of include guard macros
    #[arg(short, long)]
    pragma_once: bool,

    /// Wrap the header declarations in extern "C"
    #[arg(short = 'c', long)]
    extern_c: bool,

    /// Verbosity level (--verbose, --verbose --verbose, ...)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Build the immutable run configuration from parsed flags
    fn to_config(&self) -> Config {
        let input = self
            .input
            .clone()
            .map_or(InputSource::Stdin, InputSource::File);
        let output = self
            .output
            .clone()
            .map_or(OutputSink::Stdout, OutputSink::File);
        let guard = if self.pragma_once {
            GuardStyle::PragmaOnce
        } else {
            GuardStyle::IncludeGuard
        };

        Config::new()
            .variable_name(&self.var_name)
            .variable_type(&self.var_type)
            .input(input)
            .output(output)
            .declaration(self.declaration.clone())
            .guard(guard)
            .extern_c(self.extern_c)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout may carry the generated source
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = execute(&cli);
    match &result {
        Ok(summary) => info!("Packed {} bytes as '{}'", summary.byte_count, cli.var_name),
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("error: {}", user_message(e));
        }
    }

    ExitCode::from(exit_status(&result))
}

/// Process exit status for a finished run: 0 on success, 1 on any failure
fn exit_status(result: &Result<RunSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Run the packer; open errors already name the failing file role
fn execute(cli: &Cli) -> Result<RunSummary> {
    let config = cli.to_config();
    match packer_core::run(&config) {
        Err(e) if e.is_open_error() => Err(e.into()),
        other => other.with_context(|| format!("failed to pack '{}'", config.variable_name)),
    }
}

/// Render an error chain as a single line for stderr
fn user_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["packer"]).unwrap();
        let config = cli.to_config();

        assert_eq!(config.variable_name, "var_name");
        assert_eq!(config.variable_type, "const unsigned char");
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.output, OutputSink::Stdout);
        assert_eq!(config.declaration, None);
        assert_eq!(config.guard, GuardStyle::IncludeGuard);
        assert!(!config.extern_c);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "packer", "-i", "in.bin", "-o", "out.c", "-v", "MyData", "-t", "char", "-d", "out.h",
            "-p", "-c",
        ])
        .unwrap();
        let config = cli.to_config();

        assert_eq!(config.input, InputSource::File("in.bin".into()));
        assert_eq!(config.output, OutputSink::File("out.c".into()));
        assert_eq!(config.variable_name, "MyData");
        assert_eq!(config.variable_type, "char");
        assert_eq!(config.declaration, Some(PathBuf::from("out.h")));
        assert_eq!(config.guard, GuardStyle::PragmaOnce);
        assert!(config.extern_c);
    }

    #[test]
    fn test_verbose_has_no_short_form() {
        let cli = Cli::try_parse_from(["packer", "--verbose", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["packer", "-v", "logo"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.var_name, "logo");
    }

    #[test]
    fn test_rejects_empty_variable_name() {
        assert!(Cli::try_parse_from(["packer", "-v", ""]).is_err());
    }

    #[test]
    fn test_execute_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.c");
        let cli = Cli::try_parse_from([
            "packer".into(),
            "-i".into(),
            temp_dir.path().join("missing.bin"),
            "-o".into(),
            output.clone(),
        ])
        .unwrap();

        let result = execute(&cli);
        assert_eq!(exit_status(&result), 1);

        let message = user_message(&result.unwrap_err());
        let missing = temp_dir.path().join("missing.bin");
        assert!(message.starts_with(&format!(
            "cannot open input file '{}': ",
            missing.display()
        )));
        // The OS error text appears once, at the end of the chain
        assert_eq!(message.matches("(os error").count(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.bin");
        let output = temp_dir.path().join("data.c");
        let header = temp_dir.path().join("data.h");
        fs::write(&input, [0u8; 5]).unwrap();

        let cli = Cli::try_parse_from([
            "packer".into(),
            "-i".into(),
            input,
            "-o".into(),
            output.clone(),
            "-d".into(),
            header.clone(),
            "-v".into(),
            "MyData".into(),
            "-p".into(),
            "-c".into(),
        ])
        .unwrap();

        let result = execute(&cli);
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap().byte_count, 5);

        let source = fs::read_to_string(&output).unwrap();
        assert!(source.starts_with("const unsigned char MyData[] = { 0x0, 0x0, 0x0, 0x0, 0x0, };"));

        let decl = fs::read_to_string(&header).unwrap();
        assert!(decl.starts_with("#pragma once\n"));
        assert!(decl.contains("extern const unsigned char MyData[5];"));
        assert!(!decl.contains("#ifndef"));
    }

    #[test]
    fn test_execute_unopenable_declaration() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.bin");
        let header = temp_dir.path().join("no/such/dir/data.h");
        fs::write(&input, [1u8]).unwrap();

        let cli = Cli::try_parse_from([
            "packer".into(),
            "-i".into(),
            input,
            "-o".into(),
            temp_dir.path().join("data.c"),
            "-d".into(),
            header.clone(),
        ])
        .unwrap();

        let result = execute(&cli);
        assert_eq!(exit_status(&result), 1);

        let message = user_message(&result.unwrap_err());
        assert!(message.starts_with(&format!(
            "cannot open declaration file '{}': ",
            header.display()
        )));
        assert_eq!(message.matches("(os error").count(), 1);
    }
}
