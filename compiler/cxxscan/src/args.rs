//! Command-line parsing.

use std::path::PathBuf;

use cxx_scanner::{CxxStandard, ScanOptions};

use crate::CliError;

pub const USAGE: &str = "\
Usage: cxxscan [OPTIONS] [FILE...]

Print the variable declarations found in C/C++ sources.
Reads standard input when no FILE (or `-`) is given.

Options:
  --std=<c++03|c++11>   Keyword set (default: c++11)
  --macro=<NAME>        Ignore identifier NAME (repeatable)
  --signature           Treat input as a function parameter list
  --args                List parameters, including unnamed ones
  --sort                Sort by name
  --json                Print JSON
  --dump-optimized      Print the optimized buffer instead
  -h, --help            Show this help

Set RUST_LOG (e.g. RUST_LOG=cxx_scanner=trace) for diagnostics.";

/// What to print for each input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Variables,
    Arguments,
    Optimized,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanArgs {
    pub standard: CxxStandard,
    pub macros: Vec<String>,
    pub signature: bool,
    pub mode: Mode,
    pub sort: bool,
    pub json: bool,
    /// Inputs; `-` or an empty list means standard input.
    pub files: Vec<PathBuf>,
}

impl ScanArgs {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new()
            .with_standard(self.standard)
            .with_macros(self.macros.iter().cloned())
            .with_function_signature(self.signature)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Scan(ScanArgs),
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ScanArgs::default();
    let mut only_files = false;

    for arg in args {
        let arg = arg.as_ref();
        if only_files || arg == "-" || !arg.starts_with('-') {
            parsed.files.push(PathBuf::from(arg));
            continue;
        }
        match arg {
            "--" => only_files = true,
            "-h" | "--help" => return Ok(Invocation::Help),
            "--signature" => parsed.signature = true,
            "--args" => parsed.mode = Mode::Arguments,
            "--dump-optimized" => parsed.mode = Mode::Optimized,
            "--sort" => parsed.sort = true,
            "--json" => parsed.json = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--std=") {
                    parsed.standard = value
                        .parse()
                        .map_err(|_| CliError::InvalidStandard(value.to_owned()))?;
                } else if let Some(name) = arg.strip_prefix("--macro=") {
                    if name.is_empty() {
                        return Err(CliError::MissingValue("--macro"));
                    }
                    parsed.macros.push(name.to_owned());
                } else if arg == "--std" {
                    return Err(CliError::MissingValue("--std"));
                } else {
                    return Err(CliError::UnknownOption(arg.to_owned()));
                }
            }
        }
    }

    Ok(Invocation::Scan(parsed))
}
