//! Reading inputs, scanning them, and printing reports.

use std::io::{self, Read, Write};
use std::path::Path;

use cxx_scanner::{ScanOptions, Variable, VariableScanner};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{CliError, Mode, ScanArgs};

/// Label used for standard input in reports.
pub const STDIN_LABEL: &str = "<stdin>";

/// One source buffer to scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    pub label: String,
    pub text: String,
}

impl Input {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Input {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Scan result for one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub variables: Vec<Variable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized: Option<String>,
}

/// Read every input named by `args`, or standard input if none.
///
/// `-` names standard input and may appear among file names.
pub fn read_inputs(args: &ScanArgs) -> Result<Vec<Input>, CliError> {
    if args.files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    args.files.iter().map(|path| read_file(path)).collect()
}

fn read_stdin() -> Result<Input, CliError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(CliError::Stdin)?;
    Ok(Input::new(STDIN_LABEL, text))
}

fn read_file(path: &Path) -> Result<Input, CliError> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(Input::new(path.display().to_string(), text))
}

/// Scan a single input according to the selected mode.
pub fn scan_input(input: &Input, args: &ScanArgs, options: &ScanOptions) -> FileReport {
    let scanner = VariableScanner::new(input.text.as_str(), options.clone());
    let mut report = FileReport {
        path: input.label.clone(),
        variables: Vec::new(),
        optimized: None,
    };
    match args.mode {
        Mode::Variables => report.variables = scanner.get_variables(args.sort),
        Mode::Arguments => {
            let mut arguments = scanner.parse_function_arguments();
            if args.sort {
                arguments.sort_by(|a, b| a.name().cmp(b.name()));
            }
            report.variables = arguments;
        }
        Mode::Optimized => report.optimized = Some(scanner.optimized_buffer().to_owned()),
    }
    debug!(path = %report.path, count = report.variables.len(), "scanned input");
    report
}

/// Scan all inputs, in parallel when there is more than one.
///
/// Reports come back in input order.
pub fn scan_inputs(inputs: &[Input], args: &ScanArgs) -> Vec<FileReport> {
    let options = args.scan_options();
    if inputs.len() < 2 {
        return inputs
            .iter()
            .map(|input| scan_input(input, args, &options))
            .collect();
    }

    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                inputs
                    .par_iter()
                    .map(|input| scan_input(input, args, &options))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), scanning sequentially");
            inputs
                .iter()
                .map(|input| scan_input(input, args, &options))
                .collect()
        })
}

/// Print reports as text or JSON.
///
/// Text output has one `line<TAB>declaration` row per variable, with
/// `-` for an unknown line. Several reports are separated by a
/// `==> path <==` header.
pub fn write_reports<W: Write>(reports: &[FileReport], json: bool, out: &mut W) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, reports)?;
        writeln!(out)?;
        return Ok(());
    }

    let with_headers = reports.len() > 1;
    for (index, report) in reports.iter().enumerate() {
        if with_headers {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", report.path)?;
        }
        if let Some(optimized) = &report.optimized {
            writeln!(out, "{}", optimized.trim_end())?;
            continue;
        }
        for variable in &report.variables {
            match variable.line() {
                Some(line) => writeln!(out, "{line}\t{variable}")?,
                None => writeln!(out, "-\t{variable}")?,
            }
        }
    }
    Ok(())
}

/// Read, scan, and print.
pub fn run<W: Write>(args: &ScanArgs, out: &mut W) -> Result<(), CliError> {
    let inputs = read_inputs(args)?;
    let reports = scan_inputs(&inputs, args);
    write_reports(&reports, args.json, out)?;
    out.flush()?;
    Ok(())
}
