//! Public scanning entry point.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::optimizer::optimize;
use crate::recognizer::Recognizer;
use crate::{ScanOptions, Variable};

/// Declarations keyed by name.
pub type VariableMap = BTreeMap<String, Variable>;

/// Scans one buffer for variable declarations.
///
/// The buffer is optimized on first use and the result kept for later
/// calls. Scanning never fails: unreadable input yields fewer (or no)
/// variables.
///
/// ```
/// use cxx_scanner::{ScanOptions, VariableScanner};
///
/// let scanner = VariableScanner::new("int a = 1, *b; std::string s;", ScanOptions::new());
/// let names: Vec<_> = scanner
///     .get_variables(false)
///     .iter()
///     .map(|v| v.name().to_owned())
///     .collect();
/// assert_eq!(names, ["a", "b", "s"]);
/// ```
#[derive(Debug)]
pub struct VariableScanner {
    buffer: String,
    options: ScanOptions,
    first_line: u32,
    optimized: OnceCell<String>,
}

impl VariableScanner {
    /// Create a scanner over `buffer`.
    ///
    /// A single leading `(` is dropped so a parameter list can be passed
    /// with its opening parenthesis.
    pub fn new(buffer: impl Into<String>, options: ScanOptions) -> Self {
        let mut buffer = buffer.into();
        if buffer.starts_with('(') {
            buffer.remove(0);
        }
        VariableScanner {
            buffer,
            options,
            first_line: 1,
            optimized: OnceCell::new(),
        }
    }

    /// Number the buffer's lines starting at `line`.
    #[must_use]
    pub fn with_first_line(mut self, line: u32) -> Self {
        self.first_line = line.max(1);
        self
    }

    /// The simplified buffer the recognizer reads.
    pub fn optimized_buffer(&self) -> &str {
        self.optimized.get_or_init(|| {
            optimize(&self.buffer, self.options.standard(), self.first_line)
        })
    }

    /// All well-formed declarations, in source order or sorted by name.
    pub fn get_variables(&self, sort: bool) -> Vec<Variable> {
        let optimized = self.optimized_buffer();
        let mut variables = match Recognizer::new(optimized, &self.options, self.first_line) {
            Ok(recognizer) => recognizer.collect_variables(),
            Err(err) => {
                warn!(%err, "cannot scan buffer");
                Vec::new()
            }
        };
        if sort {
            variables.sort_by(|a, b| a.name().cmp(b.name()));
        }
        debug!(count = variables.len(), sort, "collected variables");
        variables
    }

    /// Declarations by name; the first declaration of a name wins.
    pub fn get_variables_map(&self) -> VariableMap {
        let mut map = VariableMap::new();
        for variable in self.get_variables(true) {
            map.entry(variable.name().to_owned()).or_insert(variable);
        }
        map
    }

    /// Read the raw buffer as a parameter list: one record per
    /// parameter, including unnamed ones.
    pub fn parse_function_arguments(&self) -> Vec<Variable> {
        let arguments = match Recognizer::new(&self.buffer, &self.options, self.first_line) {
            Ok(recognizer) => recognizer.collect_arguments(),
            Err(err) => {
                warn!(%err, "cannot scan parameter list");
                Vec::new()
            }
        };
        debug!(count = arguments.len(), "collected arguments");
        arguments
    }
}

#[cfg(test)]
mod tests;
