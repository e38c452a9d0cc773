//! Heuristic C/C++ variable declaration scanner.
//!
//! Extracts local variable and parameter declarations from source
//! fragments that need not compile: a function body being typed, a
//! class under edit, a bare parameter list. Scanning is best effort and
//! never fails; malformed input yields partial results.
//!
//! # Pipeline
//!
//! 1. The optimizer flattens the buffer: call arguments collapse to
//!    `()`, loop and `catch` headers become plain declarations,
//!    preprocessor lines vanish.
//! 2. The recognizer walks the result reading `type name [init]`
//!    sequences. A parenthesized initializer that does not form a
//!    variable (`f(int a, char* b) {`) is re-scanned as a parameter list.
//!
//! ```
//! use cxx_scanner::{ScanOptions, VariableScanner};
//!
//! let source = "void f(int a) {\n    for (auto& item : items) {\n        use(item);\n    }\n}";
//! let variables = VariableScanner::new(source, ScanOptions::new()).get_variables(true);
//! let names: Vec<_> = variables.iter().map(|v| (v.name(), v.line())).collect();
//! assert_eq!(names, [("a", Some(1)), ("item", Some(2))]);
//! ```

mod optimizer;
mod options;
mod pack;
mod recognizer;
mod scanner;
mod stack;
mod variable;

pub use cxx_lexer::CxxStandard;
pub use options::ScanOptions;
pub use scanner::{VariableMap, VariableScanner};
pub use variable::{ToStringFlags, TypeToken, Variable};
