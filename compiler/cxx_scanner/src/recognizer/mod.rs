//! Declaration recognizer.
//!
//! Walks an optimized buffer and speculatively reads `type name ...`
//! sequences. The grammar is ambiguous without semantic information, so
//! every decision is a local check of the type read so far against the
//! next token. A failed read costs one token: the driver simply retries
//! from the token after it.
//!
//! # Organization
//!
//! Each module extends `Recognizer` with one production:
//!
//! - `ty`: the type
//! - `name`: decorations, the name and the token after it
//! - `init`: the initializer

mod init;
mod name;
mod stream;
mod ty;

use cxx_lexer::{LexError, Lexer};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ScanOptions, Variable, VariableScanner};
use name::SignatureSource;
use stream::TokenStream;

pub(crate) struct Recognizer<'src, 'opts> {
    stream: TokenStream<'src, 'opts>,
    /// The buffer being read, for cutting out initializer text.
    source: &'src str,
    options: &'opts ScanOptions,
    /// Parameter-list mode: one name per type, no initializers.
    signature: bool,
}

impl<'src, 'opts> Recognizer<'src, 'opts> {
    pub(crate) fn new(
        source: &'src str,
        options: &'opts ScanOptions,
        first_line: u32,
    ) -> Result<Self, LexError> {
        let lexer = Lexer::new(source, options.standard())?.with_first_line(first_line);
        Ok(Recognizer {
            stream: TokenStream::new(lexer, options.macros()),
            source,
            options,
            signature: options.is_function_signature(),
        })
    }

    /// Collect every well-formed declaration, splicing in parameters
    /// of nested signatures.
    pub(crate) fn collect_variables(mut self) -> Vec<Variable> {
        let mut variables = Vec::new();
        while !self.stream.is_eof() {
            let Some(ty) = self.read_type() else {
                continue;
            };
            loop {
                let read = self.read_name();
                // `if (x && Foo())` reads as type `x`, name `Foo`
                if read.decoration == "&&" && read.initializer.contains('(') {
                    trace!(name = %read.name, "skipping logical-and expression");
                    break;
                }
                let variable = read.to_variable(&ty);
                if variable.is_ok() {
                    trace!(
                        name = variable.name(),
                        ty = %variable.type_as_string(),
                        line = ?variable.line(),
                        "declaration"
                    );
                    variables.push(variable);
                } else if !read.initializer.is_empty() {
                    // A call or definition: its parentheses may hold
                    // a parameter list
                    if let Some(source) = read.signature_source {
                        variables.extend(self.scan_nested_signature(source));
                    }
                    break;
                }
                if !read.has_more || self.stream.paren_depth() != 0 {
                    break;
                }
            }
        }
        variables
    }

    /// Collect one record per parameter, named or not.
    pub(crate) fn collect_arguments(mut self) -> Vec<Variable> {
        self.signature = true;
        let mut arguments = Vec::new();
        while !self.stream.is_eof() {
            let Some(ty) = self.read_type() else {
                continue;
            };
            let read = self.read_name();
            arguments.push(read.to_variable(&ty));
        }
        arguments
    }

    fn scan_nested_signature(&self, source: SignatureSource<'_>) -> Vec<Variable> {
        trace!(line = source.line, text = source.text, "scanning nested signature");
        let options = self.options.for_signature();
        ensure_sufficient_stack(|| {
            VariableScanner::new(source.text, options)
                .with_first_line(source.line)
                .get_variables(false)
        })
    }
}

#[cfg(test)]
mod tests;
