//! Scanner configuration.

use std::sync::Arc;

use cxx_lexer::CxxStandard;
use rustc_hash::FxHashSet;

/// Settings shared by a scanner and every child scanner it spawns.
///
/// Cloning is cheap: the macro set is reference counted.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    standard: CxxStandard,
    macros: Arc<FxHashSet<String>>,
    function_signature: bool,
}

impl ScanOptions {
    /// C++11 keywords, no ignored macros, local-scope mode.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_standard(mut self, standard: CxxStandard) -> Self {
        self.standard = standard;
        self
    }

    /// Identifiers to skip entirely while recognizing declarations.
    ///
    /// Typical entries are attribute or export macros such as
    /// `WXDLLIMPEXP_CORE` that sit between a type and its name.
    #[must_use]
    pub fn with_macros<I, S>(mut self, macros: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.macros = Arc::new(macros.into_iter().map(Into::into).collect());
        self
    }

    /// Treat the buffer as a parameter list: every name ends its
    /// declaration and initializers are not read.
    #[must_use]
    pub fn with_function_signature(mut self, function_signature: bool) -> Self {
        self.function_signature = function_signature;
        self
    }

    pub fn standard(&self) -> CxxStandard {
        self.standard
    }

    pub fn macros(&self) -> &FxHashSet<String> {
        &self.macros
    }

    pub fn is_function_signature(&self) -> bool {
        self.function_signature
    }

    /// Options for a child scanner over a nested parameter list.
    pub(crate) fn for_signature(&self) -> Self {
        self.clone().with_function_signature(true)
    }
}
