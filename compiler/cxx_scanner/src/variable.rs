//! Declaration records produced by the scanner.

use std::fmt;
use std::ops::BitOr;

use cxx_lexer::TokenKind;

use crate::pack::pack;

/// One token of a declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeToken {
    kind: TokenKind,
    text: String,
    /// Number of enclosing `< >` / `[ ]` pairs.
    depth: u32,
}

impl TypeToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, depth: u32) -> Self {
        TypeToken {
            kind,
            text: text.into(),
            depth,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Parts of a [`Variable`] included by [`Variable::to_display_string`].
///
/// The type and its pointer/reference decoration are always included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToStringFlags(u8);

impl ToStringFlags {
    pub const NONE: Self = ToStringFlags(0);
    pub const NAME: Self = ToStringFlags(1 << 0);
    pub const DEFAULT_VALUE: Self = ToStringFlags(1 << 1);
    pub const ALL: Self = ToStringFlags(Self::NAME.0 | Self::DEFAULT_VALUE.0);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ToStringFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        ToStringFlags(self.0 | rhs.0)
    }
}

/// A declared variable or function parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Variable {
    name: String,
    type_tokens: Vec<TypeToken>,
    pointer_or_reference: String,
    is_auto: bool,
    default_value: String,
    line: Option<u32>,
}

impl Variable {
    pub fn new(name: impl Into<String>, type_tokens: Vec<TypeToken>) -> Self {
        Variable {
            name: name.into(),
            type_tokens,
            ..Variable::default()
        }
    }

    #[must_use]
    pub fn with_pointer_or_reference(mut self, decoration: impl Into<String>) -> Self {
        self.pointer_or_reference = decoration.into();
        self
    }

    #[must_use]
    pub fn with_auto(mut self, is_auto: bool) -> Self {
        self.is_auto = is_auto;
        self
    }

    #[must_use]
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tokens(&self) -> &[TypeToken] {
        &self.type_tokens
    }

    /// Accumulated `*`, `&`, `&&` and `@` decoration, in source order.
    pub fn pointer_or_reference(&self) -> &str {
        &self.pointer_or_reference
    }

    /// The type contains the `auto` placeholder.
    pub fn is_auto(&self) -> bool {
        self.is_auto
    }

    /// Initializer text: assignment right-hand side, or the bracketed
    /// constructor arguments, brace initializer or array extent.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// 1-based line of the name, when known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Both a name and a type were recognized.
    pub fn is_ok(&self) -> bool {
        !self.name.is_empty() && !self.type_tokens.is_empty()
    }

    pub fn type_as_string(&self) -> String {
        pack(self.type_tokens.iter().map(|t| (t.kind, t.text.as_str())))
    }

    /// The type as it would be spelled in C++ code: without a leading
    /// elaborated-type keyword (`struct stat` becomes `stat`).
    pub fn type_as_cxx_string(&self) -> String {
        let skip = usize::from(matches!(
            self.type_tokens.first().map(TypeToken::kind),
            Some(TokenKind::Class | TokenKind::Struct)
        ));
        pack(
            self.type_tokens
                .iter()
                .skip(skip)
                .map(|t| (t.kind, t.text.as_str())),
        )
    }

    /// Render as `<type><decoration> <name> = <default>`.
    ///
    /// Bracketed initializers are appended directly: `int a[10]`,
    /// `Foo f{1, 2}`.
    pub fn to_display_string(&self, flags: ToStringFlags) -> String {
        let mut out = self.type_as_string();
        out.push_str(&self.pointer_or_reference);
        if flags.contains(ToStringFlags::NAME) && !self.name.is_empty() {
            out.push(' ');
            out.push_str(&self.name);
        }
        if flags.contains(ToStringFlags::DEFAULT_VALUE) && !self.default_value.is_empty() {
            if self.default_value.starts_with(['(', '[', '{']) {
                out.push_str(&self.default_value);
            } else {
                out.push_str(" = ");
                out.push_str(&self.default_value);
            }
        }
        out
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string(ToStringFlags::ALL))
    }
}
