//! Token types for the C/C++ lexer.
//!
//! `TokenKind` is a fieldless enum so its discriminant can index a
//! [`TokenSet`](crate::TokenSet) bitset. The lexeme itself lives in
//! [`Token::text`], borrowed from the source buffer.

use std::fmt;

/// A token with its text and the line it starts on.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// 1-based source line.
    pub line: u32,
    /// Byte offset of `text` in the lexed buffer.
    pub offset: u32,
    pub flags: TokenFlags,
}

impl<'src> Token<'src> {
    /// Create a token that does not point into a buffer (`offset` 0).
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, line: u32) -> Self {
        Token {
            kind,
            text,
            line,
            offset: 0,
            flags: TokenFlags::EMPTY,
        }
    }

    /// Byte offset one past the end of `text`.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.offset as usize + self.text.len()
    }

    /// Token belongs to a preprocessor directive (`#include`, `#define`, ...).
    #[inline]
    pub fn is_preprocessor(&self) -> bool {
        self.flags.contains(TokenFlags::PREPROCESSOR)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.line)
    }
}

/// Per-token metadata flags.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Token is part of a preprocessor directive.
    pub const PREPROCESSOR: u8 = 1 << 0;

    /// Empty flags (no bits set).
    pub const EMPTY: Self = TokenFlags(0);

    /// Check if a specific flag is set.
    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }
}

impl fmt::Debug for TokenFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenFlags({:#04b})", self.0)
    }
}

/// Token kinds for C and C++.
///
/// Operators that the declaration scanner never needs to tell apart
/// (`+=`, `-=`, ...) share a kind. `<<` and `>>` are never produced:
/// they lex as two `<` / `>` tokens so template brackets stay balanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum TokenKind {
    Ident,
    /// Preprocessing number: `42`, `0x1F`, `1.5e-3f`, `1'000'000`
    Number,
    StringLit,
    CharLit,

    Auto,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    Char16T,
    Char32T,
    Class,
    Const,
    Constexpr,
    Continue,
    Decltype,
    Default,
    Delete,
    Do,
    Double,
    Else,
    Enum,
    Explicit,
    Extern,
    False,
    Float,
    For,
    Friend,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Mutable,
    Namespace,
    New,
    Noexcept,
    Nullptr,
    Operator,
    Private,
    Protected,
    Public,
    Register,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Template,
    This,
    Throw,
    True,
    Try,
    Typedef,
    Typename,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    WcharT,
    While,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Semicolon,
    Comma,
    Colon,
    DoubleColon,
    Dot,
    Ellipsis,
    Arrow,
    ArrowStar,
    DotStar,
    Eq,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    Tilde,
    Bang,
    Question,
    Hash,
    HashHash,
    /// AngelScript handle marker, also Objective-C directives.
    At,
    /// `+=`, `-=`, `*=`, `/=`, `%=`, `&=`, `|=`, `^=`
    CompoundAssign,

    /// A character the lexer does not recognize.
    Unknown,
}

impl TokenKind {
    /// Index of this kind inside a [`TokenSet`](crate::TokenSet).
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Reserved words, including the built-in type names.
    pub const fn is_keyword(self) -> bool {
        let index = self as u8;
        index >= TokenKind::Auto as u8 && index <= TokenKind::While as u8
    }

    /// Built-in (fundamental) type keywords.
    pub const fn is_builtin_type(self) -> bool {
        matches!(
            self,
            TokenKind::Bool
                | TokenKind::Char
                | TokenKind::Char16T
                | TokenKind::Char32T
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Short
                | TokenKind::Signed
                | TokenKind::Unsigned
                | TokenKind::Void
                | TokenKind::WcharT
        )
    }

    /// Storage-class and cv qualifiers that may prefix a declaration.
    pub const fn is_qualifier(self) -> bool {
        matches!(
            self,
            TokenKind::Const
                | TokenKind::Constexpr
                | TokenKind::Mutable
                | TokenKind::Register
                | TokenKind::Static
                | TokenKind::Volatile
        )
    }

    /// Tokens that need whitespace between them when printed back to back.
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Number | TokenKind::StringLit | TokenKind::CharLit
        ) || self.is_keyword()
    }
}
