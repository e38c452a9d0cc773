//! Keyword resolution.
//!
//! Keywords are not logos tokens: whether `constexpr` or `char16_t` is
//! reserved depends on the selected [`CxxStandard`], which is only known at
//! run time. Every identifier slice goes through [`lookup`] instead.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2-9 chars), then matches against the keywords of
//! that length.

use crate::{CxxStandard, TokenKind};

/// Look up a reserved keyword by text.
///
/// Returns `None` for regular identifiers, including C++11 keywords when
/// `standard` is [`CxxStandard::Cxx03`].
#[inline]
pub fn lookup(text: &str, standard: CxxStandard) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-9 chars and start with a lowercase letter
    if !(2..=9).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    let kind = match len {
        2 => match text {
            "do" => TokenKind::Do,
            "if" => TokenKind::If,
            _ => return None,
        },
        3 => match text {
            "for" => TokenKind::For,
            "int" => TokenKind::Int,
            "new" => TokenKind::New,
            "try" => TokenKind::Try,
            _ => return None,
        },
        4 => match text {
            "auto" => TokenKind::Auto,
            "bool" => TokenKind::Bool,
            "case" => TokenKind::Case,
            "char" => TokenKind::Char,
            "else" => TokenKind::Else,
            "enum" => TokenKind::Enum,
            "goto" => TokenKind::Goto,
            "long" => TokenKind::Long,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "void" => TokenKind::Void,
            _ => return None,
        },
        5 => match text {
            "break" => TokenKind::Break,
            "catch" => TokenKind::Catch,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "false" => TokenKind::False,
            "float" => TokenKind::Float,
            "short" => TokenKind::Short,
            "throw" => TokenKind::Throw,
            "union" => TokenKind::Union,
            "using" => TokenKind::Using,
            "while" => TokenKind::While,
            _ => return None,
        },
        6 => match text {
            "delete" => TokenKind::Delete,
            "double" => TokenKind::Double,
            "extern" => TokenKind::Extern,
            "friend" => TokenKind::Friend,
            "inline" => TokenKind::Inline,
            "public" => TokenKind::Public,
            "return" => TokenKind::Return,
            "signed" => TokenKind::Signed,
            "sizeof" => TokenKind::Sizeof,
            "static" => TokenKind::Static,
            "struct" => TokenKind::Struct,
            "switch" => TokenKind::Switch,
            _ => return None,
        },
        7 => match text {
            "default" => TokenKind::Default,
            "mutable" => TokenKind::Mutable,
            "nullptr" => TokenKind::Nullptr,
            "private" => TokenKind::Private,
            "typedef" => TokenKind::Typedef,
            "virtual" => TokenKind::Virtual,
            "wchar_t" => TokenKind::WcharT,
            _ => return None,
        },
        8 => match text {
            "char16_t" => TokenKind::Char16T,
            "char32_t" => TokenKind::Char32T,
            "continue" => TokenKind::Continue,
            "decltype" => TokenKind::Decltype,
            "explicit" => TokenKind::Explicit,
            "noexcept" => TokenKind::Noexcept,
            "operator" => TokenKind::Operator,
            "register" => TokenKind::Register,
            "template" => TokenKind::Template,
            "typename" => TokenKind::Typename,
            "unsigned" => TokenKind::Unsigned,
            "volatile" => TokenKind::Volatile,
            _ => return None,
        },
        9 => match text {
            "constexpr" => TokenKind::Constexpr,
            "namespace" => TokenKind::Namespace,
            "protected" => TokenKind::Protected,
            _ => return None,
        },
        _ => return None,
    };

    if is_cxx11_only(kind) && !standard.has_cxx11_keywords() {
        return None;
    }
    Some(kind)
}

/// Keywords introduced by C++11.
const fn is_cxx11_only(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Char16T
            | TokenKind::Char32T
            | TokenKind::Constexpr
            | TokenKind::Decltype
            | TokenKind::Noexcept
            | TokenKind::Nullptr
    )
}
