//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before keyword
//! resolution and conversion to [`TokenKind`].

use logos::Logos;

use crate::TokenKind;

/// Raw token from logos (before keyword resolution).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\n")]
    Newline,

    #[regex(r"\\[ \t]*\r?\n")]
    LineContinuation,

    // String literal, optionally prefixed; an unterminated literal ends at
    // the end of the line
    #[regex(r#"(u8|u|U|L)?"([^"\\\n]|\\.)*"?"#)]
    String,

    #[token("R\"", raw_string)]
    #[token("u8R\"", raw_string)]
    #[token("uR\"", raw_string)]
    #[token("UR\"", raw_string)]
    #[token("LR\"", raw_string)]
    RawString,

    #[regex(r"(u8|u|U|L)?'([^'\\\n]|\\.)*'?")]
    Char,

    // Preprocessing number
    #[regex(r"\.?[0-9]([0-9A-Za-z_.']|[eEpP][+-])*")]
    Number,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    Arrow,
    #[token("->*")]
    ArrowStar,
    #[token(".*")]
    DotStar,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("#")]
    Hash,
    #[token("##")]
    HashHash,
    #[token("@")]
    At,
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    CompoundAssign,
}

/// Consume a block comment body up to and including `*/`.
///
/// An unterminated comment runs to the end of the input.
fn block_comment(lex: &mut logos::Lexer<RawToken>) {
    let rest = lex.remainder();
    let end = rest.find("*/").map_or(rest.len(), |i| i + 2);
    lex.bump(end);
}

/// Consume a raw string literal `R"delim( ... )delim"`.
///
/// The opening `R"` has already been matched. A missing delimiter or
/// terminator runs the literal to the end of the input.
fn raw_string(lex: &mut logos::Lexer<RawToken>) {
    let rest = lex.remainder();
    let Some(open) = rest.find('(') else {
        lex.bump(rest.len());
        return;
    };
    let terminator = format!("){}\"", &rest[..open]);
    let end = rest[open..]
        .find(&terminator)
        .map_or(rest.len(), |i| open + i + terminator.len());
    lex.bump(end);
}

impl RawToken {
    /// Whether the token is trivia the lexer never hands out.
    pub(crate) fn is_trivia(self) -> bool {
        matches!(
            self,
            RawToken::LineComment
                | RawToken::BlockComment
                | RawToken::Newline
                | RawToken::LineContinuation
        )
    }

    /// Tokens whose text may span several lines.
    pub(crate) fn is_multiline(self) -> bool {
        matches!(self, RawToken::BlockComment | RawToken::RawString)
    }
}

/// Convert a non-trivia raw token to a `TokenKind`.
///
/// Identifiers are resolved against the keyword table by the caller.
pub(crate) fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::String | RawToken::RawString => TokenKind::StringLit,
        RawToken::Char => TokenKind::CharLit,
        RawToken::Number => TokenKind::Number,
        RawToken::Ident => TokenKind::Ident,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::ArrowStar => TokenKind::ArrowStar,
        RawToken::DotStar => TokenKind::DotStar,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::Amp => TokenKind::Amp,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Question => TokenKind::Question,
        RawToken::Hash => TokenKind::Hash,
        RawToken::HashHash => TokenKind::HashHash,
        RawToken::At => TokenKind::At,
        RawToken::CompoundAssign => TokenKind::CompoundAssign,

        // Trivia never reaches conversion
        RawToken::LineComment
        | RawToken::BlockComment
        | RawToken::Newline
        | RawToken::LineContinuation => TokenKind::Unknown,
    }
}
