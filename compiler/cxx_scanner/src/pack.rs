//! Token packing: turn a token sequence back into compact source text.
//!
//! A space is written only where one is needed to keep the tokens apart
//! when the text is lexed again: between two word-like tokens, between
//! punctuators that would otherwise fuse (`-` `>` into `->`), and after
//! commas for readability.

use cxx_lexer::TokenKind;

/// Pack `(kind, text)` pairs into normalized text.
pub(crate) fn pack<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = (TokenKind, &'a str)>,
{
    let mut out = String::new();
    let mut prev: Option<(TokenKind, &str)> = None;
    for (kind, text) in tokens {
        if let Some((prev_kind, prev_text)) = prev {
            if needs_space(prev_kind, prev_text, kind, text) {
                out.push(' ');
            }
        }
        out.push_str(text);
        prev = Some((kind, text));
    }
    out
}

fn needs_space(prev_kind: TokenKind, prev_text: &str, kind: TokenKind, text: &str) -> bool {
    if prev_kind == TokenKind::Comma || (prev_kind.is_word() && kind.is_word()) {
        return true;
    }
    let (Some(last), Some(first)) = (prev_text.chars().next_back(), text.chars().next()) else {
        return false;
    };
    if prev_kind == TokenKind::Number {
        // pp-numbers swallow `.`, digits, letters and exponent signs
        return first == '.'
            || first == '\''
            || first.is_ascii_alphanumeric()
            || (matches!(first, '+' | '-') && matches!(last, 'e' | 'E' | 'p' | 'P'));
    }
    if prev_kind == TokenKind::Arrow && kind == TokenKind::Star {
        return true;
    }
    fuses(last, first)
}

/// Two adjacent punctuator characters that lex as one token or open a comment.
fn fuses(last: char, first: char) -> bool {
    matches!(
        (last, first),
        ('&', '&' | '=')
            | ('|', '|' | '=')
            | ('+', '+' | '=')
            | ('-', '-' | '=' | '>')
            | ('=' | '!' | '<' | '>' | '*' | '%' | '^', '=')
            | (':', ':')
            | ('.', '.' | '*')
            | ('/', '/' | '*' | '=')
            | ('#', '#')
    ) || (last == '.' && first.is_ascii_digit())
}
