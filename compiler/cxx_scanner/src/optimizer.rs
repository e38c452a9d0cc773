//! Buffer optimizer.
//!
//! Rewrites a raw buffer into a flattened form that the declaration
//! recognizer can walk with simple local rules:
//!
//! - call arguments collapse to `()`
//! - `for` headers that declare something become a plain declaration at
//!   the top of the loop body
//! - `catch` parameters become a plain declaration
//! - `while` headers disappear
//! - preprocessor directives disappear
//!
//! Brace scopes are kept as a stack of text buffers. A closed scope is
//! inlined into its parent, so the output keeps source order. Newlines
//! are re-inserted so every token stays on its original line.

use cxx_lexer::{CxxStandard, Lexer, Token, TokenKind};
use tracing::{trace, warn};

/// Optimize `buffer`, numbering its first line `first_line`.
///
/// Returns an empty string if the buffer cannot be lexed at all.
pub(crate) fn optimize(buffer: &str, standard: CxxStandard, first_line: u32) -> String {
    match Lexer::new(buffer, standard) {
        Ok(lexer) => BufferOptimizer::new(lexer.with_first_line(first_line), first_line).run(),
        Err(err) => {
            warn!(%err, "cannot optimize buffer");
            String::new()
        }
    }
}

/// Stack of per-scope output buffers.
#[derive(Debug, Default)]
struct ScopeStack {
    outermost: String,
    nested: Vec<String>,
}

impl ScopeStack {
    fn current(&mut self) -> &mut String {
        self.nested.last_mut().unwrap_or(&mut self.outermost)
    }

    fn push(&mut self) {
        self.nested.push(String::new());
    }

    /// Close the innermost scope, appending its text to the parent.
    fn pop_into_parent(&mut self) {
        if let Some(scope) = self.nested.pop() {
            self.current().push_str(&scope);
        }
    }

    /// Join whatever is still open, outermost first.
    fn finish(self) -> String {
        let mut out = self.outermost;
        for scope in self.nested {
            out.push_str(&scope);
        }
        out
    }
}

struct BufferOptimizer<'src> {
    lexer: Lexer<'src>,
    scopes: ScopeStack,
    /// Line the output is currently on.
    line: u32,
    prev: Option<TokenKind>,
}

impl<'src> BufferOptimizer<'src> {
    fn new(lexer: Lexer<'src>, first_line: u32) -> Self {
        BufferOptimizer {
            lexer,
            scopes: ScopeStack::default(),
            line: first_line.max(1),
            prev: None,
        }
    }

    fn run(mut self) -> String {
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::For => self.on_for(token),
                TokenKind::Catch => self.on_catch(),
                TokenKind::While => self.on_while(),
                TokenKind::Decltype => self.on_decltype(token),
                TokenKind::LParen => self.on_parenthesis(token),
                TokenKind::LBrace => {
                    self.write(token);
                    self.scopes.push();
                }
                TokenKind::RBrace => {
                    self.sync_line(token.line);
                    self.scopes.pop_into_parent();
                    self.write(token);
                }
                _ => self.write(token),
            }
            self.prev = Some(token.kind);
        }
        if !self.scopes.nested.is_empty() {
            trace!(open = self.scopes.nested.len(), "scopes still open at end of input");
        }
        self.scopes.finish()
    }

    /// Next token outside preprocessor directives.
    fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            let token = self.lexer.next_token()?;
            if !token.is_preprocessor() {
                return Some(token);
            }
        }
    }

    fn sync_line(&mut self, line: u32) {
        while self.line < line {
            self.scopes.current().push('\n');
            self.line += 1;
        }
    }

    fn write(&mut self, token: Token<'_>) {
        self.sync_line(token.line);
        let out = self.scopes.current();
        out.push_str(token.text);
        out.push(' ');
    }

    fn write_str(&mut self, text: &str) {
        self.scopes.current().push_str(text);
    }

    /// Read up to the `)` matching an already consumed `(`.
    ///
    /// Returns the enclosed tokens, or `None` if the input ends first.
    fn read_parenthesis_block(&mut self) -> Option<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        let mut depth = 0u32;
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen if depth == 0 => return Some(tokens),
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            tokens.push(token);
        }
    }

    /// Consume the next token if it is `(`; otherwise push it back.
    fn eat_open_parenthesis(&mut self) -> bool {
        match self.next_token() {
            Some(token) if token.kind == TokenKind::LParen => true,
            Some(_) => {
                self.lexer.unget();
                false
            }
            None => false,
        }
    }

    /// The next token is `{` (left in the stream either way).
    fn at_open_brace(&mut self) -> bool {
        match self.next_token() {
            Some(token) => {
                self.lexer.unget();
                token.kind == TokenKind::LBrace
            }
            None => false,
        }
    }

    fn on_parenthesis(&mut self, open: Token<'src>) {
        let after_name = self.prev == Some(TokenKind::Ident);
        self.sync_line(open.line);
        self.write_str("(");
        let Some(inner) = self.read_parenthesis_block() else {
            return;
        };
        // `name(params) {` is a definition: keep the parameters
        if after_name && !inner.is_empty() && self.at_open_brace() {
            trace!(line = open.line, "keeping definition parameters");
            for token in inner {
                self.write(token);
            }
        }
        self.write_str(") ");
    }

    fn on_for(&mut self, keyword: Token<'src>) {
        self.sync_line(keyword.line);
        let Some(declaration) = self.read_for_header() else {
            self.write_str("for () ");
            return;
        };
        match self.next_token() {
            Some(token) if token.kind == TokenKind::LBrace => {
                trace!(line = keyword.line, "moving loop declaration into body");
                self.write_str("for () { ");
                self.scopes.push();
                for token in declaration {
                    self.write(token);
                }
            }
            Some(_) => {
                self.lexer.unget();
                self.write_str("for () ");
            }
            None => self.write_str("for () "),
        }
    }

    /// Turn a loop header into a declaration statement.
    ///
    /// `(init; cond; step)` keeps `init;`. `(T x : range)` becomes
    /// `T x = range.begin();`.
    fn read_for_header(&mut self) -> Option<Vec<Token<'src>>> {
        if !self.eat_open_parenthesis() {
            return None;
        }
        let mut declaration = Vec::new();
        let mut depth = 0u32;
        let mut ranged = false;
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::LParen | TokenKind::Lt | TokenKind::LBracket | TokenKind::LBrace => {
                    depth += 1;
                    declaration.push(token);
                }
                TokenKind::Gt | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    declaration.push(token);
                }
                TokenKind::RParen if depth == 0 => {
                    if ranged {
                        declaration.extend([
                            Token::new(TokenKind::Dot, ".", token.line),
                            Token::new(TokenKind::Ident, "begin", token.line),
                            Token::new(TokenKind::LParen, "(", token.line),
                            Token::new(TokenKind::RParen, ")", token.line),
                        ]);
                    }
                    declaration.push(Token::new(TokenKind::Semicolon, ";", token.line));
                    return Some(declaration);
                }
                TokenKind::RParen => {
                    depth -= 1;
                    declaration.push(token);
                }
                TokenKind::Colon if !ranged && depth == 0 => {
                    ranged = true;
                    declaration.push(Token::new(TokenKind::Eq, "=", token.line));
                }
                TokenKind::Semicolon => {
                    declaration.push(token);
                    // Condition and step are not declarations
                    return self.read_parenthesis_block().map(|_| declaration);
                }
                _ => declaration.push(token),
            }
        }
    }

    /// `catch (const E& e)` becomes `; const E& e ;`.
    fn on_catch(&mut self) {
        if !self.eat_open_parenthesis() {
            return;
        }
        let Some(inner) = self.read_parenthesis_block() else {
            return;
        };
        if let Some(first) = inner.first() {
            self.sync_line(first.line);
        }
        self.write_str("; ");
        for token in inner {
            self.write(token);
        }
        self.write_str("; ");
    }

    fn on_while(&mut self) {
        if self.eat_open_parenthesis() {
            self.read_parenthesis_block();
        }
    }

    /// `decltype(expr)` is kept whole.
    fn on_decltype(&mut self, keyword: Token<'src>) {
        self.write(keyword);
        if !self.eat_open_parenthesis() {
            return;
        }
        self.write_str("( ");
        let Some(inner) = self.read_parenthesis_block() else {
            return;
        };
        for token in inner {
            self.write(token);
        }
        self.write_str(") ");
    }
}
