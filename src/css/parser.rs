//! Recursive descent theme-sheet parser.
//!
//! Parses sheet text into a list of [`SheetItem`]s using the logos-based
//! tokenizer from [`crate::css::tokenizer`]. Grammar:
//!
//! ```text
//! sheet     := item*
//! item      := '$' name ':' value ';'
//!            | '@flag' name ':' ('true' | 'false') ';'
//!            | '@rune' name ':' string ';'
//!            | selectors '{' declaration* '}'
//! selectors := selector (',' selector)*
//! declaration := name ':' value+ ';'?
//! ```
//!
//! Selector text is not lexed with the sheet tokens: the parser slices it out
//! of the source and leaves it to [`crate::css::selector::Selector`].

use logos::Logos;

use crate::css::model::{Declaration, DeclarationValue, SheetItem};
use crate::css::tokenizer::SheetToken;

/// Errors from theme-sheet parsing. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A token with its source span.
#[derive(Debug, Clone)]
struct PToken {
    /// `None` for characters the sheet lexer rejects (selector punctuation).
    token: Option<SheetToken>,
    text: String,
    byte_start: usize,
    byte_end: usize,
}

/// Replace each `/* ... */` comment with a single space.
///
/// An unterminated comment runs to the end of the input.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        rest = match rest[start + 2..].find("*/") {
            Some(end) => &rest[start + 2 + end + 2..],
            None => "",
        };
    }
    result.push_str(rest);
    result
}

fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    SheetToken::lexer(input)
        .spanned()
        .map(|(result, span)| PToken {
            token: result.ok(),
            text: input[span.clone()].to_string(),
            byte_start: span.start,
            byte_end: span.end,
        })
        .collect()
}

/// Parse theme-sheet text.
pub fn parse_sheet(input: &str) -> Result<Vec<SheetItem>, ParseError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize_with_spans(&cleaned);

    let mut parser = Parser {
        source: &cleaned,
        tokens,
        cursor: 0,
        last_end: 0,
    };

    let mut items = Vec::new();
    while !parser.is_eof() {
        items.push(parser.parse_item()?);
    }
    Ok(items)
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<PToken>,
    cursor: usize,
    /// Byte offset just past the last consumed token.
    last_end: usize,
}

impl Parser<'_> {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_is(&self, expected: &SheetToken) -> bool {
        self.peek().is_some_and(|t| t.token.as_ref() == Some(expected))
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned()?;
        self.cursor += 1;
        self.last_end = tok.byte_end;
        Some(tok)
    }

    fn unexpected(tok: &PToken, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            position: tok.byte_start,
            message: format!("expected {expected}, got '{}'", tok.text),
        }
    }

    fn expect(&mut self, expected: &SheetToken, what: &str) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if tok.token.as_ref() == Some(expected) => Ok(tok),
            Some(tok) => Err(Self::unexpected(&tok, what)),
            None => Err(ParseError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        self.expect(&SheetToken::Ident, what).map(|t| t.text)
    }

    fn parse_item(&mut self) -> Result<SheetItem, ParseError> {
        match self.peek().and_then(|t| t.token.clone()) {
            Some(SheetToken::Variable) => self.parse_color(),
            Some(SheetToken::AtKeyword) => self.parse_directive(),
            _ => self.parse_rule(),
        }
    }

    /// `$name: value;`
    fn parse_color(&mut self) -> Result<SheetItem, ParseError> {
        let name = self.expect(&SheetToken::Variable, "color variable")?.text;
        self.expect(&SheetToken::Colon, "':'")?;
        let value = match self.parse_value()? {
            DeclarationValue::Number(_) => {
                return Err(ParseError::UnexpectedToken {
                    position: self.last_end,
                    message: format!("{name} must be a color, not a number"),
                });
            }
            other => other.text(),
        };
        self.expect(&SheetToken::Semicolon, "';'")?;
        Ok(SheetItem::Color { name, value })
    }

    /// `@flag name: bool;` or `@rune name: "c";`
    fn parse_directive(&mut self) -> Result<SheetItem, ParseError> {
        let keyword = self.expect(&SheetToken::AtKeyword, "directive")?;
        let name = self.expect_ident("directive name")?;
        self.expect(&SheetToken::Colon, "':'")?;

        let item = match keyword.text.as_str() {
            "@flag" => {
                let tok = self
                    .advance()
                    .ok_or_else(|| ParseError::UnexpectedEof("expected true or false".into()))?;
                let value = match tok.text.as_str() {
                    "true" => true,
                    "false" => false,
                    _ => return Err(Self::unexpected(&tok, "true or false")),
                };
                SheetItem::Flag { name, value }
            }
            "@rune" => {
                let tok = self
                    .advance()
                    .ok_or_else(|| ParseError::UnexpectedEof("expected a quoted rune".into()))?;
                let value = match tok.token {
                    Some(SheetToken::StringLiteral | SheetToken::StringLiteralSingle) => {
                        let inner = &tok.text[1..tok.text.len() - 1];
                        let mut chars = inner.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => c,
                            _ => return Err(Self::unexpected(&tok, "exactly one character")),
                        }
                    }
                    _ => return Err(Self::unexpected(&tok, "a quoted rune")),
                };
                SheetItem::Rune { name, value }
            }
            _ => return Err(Self::unexpected(&keyword, "@flag or @rune")),
        };

        self.expect(&SheetToken::Semicolon, "';'")?;
        Ok(item)
    }

    /// `selectors { declarations }`
    fn parse_rule(&mut self) -> Result<SheetItem, ParseError> {
        let prelude_start = self.last_end;
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof("expected '{'".into())),
                Some(t) if t.token == Some(SheetToken::BraceOpen) => break,
                Some(t)
                    if matches!(
                        t.token,
                        Some(SheetToken::BraceClose | SheetToken::Semicolon)
                    ) =>
                {
                    return Err(Self::unexpected(t, "selector"));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        let prelude_end = self.peek().map_or(self.source.len(), |t| t.byte_start);
        let selectors = split_selectors(&self.source[prelude_start..prelude_end]);

        self.expect(&SheetToken::BraceOpen, "'{'")?;
        let mut declarations = Vec::new();
        while !self.is_eof() && !self.peek_is(&SheetToken::BraceClose) {
            declarations.push(self.parse_declaration()?);
        }
        self.expect(&SheetToken::BraceClose, "'}'")?;

        Ok(SheetItem::Rule {
            selectors,
            declarations,
        })
    }

    /// `property: value+;` (the `;` before `}` is optional)
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let property = self.expect_ident("property name")?;
        self.expect(&SheetToken::Colon, "':'")?;

        let mut values = Vec::new();
        while !self.is_eof()
            && !self.peek_is(&SheetToken::Semicolon)
            && !self.peek_is(&SheetToken::BraceClose)
        {
            values.push(self.parse_value()?);
        }

        if self.peek_is(&SheetToken::Semicolon) {
            self.advance();
        }

        Ok(Declaration { property, values })
    }

    fn parse_value(&mut self) -> Result<DeclarationValue, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected declaration value".into()))?;

        match tok.token {
            Some(SheetToken::Number) => {
                let n = tok.text.parse().map_err(|_| ParseError::UnexpectedToken {
                    position: tok.byte_start,
                    message: format!("invalid number: {}", tok.text),
                })?;
                Ok(DeclarationValue::Number(n))
            }
            Some(SheetToken::Ident) => Ok(DeclarationValue::Ident(tok.text)),
            Some(SheetToken::HexColor) => Ok(DeclarationValue::Color(tok.text)),
            Some(SheetToken::Function) => Ok(DeclarationValue::Function(tok.text)),
            Some(SheetToken::Variable) => Ok(DeclarationValue::Variable(tok.text)),
            Some(SheetToken::StringLiteral | SheetToken::StringLiteralSingle) => {
                let inner = &tok.text[1..tok.text.len() - 1];
                Ok(DeclarationValue::String(inner.to_string()))
            }
            _ => Err(Self::unexpected(&tok, "declaration value")),
        }
    }
}

/// Split a rule prelude on commas into theme keys. `*` is the universal key.
fn split_selectors(prelude: &str) -> Vec<String> {
    prelude
        .split(',')
        .map(str::trim)
        .map(|s| if s == "*" { String::new() } else { s.to_string() })
        .collect()
}
