//! logos-based tokenizers for selectors and theme sheets.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats `#` as nothing)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Selectors get their own token set: inside a selector `#abc` is an id, not a
//! color, so the two grammars must not share a lexer.

use logos::Logos;

// ---------------------------------------------------------------------------
// Selector tokens
// ---------------------------------------------------------------------------

/// Token of the selector grammar `type[/part][.class][#id][/part][:state]`.
///
/// No whitespace is skipped: a selector is a single word.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorToken {
    /// A name: ASCII alphanumerics, `_` and `-`.
    #[regex(r"[a-zA-Z0-9_-]+")]
    Name,

    /// `/` introduces a part.
    #[token("/")]
    Slash,

    /// `.` introduces a class.
    #[token(".")]
    Dot,

    /// `#` introduces an id.
    #[token("#")]
    Hash,

    /// `:` introduces a state.
    #[token(":")]
    Colon,
}

// ---------------------------------------------------------------------------
// Sheet tokens
// ---------------------------------------------------------------------------

/// Token of the theme-sheet grammar (declarations, directives, values).
///
/// Selector text in front of a rule block is lexed too, but the parser slices
/// it out of the source by span and hands it to the selector parser instead.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum SheetToken {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Directive keyword: `@flag`, `@rune`.
    #[regex(r"@[a-zA-Z][a-zA-Z0-9_-]*")]
    AtKeyword,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Color function: `rgb(10, 20, 30)`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*\([^)]*\)")]
    Function,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Color variable: `$primary`, `$bg-color`.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_-]*")]
    Variable,

    /// Integer, possibly negative.
    #[regex(r"-?[0-9]+")]
    Number,

    /// Identifier: property names, border names, color names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,
}

/// Tokenize sheet text into `(token, text)` pairs.
///
/// Characters that fail to lex are dropped.
pub fn tokenize(input: &str) -> Vec<(SheetToken, String)> {
    SheetToken::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_tokens(input: &str) -> Vec<SheetToken> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    fn selector_tokens(input: &str) -> Vec<Result<SelectorToken, ()>> {
        SelectorToken::lexer(input).collect()
    }

    #[test]
    fn selector_full_grammar() {
        use SelectorToken::*;
        let toks: Vec<_> = selector_tokens("list/item.dark#main/bar:focus")
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            toks,
            vec![Name, Slash, Name, Dot, Name, Hash, Name, Slash, Name, Colon, Name]
        );
    }

    #[test]
    fn selector_rejects_whitespace() {
        assert!(selector_tokens("button .x").iter().any(Result::is_err));
    }

    #[test]
    fn selector_name_allows_digits_and_dashes() {
        let toks = selector_tokens("h-1_x");
        assert_eq!(toks, vec![Ok(SelectorToken::Name)]);
    }

    #[test]
    fn sheet_punctuation() {
        assert_eq!(
            sheet_tokens("{ } : ; ,"),
            vec![
                SheetToken::BraceOpen,
                SheetToken::BraceClose,
                SheetToken::Colon,
                SheetToken::Semicolon,
                SheetToken::Comma,
            ]
        );
    }

    #[test]
    fn sheet_values() {
        let toks = tokenize(r#"$bg #1a1b26 rgb(1, 2, 3) -2 thin "─" @flag"#);
        let kinds: Vec<_> = toks.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                SheetToken::Variable,
                SheetToken::HexColor,
                SheetToken::Function,
                SheetToken::Number,
                SheetToken::Ident,
                SheetToken::StringLiteral,
                SheetToken::AtKeyword,
            ]
        );
        assert_eq!(toks[2].1, "rgb(1, 2, 3)");
        assert_eq!(toks[3].1, "-2");
    }

    #[test]
    fn sheet_hex_beats_ident() {
        assert_eq!(sheet_tokens("#fff"), vec![SheetToken::HexColor]);
    }
}
