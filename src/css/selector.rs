//! Selector parsing: `type[/part][.class][#id][/part][:state]`.
//!
//! A selector names which widgets a style applies to. Components must appear
//! in grammar order and each at most once. A part written right after the type
//! is the *type part*; a part written right after the id is the *id part*.

use std::fmt;

use logos::Logos;

use crate::css::tokenizer::SelectorToken;

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("invalid character at byte {position} in selector {selector:?}")]
    InvalidCharacter { selector: String, position: usize },
    #[error("expected a name after '{after}' at byte {position} in selector {selector:?}")]
    MissingName { selector: String, after: char, position: usize },
    #[error("unexpected '{found}' at byte {position} in selector {selector:?}")]
    OutOfOrder { selector: String, found: String, position: usize },
}

/// A parsed selector. Every component is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Widget type, e.g. `button`.
    pub kind: Option<String>,
    /// Part written after the type, e.g. `bar` in `scroll/bar`.
    pub part: Option<String>,
    /// Class, e.g. `primary` in `button.primary`.
    pub class: Option<String>,
    /// Id, e.g. `ok` in `#ok`.
    pub id: Option<String>,
    /// Part written after the id, e.g. `title` in `#main/title`.
    pub id_part: Option<String>,
    /// State, e.g. `focus` in `button:focus`.
    pub state: Option<String>,
}

/// Where the parser is in the grammar. Each slot can be filled once, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Start,
    Kind,
    Part,
    Class,
    Id,
    IdPart,
    State,
}

impl Selector {
    /// Parse a selector. Never fails: malformed input is logged and parsed as
    /// the empty selector, which resolves to the theme's default style.
    pub fn parse(input: &str) -> Selector {
        match Self::try_parse(input) {
            Ok(selector) => selector,
            Err(err) => {
                log::warn!("{err}; falling back to the default style");
                Selector::default()
            }
        }
    }

    /// Parse a selector, reporting where it is malformed.
    pub fn try_parse(input: &str) -> Result<Selector, SelectorError> {
        let mut selector = Selector::default();
        let mut slot = Slot::Start;
        let mut lexer = SelectorToken::lexer(input).spanned();

        while let Some((token, span)) = lexer.next() {
            let token = token.map_err(|_| SelectorError::InvalidCharacter {
                selector: input.to_owned(),
                position: span.start,
            })?;

            let (sigil, next) = match token {
                SelectorToken::Name => {
                    if slot != Slot::Start {
                        return Err(out_of_order(input, span.start));
                    }
                    selector.kind = Some(input[span].to_owned());
                    slot = Slot::Kind;
                    continue;
                }
                SelectorToken::Slash if slot <= Slot::Kind => ('/', Slot::Part),
                SelectorToken::Slash if slot == Slot::Id => ('/', Slot::IdPart),
                SelectorToken::Dot if slot < Slot::Class => ('.', Slot::Class),
                SelectorToken::Hash if slot < Slot::Id => ('#', Slot::Id),
                SelectorToken::Colon if slot < Slot::State => (':', Slot::State),
                _ => return Err(out_of_order(input, span.start)),
            };

            let name = match lexer.next() {
                Some((Ok(SelectorToken::Name), name_span)) => input[name_span].to_owned(),
                Some((_, name_span)) => {
                    return Err(SelectorError::MissingName {
                        selector: input.to_owned(),
                        after: sigil,
                        position: name_span.start,
                    });
                }
                None => {
                    return Err(SelectorError::MissingName {
                        selector: input.to_owned(),
                        after: sigil,
                        position: input.len(),
                    });
                }
            };

            match next {
                Slot::Part => selector.part = Some(name),
                Slot::Class => selector.class = Some(name),
                Slot::Id => selector.id = Some(name),
                Slot::IdPart => selector.id_part = Some(name),
                Slot::State => selector.state = Some(name),
                Slot::Start | Slot::Kind => unreachable!("names are handled above"),
            }
            slot = next;
        }

        Ok(selector)
    }

    /// The widget type, or `""`.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    /// The class, or `""`.
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or("")
    }

    /// The id, or `""`.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// The state, or `""`.
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    /// The part used with the type: only the one written after the type.
    pub fn type_part(&self) -> &str {
        self.part.as_deref().unwrap_or("")
    }

    /// The part used with the id: the one written after the id, or else the
    /// one written after the type.
    pub fn id_part(&self) -> &str {
        self.id_part
            .as_deref()
            .or(self.part.as_deref())
            .unwrap_or("")
    }

    /// Returns `true` if no component is set.
    pub fn is_empty(&self) -> bool {
        *self == Selector::default()
    }

    /// Copy of this selector with the state replaced.
    pub fn with_state(&self, state: &str) -> Selector {
        Selector {
            state: (!state.is_empty()).then(|| state.to_owned()),
            ..self.clone()
        }
    }
}

fn out_of_order(input: &str, position: usize) -> SelectorError {
    let found = input[position..].chars().next().map(String::from).unwrap_or_default();
    SelectorError::OutOfOrder {
        selector: input.to_owned(),
        found,
        position,
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(kind) = &self.kind {
            write!(f, "{kind}")?;
        }
        if let Some(part) = &self.part {
            write!(f, "/{part}")?;
        }
        if let Some(class) = &self.class {
            write!(f, ".{class}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        if let Some(part) = &self.id_part {
            write!(f, "/{part}")?;
        }
        if let Some(state) = &self.state {
            write!(f, ":{state}")?;
        }
        Ok(())
    }
}
