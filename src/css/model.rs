//! Theme-sheet AST: items, declarations, values.

/// A value token within a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationValue {
    /// An identifier like `red`, `thin`, `auto`.
    Ident(String),
    /// An integer like `1` or `-2`.
    Number(i32),
    /// A hex color including the `#`, e.g. `"#ff00aa"`.
    Color(String),
    /// A color function kept as written, e.g. `"rgb(1, 2, 3)"`.
    Function(String),
    /// A quoted string, quotes removed.
    String(String),
    /// A color variable including the `$`, e.g. `"$accent"`.
    Variable(String),
}

impl DeclarationValue {
    /// The value as it would be stored in a style field.
    pub fn text(&self) -> String {
        match self {
            DeclarationValue::Number(n) => n.to_string(),
            DeclarationValue::Ident(s)
            | DeclarationValue::Color(s)
            | DeclarationValue::Function(s)
            | DeclarationValue::String(s)
            | DeclarationValue::Variable(s) => s.clone(),
        }
    }
}

/// A single property declaration, e.g. `border: thin` or `padding: 0 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub values: Vec<DeclarationValue>,
}

/// One top-level item of a theme sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetItem {
    /// `$name: value;`. The name keeps its `$`.
    Color { name: String, value: String },
    /// `@flag name: true;`
    Flag { name: String, value: bool },
    /// `@rune name: "x";`
    Rune { name: String, value: char },
    /// `sel, sel { prop: value; ... }`. Selectors are theme keys; `*` is `""`.
    Rule {
        selectors: Vec<String>,
        declarations: Vec<Declaration>,
    },
}
