//! Style value with typed `Option<T>` fields and the cascade merge.
//!
//! `None` means "not declared here". Resolution starts from an empty style and
//! overlays every matching declaration in ascending specificity, so a field
//! ends up holding the value of the most specific declaration that set it.

use crate::geometry::Insets;

/// All themeable properties of a widget. Each field is `Option<T>`; `None`
/// means unset.
///
/// `width` and `height` carry the signed size-hint convention used by the
/// layout containers: positive is a fixed size, zero is auto, negative is a
/// fractional weight (see [`crate::layout::Extent`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    // Colors (literal or `$variable`)
    pub background: Option<String>,
    pub foreground: Option<String>,

    // Text
    pub font: Option<String>,

    // Decoration
    pub border: Option<String>,
    pub cursor: Option<String>,
    pub render: Option<String>,

    // Spacing
    pub margin: Option<Insets>,
    pub padding: Option<Insets>,

    // Size hints
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Style {
    /// Create a new `Style` with all fields set to `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color (builder).
    pub fn with_background(mut self, value: impl Into<String>) -> Self {
        self.background = Some(value.into());
        self
    }

    /// Set the foreground color (builder).
    pub fn with_foreground(mut self, value: impl Into<String>) -> Self {
        self.foreground = Some(value.into());
        self
    }

    /// Set the font (builder).
    pub fn with_font(mut self, value: impl Into<String>) -> Self {
        self.font = Some(value.into());
        self
    }

    /// Set the border family name (builder).
    pub fn with_border(mut self, value: impl Into<String>) -> Self {
        self.border = Some(value.into());
        self
    }

    /// Set the cursor name (builder).
    pub fn with_cursor(mut self, value: impl Into<String>) -> Self {
        self.cursor = Some(value.into());
        self
    }

    /// Set the render-mode hint (builder).
    pub fn with_render(mut self, value: impl Into<String>) -> Self {
        self.render = Some(value.into());
        self
    }

    /// Set the margin (builder).
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set the padding (builder).
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the width hint (builder).
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height hint (builder).
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    /// Overlay every field `other` declares onto `self`, in place.
    ///
    /// Insets are replaced wholesale; there is no per-side override.
    pub fn cascade(&mut self, other: &Style) {
        fn take<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if src.is_some() {
                dst.clone_from(src);
            }
        }

        take(&mut self.background, &other.background);
        take(&mut self.foreground, &other.foreground);
        take(&mut self.font, &other.font);
        take(&mut self.border, &other.border);
        take(&mut self.cursor, &other.cursor);
        take(&mut self.render, &other.render);
        take(&mut self.margin, &other.margin);
        take(&mut self.padding, &other.padding);
        take(&mut self.width, &other.width);
        take(&mut self.height, &other.height);
    }

    /// Merge `other` on top of `self`, returning a new style. `other` wins for
    /// every field it sets.
    pub fn merge(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        merged.cascade(other);
        merged
    }

    /// The margin, or zero insets when unset.
    pub fn margin(&self) -> Insets {
        self.margin.unwrap_or(Insets::ZERO)
    }

    /// The padding, or zero insets when unset.
    pub fn padding(&self) -> Insets {
        self.padding.unwrap_or(Insets::ZERO)
    }

    /// Whether a border family is declared. An empty name counts as no border.
    pub fn has_border(&self) -> bool {
        self.border.as_deref().is_some_and(|b| !b.is_empty())
    }

    /// Returns `true` if all fields are `None` (no properties set).
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
