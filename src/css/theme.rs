//! Theme: the style store and cascade resolution.
//!
//! A [`Theme`] maps selector keys to [`Style`]s and keeps side tables for color
//! variables, border glyph sets, boolean flags, and named runes. Themes are
//! built once by a construction function (see [`crate::css::themes`]) and then
//! only read. Swap a whole theme between layout/render passes; do not mutate
//! one while a pass is using it.

use std::collections::HashMap;

use crate::css::border::BorderStyle;
use crate::css::model::SheetItem;
use crate::css::parser::{parse_sheet, ParseError};
use crate::css::properties::apply_declaration;
use crate::css::selector::Selector;
use crate::css::specificity::cascade_keys;
use crate::css::styles::Style;
use crate::widget::Styleable;

/// Selector-keyed style store with color, border, flag and rune tables.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    name: String,
    styles: HashMap<String, Style>,
    colors: HashMap<String, String>,
    borders: HashMap<String, BorderStyle>,
    flags: HashMap<String, bool>,
    runes: HashMap<String, char>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The theme's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Store `style` under `selector`, replacing any previous entry.
    ///
    /// Keys are stored verbatim. Resolution looks them up in canonical order
    /// (`type/part.class#id/part:state`), so a key written in another order is
    /// never found; that is logged here.
    pub fn set(&mut self, selector: impl Into<String>, style: Style) {
        let selector = selector.into();
        match Selector::try_parse(&selector) {
            Ok(parsed) if parsed.to_string() != selector => {
                log::warn!("theme {:?}: key {selector:?} is not in canonical form {parsed}", self.name);
            }
            Err(err) => log::warn!("theme {:?}: {err}", self.name),
            Ok(_) => {}
        }
        self.styles.insert(selector, style);
    }

    /// Store several styles at once.
    pub fn set_styles<K: Into<String>>(&mut self, styles: impl IntoIterator<Item = (K, Style)>) {
        for (selector, style) in styles {
            self.set(selector, style);
        }
    }

    /// Store color variables. Names are stored with a leading `$`, which is
    /// added when missing.
    pub fn set_colors<K: Into<String>, V: Into<String>>(
        &mut self,
        colors: impl IntoIterator<Item = (K, V)>,
    ) {
        for (name, value) in colors {
            let name = name.into();
            let name = if name.starts_with('$') { name } else { format!("${name}") };
            self.colors.insert(name, value.into());
        }
    }

    /// Store named border glyph sets.
    pub fn set_borders<K: Into<String>>(
        &mut self,
        borders: impl IntoIterator<Item = (K, BorderStyle)>,
    ) {
        for (name, border) in borders {
            let name = name.into();
            if !border.is_complete() {
                log::warn!("theme {:?}: border set {name:?} has NUL glyphs", self.name);
            }
            self.borders.insert(name, border);
        }
    }

    /// Store boolean feature flags.
    pub fn set_flags<K: Into<String>>(&mut self, flags: impl IntoIterator<Item = (K, bool)>) {
        self.flags
            .extend(flags.into_iter().map(|(name, value)| (name.into(), value)));
    }

    /// Store named runes.
    pub fn set_runes<K: Into<String>>(&mut self, runes: impl IntoIterator<Item = (K, char)>) {
        self.runes
            .extend(runes.into_iter().map(|(name, value)| (name.into(), value)));
    }

    /// Load declarations from theme-sheet text.
    ///
    /// Color variables, flags, runes and rule blocks are merged into this
    /// theme. A rule replaces the entry stored under its selector. Structural
    /// errors abort the load; unknown properties and bad values are logged and
    /// skipped.
    pub fn load_sheet(&mut self, source: &str) -> Result<(), ParseError> {
        for item in parse_sheet(source)? {
            match item {
                SheetItem::Color { name, value } => self.set_colors([(name, value)]),
                SheetItem::Flag { name, value } => self.set_flags([(name, value)]),
                SheetItem::Rune { name, value } => self.set_runes([(name, value)]),
                SheetItem::Rule { selectors, declarations } => {
                    let mut style = Style::new();
                    for decl in &declarations {
                        if let Err(err) = apply_declaration(&mut style, &decl.property, &decl.values)
                        {
                            log::warn!("theme {:?}: {err}", self.name);
                        }
                    }
                    for selector in selectors {
                        self.set(selector, style.clone());
                    }
                }
            }
        }
        Ok(())
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// The style stored under exactly `selector`, without cascading.
    pub fn get(&self, selector: &str) -> Option<&Style> {
        self.styles.get(selector)
    }

    /// Resolve the effective style for `selector`.
    ///
    /// Starts from the universal default (`""`) and overlays every stored key
    /// the selector resolves through, in ascending specificity. Missing keys
    /// are skipped. The result is an owned copy.
    pub fn resolve(&self, selector: &str) -> Style {
        self.resolve_parsed(&Selector::parse(selector))
    }

    /// [`Theme::resolve`] for an already parsed selector.
    pub fn resolve_parsed(&self, selector: &Selector) -> Style {
        let mut style = Style::new();
        for key in cascade_keys(selector) {
            if let Some(declared) = self.styles.get(&key) {
                log::trace!("resolve {selector}: applying {key:?}");
                style.cascade(declared);
            }
        }
        style
    }

    /// The universal default style (the `""` entry).
    pub fn default_style(&self) -> Style {
        self.styles.get("").cloned().unwrap_or_default()
    }

    /// Substitute a `$variable` with its stored value.
    ///
    /// Literals and unknown variables pass through unchanged.
    pub fn color<'a>(&'a self, value: &'a str) -> &'a str {
        if value.starts_with('$') {
            if let Some(resolved) = self.colors.get(value) {
                return resolved;
            }
        }
        value
    }

    /// The border glyph set registered under `name`.
    ///
    /// `None` when the theme has no such set; callers skip drawing.
    pub fn border(&self, name: &str) -> Option<BorderStyle> {
        self.borders.get(name).copied()
    }

    /// A feature flag. Unknown flags are `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// A named rune, if registered.
    pub fn rune(&self, name: &str) -> Option<char> {
        self.runes.get(name).copied()
    }

    /// Number of stored style entries.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no styles are stored.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    // ── Widgets ──────────────────────────────────────────────────────

    /// Resolve `selector` and each `selector:state`, installing the results in
    /// the widget's style cache under `""` and `":state"`.
    ///
    /// The widget's selector is updated to `selector` as well. Any state
    /// already present in `selector` is replaced for the per-state entries.
    pub fn apply<W: Styleable + ?Sized>(&self, widget: &mut W, selector: &str, states: &[&str]) {
        let parsed = Selector::parse(selector);
        widget.set_style("", self.resolve_parsed(&parsed));
        for state in states {
            let state = state.trim_start_matches(':');
            if state.is_empty() {
                continue;
            }
            let style = self.resolve_parsed(&parsed.with_state(state));
            widget.set_style(&format!(":{state}"), style);
        }
        widget.set_selector(parsed);
    }
}
