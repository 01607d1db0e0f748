//! Built-in themes.
//!
//! Each theme is a pure construction function returning a populated
//! [`Theme`]. Switch themes by swapping the whole value between passes.

use crate::css::border;
use crate::css::styles::Style;
use crate::css::theme::Theme;
use crate::geometry::Insets;

/// Names accepted by [`by_name`].
pub const THEME_NAMES: &[&str] = &["default", "midnight"];

/// Look up a built-in theme by name.
pub fn by_name(name: &str) -> Option<Theme> {
    match name {
        "default" => Some(default_theme()),
        "midnight" => Some(midnight()),
        _ => None,
    }
}

/// The default light-on-dark theme, built directly in code.
pub fn default_theme() -> Theme {
    let mut theme = Theme::new("default");
    theme.set_borders(border::builtin());
    theme.set_colors([
        ("$background", "#1e1e1e"),
        ("$foreground", "#d4d4d4"),
        ("$muted", "#808080"),
        ("$primary", "#0e639c"),
        ("$accent", "#569cd6"),
        ("$error", "#f44747"),
    ]);
    theme.set_flags([("grid-lines", true)]);
    theme.set_runes([("ellipsis", '…'), ("cursor", '▌')]);

    theme.set_styles([
        (
            "",
            Style::new()
                .with_background("$background")
                .with_foreground("$foreground"),
        ),
        (":disabled", Style::new().with_foreground("$muted")),
        (
            "button",
            Style::new()
                .with_border("round")
                .with_padding(Insets::symmetric(0, 1)),
        ),
        ("button:focus", Style::new().with_border("thick")),
        (
            "button.primary",
            Style::new()
                .with_background("$primary")
                .with_foreground("#ffffff"),
        ),
        (
            "button.primary:focus",
            Style::new().with_background("$accent"),
        ),
        (
            "button.danger",
            Style::new().with_foreground("$error"),
        ),
        ("grid", Style::new().with_border("thin")),
        ("static/title", Style::new().with_font("bold")),
    ]);
    theme
}

const MIDNIGHT: &str = r#"
/* A dark blue palette. */
$background: #1a1b26;
$foreground: #c0caf5;
$muted: #565f89;
$primary: #3d59a1;
$accent: #7aa2f7;
$error: #f7768e;

@flag grid-lines: true;
@rune ellipsis: "…";
@rune cursor: "▏";

* { background: $background; foreground: $foreground; }
:disabled { foreground: $muted; }

button { border: thin; padding: 0 1; }
button:focus { border: double; foreground: $accent; }
button.primary { background: $primary; }
button.danger { foreground: $error; }

grid { border: double; }
static/title { font: bold; foreground: $accent; }
"#;

/// A dark blue theme, loaded from sheet text.
pub fn midnight() -> Theme {
    let mut theme = Theme::new("midnight");
    theme.set_borders(border::builtin());
    if let Err(err) = theme.load_sheet(MIDNIGHT) {
        log::error!("built-in theme midnight failed to load: {err}");
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_theme_builds() {
        for name in THEME_NAMES {
            let theme = by_name(name).unwrap();
            assert_eq!(theme.name(), *name);
            assert!(!theme.is_empty());
            assert!(theme.flag("grid-lines"));
            assert!(theme.border("thin").is_some());
        }
        assert!(by_name("nope").is_none());
    }

    #[test]
    fn midnight_sheet_parses() {
        let mut theme = Theme::new("check");
        theme.load_sheet(MIDNIGHT).unwrap();
        assert_eq!(theme.rune("cursor"), Some('▏'));
    }

    #[test]
    fn themes_resolve_variables() {
        for theme in [default_theme(), midnight()] {
            let style = theme.resolve("button.primary");
            let bg = style.background.as_deref().unwrap();
            assert!(theme.color(bg).starts_with('#'), "{}: {bg}", theme.name());
            assert!(theme.resolve("button").has_border());
        }
    }

    #[test]
    fn focus_changes_border() {
        let theme = default_theme();
        assert_eq!(theme.resolve("button").border.as_deref(), Some("round"));
        assert_eq!(theme.resolve("button:focus").border.as_deref(), Some("thick"));
        assert_eq!(midnight().resolve("button:focus").border.as_deref(), Some("double"));
    }
}
