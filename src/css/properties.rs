//! Property parsing: declaration values → [`Style`] fields.

use crate::css::model::DeclarationValue;
use crate::css::styles::Style;
use crate::geometry::Insets;

/// Errors from property parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

fn invalid(property: &str, message: impl Into<String>) -> PropertyError {
    PropertyError::InvalidValue {
        property: property.into(),
        message: message.into(),
    }
}

/// Extract exactly one value.
fn require_single<'a>(
    values: &'a [DeclarationValue],
    property: &str,
) -> Result<&'a DeclarationValue, PropertyError> {
    match values {
        [value] => Ok(value),
        _ => Err(invalid(property, format!("expected 1 value, got {}", values.len()))),
    }
}

/// A color: name, hex, function, or `$variable`. Numbers are rejected.
fn require_color_value(values: &[DeclarationValue], property: &str) -> Result<String, PropertyError> {
    match require_single(values, property)? {
        DeclarationValue::Number(n) => Err(invalid(property, format!("expected a color, got {n}"))),
        other => Ok(other.text()),
    }
}

/// A name: identifier or quoted string.
fn require_name(values: &[DeclarationValue], property: &str) -> Result<String, PropertyError> {
    match require_single(values, property)? {
        DeclarationValue::Ident(s) | DeclarationValue::String(s) => Ok(s.clone()),
        other => Err(invalid(property, format!("expected a name, got {other:?}"))),
    }
}

/// A size hint: an integer (negative is a fraction weight) or `auto`.
fn parse_hint(values: &[DeclarationValue], property: &str) -> Result<i32, PropertyError> {
    match require_single(values, property)? {
        DeclarationValue::Number(n) => Ok(*n),
        DeclarationValue::Ident(name) if name.eq_ignore_ascii_case("auto") => Ok(0),
        other => Err(invalid(property, format!("expected a number or 'auto', got {other:?}"))),
    }
}

/// Parse 1-4 integers into [`Insets`] using the shorthand rules.
pub fn parse_insets(values: &[DeclarationValue], property: &str) -> Result<Insets, PropertyError> {
    if values.is_empty() || values.len() > 4 {
        return Err(invalid(property, format!("expected 1-4 values, got {}", values.len())));
    }
    let numbers = values
        .iter()
        .map(|value| match value {
            DeclarationValue::Number(n) if *n >= 0 => Ok(*n),
            other => Err(invalid(property, format!("expected a non-negative number, got {other:?}"))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Insets::shorthand(&numbers))
}

/// Apply one declaration to `style`.
///
/// On error `style` is left unchanged.
pub fn apply_declaration(
    style: &mut Style,
    property: &str,
    values: &[DeclarationValue],
) -> Result<(), PropertyError> {
    match property {
        // Colors
        "background" => style.background = Some(require_color_value(values, property)?),
        "foreground" | "color" => style.foreground = Some(require_color_value(values, property)?),

        // Decoration
        "font" => style.font = Some(require_name(values, property)?),
        "border" => {
            let name = require_name(values, property)?;
            // `none` clears an inherited border by declaring the empty name.
            style.border = Some(if name == "none" { String::new() } else { name });
        }
        "cursor" => style.cursor = Some(require_name(values, property)?),
        "render" => style.render = Some(require_name(values, property)?),

        // Spacing
        "margin" => style.margin = Some(parse_insets(values, property)?),
        "padding" => style.padding = Some(parse_insets(values, property)?),

        // Size hints
        "width" => style.width = Some(parse_hint(values, property)?),
        "height" => style.height = Some(parse_hint(values, property)?),

        _ => return Err(PropertyError::UnknownProperty(property.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> DeclarationValue {
        DeclarationValue::Ident(s.into())
    }

    fn num(n: i32) -> DeclarationValue {
        DeclarationValue::Number(n)
    }

    fn apply(property: &str, values: &[DeclarationValue]) -> Result<Style, PropertyError> {
        let mut style = Style::new();
        apply_declaration(&mut style, property, values)?;
        Ok(style)
    }

    #[test]
    fn apply_colors() {
        let style = apply("background", &[DeclarationValue::Color("#101010".into())]).unwrap();
        assert_eq!(style.background.as_deref(), Some("#101010"));

        let style = apply("color", &[DeclarationValue::Variable("$fg".into())]).unwrap();
        assert_eq!(style.foreground.as_deref(), Some("$fg"));

        let style = apply("foreground", &[DeclarationValue::Function("rgb(1,2,3)".into())]).unwrap();
        assert_eq!(style.foreground.as_deref(), Some("rgb(1,2,3)"));
    }

    #[test]
    fn apply_color_rejects_number() {
        assert!(matches!(
            apply("background", &[num(3)]),
            Err(PropertyError::InvalidValue { .. })
        ));
    }

    #[test]
    fn apply_border_and_none() {
        assert_eq!(apply("border", &[ident("round")]).unwrap().border.as_deref(), Some("round"));
        let cleared = apply("border", &[ident("none")]).unwrap();
        assert_eq!(cleared.border.as_deref(), Some(""));
        assert!(!cleared.has_border());
    }

    #[test]
    fn apply_names() {
        let style = apply("cursor", &[DeclarationValue::String("▌".into())]).unwrap();
        assert_eq!(style.cursor.as_deref(), Some("▌"));
        assert_eq!(apply("font", &[ident("bold")]).unwrap().font.as_deref(), Some("bold"));
        assert_eq!(apply("render", &[ident("dim")]).unwrap().render.as_deref(), Some("dim"));
    }

    #[test]
    fn apply_spacing_shorthand() {
        let style = apply("margin", &[num(1), num(2), num(3), num(4)]).unwrap();
        assert_eq!(style.margin, Some(Insets::new(1, 2, 3, 4)));

        let style = apply("padding", &[num(0), num(1)]).unwrap();
        assert_eq!(style.padding, Some(Insets::new(0, 1, 0, 1)));

        let style = apply("padding", &[num(1), num(2), num(3)]).unwrap();
        assert_eq!(style.padding, Some(Insets::new(1, 2, 3, 2)));
    }

    #[test]
    fn apply_spacing_errors() {
        assert!(apply("margin", &[]).is_err());
        assert!(apply("margin", &vec![num(1); 5]).is_err());
        assert!(apply("padding", &[num(-1)]).is_err());
        assert!(apply("padding", &[ident("x")]).is_err());
    }

    #[test]
    fn apply_size_hints() {
        assert_eq!(apply("width", &[num(20)]).unwrap().width, Some(20));
        assert_eq!(apply("width", &[ident("auto")]).unwrap().width, Some(0));
        assert_eq!(apply("height", &[num(-2)]).unwrap().height, Some(-2));
        assert!(apply("height", &[num(1), num(2)]).is_err());
    }

    #[test]
    fn apply_unknown_property() {
        assert_eq!(
            apply("text-align", &[ident("center")]),
            Err(PropertyError::UnknownProperty("text-align".into()))
        );
    }
}
