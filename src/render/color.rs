//! Color values to terminal colors.
//!
//! Accepts `#rrggbb`, `#rgb`, `rgb(r, g, b)`, `default`/`reset` and the
//! crossterm palette names.

use crossterm::style::Color;

use crate::css::theme::Theme;

/// Parse a color value. `None` if it is not understood.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    if let Some(args) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_function(args);
    }

    match value.to_ascii_lowercase().as_str() {
        "default" | "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" | "darkred" => Some(Color::DarkRed),
        "dark_green" | "darkgreen" => Some(Color::DarkGreen),
        "dark_yellow" | "darkyellow" => Some(Color::DarkYellow),
        "dark_blue" | "darkblue" => Some(Color::DarkBlue),
        "dark_magenta" | "darkmagenta" => Some(Color::DarkMagenta),
        "dark_cyan" | "darkcyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

/// Resolve `value` through the theme's color variables, then parse it.
///
/// Unknown variables and unparseable values yield `None`, meaning the
/// terminal default.
pub fn resolve_color(theme: &Theme, value: &str) -> Option<Color> {
    let resolved = theme.color(value);
    let color = parse_color(resolved);
    if color.is_none() {
        log::debug!("color {value:?} ({resolved:?}) not understood; using default");
    }
    color
}

/// Hex digits after the `#`: six (`rrggbb`) or three (`rgb`).
fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        _ => None,
    }
}

fn parse_rgb_function(args: &str) -> Option<Color> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::Rgb { r, g, b })
}
