//! Background and border painting for a widget's border box.

use crate::css::styles::Style;
use crate::css::theme::Theme;
use crate::geometry::Region;
use crate::layout::boxmodel;

use super::compositor::Compositor;
use super::strip::{CellStyle, StyledCell};

/// Fill the border box with the style's background. Nothing is painted when
/// the style has no background, so the parent's shows through.
pub fn paint_background(
    compositor: &mut Compositor,
    bounds: Region,
    style: &Style,
    theme: &Theme,
    clip: Region,
) {
    if style.background.is_none() {
        return;
    }
    let cell = CellStyle::from_style(style, theme);
    compositor.fill_region(boxmodel::border_box(bounds, style), cell, clip);
}

/// Draw the style's border around the border box.
///
/// Skipped when the border set is unknown to the theme or the box is smaller
/// than 2x2.
pub fn paint_border(
    compositor: &mut Compositor,
    bounds: Region,
    style: &Style,
    theme: &Theme,
    clip: Region,
) {
    let Some(name) = style.border.as_deref().filter(|b| !b.is_empty()) else {
        return;
    };
    let Some(glyphs) = theme.border(name) else {
        log::warn!("theme {:?} has no border set {name:?}", theme.name());
        return;
    };
    let frame = boxmodel::border_box(bounds, style);
    if frame.width < 2 || frame.height < 2 {
        return;
    }

    let cell = CellStyle::from_style(style, theme);
    let mut put = |x: i32, y: i32, ch: char| {
        compositor.put(x, y, StyledCell::new(ch, cell), clip);
    };

    let (left, top) = (frame.x, frame.y);
    let (right, bottom) = (frame.right() - 1, frame.bottom() - 1);
    for x in left + 1..right {
        put(x, top, glyphs.top);
        put(x, bottom, glyphs.bottom);
    }
    for y in top + 1..bottom {
        put(left, y, glyphs.left);
        put(right, y, glyphs.right);
    }
    put(left, top, glyphs.top_left);
    put(right, top, glyphs.top_right);
    put(right, bottom, glyphs.bottom_right);
    put(left, bottom, glyphs.bottom_left);
}
