//! Box model: content → padding → border → margin.
//!
//! Layout reasons in content sizes, rendering in outer bounds. The functions
//! here convert between the two using a resolved [`Style`]. A declared border
//! always costs one cell per side.

use crate::css::styles::Style;
use crate::geometry::{Region, Size};
use crate::widget::{Boundable, Styleable};

/// Cells per side taken by a border.
fn border_width(style: &Style) -> i32 {
    i32::from(style.has_border())
}

/// Total horizontal and vertical overhead of margin, padding and border.
pub fn overhead(style: &Style) -> Size {
    let margin = style.margin();
    let padding = style.padding();
    let border = 2 * border_width(style);
    Size::new(
        margin.horizontal() + padding.horizontal() + border,
        margin.vertical() + padding.vertical() + border,
    )
}

/// Outer size for a content size.
pub fn outer_size(content: Size, style: &Style) -> Size {
    content + overhead(style)
}

/// Content size for an outer size. Exact inverse of [`outer_size`]; not
/// clamped, so an undersized box yields a negative content size.
pub fn content_size(outer: Size, style: &Style) -> Size {
    outer - overhead(style)
}

/// The content box inside `bounds`, clamped to non-negative size.
pub fn content(bounds: Region, style: &Style) -> Region {
    let border = border_width(style);
    let margin = style.margin();
    let padding = style.padding();
    let size = content_size(bounds.size(), style).clamped();
    Region::new(
        bounds.x + margin.left + padding.left + border,
        bounds.y + margin.top + padding.top + border,
        size.width,
        size.height,
    )
}

/// The border box inside `bounds`: outer bounds minus margin.
pub fn border_box(bounds: Region, style: &Style) -> Region {
    bounds.shrink(style.margin())
}

/// Size a widget's outer bounds for the given content size, keeping its origin.
pub fn set_size<W: Boundable + Styleable + ?Sized>(widget: &mut W, content: Size) {
    let bounds = widget.bounds();
    let outer = outer_size(content, &widget.style(""));
    widget.set_bounds(Region::new(bounds.x, bounds.y, outer.width, outer.height));
}

/// A widget's content size derived from its outer bounds.
pub fn size<W: Boundable + Styleable + ?Sized>(widget: &W) -> Size {
    content_size(widget.bounds().size(), &widget.style(""))
}
