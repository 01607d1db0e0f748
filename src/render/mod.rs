//! Rendering: paint a laid-out tree into a cell buffer.
//!
//! Each widget is painted with the style for its current state: background,
//! then border, then its own strips. Children paint over their parent and are
//! clipped to it.

pub mod color;
pub mod compositor;
pub mod frame;
pub mod strip;

pub use color::{parse_color, resolve_color};
pub use compositor::Compositor;
pub use strip::{CellStyle, Strip, StyledCell};

use crate::css::theme::Theme;
use crate::dom::{Dom, NodeId};
use crate::geometry::Region;
use crate::widget::RenderContext;

/// Paint the tree under the root into a fresh `width` x `height` buffer.
///
/// Bounds must already be assigned by a layout pass.
pub fn render(dom: &Dom, theme: &Theme, width: u16, height: u16) -> Compositor {
    let mut compositor = Compositor::new(width, height);
    if let Some(root) = dom.root() {
        let area = compositor.area();
        paint(dom, theme, root, area, &mut compositor);
    }
    compositor
}

fn paint(dom: &Dom, theme: &Theme, id: NodeId, parent_clip: Region, compositor: &mut Compositor) {
    let Some(widget) = dom.get(id) else {
        return;
    };
    let bounds = widget.bounds();
    let clip = bounds.intersection(parent_clip);
    if clip.is_empty() {
        return;
    }

    let style = widget.current_style();
    frame::paint_background(compositor, bounds, &style, theme, clip);
    frame::paint_border(compositor, bounds, &style, theme, clip);

    let ctx = RenderContext {
        theme,
        style: &style,
        bounds,
        content: widget.content(),
    };
    compositor.place_strips(&widget.render(&ctx), clip);

    for &child in dom.children(id) {
        paint(dom, theme, child, clip, compositor);
    }
}
