//! Widget capabilities and the `Widget` trait.
//!
//! Widgets are composed, not inherited: each concrete widget holds a
//! [`WidgetBase`](super::WidgetBase) and forwards the narrow capability traits
//! ([`Boundable`], [`Styleable`]) to it explicitly. Layout and rendering only
//! talk to widgets through these traits.

use std::any::Any;

use crate::css::selector::Selector;
use crate::css::styles::Style;
use crate::css::theme::Theme;
use crate::geometry::{Region, Size};
use crate::layout::boxmodel;
use crate::layout::Extent;
use crate::render::strip::{CellStyle, Strip};
use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Something with outer bounds on screen.
pub trait Boundable {
    /// Outer bounds, margin included.
    fn bounds(&self) -> Region;

    fn set_bounds(&mut self, bounds: Region);
}

/// Something the theme can style.
pub trait Styleable {
    /// The selector the widget was last styled with.
    fn selector(&self) -> &Selector;

    fn set_selector(&mut self, selector: Selector);

    /// The cached style for `suffix` (`""`, `":focus"`, ...).
    ///
    /// Falls back to the base (`""`) entry, then to an empty style.
    fn style(&self, suffix: &str) -> Style;

    /// Install a resolved style in the widget's cache.
    fn set_style(&mut self, suffix: &str, style: Style);
}

/// Something that can hold keyboard focus.
pub trait Focusable {
    fn is_focused(&self) -> bool;

    fn set_focused(&mut self, focused: bool);
}

// ---------------------------------------------------------------------------
// Layout and render inputs
// ---------------------------------------------------------------------------

/// What a container knows about one child when arranging it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildInfo {
    pub id: NodeId,
    /// Width hint decoded from the child's signed hint.
    pub width: Extent,
    /// Height hint decoded from the child's signed hint.
    pub height: Extent,
    /// Preferred outer size: fixed hints or intrinsic content, plus overhead.
    pub preferred: Size,
}

/// Everything a widget needs to paint itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    /// The style for the widget's current state.
    pub style: &'a Style,
    /// Outer bounds.
    pub bounds: Region,
    /// Content box.
    pub content: Region,
}

impl RenderContext<'_> {
    /// Cell style for text drawn with the current style.
    pub fn cell_style(&self) -> CellStyle {
        CellStyle::from_style(self.style, self.theme)
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget.
///
/// Object-safe: the tree stores `Box<dyn Widget>`.
pub trait Widget: Boundable + Styleable {
    /// The selector type name for this widget (e.g. `"button"`).
    fn widget_type(&self) -> &str;

    /// The declared size hint `(width, height)`: positive is fixed, zero is
    /// auto, negative is a fraction weight.
    fn hint(&self) -> (i32, i32);

    /// The current state (`"focus"`, `"disabled"`, ...), if any.
    fn state(&self) -> Option<&str>;

    /// Intrinsic content size, given what is known about the children in
    /// order.
    fn preferred(&self, children: &[ChildInfo]) -> Size;

    /// Assign outer regions to the children inside `content`, in child order.
    ///
    /// Leaf widgets have no children and keep the default.
    fn arrange(&mut self, _content: Region, _children: &[ChildInfo]) -> Vec<Region> {
        Vec::new()
    }

    /// Paint content. Background and border are painted by the caller.
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Strip>;

    /// Focus capability, if the widget has one.
    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        None
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The content box for the current bounds and base style.
    fn content(&self) -> Region {
        boxmodel::content(self.bounds(), &self.style(""))
    }

    /// The style for the current state.
    fn current_style(&self) -> Style {
        match self.state() {
            Some(state) => self.style(&format!(":{state}")),
            None => self.style(""),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;
    use crate::widget::WidgetBase;

    struct Probe {
        base: WidgetBase,
    }

    crate::widget::forward_base!(Probe);

    impl Widget for Probe {
        fn widget_type(&self) -> &str {
            "probe"
        }

        fn hint(&self) -> (i32, i32) {
            self.base.hint_or_style()
        }

        fn state(&self) -> Option<&str> {
            self.base.state()
        }

        fn preferred(&self, _children: &[ChildInfo]) -> Size {
            Size::new(3, 1)
        }

        fn render(&self, _ctx: &RenderContext<'_>) -> Vec<Strip> {
            Vec::new()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn probe() -> Probe {
        Probe {
            base: WidgetBase::new("probe"),
        }
    }

    #[test]
    fn content_uses_base_style() {
        let mut p = probe();
        p.set_style("", Style::new().with_border("thin").with_padding(Insets::all(1)));
        p.set_bounds(Region::new(0, 0, 10, 6));
        assert_eq!(p.content(), Region::new(2, 2, 6, 2));
    }

    #[test]
    fn current_style_follows_state() {
        let mut p = probe();
        p.set_style("", Style::new().with_foreground("white"));
        p.set_style(":focus", Style::new().with_foreground("yellow"));
        assert_eq!(p.current_style().foreground.as_deref(), Some("white"));

        p.base.set_state(Some("focus"));
        assert_eq!(p.current_style().foreground.as_deref(), Some("yellow"));

        // Unknown state falls back to the base entry.
        p.base.set_state(Some("hover"));
        assert_eq!(p.current_style().foreground.as_deref(), Some("white"));
    }

    #[test]
    fn hint_falls_back_to_style() {
        let mut p = probe();
        assert_eq!(p.hint(), (0, 0));
        p.set_style("", Style::new().with_width(-2).with_height(3));
        assert_eq!(p.hint(), (-2, 3));
        p.base.set_hint(10, 0);
        assert_eq!(p.hint(), (10, 3));
    }

    #[test]
    fn object_safe() {
        let boxed: Box<dyn Widget> = Box::new(probe());
        assert_eq!(boxed.widget_type(), "probe");
        assert!(boxed.as_any().downcast_ref::<Probe>().is_some());
    }
}
