//! Flex container: lays children out along one axis.

use std::any::Any;

use crate::geometry::{Region, Size};
use crate::layout::{Alignment, FlexLayout, Orientation};
use crate::render::strip::Strip;
use crate::widget::{forward_base, ChildInfo, RenderContext, Widget, WidgetBase};

/// A container distributing its content box between children by their size
/// hints. Paints nothing itself beyond background and border.
///
/// ```ignore
/// let toolbar = Flex::horizontal().with_gap(2).with_alignment(Alignment::Center);
/// ```
pub struct Flex {
    base: WidgetBase,
    layout: FlexLayout,
}

forward_base!(Flex);

impl Flex {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            base: WidgetBase::new("flex"),
            layout: FlexLayout {
                orientation,
                ..FlexLayout::default()
            },
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Cells between neighbouring children. Defaults to 1.
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.layout.gap = gap.max(0);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.base.set_class(class);
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.base.set_id(id);
        self
    }

    /// Signed size hint: positive fixed, zero auto, negative fraction.
    pub fn with_hint(mut self, width: i32, height: i32) -> Self {
        self.base.set_hint(width, height);
        self
    }

    pub fn layout(&self) -> &FlexLayout {
        &self.layout
    }
}

impl Widget for Flex {
    fn widget_type(&self) -> &str {
        "flex"
    }

    fn hint(&self) -> (i32, i32) {
        self.base.hint_or_style()
    }

    fn state(&self) -> Option<&str> {
        self.base.state()
    }

    fn preferred(&self, children: &[ChildInfo]) -> Size {
        let sizes: Vec<Size> = children.iter().map(|c| c.preferred).collect();
        self.layout.preferred(&sizes)
    }

    fn arrange(&mut self, content: Region, children: &[ChildInfo]) -> Vec<Region> {
        self.layout.arrange(content, children)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let flex = Flex::vertical().with_gap(-3).with_alignment(Alignment::End);
        assert_eq!(flex.layout().orientation, Orientation::Vertical);
        assert_eq!(flex.layout().gap, 0);
        assert_eq!(flex.layout().alignment, Alignment::End);
        assert_eq!(Flex::horizontal().layout().gap, 1);
        assert_eq!(Flex::horizontal().widget_type(), "flex");
    }
}
