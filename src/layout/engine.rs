//! Tree layout pass.
//!
//! [`LayoutEngine`] styles every widget from a [`Theme`], measures subtrees
//! bottom-up and assigns outer bounds top-down, starting with the root at the
//! full viewport.

use std::collections::HashMap;

use crate::css::theme::Theme;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::geometry::{Region, Size};
use crate::widget::ChildInfo;

use super::boxmodel;
use super::Extent;

/// States resolved into every widget's style cache.
pub const STATES: &[&str] = &["focus", "hover", "disabled"];

/// Assigns bounds to a [`Dom`] and remembers the result per node.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    regions: HashMap<NodeId, Region>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve each widget's own selector against `theme`, filling its base
    /// and per-state styles.
    pub fn style(dom: &mut Dom, theme: &Theme) {
        let Some(root) = dom.root() else {
            return;
        };
        for id in dom.walk_depth_first(root) {
            let Some(widget) = dom.get_mut(id) else {
                continue;
            };
            let selector = widget.selector().to_string();
            theme.apply(widget, &selector, STATES);
        }
    }

    /// Preferred outer size of `id`: fixed hints replace the intrinsic size on
    /// their axis, then margin, padding and border are added.
    pub fn measure(dom: &Dom, id: NodeId) -> Size {
        let Some(widget) = dom.get(id) else {
            return Size::ZERO;
        };
        let children: Vec<ChildInfo> = dom
            .children(id)
            .iter()
            .map(|&child| Self::child_info(dom, child))
            .collect();
        let intrinsic = widget.preferred(&children);
        let (width, height) = widget.hint();
        let content = Size::new(
            if width > 0 { width } else { intrinsic.width },
            if height > 0 { height } else { intrinsic.height },
        );
        boxmodel::outer_size(content, &widget.style(""))
    }

    /// What a container needs to know about `id` to arrange it.
    pub fn child_info(dom: &Dom, id: NodeId) -> ChildInfo {
        let (width, height) = dom.get(id).map(|w| w.hint()).unwrap_or_default();
        ChildInfo {
            id,
            width: Extent::from_hint(width),
            height: Extent::from_hint(height),
            preferred: Self::measure(dom, id),
        }
    }

    /// Lay the whole tree out in a `width` x `height` viewport.
    pub fn layout(&mut self, dom: &mut Dom, width: i32, height: i32) {
        self.regions.clear();
        let Some(root) = dom.root() else {
            return;
        };
        log::debug!("layout {width}x{height}, {} nodes", dom.len());
        self.place(dom, root, Region::new(0, 0, width, height));
    }

    /// Style then lay out.
    pub fn run(&mut self, dom: &mut Dom, theme: &Theme, width: i32, height: i32) {
        Self::style(dom, theme);
        self.layout(dom, width, height);
    }

    fn place(&mut self, dom: &mut Dom, id: NodeId, bounds: Region) {
        let children = dom.children(id).to_vec();
        let infos: Vec<ChildInfo> = children
            .iter()
            .map(|&child| Self::child_info(dom, child))
            .collect();

        let Some(widget) = dom.get_mut(id) else {
            return;
        };
        widget.set_bounds(bounds);
        let content = widget.content();
        let regions = widget.arrange(content, &infos);
        if regions.len() < children.len() {
            log::warn!(
                "{} arranged {} of {} children",
                widget.widget_type(),
                regions.len(),
                children.len()
            );
        }
        log::trace!("{} {:?} content {:?}", widget.widget_type(), bounds, content);
        self.regions.insert(id, bounds);

        for (i, &child) in children.iter().enumerate() {
            let region = regions.get(i).copied().unwrap_or(Region::EMPTY);
            self.place(dom, child, region);
        }
    }

    /// Outer bounds assigned to `node` by the last layout.
    pub fn get_layout(&self, node: NodeId) -> Option<Region> {
        self.regions.get(&node).copied()
    }

    /// All bounds from the last layout.
    pub fn get_all_layouts(&self) -> &HashMap<NodeId, Region> {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::styles::Style;
    use crate::css::themes;
    use crate::geometry::Insets;
    use crate::layout::Cell;
    use crate::widgets::{Button, Flex, Grid, Static};

    fn plain_theme() -> Theme {
        let mut theme = Theme::new("plain");
        theme.set("", Style::new());
        theme
    }

    #[test]
    fn empty_dom_lays_out_nothing() {
        let mut dom = Dom::new();
        let mut engine = LayoutEngine::new();
        engine.layout(&mut dom, 80, 24);
        assert!(engine.get_all_layouts().is_empty());
    }

    #[test]
    fn root_fills_viewport() {
        let mut dom = Dom::new();
        let root = dom.insert(Flex::vertical());
        let mut engine = LayoutEngine::new();
        engine.run(&mut dom, &plain_theme(), 80, 24);
        assert_eq!(engine.get_layout(root), Some(Region::new(0, 0, 80, 24)));
        assert_eq!(dom.get(root).map(|w| w.bounds()), Some(Region::new(0, 0, 80, 24)));
    }

    #[test]
    fn measure_adds_overhead_to_fixed_and_intrinsic() {
        let mut theme = plain_theme();
        theme.set(
            "button",
            Style::new().with_border("thin").with_padding(Insets::symmetric(0, 1)),
        );
        let mut dom = Dom::new();
        let root = dom.insert(Flex::horizontal());
        let auto = dom.insert_child(root, Button::new("OK"));
        let fixed = dom.insert_child(root, Button::new("Cancel").with_hint(10, 0));
        LayoutEngine::style(&mut dom, &theme);

        assert_eq!(LayoutEngine::measure(&dom, auto), Size::new(2 + 4, 1 + 2));
        assert_eq!(LayoutEngine::measure(&dom, fixed), Size::new(10 + 4, 1 + 2));
    }

    #[test]
    fn flex_children_fill_root() {
        let mut dom = Dom::new();
        let root = dom.insert(Flex::horizontal());
        let a = dom.insert_child(root, Static::new("left").with_hint(20, -1));
        let b = dom.insert_child(root, Static::new("rest").with_hint(-1, -1));
        let mut engine = LayoutEngine::new();
        engine.run(&mut dom, &plain_theme(), 50, 10);

        assert_eq!(engine.get_layout(a), Some(Region::new(0, 0, 20, 10)));
        assert_eq!(engine.get_layout(b), Some(Region::new(21, 0, 29, 10)));
    }

    #[test]
    fn nested_children_sit_in_parent_content() {
        let mut theme = plain_theme();
        theme.set("#panel", Style::new().with_border("thin").with_margin(Insets::all(1)));
        let mut dom = Dom::new();
        let root = dom.insert(Flex::vertical());
        let panel = dom.insert_child(root, Flex::vertical().with_id("panel").with_hint(-1, -1));
        let label = dom.insert_child(panel, Static::new("hi"));
        let mut engine = LayoutEngine::new();
        engine.run(&mut dom, &theme, 20, 8);

        assert_eq!(engine.get_layout(panel), Some(Region::new(0, 0, 20, 8)));
        let content = dom.get(panel).map(|w| w.content());
        assert_eq!(content, Some(Region::new(2, 2, 16, 4)));
        // Stretch alignment: full content width, intrinsic height.
        assert_eq!(engine.get_layout(label), Some(Region::new(2, 2, 16, 1)));
    }

    #[test]
    fn grid_cells_in_content() {
        let mut dom = Dom::new();
        let root = dom.insert(Grid::new(vec![10, -1], vec![-1]));
        let a = dom.insert_child(root, Static::new("a"));
        let b = dom.insert_child(root, Static::new("b"));
        if let Some(grid) = dom.widget_mut::<Grid>(root) {
            grid.place(a, Cell::at(0, 0)).unwrap();
            grid.place(b, Cell::at(0, 1)).unwrap();
        }
        let mut engine = LayoutEngine::new();
        engine.run(&mut dom, &plain_theme(), 40, 3);

        assert_eq!(engine.get_layout(a), Some(Region::new(0, 0, 10, 3)));
        assert_eq!(engine.get_layout(b), Some(Region::new(11, 0, 29, 3)));
    }

    #[test]
    fn style_pass_fills_state_entries() {
        let theme = themes::default_theme();
        let mut dom = Dom::new();
        let root = dom.insert(Flex::vertical());
        let button = dom.insert_child(root, Button::new("Save").with_class("primary"));
        LayoutEngine::style(&mut dom, &theme);

        let widget = dom.get(button).unwrap();
        assert_eq!(widget.style(""), theme.resolve("button.primary"));
        assert_eq!(widget.style(":focus"), theme.resolve("button.primary:focus"));
        assert_eq!(widget.selector().to_string(), "button.primary");
    }
}
