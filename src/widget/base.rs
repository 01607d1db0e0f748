//! Shared widget state, held by composition.

use std::collections::HashMap;

use crate::css::selector::Selector;
use crate::css::styles::Style;
use crate::geometry::Region;

use super::traits::{Boundable, Styleable};

/// State every widget carries: bounds, selector, hint, state and the
/// per-suffix style cache.
#[derive(Debug, Clone, Default)]
pub struct WidgetBase {
    bounds: Region,
    selector: Selector,
    hint: (i32, i32),
    state: Option<String>,
    styles: HashMap<String, Style>,
}

impl WidgetBase {
    /// A base whose selector is just the widget type.
    pub fn new(widget_type: &str) -> Self {
        Self {
            selector: Selector {
                kind: Some(widget_type.to_owned()),
                ..Selector::default()
            },
            ..Self::default()
        }
    }

    pub fn set_class(&mut self, class: &str) {
        self.selector.class = Some(class.to_owned());
    }

    pub fn set_id(&mut self, id: &str) {
        self.selector.id = Some(id.to_owned());
    }

    pub fn set_part(&mut self, part: &str) {
        self.selector.part = Some(part.to_owned());
    }

    /// Set the signed size hint. Zero on an axis defers to the style.
    pub fn set_hint(&mut self, width: i32, height: i32) {
        self.hint = (width, height);
    }

    /// The explicit hint per axis, falling back to the base style's
    /// `width`/`height`, then to auto.
    pub fn hint_or_style(&self) -> (i32, i32) {
        let style = self.styles.get("");
        let width = match self.hint.0 {
            0 => style.and_then(|s| s.width).unwrap_or(0),
            w => w,
        };
        let height = match self.hint.1 {
            0 => style.and_then(|s| s.height).unwrap_or(0),
            h => h,
        };
        (width, height)
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, state: Option<&str>) {
        self.state = state.filter(|s| !s.is_empty()).map(str::to_owned);
    }

    /// Whether a style is cached under exactly `suffix`.
    pub fn has_style(&self, suffix: &str) -> bool {
        self.styles.contains_key(suffix)
    }
}

impl Boundable for WidgetBase {
    fn bounds(&self) -> Region {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Region) {
        self.bounds = bounds;
    }
}

impl Styleable for WidgetBase {
    fn selector(&self) -> &Selector {
        &self.selector
    }

    fn set_selector(&mut self, selector: Selector) {
        self.selector = selector;
    }

    fn style(&self, suffix: &str) -> Style {
        self.styles
            .get(suffix)
            .or_else(|| self.styles.get(""))
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&mut self, suffix: &str, style: Style) {
        self.styles.insert(suffix.to_owned(), style);
    }
}

/// Implement [`Boundable`] and [`Styleable`] for a widget type by forwarding
/// to its `base: WidgetBase` field.
macro_rules! forward_base {
    ($ty:ty) => {
        impl $crate::widget::Boundable for $ty {
            fn bounds(&self) -> $crate::geometry::Region {
                $crate::widget::Boundable::bounds(&self.base)
            }

            fn set_bounds(&mut self, bounds: $crate::geometry::Region) {
                $crate::widget::Boundable::set_bounds(&mut self.base, bounds);
            }
        }

        impl $crate::widget::Styleable for $ty {
            fn selector(&self) -> &$crate::css::selector::Selector {
                $crate::widget::Styleable::selector(&self.base)
            }

            fn set_selector(&mut self, selector: $crate::css::selector::Selector) {
                $crate::widget::Styleable::set_selector(&mut self.base, selector);
            }

            fn style(&self, suffix: &str) -> $crate::css::styles::Style {
                $crate::widget::Styleable::style(&self.base, suffix)
            }

            fn set_style(&mut self, suffix: &str, style: $crate::css::styles::Style) {
                $crate::widget::Styleable::set_style(&mut self.base, suffix, style);
            }
        }
    };
}

pub(crate) use forward_base;
