//! Button widget: a focusable label.
//!
//! The label is centered in the content box on its middle row. Focus and
//! disabled are widget states, so the theme's `button:focus` and
//! `button:disabled` entries apply when painting.

use std::any::Any;

use crate::geometry::Size;
use crate::render::strip::Strip;
use crate::widget::{forward_base, ChildInfo, Focusable, RenderContext, Widget, WidgetBase};

use super::static_widget::{text_size, truncate, FALLBACK_ELLIPSIS};

const FOCUS: &str = "focus";
const DISABLED: &str = "disabled";

/// A focusable button with a centered label.
///
/// ```ignore
/// let save = Button::new("Save").with_class("primary");
/// let locked = Button::new("Locked").disabled(true);
/// ```
pub struct Button {
    base: WidgetBase,
    label: String,
}

forward_base!(Button);

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new("button"),
            label: label.into(),
        }
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

    /// Disable or re-enable the button. A disabled button drops focus.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.base.set_state(Some(DISABLED));
        } else if self.is_disabled() {
            self.base.set_state(None);
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.base.state() == Some(DISABLED)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Focusable for Button {
    fn is_focused(&self) -> bool {
        self.base.state() == Some(FOCUS)
    }

    fn set_focused(&mut self, focused: bool) {
        if self.is_disabled() {
            log::debug!("button {:?} is disabled; focus ignored", self.label);
        } else if focused {
            self.base.set_state(Some(FOCUS));
        } else if self.is_focused() {
            self.base.set_state(None);
        }
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &str {
        "button"
    }

    fn hint(&self) -> (i32, i32) {
        self.base.hint_or_style()
    }

    fn state(&self) -> Option<&str> {
        self.base.state()
    }

    fn preferred(&self, _children: &[ChildInfo]) -> Size {
        let size = text_size(&self.label);
        Size::new(size.width, size.height.min(1))
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Strip> {
        let content = ctx.content;
        if content.is_empty() {
            return Vec::new();
        }

        let ellipsis = ctx.theme.rune("ellipsis").unwrap_or(FALLBACK_ELLIPSIS);
        let first_line = self.label.split('\n').next().unwrap_or_default();
        let label = truncate(first_line, content.width, ellipsis);
        let pad = (content.width - label.chars().count() as i32) / 2;

        let mut strip = Strip::new(content.y + (content.height - 1) / 2, content.x + pad);
        strip.push_str(&label, ctx.cell_style());
        vec![strip]
    }

    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
