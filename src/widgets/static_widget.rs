//! Static widget: displays fixed text content.
//!
//! Lines are split on `'\n'`. Lines wider than the content box end in the
//! theme's `ellipsis` rune; lines past its height are dropped.

use std::any::Any;

use crate::geometry::Size;
use crate::render::strip::Strip;
use crate::widget::{forward_base, ChildInfo, RenderContext, Widget, WidgetBase};

/// Used when the theme has no `ellipsis` rune.
pub const FALLBACK_ELLIPSIS: char = '~';

// ---------------------------------------------------------------------------
// Static
// ---------------------------------------------------------------------------

/// A non-interactive block of text.
///
/// ```ignore
/// let title = Static::new("Settings").with_part("title");
/// ```
pub struct Static {
    base: WidgetBase,
    text: String,
}

forward_base!(Static);

impl Static {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new("static"),
            text: text.into(),
        }
    }

    pub fn with_part(mut self, part: &str) -> Self {
        self.base.set_part(part);
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

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Cut `line` to `width` characters, ending in `ellipsis` when shortened.
pub fn truncate(line: &str, width: i32, ellipsis: char) -> String {
    let width = width.max(0) as usize;
    if line.chars().count() <= width {
        return line.to_owned();
    }
    if width == 0 {
        return String::new();
    }
    line.chars()
        .take(width - 1)
        .chain(std::iter::once(ellipsis))
        .collect()
}

/// Width in characters of the widest line and the number of lines.
pub fn text_size(text: &str) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    text.split('\n').fold(Size::ZERO, |size, line| {
        Size::new(size.width.max(line.chars().count() as i32), size.height + 1)
    })
}

impl Widget for Static {
    fn widget_type(&self) -> &str {
        "static"
    }

    fn hint(&self) -> (i32, i32) {
        self.base.hint_or_style()
    }

    fn state(&self) -> Option<&str> {
        self.base.state()
    }

    fn preferred(&self, _children: &[ChildInfo]) -> Size {
        text_size(&self.text)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Strip> {
        let content = ctx.content;
        if content.is_empty() || self.text.is_empty() {
            return Vec::new();
        }

        let style = ctx.cell_style();
        let ellipsis = ctx.theme.rune("ellipsis").unwrap_or(FALLBACK_ELLIPSIS);
        self.text
            .split('\n')
            .take(content.height as usize)
            .enumerate()
            .map(|(i, line)| {
                let mut strip = Strip::new(content.y + i as i32, content.x);
                strip.push_str(&truncate(line, content.width, ellipsis), style);
                strip
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
