//! Grid container: children placed in cells, optionally separated by lines.
//!
//! One separator cell is always reserved between neighbouring tracks. When
//! lines are on, the separators are drawn with the grid's border set (or
//! `thin`), with junction pieces where lines meet and T-pieces where an
//! interior line reaches a border sitting directly against the content.

use std::any::Any;

use crate::css::border::BorderStyle;
use crate::dom::NodeId;
use crate::geometry::{Region, Size};
use crate::layout::grid::{Cell, GridError, GridLayout, GridTracks, SeparatorMatrix};
use crate::render::strip::Strip;
use crate::widget::{forward_base, ChildInfo, RenderContext, Widget, WidgetBase};

/// Theme flag consulted when a grid does not set its own line toggle.
pub const LINES_FLAG: &str = "grid-lines";

/// Border set for lines when the grid has none of its own.
const DEFAULT_LINES: &str = "thin";

/// A two-dimensional container.
///
/// ```ignore
/// let mut grid = Grid::new(vec![10, -1], vec![1, -1]);
/// let title = dom.insert_child(grid_id, Static::new("Title"));
/// grid.place(title, Cell::spanning(0, 0, 1, 2))?;
/// ```
pub struct Grid {
    base: WidgetBase,
    layout: GridLayout,
    lines: Option<bool>,
    tracks: GridTracks,
}

forward_base!(Grid);

impl Grid {
    /// A grid with one signed hint per column and per row.
    pub fn new(columns: Vec<i32>, rows: Vec<i32>) -> Self {
        Self {
            base: WidgetBase::new("grid"),
            layout: GridLayout::new(columns, rows),
            lines: None,
            tracks: GridTracks::default(),
        }
    }

    /// Draw (or hide) separator lines regardless of the theme flag.
    pub fn with_lines(mut self, lines: bool) -> Self {
        self.lines = Some(lines);
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

    /// Place child `id` at `cell`.
    pub fn place(&mut self, id: NodeId, cell: Cell) -> Result<(), GridError> {
        self.layout.place(id, cell)
    }

    pub fn cell(&self, id: NodeId) -> Option<Cell> {
        self.layout.cell(id)
    }

    pub fn separators(&self) -> SeparatorMatrix {
        self.layout.separators()
    }

    /// Track sizes and offsets from the last layout.
    pub fn tracks(&self) -> &GridTracks {
        &self.tracks
    }

    fn laid_out(&self) -> bool {
        let columns = self.layout.column_count();
        let rows = self.layout.row_count();
        columns > 0
            && rows > 0
            && self.tracks.column_sizes.len() == columns
            && self.tracks.row_sizes.len() == rows
    }

    fn line_strips(
        &self,
        glyphs: &BorderStyle,
        frame: Option<&BorderStyle>,
        ctx: &RenderContext<'_>,
    ) -> Vec<Strip> {
        let style = ctx.cell_style();
        let seps = self.separators();
        let t = &self.tracks;
        let columns = self.layout.column_count();
        let rows = self.layout.row_count();
        let mut strips = Vec::new();
        let mut put = |x: i32, y: i32, ch: char| strips.push(Strip::repeat(y, x, ch, 1, style));

        for c in 0..columns - 1 {
            let x = t.column_line(c);
            for r in (0..rows).filter(|&r| seps.vertical(r, c)) {
                for y in t.row_starts[r]..t.row_line(r) {
                    put(x, y, glyphs.inner_v);
                }
            }
        }
        for r in 0..rows - 1 {
            let y = t.row_line(r);
            for c in (0..columns).filter(|&c| seps.horizontal(r, c)) {
                for x in t.column_starts[c]..t.column_line(c) {
                    put(x, y, glyphs.inner_h);
                }
            }
        }
        for r in 0..rows - 1 {
            for c in 0..columns - 1 {
                if let Some(ch) = glyphs.junction(seps.junction(r, c)) {
                    put(t.column_line(c), t.row_line(r), ch);
                }
            }
        }

        if let Some(frame) = frame {
            outer_tees(frame, &seps, t, ctx, &mut put, (rows, columns));
        }
        strips
    }
}

/// T-pieces where interior lines meet a border directly around the content.
fn outer_tees(
    frame: &BorderStyle,
    seps: &SeparatorMatrix,
    t: &GridTracks,
    ctx: &RenderContext<'_>,
    put: &mut impl FnMut(i32, i32, char),
    (rows, columns): (usize, usize),
) {
    let padding = ctx.style.padding();
    let content = ctx.content;
    let reaches_right = t.column_line(columns - 1) == content.right();
    let reaches_bottom = t.row_line(rows - 1) == content.bottom();

    for c in 0..columns - 1 {
        let x = t.column_line(c);
        if padding.top == 0 && seps.vertical(0, c) {
            put(x, content.y - 1, frame.top_t);
        }
        if padding.bottom == 0 && reaches_bottom && seps.vertical(rows - 1, c) {
            put(x, content.bottom(), frame.bottom_t);
        }
    }
    for r in 0..rows - 1 {
        let y = t.row_line(r);
        if padding.left == 0 && seps.horizontal(r, 0) {
            put(content.x - 1, y, frame.left_t);
        }
        if padding.right == 0 && reaches_right && seps.horizontal(r, columns - 1) {
            put(content.right(), y, frame.right_t);
        }
    }
}

impl Widget for Grid {
    fn widget_type(&self) -> &str {
        "grid"
    }

    fn hint(&self) -> (i32, i32) {
        self.base.hint_or_style()
    }

    fn state(&self) -> Option<&str> {
        self.base.state()
    }

    fn preferred(&self, children: &[ChildInfo]) -> Size {
        self.layout.preferred(children)
    }

    fn arrange(&mut self, content: Region, children: &[ChildInfo]) -> Vec<Region> {
        let (regions, tracks) = self.layout.arrange(content, children);
        self.tracks = tracks;
        regions
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Strip> {
        let lines = self.lines.unwrap_or_else(|| ctx.theme.flag(LINES_FLAG));
        if !lines || !self.laid_out() {
            return Vec::new();
        }

        let frame = ctx
            .style
            .border
            .as_deref()
            .filter(|name| !name.is_empty())
            .and_then(|name| ctx.theme.border(name));
        let Some(glyphs) = frame.or_else(|| ctx.theme.border(DEFAULT_LINES)) else {
            log::warn!("theme {:?} has no border set for grid lines", ctx.theme.name());
            return Vec::new();
        };
        self.line_strips(&glyphs, frame.as_ref(), ctx)
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
    use crate::css::styles::Style;
    use crate::css::theme::Theme;
    use crate::testing::snapshot::strips_to_string;
    use crate::widget::{Boundable, Styleable};
    use slotmap::SlotMap;

    fn theme(lines: bool) -> Theme {
        let mut theme = Theme::new("t");
        theme.set_borders(crate::css::border::builtin());
        theme.set_flags([(LINES_FLAG, lines)]);
        theme
    }

    /// Arrange `grid` in `bounds` and return its line strips as text.
    fn draw(grid: &mut Grid, theme: &Theme, bounds: Region, children: &[ChildInfo]) -> String {
        grid.set_bounds(bounds);
        let content = grid.content();
        grid.arrange(content, children);
        let style = grid.current_style();
        let ctx = RenderContext {
            theme,
            style: &style,
            bounds,
            content,
        };
        strips_to_string(&grid.render(&ctx), bounds.right(), bounds.bottom())
    }

    #[test]
    fn interior_lines_without_border() {
        let mut grid = Grid::new(vec![2, 2], vec![1, 1]);
        let text = draw(&mut grid, &theme(true), Region::new(0, 0, 5, 3), &[]);
        assert_eq!(text, "  │\n──┼──\n  │");
    }

    #[test]
    fn flag_and_override() {
        let mut grid = Grid::new(vec![2, 2], vec![1]);
        assert_eq!(draw(&mut grid, &theme(false), Region::new(0, 0, 5, 1), &[]), "");
        let mut grid = grid.with_lines(true);
        assert_eq!(draw(&mut grid, &theme(false), Region::new(0, 0, 5, 1), &[]), "  │");
        let mut grid = grid.with_lines(false);
        assert_eq!(draw(&mut grid, &theme(true), Region::new(0, 0, 5, 1), &[]), "");
    }

    #[test]
    fn column_span_hides_segment() {
        let mut keys: SlotMap<NodeId, ()> = SlotMap::with_key();
        let id = keys.insert(());
        let mut grid = Grid::new(vec![2, 2], vec![1, 1]).with_lines(true);
        grid.place(id, Cell::spanning(0, 0, 1, 2)).unwrap();
        let child = ChildInfo {
            id,
            width: crate::layout::Extent::Auto,
            height: crate::layout::Extent::Auto,
            preferred: Size::ZERO,
        };
        let text = draw(&mut grid, &theme(true), Region::new(0, 0, 5, 3), &[child]);
        assert_eq!(text, "\n──┬──\n  │");
    }

    #[test]
    fn outer_tees_only_against_border() {
        let mut grid = Grid::new(vec![1, 1], vec![1, 1]);
        grid.set_style("", Style::new().with_border("double"));
        let text = draw(&mut grid, &theme(true), Region::new(0, 0, 5, 5), &[]);
        assert_eq!(text, "  ╤\n  │\n╟─┼─╢\n  │\n  ╧");

        let mut padded = Grid::new(vec![1, 1], vec![1, 1]);
        padded.set_style(
            "",
            Style::new()
                .with_border("double")
                .with_padding(crate::geometry::Insets::new(1, 0, 0, 0)),
        );
        let text = draw(&mut padded, &theme(true), Region::new(0, 0, 5, 6), &[]);
        assert_eq!(text, "\n\n  │\n╟─┼─╢\n  │\n  ╧");
    }

    #[test]
    fn unknown_border_falls_back_to_thin_without_tees() {
        let mut grid = Grid::new(vec![1, 1], vec![1]);
        grid.set_style("", Style::new().with_border("zigzag"));
        let text = draw(&mut grid, &theme(true), Region::new(0, 0, 5, 3), &[]);
        assert_eq!(text, "\n  │");
    }
}
