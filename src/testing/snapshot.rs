//! Snapshot rendering helpers.
//!
//! Convert rendered output (strips, compositor buffers, whole trees) into
//! plain text for assertions. Each row is right-trimmed, rows are joined with
//! `'\n'`, and trailing empty rows are dropped.

use crate::css::theme::Theme;
use crate::dom::Dom;
use crate::layout::LayoutEngine;
use crate::render::compositor::Compositor;
use crate::render::render;
use crate::render::strip::Strip;

/// Style, lay out and render a whole tree into a `width` x `height` buffer,
/// returning its text.
///
/// ```ignore
/// let mut dom = Dom::new();
/// dom.insert(Static::new("Hello"));
/// let output = render_to_string(&mut dom, &default_theme(), 20, 1);
/// assert_eq!(output, "Hello");
/// ```
pub fn render_to_string(dom: &mut Dom, theme: &Theme, width: u16, height: u16) -> String {
    LayoutEngine::new().run(dom, theme, i32::from(width), i32::from(height));
    compositor_to_string(&render(dom, theme, width, height))
}

/// Overlay strips on a `width` x `height` grid of spaces.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let mut grid = vec![vec![' '; width as usize]; height as usize];
    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        let row = &mut grid[strip.y as usize];
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if (0..width).contains(&x) {
                row[x as usize] = cell.ch;
            }
        }
    }
    join_rows(grid.into_iter().map(|row| row.into_iter().collect()))
}

/// The compositor's characters.
pub fn compositor_to_string(compositor: &Compositor) -> String {
    join_rows((0..compositor.height).filter_map(|y| compositor.row_text(y)))
}

fn join_rows(rows: impl Iterator<Item = String>) -> String {
    let rows: Vec<String> = rows.map(|row| row.trim_end().to_owned()).collect();
    rows.join("\n").trim_end_matches('\n').to_owned()
}
