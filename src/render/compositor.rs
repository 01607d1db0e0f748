//! Screen cell buffer.
//!
//! Widgets render into [`Strip`]s which are placed into the buffer clipped to
//! a region. Later writes overwrite earlier ones, so parents are painted
//! before their children.

use crate::geometry::Region;

use super::strip::{CellStyle, Strip, StyledCell};

/// A `width` x `height` grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compositor {
    /// `screen[y][x]` is the cell at column x, row y.
    screen: Vec<Vec<StyledCell>>,
    pub width: u16,
    pub height: u16,
}

impl Compositor {
    /// A blank buffer of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: vec![vec![StyledCell::blank(); width as usize]; height as usize],
            width,
            height,
        }
    }

    /// The whole buffer as a region.
    pub fn area(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }

    /// Write strips, keeping only cells inside both `clip` and the screen.
    pub fn place_strips(&mut self, strips: &[Strip], clip: Region) {
        let clip = clip.intersection(self.area());
        if clip.is_empty() {
            return;
        }

        for strip in strips {
            if strip.y < clip.y || strip.y >= clip.bottom() {
                continue;
            }
            let row = &mut self.screen[strip.y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x >= clip.x && x < clip.right() {
                    row[x as usize] = *cell;
                }
            }
        }
    }

    /// Write one cell if `(x, y)` is inside both `clip` and the screen.
    pub fn put(&mut self, x: i32, y: i32, cell: StyledCell, clip: Region) {
        if clip.intersection(self.area()).contains(x, y) {
            self.screen[y as usize][x as usize] = cell;
        }
    }

    /// Fill `region` (clipped to `clip`) with styled spaces.
    pub fn fill_region(&mut self, region: Region, style: CellStyle, clip: Region) {
        let area = region.intersection(clip).intersection(self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.screen[y as usize][x as usize] = StyledCell::blank_styled(style);
            }
        }
    }

    /// The cell at `(x, y)`, if on screen.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.screen
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
    }

    /// Characters of row `y`, if on screen.
    pub fn row_text(&self, y: u16) -> Option<String> {
        self.screen
            .get(y as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn strip(y: i32, x: i32, text: &str) -> Strip {
        let mut s = Strip::new(y, x);
        s.push_str(text, CellStyle::default());
        s
    }

    #[test]
    fn new_is_blank() {
        let c = Compositor::new(3, 2);
        assert_eq!(c.row_text(0).as_deref(), Some("   "));
        assert!(c.get_cell(3, 0).is_none());
        assert!(c.get_cell(0, 2).is_none());
    }

    #[test]
    fn strips_are_clipped() {
        let mut c = Compositor::new(6, 3);
        c.place_strips(
            &[strip(0, -2, "abcdef"), strip(1, 4, "xyz"), strip(5, 0, "gone")],
            Region::new(0, 0, 100, 100),
        );
        assert_eq!(c.row_text(0).as_deref(), Some("cdef  "));
        assert_eq!(c.row_text(1).as_deref(), Some("    xy"));

        c.place_strips(&[strip(2, 0, "123456")], Region::new(1, 2, 3, 1));
        assert_eq!(c.row_text(2).as_deref(), Some(" 234  "));
    }

    #[test]
    fn put_and_fill_respect_clip() {
        let mut c = Compositor::new(4, 2);
        let clip = Region::new(0, 0, 2, 2);
        c.put(1, 1, StyledCell::new('a', CellStyle::default()), clip);
        c.put(3, 1, StyledCell::new('b', CellStyle::default()), clip);
        assert_eq!(c.row_text(1).as_deref(), Some(" a  "));

        let red = CellStyle { bg: Some(Color::Red), ..CellStyle::default() };
        c.fill_region(Region::new(1, 0, 3, 1), red, clip);
        assert_eq!(c.get_cell(1, 0).map(|cell| cell.style), Some(red));
        assert_eq!(c.get_cell(2, 0).map(|cell| cell.style), Some(CellStyle::default()));
    }
}
