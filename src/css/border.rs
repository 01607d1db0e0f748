//! Border glyph sets and grid-line junction selection.
//!
//! A [`BorderStyle`] is one complete line-drawing family: the box edges and
//! corners, the T-pieces where an inner grid line meets the box, and the inner
//! lines with their crossings. [`Junction::from_neighbors`] turns the four
//! "line continues this way" bits at a grid intersection into the piece to draw.

use std::collections::HashMap;

use bitflags::bitflags;

/// A complete set of line-drawing glyphs for one visual border family.
///
/// Every glyph is a printable character or an intentional space, never NUL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    // Edges
    pub top: char,
    pub right: char,
    pub bottom: char,
    pub left: char,

    // Corners
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,

    // Outer T-pieces: an inner line meets the box edge
    pub top_t: char,
    pub right_t: char,
    pub bottom_t: char,
    pub left_t: char,

    // Inner lines
    pub inner_h: char,
    pub inner_v: char,
    pub inner_x: char,

    // Inner T-pieces, named by the side the stem points to
    pub inner_top_t: char,
    pub inner_right_t: char,
    pub inner_bottom_t: char,
    pub inner_left_t: char,
}

impl BorderStyle {
    /// Thin single lines.
    pub const THIN: BorderStyle = BorderStyle {
        top: '─',
        right: '│',
        bottom: '─',
        left: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_right: '┘',
        bottom_left: '└',
        top_t: '┬',
        right_t: '┤',
        bottom_t: '┴',
        left_t: '├',
        inner_h: '─',
        inner_v: '│',
        inner_x: '┼',
        inner_top_t: '┴',
        inner_right_t: '├',
        inner_bottom_t: '┬',
        inner_left_t: '┤',
    };

    /// Heavy lines.
    pub const THICK: BorderStyle = BorderStyle {
        top: '━',
        right: '┃',
        bottom: '━',
        left: '┃',
        top_left: '┏',
        top_right: '┓',
        bottom_right: '┛',
        bottom_left: '┗',
        top_t: '┳',
        right_t: '┫',
        bottom_t: '┻',
        left_t: '┣',
        inner_h: '━',
        inner_v: '┃',
        inner_x: '╋',
        inner_top_t: '┻',
        inner_right_t: '┣',
        inner_bottom_t: '┳',
        inner_left_t: '┫',
    };

    /// Double outer box with thin inner lines.
    pub const DOUBLE: BorderStyle = BorderStyle {
        top: '═',
        right: '║',
        bottom: '═',
        left: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_right: '╝',
        bottom_left: '╚',
        top_t: '╤',
        right_t: '╢',
        bottom_t: '╧',
        left_t: '╟',
        inner_h: '─',
        inner_v: '│',
        inner_x: '┼',
        inner_top_t: '┴',
        inner_right_t: '├',
        inner_bottom_t: '┬',
        inner_left_t: '┤',
    };

    /// Thin lines with rounded corners.
    pub const ROUND: BorderStyle = BorderStyle {
        top_left: '╭',
        top_right: '╮',
        bottom_right: '╯',
        bottom_left: '╰',
        ..BorderStyle::THIN
    };

    /// Plain ASCII.
    pub const ASCII: BorderStyle = BorderStyle {
        top: '-',
        right: '|',
        bottom: '-',
        left: '|',
        top_left: '+',
        top_right: '+',
        bottom_right: '+',
        bottom_left: '+',
        top_t: '+',
        right_t: '+',
        bottom_t: '+',
        left_t: '+',
        inner_h: '-',
        inner_v: '|',
        inner_x: '+',
        inner_top_t: '+',
        inner_right_t: '+',
        inner_bottom_t: '+',
        inner_left_t: '+',
    };

    /// Spaces everywhere: reserves the border cells without drawing lines.
    pub const BLANK: BorderStyle = BorderStyle {
        top: ' ',
        right: ' ',
        bottom: ' ',
        left: ' ',
        top_left: ' ',
        top_right: ' ',
        bottom_right: ' ',
        bottom_left: ' ',
        top_t: ' ',
        right_t: ' ',
        bottom_t: ' ',
        left_t: ' ',
        inner_h: ' ',
        inner_v: ' ',
        inner_x: ' ',
        inner_top_t: ' ',
        inner_right_t: ' ',
        inner_bottom_t: ' ',
        inner_left_t: ' ',
    };

    /// All 19 glyphs, in declaration order.
    pub fn glyphs(&self) -> [char; 19] {
        [
            self.top,
            self.right,
            self.bottom,
            self.left,
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_t,
            self.right_t,
            self.bottom_t,
            self.left_t,
            self.inner_h,
            self.inner_v,
            self.inner_x,
            self.inner_top_t,
            self.inner_right_t,
            self.inner_bottom_t,
            self.inner_left_t,
        ]
    }

    /// Whether every glyph is set (no NUL characters).
    pub fn is_complete(&self) -> bool {
        self.glyphs().iter().all(|&c| c != '\0')
    }

    /// The glyph for an inner junction. `Junction::None` draws nothing.
    pub fn junction(&self, junction: Junction) -> Option<char> {
        match junction {
            Junction::None => None,
            Junction::Horizontal => Some(self.inner_h),
            Junction::Vertical => Some(self.inner_v),
            Junction::Cross => Some(self.inner_x),
            Junction::TeeUp => Some(self.inner_top_t),
            Junction::TeeRight => Some(self.inner_right_t),
            Junction::TeeDown => Some(self.inner_bottom_t),
            Junction::TeeLeft => Some(self.inner_left_t),
        }
    }
}

/// The built-in border families by name.
pub fn builtin() -> HashMap<String, BorderStyle> {
    [
        ("thin", BorderStyle::THIN),
        ("thick", BorderStyle::THICK),
        ("double", BorderStyle::DOUBLE),
        ("round", BorderStyle::ROUND),
        ("ascii", BorderStyle::ASCII),
        ("blank", BorderStyle::BLANK),
    ]
    .into_iter()
    .map(|(name, style)| (name.to_owned(), style))
    .collect()
}

// ---------------------------------------------------------------------------
// Junctions
// ---------------------------------------------------------------------------

bitflags! {
    /// Which directions a line continues in from a grid intersection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Neighbors: u8 {
        const UP = 0b0001;
        const RIGHT = 0b0010;
        const DOWN = 0b0100;
        const LEFT = 0b1000;
    }
}

/// The piece drawn at a grid intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
    /// No line touches the intersection.
    None,
    Horizontal,
    Vertical,
    Cross,
    /// Stem points up: `┴`.
    TeeUp,
    /// Stem points right: `├`.
    TeeRight,
    /// Stem points down: `┬`.
    TeeDown,
    /// Stem points left: `┤`.
    TeeLeft,
}

/// Indexed by `Neighbors::bits()`; defined for all 16 masks.
///
/// Grid cells are rectangles, so two perpendicular segments meeting without a
/// third (a corner) cannot come out of a separator matrix. Those masks still
/// resolve, to a crossing.
const JUNCTIONS: [Junction; 16] = [
    Junction::None,       // ....
    Junction::Vertical,   // ...U
    Junction::Horizontal, // ..R.
    Junction::Cross,      // ..RU
    Junction::Vertical,   // .D..
    Junction::Vertical,   // .D.U
    Junction::Cross,      // .DR.
    Junction::TeeRight,   // .DRU
    Junction::Horizontal, // L...
    Junction::Cross,      // L..U
    Junction::Horizontal, // L.R.
    Junction::TeeUp,      // L.RU
    Junction::Cross,      // LD..
    Junction::TeeLeft,    // LD.U
    Junction::TeeDown,    // LDR.
    Junction::Cross,      // LDRU
];

impl Junction {
    /// Select the junction for a neighbor mask. Total over all 16 masks.
    pub fn from_neighbors(neighbors: Neighbors) -> Junction {
        JUNCTIONS[usize::from(neighbors.bits() & 0x0f)]
    }
}
