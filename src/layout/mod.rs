//! Layout: box model, single-axis distribution, flex and grid containers, and
//! the tree pass that assigns bounds.

pub mod boxmodel;
pub mod distribute;
pub mod engine;
pub mod flex;
pub mod grid;

pub use distribute::{distribute, Track};
pub use engine::LayoutEngine;
pub use flex::{Alignment, FlexLayout, Orientation};
pub use grid::{Cell, GridError, GridLayout, GridTracks, Separator, SeparatorMatrix};

/// A decoded size hint along one axis.
///
/// Hints are written as signed integers: positive is a fixed size, zero is
/// auto (the widget's intrinsic size), negative is a fraction weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extent {
    #[default]
    Auto,
    Fixed(i32),
    Fraction(i32),
}

impl Extent {
    /// Decode a signed hint.
    pub const fn from_hint(hint: i32) -> Extent {
        if hint > 0 {
            Extent::Fixed(hint)
        } else if hint < 0 {
            Extent::Fraction(hint.saturating_neg())
        } else {
            Extent::Auto
        }
    }

    /// Encode back to the signed convention.
    pub const fn to_hint(self) -> i32 {
        match self {
            Extent::Auto => 0,
            Extent::Fixed(n) => n,
            Extent::Fraction(w) => -w,
        }
    }

    pub const fn is_fraction(self) -> bool {
        matches!(self, Extent::Fraction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_decoding() {
        assert_eq!(Extent::from_hint(20), Extent::Fixed(20));
        assert_eq!(Extent::from_hint(0), Extent::Auto);
        assert_eq!(Extent::from_hint(-3), Extent::Fraction(3));
        for hint in [-5, -1, 0, 1, 7] {
            assert_eq!(Extent::from_hint(hint).to_hint(), hint);
        }
        assert_eq!(Extent::from_hint(i32::MIN), Extent::Fraction(i32::MAX));
    }
}
