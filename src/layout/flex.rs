//! Flex layout: children along one axis, aligned on the other.

use crate::geometry::{Region, Size};
use crate::widget::ChildInfo;

use super::distribute::{distribute, offsets, Track};
use super::Extent;

/// Main axis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Start,
    Center,
    End,
    /// Fill the whole cross extent.
    #[default]
    Stretch,
}

/// Flex layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexLayout {
    pub orientation: Orientation,
    pub alignment: Alignment,
    /// Cells between neighbouring children.
    pub gap: i32,
}

impl Default for FlexLayout {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            alignment: Alignment::Stretch,
            gap: 1,
        }
    }
}

impl FlexLayout {
    /// Main and cross components of a size.
    fn split(&self, size: Size) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (size.width, size.height),
            Orientation::Vertical => (size.height, size.width),
        }
    }

    /// Main and cross hints of a child.
    fn hints(&self, child: &ChildInfo) -> (Extent, Extent) {
        match self.orientation {
            Orientation::Horizontal => (child.width, child.height),
            Orientation::Vertical => (child.height, child.width),
        }
    }

    /// Intrinsic content size: main sizes plus gaps, largest cross size.
    pub fn preferred(&self, children: &[Size]) -> Size {
        if children.is_empty() {
            return Size::ZERO;
        }
        let gaps = self.gap * (children.len() as i32 - 1);
        let (main, cross) = children.iter().fold((gaps, 0), |(main, cross), &child| {
            let (m, c) = self.split(child);
            (main + m, cross.max(c))
        });
        match self.orientation {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    /// Outer regions for `children` inside `content`, in order.
    pub fn arrange(&self, content: Region, children: &[ChildInfo]) -> Vec<Region> {
        if children.is_empty() {
            return Vec::new();
        }

        let (main_extent, cross_extent) = self.split(content.size());
        let (main_origin, cross_origin) = match self.orientation {
            Orientation::Horizontal => (content.x, content.y),
            Orientation::Vertical => (content.y, content.x),
        };

        let tracks: Vec<Track> = children
            .iter()
            .map(|child| {
                let (main_hint, _) = self.hints(child);
                let (preferred, _) = self.split(child.preferred);
                match main_hint {
                    Extent::Fixed(_) => Track::Fixed(preferred),
                    Extent::Auto => Track::Auto(preferred),
                    Extent::Fraction(w) => Track::Fraction(w),
                }
            })
            .collect();
        let sizes = distribute(main_extent, self.gap, &tracks);
        let starts = offsets(main_origin, self.gap, &sizes);

        children
            .iter()
            .zip(sizes.iter().zip(starts))
            .map(|(child, (&main, main_start))| {
                let (_, cross_hint) = self.hints(child);
                let (_, preferred_cross) = self.split(child.preferred);
                let cross = if self.alignment == Alignment::Stretch || cross_hint.is_fraction() {
                    cross_extent
                } else {
                    preferred_cross.min(cross_extent)
                };
                let cross_start = cross_origin
                    + match self.alignment {
                        Alignment::Start | Alignment::Stretch => 0,
                        Alignment::Center => (cross_extent - cross) / 2,
                        Alignment::End => cross_extent - cross,
                    };
                let main = main.max(0);
                let cross = cross.max(0);
                match self.orientation {
                    Orientation::Horizontal => Region::new(main_start, cross_start, main, cross),
                    Orientation::Vertical => Region::new(cross_start, main_start, cross, main),
                }
            })
            .collect()
    }
}
