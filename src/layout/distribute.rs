//! Single-axis space distribution shared by flex and grid.
//!
//! Fixed and auto tracks take their size; what is left after them and the
//! gaps is split between fraction tracks by weight. Each share is floored and
//! the last fraction absorbs the remainder, so the result never drifts from
//! the available size.

/// One track along the distributed axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// A declared size.
    Fixed(i32),
    /// An intrinsic size.
    Auto(i32),
    /// A weighted share of the remaining space.
    Fraction(i32),
}

/// Split `available` cells between `tracks` with `gap` cells between
/// neighbours.
///
/// When at least one fraction track exists and the fixed and auto tracks fit,
/// `sizes.sum() + gap * (n - 1) == available`. When they overflow, fractions
/// get zero; fixed and auto sizes are never shrunk.
pub fn distribute(available: i32, gap: i32, tracks: &[Track]) -> Vec<i32> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let spacing = gap * (tracks.len() as i32 - 1);
    let claimed: i32 = tracks
        .iter()
        .map(|track| match *track {
            Track::Fixed(n) | Track::Auto(n) => n,
            Track::Fraction(_) => 0,
        })
        .sum();
    let remaining = i64::from((available - claimed - spacing).max(0));

    let total_weight: i64 = tracks
        .iter()
        .filter_map(|track| match *track {
            Track::Fraction(w) => Some(i64::from(w.max(0))),
            _ => None,
        })
        .sum();
    let last_fraction = tracks.iter().rposition(|t| matches!(t, Track::Fraction(_)));

    let mut given = 0i64;
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| match *track {
            Track::Fixed(n) | Track::Auto(n) => n,
            Track::Fraction(w) => {
                let share = if Some(i) == last_fraction {
                    remaining - given
                } else if total_weight == 0 {
                    0
                } else {
                    remaining * i64::from(w.max(0)) / total_weight
                };
                given += share;
                share as i32
            }
        })
        .collect()
}

/// Start offsets for consecutive `sizes` beginning at `origin` with `gap`
/// cells between them.
pub fn offsets(origin: i32, gap: i32, sizes: &[i32]) -> Vec<i32> {
    let mut position = origin;
    sizes
        .iter()
        .map(|&size| {
            let start = position;
            position += size.max(0) + gap;
            start
        })
        .collect()
}
