//! Grid layout: cell placement with spans, track sizing, separator matrix.
//!
//! Columns and rows are sized independently with the same distribution as
//! flex, one separator cell between neighbouring tracks. A cell covering
//! several tracks also covers the separators between them.

use std::fmt;

use bitflags::bitflags;

use crate::css::border::{Junction, Neighbors};
use crate::dom::NodeId;
use crate::geometry::{Region, Size};
use crate::widget::ChildInfo;

use super::distribute::{distribute, offsets, Track};
use super::Extent;

/// Separator cells between neighbouring tracks.
pub const SEPARATOR: i32 = 1;

/// Errors from grid placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell {0} has a zero span")]
    ZeroSpan(Cell),
    #[error("cell {cell} does not fit a {rows}x{columns} grid")]
    OutOfBounds { cell: Cell, rows: usize, columns: usize },
    #[error("cell {cell} overlaps {existing}")]
    Overlap { cell: Cell, existing: Cell },
}

/// A placement: top-left track and span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl Cell {
    /// A single-track cell.
    pub const fn at(row: usize, column: usize) -> Self {
        Self::spanning(row, column, 1, 1)
    }

    pub const fn spanning(row: usize, column: usize, row_span: usize, column_span: usize) -> Self {
        Self { row, column, row_span, column_span }
    }

    const fn row_end(self) -> usize {
        self.row + self.row_span
    }

    const fn column_end(self) -> usize {
        self.column + self.column_span
    }

    pub const fn overlaps(self, other: Cell) -> bool {
        self.row < other.row_end()
            && other.row < self.row_end()
            && self.column < other.column_end()
            && other.column < self.column_end()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) span {}x{}",
            self.row, self.column, self.row_span, self.column_span
        )
    }
}

// ---------------------------------------------------------------------------
// Separator matrix
// ---------------------------------------------------------------------------

bitflags! {
    /// Which interior lines next to a grid cell are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Separator: u8 {
        /// The line below the cell.
        const H = 0b01;
        /// The line right of the cell.
        const V = 0b10;
    }
}

/// Active interior grid lines, one entry per track cell.
///
/// All interior lines start active; a spanning cell clears the segments it
/// covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorMatrix {
    rows: usize,
    columns: usize,
    bits: Vec<Separator>,
}

impl SeparatorMatrix {
    pub fn new(rows: usize, columns: usize, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut bits = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                let mut sep = Separator::empty();
                sep.set(Separator::H, r + 1 < rows);
                sep.set(Separator::V, c + 1 < columns);
                bits.push(sep);
            }
        }

        let mut matrix = Self { rows, columns, bits };
        for cell in cells {
            for r in cell.row..cell.row_end().min(rows) {
                for c in cell.column..cell.column_end().min(columns) {
                    let idx = r * columns + c;
                    if c + 1 < cell.column_end() {
                        matrix.bits[idx].remove(Separator::V);
                    }
                    if r + 1 < cell.row_end() {
                        matrix.bits[idx].remove(Separator::H);
                    }
                }
            }
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Bits for cell `(row, column)`; empty outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Separator {
        if row < self.rows && column < self.columns {
            self.bits[row * self.columns + column]
        } else {
            Separator::empty()
        }
    }

    /// Whether the line below `(row, column)` is drawn.
    pub fn horizontal(&self, row: usize, column: usize) -> bool {
        self.get(row, column).contains(Separator::H)
    }

    /// Whether the line right of `(row, column)` is drawn.
    pub fn vertical(&self, row: usize, column: usize) -> bool {
        self.get(row, column).contains(Separator::V)
    }

    /// Neighbour mask at the interior intersection below-right of
    /// `(row, column)`.
    pub fn neighbors(&self, row: usize, column: usize) -> Neighbors {
        let mut mask = Neighbors::empty();
        mask.set(Neighbors::UP, self.vertical(row, column));
        mask.set(Neighbors::DOWN, self.vertical(row + 1, column));
        mask.set(Neighbors::LEFT, self.horizontal(row, column));
        mask.set(Neighbors::RIGHT, self.horizontal(row, column + 1));
        mask
    }

    /// The junction drawn at the interior intersection below-right of
    /// `(row, column)`.
    pub fn junction(&self, row: usize, column: usize) -> Junction {
        Junction::from_neighbors(self.neighbors(row, column))
    }
}

// ---------------------------------------------------------------------------
// Grid layout
// ---------------------------------------------------------------------------

/// Computed track sizes and offsets from the last arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridTracks {
    pub column_sizes: Vec<i32>,
    pub column_starts: Vec<i32>,
    pub row_sizes: Vec<i32>,
    pub row_starts: Vec<i32>,
}

impl GridTracks {
    /// X of the separator right of `column`.
    pub fn column_line(&self, column: usize) -> i32 {
        self.column_starts[column] + self.column_sizes[column].max(0)
    }

    /// Y of the separator below `row`.
    pub fn row_line(&self, row: usize) -> i32 {
        self.row_starts[row] + self.row_sizes[row].max(0)
    }

    /// The outer region covered by `cell`, separators inside the span included.
    pub fn region(&self, cell: Cell) -> Region {
        let span = |sizes: &[i32], start: usize, count: usize| {
            sizes[start..start + count].iter().map(|s| s.max(&0)).sum::<i32>()
                + SEPARATOR * (count as i32 - 1)
        };
        Region::new(
            self.column_starts[cell.column],
            self.row_starts[cell.row],
            span(&self.column_sizes[..], cell.column, cell.column_span),
            span(&self.row_sizes[..], cell.row, cell.row_span),
        )
    }
}

/// Track hints and validated cell placements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    columns: Vec<i32>,
    rows: Vec<i32>,
    cells: Vec<(NodeId, Cell)>,
}

impl GridLayout {
    /// A grid with one signed hint per column and per row.
    pub fn new(columns: Vec<i32>, rows: Vec<i32>) -> Self {
        Self {
            columns,
            rows,
            cells: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Place `id` at `cell`, replacing any earlier placement of `id`.
    pub fn place(&mut self, id: NodeId, cell: Cell) -> Result<(), GridError> {
        if cell.row_span == 0 || cell.column_span == 0 {
            return Err(GridError::ZeroSpan(cell));
        }
        if cell.row_end() > self.rows.len() || cell.column_end() > self.columns.len() {
            return Err(GridError::OutOfBounds {
                cell,
                rows: self.rows.len(),
                columns: self.columns.len(),
            });
        }
        if let Some(&(_, existing)) = self
            .cells
            .iter()
            .find(|(other, existing)| *other != id && existing.overlaps(cell))
        {
            return Err(GridError::Overlap { cell, existing });
        }

        self.cells.retain(|(other, _)| *other != id);
        self.cells.push((id, cell));
        Ok(())
    }

    /// Where `id` is placed.
    pub fn cell(&self, id: NodeId) -> Option<Cell> {
        self.cells
            .iter()
            .find_map(|&(other, cell)| (other == id).then_some(cell))
    }

    /// The separator matrix for the current placements.
    pub fn separators(&self) -> SeparatorMatrix {
        SeparatorMatrix::new(
            self.rows.len(),
            self.columns.len(),
            self.cells.iter().map(|&(_, cell)| cell),
        )
    }

    /// Largest preferred extent among single-span cells in each track.
    fn intrinsic(
        &self,
        children: &[ChildInfo],
        tracks: usize,
        select: impl Fn(&Cell) -> (usize, usize),
        extent: impl Fn(Size) -> i32,
    ) -> Vec<i32> {
        let mut sizes = vec![0; tracks];
        for child in children {
            let Some(cell) = self.cell(child.id) else {
                continue;
            };
            let (track, span) = select(&cell);
            if span == 1 && track < tracks {
                sizes[track] = sizes[track].max(extent(child.preferred));
            }
        }
        sizes
    }

    fn tracks(hints: &[i32], intrinsic: &[i32]) -> Vec<Track> {
        hints
            .iter()
            .zip(intrinsic)
            .map(|(&hint, &auto)| match Extent::from_hint(hint) {
                Extent::Fixed(n) => Track::Fixed(n),
                Extent::Auto => Track::Auto(auto),
                Extent::Fraction(w) => Track::Fraction(w),
            })
            .collect()
    }

    fn column_intrinsic(&self, children: &[ChildInfo]) -> Vec<i32> {
        self.intrinsic(children, self.columns.len(), |c| (c.column, c.column_span), |s| s.width)
    }

    fn row_intrinsic(&self, children: &[ChildInfo]) -> Vec<i32> {
        self.intrinsic(children, self.rows.len(), |c| (c.row, c.row_span), |s| s.height)
    }

    /// Intrinsic content size: fixed tracks at their size, the rest at their
    /// largest single-span child, plus separators.
    pub fn preferred(&self, children: &[ChildInfo]) -> Size {
        let total = |hints: &[i32], intrinsic: Vec<i32>| -> i32 {
            if hints.is_empty() {
                return 0;
            }
            let tracks: i32 = hints
                .iter()
                .zip(intrinsic)
                .map(|(&hint, auto)| if hint > 0 { hint } else { auto })
                .sum();
            tracks + SEPARATOR * (hints.len() as i32 - 1)
        };
        Size::new(
            total(&self.columns, self.column_intrinsic(children)),
            total(&self.rows, self.row_intrinsic(children)),
        )
    }

    /// Size every track for `content`.
    pub fn tracks_for(&self, content: Region, children: &[ChildInfo]) -> GridTracks {
        let column_sizes = distribute(
            content.width,
            SEPARATOR,
            &Self::tracks(&self.columns, &self.column_intrinsic(children)),
        );
        let row_sizes = distribute(
            content.height,
            SEPARATOR,
            &Self::tracks(&self.rows, &self.row_intrinsic(children)),
        );
        GridTracks {
            column_starts: offsets(content.x, SEPARATOR, &column_sizes),
            row_starts: offsets(content.y, SEPARATOR, &row_sizes),
            column_sizes,
            row_sizes,
        }
    }

    /// Outer regions for `children`, in order. Unplaced children get
    /// [`Region::EMPTY`].
    pub fn arrange(&self, content: Region, children: &[ChildInfo]) -> (Vec<Region>, GridTracks) {
        let tracks = self.tracks_for(content, children);
        let regions = children
            .iter()
            .map(|child| match self.cell(child.id) {
                Some(cell) => tracks.region(cell),
                None => {
                    log::warn!("grid child {:?} has no cell; not laid out", child.id);
                    Region::EMPTY
                }
            })
            .collect();
        (regions, tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut keys: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| keys.insert(())).collect()
    }

    fn info(id: NodeId, preferred: Size) -> ChildInfo {
        ChildInfo {
            id,
            width: Extent::Auto,
            height: Extent::Auto,
            preferred,
        }
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    #[test]
    fn placement_errors() {
        let id = ids(2);
        let mut grid = GridLayout::new(vec![1, 1], vec![1, 1]);
        assert!(matches!(
            grid.place(id[0], Cell::spanning(0, 0, 0, 1)),
            Err(GridError::ZeroSpan(_))
        ));
        assert!(matches!(
            grid.place(id[0], Cell::spanning(1, 1, 1, 2)),
            Err(GridError::OutOfBounds { rows: 2, columns: 2, .. })
        ));
        grid.place(id[0], Cell::spanning(0, 0, 2, 1)).unwrap();
        assert_eq!(
            grid.place(id[1], Cell::at(1, 0)),
            Err(GridError::Overlap {
                cell: Cell::at(1, 0),
                existing: Cell::spanning(0, 0, 2, 1),
            })
        );
        grid.place(id[1], Cell::at(1, 1)).unwrap();
    }

    #[test]
    fn replacing_own_placement() {
        let id = ids(1);
        let mut grid = GridLayout::new(vec![1, 1], vec![1]);
        grid.place(id[0], Cell::at(0, 0)).unwrap();
        grid.place(id[0], Cell::spanning(0, 0, 1, 2)).unwrap();
        assert_eq!(grid.cell(id[0]), Some(Cell::spanning(0, 0, 1, 2)));
    }

    // -----------------------------------------------------------------------
    // Sizing
    // -----------------------------------------------------------------------

    #[test]
    fn columns_fill_content_exactly() {
        let grid = GridLayout::new(vec![10, -1], vec![-1]);
        let tracks = grid.tracks_for(Region::new(0, 0, 40, 3), &[]);
        assert_eq!(tracks.column_sizes, vec![10, 29]);
        assert_eq!(tracks.column_sizes.iter().sum::<i32>() + 1, 40);
        assert_eq!(tracks.column_starts, vec![0, 11]);
        assert_eq!(tracks.row_sizes, vec![3]);
    }

    #[test]
    fn auto_track_uses_single_span_children() {
        let id = ids(3);
        let mut grid = GridLayout::new(vec![0, -1], vec![0, 0]);
        grid.place(id[0], Cell::at(0, 0)).unwrap();
        grid.place(id[1], Cell::at(1, 0)).unwrap();
        grid.place(id[2], Cell::spanning(0, 1, 2, 1)).unwrap();
        let children = [
            info(id[0], Size::new(4, 1)),
            info(id[1], Size::new(7, 2)),
            info(id[2], Size::new(50, 9)),
        ];
        let tracks = grid.tracks_for(Region::new(0, 0, 30, 10), &children);
        assert_eq!(tracks.column_sizes, vec![7, 22]);
        // The row-spanning child does not inflate auto rows.
        assert_eq!(tracks.row_sizes, vec![1, 2]);
        assert_eq!(grid.preferred(&children), Size::new(7 + 50 + 1, 1 + 2 + 1));
    }

    #[test]
    fn spanning_region_includes_separators() {
        let id = ids(2);
        let mut grid = GridLayout::new(vec![5, 5, 5], vec![2, 2]);
        grid.place(id[0], Cell::spanning(0, 0, 1, 3)).unwrap();
        grid.place(id[1], Cell::spanning(1, 1, 1, 2)).unwrap();
        let children = [info(id[0], Size::ZERO), info(id[1], Size::ZERO)];
        let (regions, _) = grid.arrange(Region::new(1, 1, 17, 5), &children);
        assert_eq!(regions[0], Region::new(1, 1, 17, 2));
        assert_eq!(regions[1], Region::new(7, 4, 11, 2));
    }

    #[test]
    fn unplaced_child_gets_empty_region() {
        let id = ids(1);
        let grid = GridLayout::new(vec![-1], vec![-1]);
        let (regions, _) = grid.arrange(Region::new(0, 0, 10, 10), &[info(id[0], Size::ZERO)]);
        assert_eq!(regions, vec![Region::EMPTY]);
    }

    #[test]
    fn empty_grid() {
        let grid = GridLayout::new(Vec::new(), Vec::new());
        assert_eq!(grid.preferred(&[]), Size::ZERO);
        let tracks = grid.tracks_for(Region::new(0, 0, 10, 10), &[]);
        assert!(tracks.column_sizes.is_empty());
    }

    // -----------------------------------------------------------------------
    // Separators
    // -----------------------------------------------------------------------

    #[test]
    fn all_interior_lines_start_active() {
        let m = SeparatorMatrix::new(2, 3, []);
        assert!(m.horizontal(0, 0) && m.horizontal(0, 2));
        assert!(!m.horizontal(1, 0));
        assert!(m.vertical(0, 0) && m.vertical(1, 1));
        assert!(!m.vertical(0, 2));
        assert_eq!(m.junction(0, 0), Junction::Cross);
    }

    #[test]
    fn column_span_clears_vertical_segment() {
        let m = SeparatorMatrix::new(2, 2, [Cell::spanning(0, 0, 1, 2)]);
        assert!(!m.vertical(0, 0));
        assert!(m.vertical(1, 0));
        assert_eq!(m.junction(0, 0), Junction::TeeDown);
    }

    #[test]
    fn row_span_clears_horizontal_segment() {
        let m = SeparatorMatrix::new(2, 2, [Cell::spanning(0, 0, 2, 1)]);
        assert!(!m.horizontal(0, 0));
        assert!(m.horizontal(0, 1));
        assert_eq!(m.junction(0, 0), Junction::TeeRight);
    }

    #[test]
    fn block_span_hides_intersection() {
        let m = SeparatorMatrix::new(3, 3, [Cell::spanning(0, 0, 2, 2)]);
        assert_eq!(m.neighbors(0, 0), Neighbors::empty());
        assert_eq!(m.junction(0, 0), Junction::None);
        assert_eq!(m.junction(1, 0), Junction::TeeDown);
        assert_eq!(m.junction(0, 1), Junction::TeeRight);
        assert_eq!(m.junction(1, 1), Junction::Cross);
    }
}
