use std::convert::TryFrom;

/// An integer naming an element of a `DisjointSet`.
///
/// Implemented for the primitive integer types so callers can pass whatever
/// id type their problem uses; negative values are representable here and get
/// rejected by the structure rather than by the type checker.
pub trait ElementId: Copy {
    /// The value widened without loss, used for range checks and error reports.
    fn widen(self) -> i128;

    fn to_index(self) -> Option<usize> {
        usize::try_from(self.widen()).ok()
    }
}

macro_rules! impl_element_id {
    ($($t:ty),*) => {
        $(
            impl ElementId for $t {
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_element_id!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

/// How `root` rewrites the parent pointers it walks over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Leave the forest untouched.
    None,
    /// Point every visited node at its grandparent.
    Halving,
    /// Point every node on the path directly at the root.
    Full,
}

impl Default for Compression {
    fn default() -> Compression {
        Compression::Halving
    }
}

impl Compression {
    pub fn all() -> Vec<Compression> {
        vec![Compression::None, Compression::Halving, Compression::Full]
    }
}

/// A site of a percolation grid, addressed by 0-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}

impl Site {
    /// The neighbouring site in direction `d`, if it lies inside an `n`-by-`n` grid.
    pub fn step_toward(&self, d: Direction, n: usize) -> Option<Site> {
        let (row, col) = match d {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::East => (self.row, self.col + 1),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        if row < n && col < n {
            Some(Site { row, col })
        } else {
            None
        }
    }

    pub fn neighbors(&self, n: usize) -> Vec<Site> {
        Direction::adjacent_directions().iter()
            .filter_map(|&d| self.step_toward(d, n))
            .collect()
    }
}
