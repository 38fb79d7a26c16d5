use crate::data::{ElementId, Site};
use crate::disjoint_set::DisjointSet;
use crate::error::{UnionFindError, UnionFindRes};

/// An n-by-n grid of sites that are either open or blocked.
///
/// The grid percolates once some chain of open, orthogonally adjacent sites
/// joins the top row to the bottom row. Two virtual sites stand for the whole
/// top and bottom rows so that `percolates` is a single root comparison.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    // grid sites, then virtual top, then virtual bottom
    sites: DisjointSet,
    // grid sites and virtual top only, so bottom-row sites never look full
    // just because the grid percolates somewhere else
    fullness: DisjointSet,
}

impl Percolation {
    pub fn new(n: usize) -> UnionFindRes<Percolation> {
        if n == 0 {
            return Err(UnionFindError::InvalidArgument("grid side must be positive".to_string()));
        }
        let area = n.checked_mul(n)
            .and_then(|a| a.checked_add(2))
            .ok_or_else(|| UnionFindError::InvalidArgument(format!("grid side {} is too large", n)))?;

        Ok(Percolation {
            n,
            open: vec![false; area - 2],
            open_count: 0,
            sites: DisjointSet::new(area),
            fullness: DisjointSet::new(area - 1),
        })
    }

    pub fn side(&self) -> usize {
        self.n
    }

    fn top(&self) -> usize {
        self.n * self.n
    }

    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn id(&self, site: Site) -> usize {
        site.row * self.n + site.col
    }

    fn site<R: ElementId, C: ElementId>(&self, row: R, col: C) -> UnionFindRes<Site> {
        let coord = |c: i128| -> UnionFindRes<usize> {
            match c.to_index() {
                Some(i) if i < self.n => Ok(i),
                _ => Err(UnionFindError::IndexOutOfRange { index: c, len: self.n }),
            }
        };
        Ok(Site { row: coord(row.widen())?, col: coord(col.widen())? })
    }

    /// Opens the site at `(row, col)` and joins it to its open neighbours.
    pub fn open<R: ElementId, C: ElementId>(&mut self, row: R, col: C) -> UnionFindRes {
        let site = self.site(row, col)?;
        let id = self.id(site);
        if self.open[id] {
            return Ok(());
        }
        self.open[id] = true;
        self.open_count += 1;

        if site.row == 0 {
            let top = self.top();
            self.sites.union(id, top)?;
            self.fullness.union(id, top)?;
        }
        if site.row == self.n - 1 {
            let bottom = self.bottom();
            self.sites.union(id, bottom)?;
        }
        for neighbor in site.neighbors(self.n) {
            let other = self.id(neighbor);
            if self.open[other] {
                self.sites.union(id, other)?;
                self.fullness.union(id, other)?;
            }
        }
        Ok(())
    }

    pub fn is_open<R: ElementId, C: ElementId>(&self, row: R, col: C) -> UnionFindRes<bool> {
        let site = self.site(row, col)?;
        Ok(self.open[self.id(site)])
    }

    /// Whether the site is open and reachable from the top row through open sites.
    pub fn is_full<R: ElementId, C: ElementId>(&mut self, row: R, col: C) -> UnionFindRes<bool> {
        let site = self.site(row, col)?;
        let id = self.id(site);
        if !self.open[id] {
            return Ok(false);
        }
        let top = self.top();
        self.fullness.connected(id, top)
    }

    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.top(), self.bottom());
        self.sites.same_set(top, bottom)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_site_percolates_once_open() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.is_full(0, 0).unwrap());
        grid.open(0, 0).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(0, 0).unwrap());
        assert_eq!(grid.number_of_open_sites(), 1);
    }

    #[test]
    fn column_path_percolates() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(0, 1).unwrap();
        grid.open(2, 1).unwrap();
        assert!(!grid.percolates());
        assert!(grid.is_full(0, 1).unwrap());
        assert!(!grid.is_full(2, 1).unwrap());
        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(2, 1).unwrap());
    }

    #[test]
    fn diagonal_sites_do_not_connect() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(0, 0).unwrap();
        grid.open(1, 1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 0).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn no_backwash_into_bottom_row() {
        let mut grid = Percolation::new(3).unwrap();
        for row in 0..3 {
            grid.open(row, 2).unwrap();
        }
        assert!(grid.percolates());
        grid.open(2, 0).unwrap();
        assert!(grid.is_open(2, 0).unwrap());
        assert!(!grid.is_full(2, 0).unwrap());
    }

    #[test]
    fn opening_twice_counts_once() {
        let mut grid = Percolation::new(4).unwrap();
        grid.open(1, 2).unwrap();
        grid.open(1, 2).unwrap();
        assert_eq!(grid.number_of_open_sites(), 1);
    }

    #[test]
    fn coordinates_are_checked() {
        let mut grid = Percolation::new(3).unwrap();
        assert_eq!(grid.open(3, 0), Err(UnionFindError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(grid.is_open(0, -1), Err(UnionFindError::IndexOutOfRange { index: -1, len: 3 }));
        assert!(grid.is_full(7, 7).is_err());
        assert_eq!(grid.number_of_open_sites(), 0);
    }

    #[test]
    fn empty_grid_is_invalid() {
        match Percolation::new(0) {
            Err(UnionFindError::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
