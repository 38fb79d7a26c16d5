
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::data::{Compression, ElementId};
use crate::error::{UnionFindError, UnionFindRes};

/// Weighted quick-union with path compression over the elements `0..len()`.
///
/// `parent[i] == i` marks a root. `weight` is only kept up to date at roots,
/// where it holds the number of elements in that root's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
	parent: Vec<usize>,
	weight: Vec<usize>,
	count: usize,
	compression: Compression,
}

impl DisjointSet {
	pub fn new(size: usize) -> DisjointSet {
		DisjointSet::with_compression(size, Compression::default())
	}

	pub fn with_compression(size: usize, compression: Compression) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			weight: vec![1; size],
			count: size,
			compression,
		}
	}

	/// Like `new`, but takes the size as any integer and rejects negative values.
	pub fn create<S: ElementId>(size: S) -> UnionFindRes<DisjointSet> {
		match size.to_index() {
			Some(size) => Ok(DisjointSet::new(size)),
			None => Err(UnionFindError::InvalidArgument(format!(
				"cannot build a disjoint set of {} elements", size.widen()))),
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Number of distinct sets.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn compression(&self) -> Compression {
		self.compression
	}

	/// Representative of the set containing `a`.
	pub fn root<E: ElementId>(&mut self, a: E) -> UnionFindRes<usize> {
		let a = self.index(a)?;
		Ok(self.find(a))
	}

	/// Same answer as `root`, but never rewrites any pointer.
	pub fn find_readonly<E: ElementId>(&self, a: E) -> UnionFindRes<usize> {
		let a = self.index(a)?;
		Ok(self.walk(a))
	}

	pub fn connected<P: ElementId, Q: ElementId>(&mut self, p: P, q: Q) -> UnionFindRes<bool> {
		let p = self.index(p)?;
		let q = self.index(q)?;
		Ok(self.find(p) == self.find(q))
	}

	/// Number of elements in the set containing `a`.
	pub fn set_size<E: ElementId>(&mut self, a: E) -> UnionFindRes<usize> {
		let root = self.root(a)?;
		Ok(self.weight[root])
	}

	/// Merges the sets of `p` and `q`. Returns false if they already were one set.
	///
	/// The lighter tree goes under the heavier root; on a tie the root of `p`
	/// goes under the root of `q`.
	pub fn union<P: ElementId, Q: ElementId>(&mut self, p: P, q: Q) -> UnionFindRes<bool> {
		// both ids are checked before any compression happens
		let p = self.index(p)?;
		let q = self.index(q)?;

		let p_root = self.find(p);
		let q_root = self.find(q);
		if p_root == q_root {
			return Ok(false);
		}

		let (lighter, heavier) = if self.weight[p_root] <= self.weight[q_root] {
			(p_root, q_root)
		} else {
			(q_root, p_root)
		};
		self.parent[lighter] = heavier;
		self.weight[heavier] += self.weight[lighter];
		self.count -= 1;
		trace!("union({}, {}): root {} joins root {}, set size now {}",
			p, q, lighter, heavier, self.weight[heavier]);
		Ok(true)
	}

	/// Checks that the forest is acyclic, that every root's weight matches the
	/// number of elements under it, and that the set count is accurate.
	pub fn is_well_formed(&self) -> bool {
		let n = self.parent.len();
		if self.weight.len() != n || self.parent.iter().any(|&p| p >= n) {
			return false;
		}

		let mut members = vec![0; n];
		for i in 0..n {
			let mut x = i;
			let mut steps = 0;
			while self.parent[x] != x {
				x = self.parent[x];
				steps += 1;
				if steps > n {
					return false;
				}
			}
			members[x] += 1;
		}

		let mut roots = 0;
		for r in (0..n).filter(|&r| self.parent[r] == r) {
			if members[r] != self.weight[r] {
				return false;
			}
			roots += 1;
		}
		roots == self.count
	}

	/// Root comparison for ids the caller already knows are in range.
	pub(crate) fn same_set(&mut self, p: usize, q: usize) -> bool {
		self.find(p) == self.find(q)
	}

	fn index<E: ElementId>(&self, e: E) -> UnionFindRes<usize> {
		match e.to_index() {
			Some(i) if i < self.parent.len() => Ok(i),
			_ => Err(UnionFindError::IndexOutOfRange { index: e.widen(), len: self.parent.len() }),
		}
	}

	fn walk(&self, mut x: usize) -> usize {
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	fn find(&mut self, mut x: usize) -> usize {
		match self.compression {
			Compression::None => self.walk(x),
			Compression::Halving => {
				while self.parent[x] != x {
					let grandparent = self.parent[self.parent[x]];
					self.parent[x] = grandparent;
					x = grandparent;
				}
				x
			}
			Compression::Full => {
				let root = self.walk(x);
				while self.parent[x] != root {
					let next = self.parent[x];
					self.parent[x] = root;
					x = next;
				}
				root
			}
		}
	}
}
