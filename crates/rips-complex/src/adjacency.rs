//! Symmetric adjacency relation over point ids.

use indexmap::IndexSet;
use rips_core::PointId;
use std::fmt;

/// A symmetric boolean relation over a fixed set of point ids.
///
/// Ids need not be contiguous: they are mapped to dense slots in the
/// order given at construction, and each slot owns one bit row.
///
/// Unknown ids are tolerated everywhere. Reads involving an unknown id
/// return `false` (or an empty list), and writes involving one are
/// no-ops, so `get(x, y) == get(y, x)` holds for every pair. The
/// diagonal is always `false`.
///
/// ```
/// use rips_complex::AdjacencyMatrix;
/// use rips_core::PointId;
///
/// let mut adj = AdjacencyMatrix::new([PointId(3), PointId(7), PointId(9)]);
/// adj.connect(PointId(3), PointId(9));
/// assert!(adj.get(PointId(9), PointId(3)));
/// assert!(!adj.get(PointId(3), PointId(42)));
/// assert_eq!(adj.count(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    ids: IndexSet<PointId>,
    /// Words per row.
    stride: usize,
    bits: Vec<u64>,
}

impl AdjacencyMatrix {
    /// An empty relation over `ids`. Duplicates are ignored.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = PointId>,
    {
        let ids: IndexSet<PointId> = ids.into_iter().collect();
        let stride = ids.len().div_ceil(64);
        Self {
            bits: vec![0; stride * ids.len()],
            stride,
            ids,
        }
    }

    /// Number of ids in the relation.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the relation has no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` belongs to the relation.
    pub fn contains(&self, id: PointId) -> bool {
        self.ids.contains(&id)
    }

    /// The configured ids, in construction order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = PointId> + '_ {
        self.ids.iter().copied()
    }

    fn slots(&self, x: PointId, y: PointId) -> Option<(usize, usize)> {
        let i = self.ids.get_index_of(&x)?;
        let j = self.ids.get_index_of(&y)?;
        (i != j).then_some((i, j))
    }

    fn bit(&self, i: usize, j: usize) -> bool {
        self.bits[i * self.stride + j / 64] & (1 << (j % 64)) != 0
    }

    fn write(&mut self, i: usize, j: usize, value: bool) {
        let word = &mut self.bits[i * self.stride + j / 64];
        if value {
            *word |= 1 << (j % 64);
        } else {
            *word &= !(1 << (j % 64));
        }
    }

    /// Set both `(x, y)` and `(y, x)` to `value`.
    ///
    /// A no-op if either id is unknown or `x == y`.
    pub fn set(&mut self, x: PointId, y: PointId, value: bool) {
        if let Some((i, j)) = self.slots(x, y) {
            self.write(i, j, value);
            self.write(j, i, value);
        }
    }

    /// Shorthand for `set(x, y, true)`.
    pub fn connect(&mut self, x: PointId, y: PointId) {
        self.set(x, y, true);
    }

    /// Shorthand for `set(x, y, false)`.
    pub fn disconnect(&mut self, x: PointId, y: PointId) {
        self.set(x, y, false);
    }

    /// Whether `x` and `y` are connected.
    pub fn get(&self, x: PointId, y: PointId) -> bool {
        self.slots(x, y).is_some_and(|(i, j)| self.bit(i, j))
    }

    /// Every id connected to `x`, in construction order. Empty for an
    /// unknown `x`.
    pub fn connections(&self, x: PointId) -> Vec<PointId> {
        let Some(i) = self.ids.get_index_of(&x) else {
            return Vec::new();
        };
        let row = &self.bits[i * self.stride..(i + 1) * self.stride];
        let mut out = Vec::new();
        for (w, &word) in row.iter().enumerate() {
            let mut word = word;
            while word != 0 {
                let j = w * 64 + word.trailing_zeros() as usize;
                if let Some(&id) = self.ids.get_index(j) {
                    out.push(id);
                }
                word &= word - 1;
            }
        }
        out
    }

    /// Whether `x` is connected to every id in `ys`.
    ///
    /// Vacuously `true` for an empty `ys`, and `false` as soon as any
    /// id is unknown.
    pub fn all(&self, x: PointId, ys: &[PointId]) -> bool {
        ys.iter().all(|&y| self.get(x, y))
    }

    /// Number of undirected edges, each counted once.
    pub fn count(&self) -> usize {
        let total: usize = self.bits.iter().map(|w| w.count_ones() as usize).sum();
        total / 2
    }

    /// Disconnect every pair.
    pub fn reset(&mut self) {
        self.bits.fill(0);
    }

    /// Every edge `(x, y)` with `x` before `y` in construction order.
    pub fn edges(&self) -> Vec<(PointId, PointId)> {
        self.ids
            .iter()
            .enumerate()
            .flat_map(|(i, &x)| {
                self.connections(x)
                    .into_iter()
                    .filter(move |y| self.ids.get_index_of(y).is_some_and(|j| j > i))
                    .map(move |y| (x, y))
            })
            .collect()
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("ids", &self.ids.len())
            .field("edges", &self.count())
            .finish()
    }
}
