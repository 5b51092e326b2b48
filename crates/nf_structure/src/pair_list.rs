use std::fmt;
use std::ops::Deref;

/// A base pair `(left, right)` with 0-based positions and `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasePair {
    pub left: usize,
    pub right: usize,
}

impl BasePair {
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left < right, "BasePair requires left < right ({left}, {right})");
        Self { left, right }
    }

    pub fn one_based(&self) -> (usize, usize) {
        (self.left + 1, self.right + 1)
    }

    /// True if the two pairs interleave as `i < k < j < l`.
    pub fn crosses(&self, other: &BasePair) -> bool {
        let (a, b) = if self.left < other.left { (self, other) } else { (other, self) };
        a.left < b.left && b.left < a.right && a.right < b.right
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// An ordered list of base pairs over a sequence of `sequence_len` positions.
///
/// The order of insertion is preserved, e.g. the discovery order of a
/// traceback. Use [`PairList::sorted`] for a canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<BasePair>,
}

impl PairList {
    pub fn new(length: usize) -> Self {
        Self { length, pairs: Vec::new() }
    }

    pub fn sequence_len(&self) -> usize {
        self.length
    }

    pub fn push(&mut self, pair: BasePair) {
        self.pairs.push(pair);
    }

    /// Pairs in ascending order of their left position.
    pub fn sorted(&self) -> Vec<BasePair> {
        let mut pairs = self.pairs.clone();
        pairs.sort_unstable();
        pairs
    }

    /// Pairs as 1-based `(left, right)` tuples, in list order.
    pub fn one_based(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().map(BasePair::one_based)
    }

    /// No position is used by more than one pair.
    pub fn is_index_disjoint(&self) -> bool {
        let mut seen = vec![false; self.length];
        for pair in &self.pairs {
            for pos in [pair.left, pair.right] {
                match seen.get_mut(pos) {
                    Some(s) if !*s => *s = true,
                    _ => return false,
                }
            }
        }
        true
    }

    /// Every two pairs are either disjoint or nested.
    pub fn is_non_crossing(&self) -> bool {
        self.pairs.iter().enumerate().all(|(x, p)| {
            self.pairs[x + 1..].iter().all(|q| !p.crosses(q))
        })
    }
}

impl Deref for PairList {
    type Target = [BasePair];

    fn deref(&self) -> &Self::Target {
        &self.pairs
    }
}
