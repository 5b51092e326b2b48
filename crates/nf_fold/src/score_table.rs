use std::fmt;
use ndarray::Array2;

use crate::FoldError;

/// Maximum pair counts for all intervals `[i, j]` of a sequence.
///
/// Each cell is either unresolved (`None`) or holds the optimum for its
/// interval. Empty intervals (`i > j`) score 0 and are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    cells: Array2<Option<usize>>,
}

impl ScoreTable {
    /// A table of size `n x n` with every cell unresolved.
    pub fn new(n: usize) -> Self {
        Self {
            cells: Array2::from_elem((n, n), None),
        }
    }

    /// Length of the sequence the table was built for.
    pub fn len(&self) -> usize {
        self.cells.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score of the interval `[i, j]`, or an error if it was never resolved.
    pub fn score(&self, i: usize, j: usize) -> Result<usize, FoldError> {
        if i > j {
            return Ok(0);
        }
        self.cells
            .get((i, j))
            .copied()
            .flatten()
            .ok_or(FoldError::Unresolved { i, j })
    }

    /// The optimum over the whole sequence, `score(0, n-1)`.
    pub fn max_pairs(&self) -> Result<usize, FoldError> {
        match self.len() {
            0 => Ok(0),
            n => self.score(0, n - 1),
        }
    }

    /// True if every interval `[i, j]` with `i <= j` holds a value.
    pub fn is_complete(&self) -> bool {
        self.cells
            .indexed_iter()
            .all(|((i, j), c)| i > j || c.is_some())
    }

    /// Stores the score of `[i, j]`. Each interval is resolved once.
    pub(crate) fn resolve(&mut self, i: usize, j: usize, value: usize) {
        let cell = &mut self.cells[(i, j)];
        debug_assert!(cell.is_none(), "interval ({i}, {j}) resolved twice");
        *cell = Some(value);
    }

    /// Reads a cell the fill order guarantees to be resolved.
    pub(crate) fn resolved(&self, i: usize, j: usize) -> usize {
        if i > j {
            return 0;
        }
        match self.cells[(i, j)] {
            Some(v) => v,
            None => unreachable!("interval ({i}, {j}) read before it was resolved"),
        }
    }
}

impl fmt::Display for ScoreTable {
    /// Upper triangle of the table, unresolved cells as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(j, c)| match c {
                    _ if j < i => " ".to_string(),
                    Some(v) => v.to_string(),
                    None => "-".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
