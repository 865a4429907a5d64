use log::trace;

/// Longest-common-subsequence table for two unit sequences.
///
/// Cell `(i, j)` holds the LCS length of the first `i` units of `a` and the
/// first `j` units of `b`. The table is dense, so building it costs
/// `O(len(a) * len(b))` in both time and memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    /// Number of rows (`len(a) + 1`)
    rows: usize,

    /// Number of columns (`len(b) + 1`)
    cols: usize,

    /// Row-major cell storage
    cells: Vec<usize>,
}

impl AlignmentTable {
    /// Build the table for `a` against `b`, comparing units by equality
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        trace!("building {}x{} alignment table", rows, cols);

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Get the LCS length for the prefixes `a[..i]` and `b[..j]`
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    /// Get the number of rows (`len(a) + 1`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns (`len(b) + 1`)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full sequences
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}
