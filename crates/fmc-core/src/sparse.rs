//! Compressed sparse row (CSR) weight matrix
//!
//! Rows are data vectors, columns are features. Only non-zero weights need to
//! be stored; explicitly stored zeros are accepted and contribute nothing.
//!
//! Every constructor validates the weights: they must be finite and
//! non-negative.

use crate::error::{FmcError, FmcResult};
use ndarray::Array2;

/// Sparse feature-weight matrix in CSR layout
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    n_rows: usize,
    n_cols: usize,
    /// Row `r` owns entries `indptr[r]..indptr[r + 1]`
    indptr: Vec<usize>,
    /// Column of each stored entry
    indices: Vec<usize>,
    /// Weight of each stored entry
    data: Vec<f64>,
}

impl SparseMatrix {
    /// Create an all-zero matrix with the given shape
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            indptr: vec![0; n_rows + 1],
            indices: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Build from dense rows, keeping only non-zero weights
    ///
    /// All rows must have the same length. An empty slice gives a 0x0 matrix.
    pub fn from_dense<R: AsRef<[f64]>>(rows: &[R]) -> FmcResult<Self> {
        let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n_cols {
                return Err(FmcError::ShapeMismatch {
                    what: "dense row",
                    expected: n_cols,
                    actual: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                check_weight(row, column, value)?;
                if value != 0.0 {
                    indices.push(column);
                    data.push(value);
                }
            }
            indptr.push(indices.len());
        }

        Ok(Self {
            n_rows: rows.len(),
            n_cols,
            indptr,
            indices,
            data,
        })
    }

    /// Build from `(row, column, weight)` triplets
    ///
    /// Triplets may come in any order. Duplicated coordinates are summed.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> FmcResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut entries: Vec<(usize, usize, f64)> = Vec::new();
        for (row, column, value) in triplets {
            if row >= n_rows {
                return Err(FmcError::ShapeMismatch {
                    what: "triplet row index",
                    expected: n_rows,
                    actual: row + 1,
                });
            }
            if column >= n_cols {
                return Err(FmcError::ShapeMismatch {
                    what: "triplet column index",
                    expected: n_cols,
                    actual: column + 1,
                });
            }
            check_weight(row, column, value)?;
            entries.push((row, column, value));
        }

        // Stable sort keeps the summation order of duplicates deterministic
        entries.sort_by_key(|&(row, column, _)| (row, column));

        let mut matrix = Self::zeros(n_rows, n_cols);
        let mut row_counts = vec![0usize; n_rows];
        for (row, column, value) in entries {
            let merged = row_counts[row] > 0 && matrix.indices.last() == Some(&column);
            if merged {
                if let Some(last) = matrix.data.last_mut() {
                    *last += value;
                }
            } else {
                matrix.indices.push(column);
                matrix.data.push(value);
                row_counts[row] += 1;
            }
        }

        let mut offset = 0;
        for (row, count) in row_counts.iter().enumerate() {
            offset += count;
            matrix.indptr[row + 1] = offset;
        }

        Ok(matrix)
    }

    /// Build from raw CSR arrays
    pub fn from_csr_parts(
        n_rows: usize,
        n_cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> FmcResult<Self> {
        if indptr.len() != n_rows + 1 {
            return Err(FmcError::ShapeMismatch {
                what: "indptr",
                expected: n_rows + 1,
                actual: indptr.len(),
            });
        }
        if indices.len() != data.len() {
            return Err(FmcError::ShapeMismatch {
                what: "indices",
                expected: data.len(),
                actual: indices.len(),
            });
        }
        if indptr[0] != 0 || indptr[n_rows] != data.len() {
            return Err(FmcError::InvalidParameter {
                name: "indptr",
                value: format!(
                    "must start at 0 and end at {} (got {}..{})",
                    data.len(),
                    indptr[0],
                    indptr[n_rows]
                ),
            });
        }
        if indptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(FmcError::InvalidParameter {
                name: "indptr",
                value: "must be non-decreasing".to_string(),
            });
        }

        for row in 0..n_rows {
            for k in indptr[row]..indptr[row + 1] {
                if indices[k] >= n_cols {
                    return Err(FmcError::ShapeMismatch {
                        what: "column index",
                        expected: n_cols,
                        actual: indices[k] + 1,
                    });
                }
                check_weight(row, indices[k], data[k])?;
            }
        }

        Ok(Self {
            n_rows,
            n_cols,
            indptr,
            indices,
            data,
        })
    }

    /// Number of rows (data vectors)
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (features)
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Stored entries of one row as `(column, weight)` pairs
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = if row < self.n_rows {
            self.indptr[row]..self.indptr[row + 1]
        } else {
            0..0
        };
        range.map(move |k| (self.indices[k], self.data[k]))
    }

    /// All stored entries as `(row, column, weight)`, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n_rows).flat_map(move |row| self.row(row).map(move |(col, w)| (row, col, w)))
    }

    /// Weight at `(row, column)`, 0 when not stored
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.row(row)
            .filter(|&(col, _)| col == column)
            .map(|(_, w)| w)
            .sum()
    }

    /// Expand into a dense array
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::<f64>::zeros((self.n_rows, self.n_cols));
        for (row, column, weight) in self.iter() {
            dense[[row, column]] += weight;
        }
        dense
    }
}

fn check_weight(row: usize, column: usize, value: f64) -> FmcResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FmcError::InvalidWeight { row, column, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dense_skips_zeros() {
        let m = SparseMatrix::from_dense(&[[1.0, 0.0, 2.0], [0.0, 0.0, 0.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 2), 2.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.row(1).count(), 0);
    }

    #[test]
    fn test_from_dense_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = SparseMatrix::from_dense(&rows).unwrap_err();
        assert!(matches!(err, FmcError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_from_dense_rejects_negative_and_nan() {
        let err = SparseMatrix::from_dense(&[[1.0, -0.5]]).unwrap_err();
        assert_eq!(
            err,
            FmcError::InvalidWeight {
                row: 0,
                column: 1,
                value: -0.5
            }
        );
        assert!(SparseMatrix::from_dense(&[[f64::NAN]]).is_err());
        assert!(SparseMatrix::from_dense(&[[f64::INFINITY]]).is_err());
    }

    #[test]
    fn test_from_triplets_sums_duplicates() {
        let m = SparseMatrix::from_triplets(
            2,
            3,
            vec![(1, 2, 1.0), (0, 0, 4.0), (1, 2, 2.5), (1, 0, 1.0)],
        )
        .unwrap();
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get(1, 2), 3.5);
        assert_eq!(
            m.iter().collect::<Vec<_>>(),
            vec![(0, 0, 4.0), (1, 0, 1.0), (1, 2, 3.5)]
        );
    }

    #[test]
    fn test_from_triplets_duplicate_across_rows_not_merged() {
        // Same column on consecutive rows must stay separate entries
        let m = SparseMatrix::from_triplets(2, 1, vec![(0, 0, 1.0), (1, 0, 2.0)]).unwrap();
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 0), 2.0);
    }

    #[test]
    fn test_from_triplets_out_of_bounds() {
        assert!(SparseMatrix::from_triplets(1, 1, vec![(0, 1, 1.0)]).is_err());
        assert!(SparseMatrix::from_triplets(1, 1, vec![(3, 0, 1.0)]).is_err());
    }

    #[test]
    fn test_from_csr_parts_roundtrip_dense() {
        let m = SparseMatrix::from_csr_parts(2, 2, vec![0, 1, 2], vec![1, 0], vec![5.0, 7.0])
            .unwrap();
        let dense = m.to_dense();
        assert_eq!(dense[[0, 1]], 5.0);
        assert_eq!(dense[[1, 0]], 7.0);
        assert_eq!(dense[[0, 0]], 0.0);
    }

    #[test]
    fn test_from_csr_parts_validation() {
        assert!(SparseMatrix::from_csr_parts(2, 2, vec![0, 1], vec![0], vec![1.0]).is_err());
        assert!(SparseMatrix::from_csr_parts(1, 2, vec![0, 1], vec![2], vec![1.0]).is_err());
        assert!(SparseMatrix::from_csr_parts(2, 2, vec![0, 2, 1], vec![0], vec![1.0]).is_err());
    }

    #[test]
    fn test_zeros() {
        let m = SparseMatrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.iter().count(), 0);
    }

    #[test]
    fn test_from_csr_parts_rejects_unchecked_entries() {
        // Column 5 of a one-column matrix
        assert!(matches!(
            SparseMatrix::from_csr_parts(1, 1, vec![0, 1], vec![5], vec![3.0]),
            Err(FmcError::ShapeMismatch { what: "column index", .. })
        ));
        assert!(matches!(
            SparseMatrix::from_csr_parts(1, 1, vec![0, 1], vec![0], vec![-3.0]),
            Err(FmcError::InvalidWeight { row: 0, column: 0, .. })
        ));
        assert!(SparseMatrix::from_csr_parts(1, 1, vec![0, 2], vec![0], vec![1.0]).is_err());
    }
}
