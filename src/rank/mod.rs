use std::time::Duration;

use thiserror::Error;

pub mod evaluator;
pub mod strategies;

pub use evaluator::{DependencyEvaluator, SummaryReport};
#[cfg(feature = "rational")]
pub use strategies::RationalStrategy;
pub use strategies::{GaussJordanStrategy, SvdStrategy};

#[derive(Debug, Error)]
pub enum RankError {
    #[error("vector set is empty")]
    EmptySet,
    #[error("vectors must have at least one component")]
    ZeroDimension,
    #[error("vector {index} has length {found}, expected {expected}")]
    RaggedVector {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("vector {index} contains a non-finite entry")]
    NonFinite { index: usize },
    #[error("singular value decomposition failed: {0}")]
    Svd(#[from] ndarray_linalg::error::LinalgError),
}

/// An ordered set of N vectors sharing one dimension D, with N, D >= 1.
/// Validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet {
    vectors: Vec<Vec<f64>>,
}

impl VectorSet {
    pub fn new<T, R, U>(vectors: U) -> Result<VectorSet, RankError>
    where
        f64: From<T>,
        T: Copy,
        R: IntoIterator<Item = T>,
        U: IntoIterator<Item = R>,
    {
        let vectors: Vec<Vec<f64>> = vectors
            .into_iter()
            .map(|row| row.into_iter().map(f64::from).collect())
            .collect();

        if vectors.is_empty() {
            return Err(RankError::EmptySet);
        }

        let dim = vectors[0].len();
        if dim == 0 {
            return Err(RankError::ZeroDimension);
        }

        for (index, row) in vectors.iter().enumerate() {
            if row.len() != dim {
                return Err(RankError::RaggedVector {
                    index,
                    expected: dim,
                    found: row.len(),
                });
            }
            if !row.iter().all(|x| x.is_finite()) {
                return Err(RankError::NonFinite { index });
            }
        }

        Ok(VectorSet { vectors })
    }

    /// Number of vectors N.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Shared dimension D of every vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.vectors[0].len()
    }

    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }
}

/// Outcome of one strategy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankResult {
    pub name: &'static str,
    pub independent: bool,
    pub elapsed: Duration,
}

/// Computes the rank of the matrix formed by a vector set. The verdict
/// (rank == N and N <= D) is derived by the evaluator, not here.
pub trait RankStrategy {
    fn name(&self) -> &'static str;

    fn rank(&self, vectors: &VectorSet) -> Result<usize, RankError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_works() {
        let vs = VectorSet::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs.dim(), 2);
        assert_eq!(vs.vectors()[1], vec![0.0, 1.0]);
    }

    #[test]
    fn empty_set_rejected() {
        let empty: Vec<Vec<f64>> = vec![];
        assert!(matches!(VectorSet::new(empty), Err(RankError::EmptySet)));
    }

    #[test]
    fn zero_dimension_rejected() {
        let flat: Vec<Vec<f64>> = vec![vec![]];
        assert!(matches!(
            VectorSet::new(flat),
            Err(RankError::ZeroDimension)
        ));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = VectorSet::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        match err {
            RankError::RaggedVector {
                index,
                expected,
                found,
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_rejected() {
        let err = VectorSet::new(vec![vec![1.0, 2.0], vec![f64::NAN, 0.0]]).unwrap_err();
        assert!(matches!(err, RankError::NonFinite { index: 1 }));
    }
}
