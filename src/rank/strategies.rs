use ndarray::Array2;
use ndarray_linalg::SVD;

use super::{RankError, RankStrategy, VectorSet};

/// Entries with absolute value at or below this are treated as zero
/// during elimination.
pub const PIVOT_TOL: f64 = 1e-10;

/// Gauss-Jordan elimination with partial pivoting over f64.
///
/// Approximate: near-degenerate inputs around the pivot tolerance can
/// flip the verdict either way.
pub struct GaussJordanStrategy;

impl RankStrategy for GaussJordanStrategy {
    fn name(&self) -> &'static str {
        "Gauss-Jordan"
    }

    fn rank(&self, vectors: &VectorSet) -> Result<usize, RankError> {
        let mut m = vectors.vectors().to_vec();
        let rows = m.len();
        let cols = m[0].len();

        let mut rank = 0;
        for col in 0..cols {
            let pivot_row = match (rank..rows).find(|&r| m[r][col].abs() > PIVOT_TOL) {
                Some(r) => r,
                None => continue,
            };
            m.swap(rank, pivot_row);

            let pivot = m[rank][col];
            for x in &mut m[rank] {
                *x /= pivot;
            }

            // Full reduction: clear the column above and below the pivot.
            for r in 0..rows {
                if r != rank && m[r][col].abs() > PIVOT_TOL {
                    let factor = m[r][col];
                    for i in 0..cols {
                        m[r][i] -= factor * m[rank][i];
                    }
                }
            }
            rank += 1;
        }
        Ok(rank)
    }
}

/// Rank from the singular values, with the tolerance scaled to the
/// largest singular value (numpy's default).
pub struct SvdStrategy;

impl RankStrategy for SvdStrategy {
    fn name(&self) -> &'static str {
        "SVD"
    }

    fn rank(&self, vectors: &VectorSet) -> Result<usize, RankError> {
        let (rows, cols) = (vectors.len(), vectors.dim());
        let a = Array2::from_shape_fn((rows, cols), |(i, j)| vectors.vectors()[i][j]);

        let (_, s, _) = a.svd(false, false)?;

        let s_max = s.iter().cloned().fold(0.0, f64::max);
        let tol = s_max * rows.max(cols) as f64 * f64::EPSILON;
        Ok(s.iter().filter(|&&v| v > tol).count())
    }
}

/// Exact elimination over arbitrary-precision rationals. Every finite
/// f64 converts to a rational exactly, so there is no tolerance and no
/// rounding; authoritative when the float strategies disagree.
#[cfg(feature = "rational")]
pub struct RationalStrategy;

#[cfg(feature = "rational")]
impl RankStrategy for RationalStrategy {
    fn name(&self) -> &'static str {
        "Rational"
    }

    fn rank(&self, vectors: &VectorSet) -> Result<usize, RankError> {
        use num_rational::BigRational;
        use num_traits::Zero;

        let mut m: Vec<Vec<BigRational>> = Vec::with_capacity(vectors.len());
        for (index, row) in vectors.vectors().iter().enumerate() {
            let row: Option<Vec<BigRational>> =
                row.iter().map(|&x| BigRational::from_float(x)).collect();
            m.push(row.ok_or(RankError::NonFinite { index })?);
        }

        let rows = m.len();
        let cols = m[0].len();

        let mut rank = 0;
        for col in 0..cols {
            let pivot_row = match (rank..rows).find(|&r| !m[r][col].is_zero()) {
                Some(r) => r,
                None => continue,
            };
            m.swap(rank, pivot_row);

            let pivot = m[rank][col].clone();
            for x in &mut m[rank] {
                *x /= &pivot;
            }

            for r in 0..rows {
                if r != rank && !m[r][col].is_zero() {
                    let factor = m[r][col].clone();
                    for i in 0..cols {
                        let delta = &factor * &m[rank][i];
                        m[r][i] -= delta;
                    }
                }
            }
            rank += 1;
        }
        Ok(rank)
    }
}
