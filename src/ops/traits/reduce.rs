//! Row/column reduction operations

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::runtime::Runtime;

/// Segmented reductions over rows or columns.
///
/// The `dot` pair reduces along the named direction and the `sum` pair
/// across it, matching the historical convention of the consuming
/// filters; see each method for the exact output length.
pub trait ReduceOps<R: Runtime> {
    /// `y[j] <- sum_i A[i, j]^2`, `|y| = cols`.
    fn dot_columns<T: Element>(&self, a: &Matrix<T, R>, y: &mut Vector<T, R>);

    /// `y[i] <- sum_j A[i, j]^2`, `|y| = rows`.
    fn dot_rows<T: Element>(&self, a: &Matrix<T, R>, y: &mut Vector<T, R>);

    /// `y[i] <- sum_j A[i, j]`, `|y| = rows`.
    fn sum_columns<T: Element>(&self, a: &Matrix<T, R>, y: &mut Vector<T, R>);

    /// `y[j] <- sum_i A[i, j]`, `|y| = cols`.
    fn sum_rows<T: Element>(&self, a: &Matrix<T, R>, y: &mut Vector<T, R>);
}
