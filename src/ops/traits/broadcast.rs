//! Row/column broadcast operations

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::runtime::Runtime;

/// Apply a vector to every row or column of a matrix.
///
/// Row variants take `|x| = cols` and combine `x[j]` into every element
/// of column `j`; column variants take `|x| = rows` and combine `x[i]`
/// into every element of row `i`. Results are identical for packed and
/// padded storage.
pub trait BroadcastOps<R: Runtime> {
    /// `A[i, j] <- x[j]`.
    fn set_rows<T: Element>(&self, a: &mut Matrix<T, R>, x: &Vector<T, R>);

    /// `A[i, j] <- x[i]`.
    fn set_columns<T: Element>(&self, a: &mut Matrix<T, R>, x: &Vector<T, R>);

    /// `A[i, j] <- A[i, j] + x[j]`.
    fn add_rows<T: Element>(&self, a: &mut Matrix<T, R>, x: &Vector<T, R>);

    /// `A[i, j] <- A[i, j] + x[i]`.
    fn add_columns<T: Element>(&self, a: &mut Matrix<T, R>, x: &Vector<T, R>);

    /// `A[i, j] <- A[i, j] - x[j]`.
    fn sub_rows<T: Element>(&self, a: &mut Matrix<T, R>, x: &Vector<T, R>);

    /// `A[i, j] <- A[i, j] - x[i]`.
    fn sub_columns<T: Element>(&self, a: &mut Matrix<T, R>, x: &Vector<T, R>);
}
