//! Whole-matrix utility operations

use crate::dense::Matrix;
use crate::dtype::Element;
use crate::runtime::Runtime;

/// Elementwise and structural matrix operations.
pub trait MatrixOps<R: Runtime> {
    /// Sets `A` to the identity.
    fn ident<T: Element>(&self, a: &mut Matrix<T, R>);

    /// `B <- A^T`. `B` must be `cols x rows` of `A`.
    fn transpose<T: Element>(&self, a: &Matrix<T, R>, b: &mut Matrix<T, R>);

    /// `B <- A` for same-shape matrices, regardless of padding.
    fn matrix_copy<T: Element>(&self, a: &Matrix<T, R>, b: &mut Matrix<T, R>);

    /// `Y <- alpha * X + Y` elementwise, or `alpha * X` when `clear`
    /// is set.
    fn matrix_axpy<T: Element>(&self, alpha: T, x: &Matrix<T, R>, y: &mut Matrix<T, R>, clear: bool);

    /// `A <- alpha * A` elementwise.
    fn matrix_scal<T: Element>(&self, alpha: T, a: &mut Matrix<T, R>);
}
