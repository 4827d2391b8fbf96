//! Level-2 operations

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::{Diag, Trans, Uplo};
use crate::runtime::Runtime;

/// Matrix-vector operations.
pub trait Level2Ops<R: Runtime> {
    /// `y <- alpha * op(A) * x + beta * y`.
    fn gemv<T: Element>(
        &self,
        trans: Trans,
        alpha: T,
        a: &Matrix<T, R>,
        x: &Vector<T, R>,
        beta: T,
        y: &mut Vector<T, R>,
    );

    /// `y <- alpha * A * x + beta * y` for symmetric `A` stored in its
    /// `uplo` triangle.
    fn symv<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        a: &Matrix<T, R>,
        x: &Vector<T, R>,
        beta: T,
        y: &mut Vector<T, R>,
    );

    /// `x <- op(A) * x` for triangular `A`.
    fn trmv<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        a: &Matrix<T, R>,
        x: &mut Vector<T, R>,
    );

    /// `y <- alpha * diag(d) * x + beta * y` for a diagonal matrix held
    /// as the vector `d`.
    fn gdmv<T: Element>(
        &self,
        alpha: T,
        d: &Vector<T, R>,
        x: &Vector<T, R>,
        beta: T,
        y: &mut Vector<T, R>,
    );

    /// Solve `op(A) * x = x` in place for triangular `A`.
    fn trsv<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        a: &Matrix<T, R>,
        x: &mut Vector<T, R>,
    );

    /// `A <- alpha * x * y^T + A`, or without `+ A` when `clear` is
    /// set.
    fn ger<T: Element>(
        &self,
        alpha: T,
        x: &Vector<T, R>,
        y: &Vector<T, R>,
        a: &mut Matrix<T, R>,
        clear: bool,
    );

    /// Symmetric rank-1 update of the `uplo` triangle.
    fn syr<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        x: &Vector<T, R>,
        a: &mut Matrix<T, R>,
        clear: bool,
    );

    /// Symmetric rank-2 update of the `uplo` triangle.
    fn syr2<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        x: &Vector<T, R>,
        y: &Vector<T, R>,
        a: &mut Matrix<T, R>,
        clear: bool,
    );
}
