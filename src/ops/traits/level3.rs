//! Level-3 operations

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::{Diag, Side, Trans, Uplo};
use crate::runtime::Runtime;

/// Matrix-matrix operations.
pub trait Level3Ops<R: Runtime> {
    /// `C <- alpha * op(A) * op(B) + beta * C`, with independent
    /// transpose flags on both operands.
    fn gemm<T: Element>(
        &self,
        transa: Trans,
        transb: Trans,
        alpha: T,
        a: &Matrix<T, R>,
        b: &Matrix<T, R>,
        beta: T,
        c: &mut Matrix<T, R>,
    );

    /// `C <- alpha * A * B + beta * C` (Left) or
    /// `alpha * B * A + beta * C` (Right) for symmetric `A`.
    fn symm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        alpha: T,
        a: &Matrix<T, R>,
        b: &Matrix<T, R>,
        beta: T,
        c: &mut Matrix<T, R>,
    );

    /// `B <- alpha * op(A) * B` (Left) or `alpha * B * op(A)` (Right)
    /// for triangular `A`.
    fn trmm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        alpha: T,
        a: &Matrix<T, R>,
        b: &mut Matrix<T, R>,
    );

    /// Solve `op(A) * X = alpha * B` (Left) or `X * op(A) = alpha * B`
    /// (Right) for triangular `A`, overwriting `B`.
    fn trsm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        alpha: T,
        a: &Matrix<T, R>,
        b: &mut Matrix<T, R>,
    );

    /// Symmetric rank-k update of the `uplo` triangle of `C`.
    fn syrk<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        alpha: T,
        a: &Matrix<T, R>,
        beta: T,
        c: &mut Matrix<T, R>,
    );

    /// Product with a diagonal matrix held as a vector:
    /// `Y <- alpha * diag(d) * X + beta * Y` (Left) or
    /// `Y <- alpha * X * diag(d) + beta * Y` (Right).
    fn gdmm<T: Element>(
        &self,
        side: Side,
        alpha: T,
        d: &Vector<T, R>,
        x: &Matrix<T, R>,
        beta: T,
        y: &mut Matrix<T, R>,
    );
}
