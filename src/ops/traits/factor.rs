//! Cholesky factorization and incremental update operations

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::error::Result;
use crate::ops::{CholeskyStrategy, Uplo};
use crate::runtime::Runtime;

/// Cholesky decomposition and factor-backed solves.
pub trait FactorOps<R: Runtime> {
    /// Computes the Cholesky factor of symmetric positive-definite `a`
    /// into `l`, leaving `a` untouched.
    ///
    /// Only the `uplo` triangle of `l` is meaningful afterwards; the
    /// other triangle is unspecified. Under
    /// [`CholeskyStrategy::AdjustDiagonal`] a numerical failure is
    /// retried with growing diagonal loading, each attempt restarting
    /// from the original `a`; exhaustion of the loading range, or any
    /// failure under [`CholeskyStrategy::Fail`], surfaces
    /// [`Error::Cholesky`] with the failing minor order.
    ///
    /// [`Error::Cholesky`]: crate::error::Error::Cholesky
    fn chol<T: Element>(
        &self,
        a: &Matrix<T, R>,
        l: &mut Matrix<T, R>,
        uplo: Uplo,
        strategy: CholeskyStrategy,
    ) -> Result<()>;

    /// Solves `A * X = B` in place given the Cholesky factor `l` of
    /// `A`, overwriting `b` with the solution.
    ///
    /// # Panics
    ///
    /// Panics if the factor is malformed (zero diagonal); a factor
    /// produced by [`FactorOps::chol`] cannot trigger this.
    fn potrs<T: Element>(&self, uplo: Uplo, l: &Matrix<T, R>, b: &mut Matrix<T, R>);
}

/// Rank-1 update and downdate of an upper-triangular Cholesky factor.
///
/// Only implemented for the host backend; the factor must be resident
/// on the host, which the type system enforces.
pub trait FactorUpdateOps<R: Runtime> {
    /// Updates `u` in place so that `U^T U` gains `a * a^T`.
    ///
    /// `a` is consumed by the rotation sweep; `b` is workspace of the
    /// same length.
    fn ch1up<T: Element>(&self, u: &mut Matrix<T, R>, a: &mut Vector<T, R>, b: &mut Vector<T, R>);

    /// Downdates `u` in place so that `U^T U` loses `a * a^T`.
    ///
    /// Returns [`Error::Downdate`] when the result would not be
    /// positive definite; `u` is then undefined and must be
    /// re-decomposed before reuse.
    ///
    /// [`Error::Downdate`]: crate::error::Error::Downdate
    fn ch1dn<T: Element>(
        &self,
        u: &mut Matrix<T, R>,
        a: &mut Vector<T, R>,
        b: &mut Vector<T, R>,
    ) -> Result<()>;
}
