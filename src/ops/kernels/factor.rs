//! Cholesky factorization, rank-1 update/downdate, and factor solves

#![allow(clippy::too_many_arguments)]

use crate::dtype::Element;
use crate::ops::{CholeskyStrategy, Diag, Side, Trans, Uplo};

/// Unblocked in-place Cholesky decomposition of the `uplo` triangle.
///
/// Returns 0 on success or `j + 1` when the leading minor of order
/// `j + 1` is not positive definite; the factor is then left partially
/// written. The opposite triangle is never referenced or touched. A
/// NaN pivot is treated as failure.
pub fn potrf<T: Element>(uplo: Uplo, n: usize, a: &mut [T], lda: usize) -> i32 {
    match uplo {
        Uplo::Lower => {
            for j in 0..n {
                let mut d = a[j + j * lda];
                for p in 0..j {
                    let v = a[j + p * lda];
                    d = d - v * v;
                }
                if !(d > T::zero()) {
                    return (j + 1) as i32;
                }
                let d = d.sqrt();
                a[j + j * lda] = d;
                for i in j + 1..n {
                    let mut v = a[i + j * lda];
                    for p in 0..j {
                        v = v - a[i + p * lda] * a[j + p * lda];
                    }
                    a[i + j * lda] = v / d;
                }
            }
        }
        Uplo::Upper => {
            for j in 0..n {
                let mut d = a[j + j * lda];
                for p in 0..j {
                    let v = a[p + j * lda];
                    d = d - v * v;
                }
                if !(d > T::zero()) {
                    return (j + 1) as i32;
                }
                let d = d.sqrt();
                a[j + j * lda] = d;
                for k in j + 1..n {
                    let mut v = a[j + k * lda];
                    for p in 0..j {
                        v = v - a[p + j * lda] * a[p + k * lda];
                    }
                    a[j + k * lda] = v / d;
                }
            }
        }
    }
    0
}

/// Cholesky decomposition of `src` into `dst` with the diagonal-loading
/// retry policy.
///
/// Returns the status of the last attempt: 0 on success, the failing
/// minor order otherwise.
///
/// Under `AdjustDiagonal`, the loading seed is scaled by the smallest
/// diagonal value of the *failed* factor (found by magnitude, as the
/// historical amin scan did), even though that factor is only partially
/// written. The seed doubles each retry and the loop gives up once it
/// exceeds the largest diagonal value of the failed factor. Every
/// retry restarts from the untouched `src`.
pub fn chol_inplace<T: Element>(
    uplo: Uplo,
    n: usize,
    src: &[T],
    lds: usize,
    dst: &mut [T],
    ldd: usize,
    strategy: CholeskyStrategy,
) -> i32 {
    super::matrix::matrix_copy(n, n, src, lds, dst, ldd);
    let mut info = potrf(uplo, n, dst, ldd);
    if info == 0 || strategy == CholeskyStrategy::Fail || n == 0 {
        return info;
    }

    let mut smallest = dst[0];
    let mut largest = dst[0];
    for j in 1..n {
        let v = dst[j + j * ldd];
        if v.abs() < smallest.abs() {
            smallest = v;
        }
        if v.abs() > largest.abs() {
            largest = v;
        }
    }

    let mut factor = T::from_f64(2.0f64.powi(-(T::MANT_DIGITS as i32)));
    if smallest > T::zero() {
        factor = factor * smallest;
    }
    while info != 0 && factor < largest {
        super::matrix::matrix_copy(n, n, src, lds, dst, ldd);
        for j in 0..n {
            dst[j + j * ldd] = dst[j + j * ldd] + factor;
        }
        info = potrf(uplo, n, dst, ldd);
        factor = factor + factor;
    }
    info
}

/// Rank-1 update of an upper-triangular factor:
/// `U <- chol(U^T U + a a^T)` in place via Givens rotations.
///
/// `a` is consumed by the rotation sweep; `b` is workspace of the same
/// length and receives the rotation cosines.
pub fn ch1up<T: Element>(
    n: usize,
    r: &mut [T],
    ldr: usize,
    a: &mut [T],
    inca: usize,
    b: &mut [T],
    incb: usize,
) {
    for i in 0..n {
        let rii = r[i + i * ldr];
        let ai = a[i * inca];
        let rho = rii.hypot(ai);
        let c = rii / rho;
        let s = ai / rho;
        r[i + i * ldr] = rho;
        b[i * incb] = c;
        for j in i + 1..n {
            let t = c * r[i + j * ldr] + s * a[j * inca];
            a[j * inca] = c * a[j * inca] - s * r[i + j * ldr];
            r[i + j * ldr] = t;
        }
    }
}

/// Rank-1 downdate of an upper-triangular factor:
/// `U <- chol(U^T U - a a^T)` in place.
///
/// `b` is workspace of the same length. Returns 0 on success, nonzero
/// when the downdated matrix is not positive definite; the factor is
/// then left in an undefined state and must be re-decomposed before
/// reuse.
pub fn ch1dn<T: Element>(
    n: usize,
    r: &mut [T],
    ldr: usize,
    a: &mut [T],
    inca: usize,
    b: &mut [T],
    incb: usize,
) -> i32 {
    // Solve U^T p = a into b by forward substitution.
    let mut nrm_sq = T::zero();
    for i in 0..n {
        let mut acc = a[i * inca];
        for p in 0..i {
            acc = acc - r[p + i * ldr] * b[p * incb];
        }
        let d = r[i + i * ldr];
        if d == T::zero() {
            return 2;
        }
        let pi = acc / d;
        b[i * incb] = pi;
        nrm_sq = nrm_sq + pi * pi;
    }
    if !(nrm_sq < T::one()) {
        return 1;
    }

    // Generate the rotations that zero p against sqrt(1 - |p|^2).
    let mut alpha = (T::one() - nrm_sq).sqrt();
    let mut cos = vec![T::zero(); n];
    for i in (0..n).rev() {
        let scale = alpha + b[i * incb].abs();
        let aa = alpha / scale;
        let bb = b[i * incb] / scale;
        let norm = aa.hypot(bb);
        cos[i] = aa / norm;
        b[i * incb] = bb / norm;
        alpha = scale * norm;
    }

    // Apply the rotations to R; b now holds the sines.
    for j in 0..n {
        let mut xx = T::zero();
        for i in (0..=j).rev() {
            let t = cos[i] * xx + b[i * incb] * r[i + j * ldr];
            r[i + j * ldr] = cos[i] * r[i + j * ldr] - b[i * incb] * xx;
            xx = t;
        }
    }
    0
}

/// Solve `A * X = B` in place given the Cholesky factor of `A`.
///
/// `a` holds the factor in its `uplo` triangle; `b` is `n x nrhs` and
/// is overwritten with the solution.
///
/// # Panics
///
/// Panics on a zero factor diagonal. A well-formed factor cannot
/// trigger this; it indicates upstream corruption.
pub fn potrs<T: Element>(
    uplo: Uplo,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    let one = T::one();
    match uplo {
        Uplo::Lower => {
            // L L^T X = B
            super::level3::trsm(Side::Left, Uplo::Lower, Trans::No, Diag::NonUnit, n, nrhs, one, a, lda, b, ldb);
            super::level3::trsm(Side::Left, Uplo::Lower, Trans::Trans, Diag::NonUnit, n, nrhs, one, a, lda, b, ldb);
        }
        Uplo::Upper => {
            // U^T U X = B
            super::level3::trsm(Side::Left, Uplo::Upper, Trans::Trans, Diag::NonUnit, n, nrhs, one, a, lda, b, ldb);
            super::level3::trsm(Side::Left, Uplo::Upper, Trans::No, Diag::NonUnit, n, nrhs, one, a, lda, b, ldb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potrf_lower_2x2() {
        // A = [[4, 2], [2, 3]] -> L = [[2, 0], [1, sqrt(2)]]
        let mut a = [4.0f64, 2.0, 2.0, 3.0];
        assert_eq!(potrf(Uplo::Lower, 2, &mut a, 2), 0);
        assert_eq!(a[0], 2.0);
        assert_eq!(a[1], 1.0);
        assert!((a[3] - 2.0f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_potrf_upper_matches_lower_transposed() {
        let mut lo = [4.0f64, 2.0, 2.0, 3.0];
        let mut up = [4.0f64, 2.0, 2.0, 3.0];
        assert_eq!(potrf(Uplo::Lower, 2, &mut lo, 2), 0);
        assert_eq!(potrf(Uplo::Upper, 2, &mut up, 2), 0);
        assert_eq!(up[0], lo[0]);
        assert_eq!(up[2], lo[1]);
        assert_eq!(up[3], lo[3]);
    }

    #[test]
    fn test_potrf_reports_failing_minor() {
        // Second leading minor is singular.
        let mut a = [1.0f64, 1.0, 1.0, 1.0];
        assert_eq!(potrf(Uplo::Lower, 2, &mut a, 2), 2);
    }

    #[test]
    fn test_chol_adjusts_near_singular() {
        // Slightly indefinite: eigenvalues 2.0001 and -0.0001.
        let eps = 1e-4;
        let a = [1.0f64, 1.0, 1.0, 1.0 - eps];
        let mut l = [0.0f64; 4];
        let info = chol_inplace(Uplo::Lower, 2, &a, 2, &mut l, 2, CholeskyStrategy::AdjustDiagonal);
        assert_eq!(info, 0);
        // L L^T stays within the injected loading of A.
        let a00 = l[0] * l[0];
        let a10 = l[1] * l[0];
        let a11 = l[1] * l[1] + l[3] * l[3];
        assert!((a00 - 1.0).abs() < 1e-3);
        assert!((a10 - 1.0).abs() < 1e-3);
        assert!((a11 - (1.0 - eps)).abs() < 1e-3);
    }

    #[test]
    fn test_chol_fail_strategy_surfaces_failure() {
        let a = [1.0f64, 1.0, 1.0, 1.0 - 1e-4];
        let mut l = [0.0f64; 4];
        let info = chol_inplace(Uplo::Lower, 2, &a, 2, &mut l, 2, CholeskyStrategy::Fail);
        assert_ne!(info, 0);
    }

    #[test]
    fn test_ch1up_matches_refactorization() {
        // A = [[4, 2], [2, 3]], v = [0.5, 0.5]
        let a = [4.0f64, 2.0, 2.0, 3.0];
        let mut u = [0.0f64; 4];
        assert_eq!(
            chol_inplace(Uplo::Upper, 2, &a, 2, &mut u, 2, CholeskyStrategy::Fail),
            0
        );
        let mut v = [0.5f64, 0.5];
        let mut w = [0.0f64; 2];
        ch1up(2, &mut u, 2, &mut v, 1, &mut w, 1);

        // Reference: factor A + v v^T directly.
        let mut expect = [4.25f64, 2.25, 2.25, 3.25];
        assert_eq!(potrf(Uplo::Upper, 2, &mut expect, 2), 0);
        assert!((u[0] - expect[0]).abs() < 1e-14);
        assert!((u[2] - expect[2]).abs() < 1e-14);
        assert!((u[3] - expect[3]).abs() < 1e-14);
    }

    #[test]
    fn test_ch1up_then_ch1dn_round_trip() {
        let a = [4.0f64, 2.0, 2.0, 3.0];
        let mut u = [0.0f64; 4];
        chol_inplace(Uplo::Upper, 2, &a, 2, &mut u, 2, CholeskyStrategy::Fail);
        let orig = u;

        let mut v = [0.5f64, 0.25];
        let mut w = [0.0f64; 2];
        ch1up(2, &mut u, 2, &mut v, 1, &mut w, 1);
        let mut v = [0.5f64, 0.25];
        assert_eq!(ch1dn(2, &mut u, 2, &mut v, 1, &mut w, 1), 0);

        for (got, want) in u.iter().zip(&orig) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ch1dn_rejects_indefinite_result() {
        // Downdating I by [2, 0] leaves a negative definite matrix.
        let mut u = [1.0f64, 0.0, 0.0, 1.0];
        let mut v = [2.0f64, 0.0];
        let mut w = [0.0f64; 2];
        assert_ne!(ch1dn(2, &mut u, 2, &mut v, 1, &mut w, 1), 0);
    }

    #[test]
    fn test_potrs_solves_spd_system() {
        // A = [[4, 2], [2, 3]], b = [6, 5] -> x = [1, 1]
        let a = [4.0f64, 2.0, 2.0, 3.0];
        let mut l = [0.0f64; 4];
        chol_inplace(Uplo::Lower, 2, &a, 2, &mut l, 2, CholeskyStrategy::Fail);
        let mut b = [6.0f64, 5.0];
        potrs(Uplo::Lower, 2, 1, &l, 2, &mut b, 2);
        assert!((b[0] - 1.0).abs() < 1e-14);
        assert!((b[1] - 1.0).abs() < 1e-14);
    }
}
