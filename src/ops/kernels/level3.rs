//! Level-3 matrix-matrix kernels

use crate::dtype::Element;
use crate::ops::{Diag, Side, Trans, Uplo};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[inline]
fn op_at<T: Element>(trans: Trans, a: &[T], lda: usize, i: usize, j: usize) -> T {
    match trans {
        Trans::No => a[i + j * lda],
        Trans::Trans => a[j + i * lda],
    }
}

/// `C <- alpha * op(A) * op(B) + beta * C`.
///
/// `C` is `m x n`, the inner dimension is `k`. `beta == 0` skips
/// reading `C`. Columns of `C` are independent, so the loop
/// parallelizes across them.
#[allow(clippy::too_many_arguments)]
pub fn gemm<T: Element>(
    transa: Trans,
    transb: Trans,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    if m == 0 || n == 0 {
        return;
    }
    let col = |cj: &mut [T], j: usize| {
        for (i, e) in cj.iter_mut().enumerate().take(m) {
            let mut acc = T::zero();
            for p in 0..k {
                acc = acc + op_at(transa, a, lda, i, p) * op_at(transb, b, ldb, p, j);
            }
            *e = if beta == T::zero() {
                alpha * acc
            } else {
                alpha * acc + beta * *e
            };
        }
    };

    #[cfg(feature = "rayon")]
    {
        c.par_chunks_mut(ldc)
            .take(n)
            .enumerate()
            .for_each(|(j, cj)| col(cj, j));
    }
    #[cfg(not(feature = "rayon"))]
    {
        for (j, cj) in c.chunks_mut(ldc).take(n).enumerate() {
            col(cj, j);
        }
    }
}

/// `C <- alpha * A * B + beta * C` (Left) or `alpha * B * A + beta * C`
/// (Right) for symmetric `A`, referencing only its `uplo` triangle.
#[allow(clippy::too_many_arguments)]
pub fn symm<T: Element>(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    let sym = |i: usize, j: usize| -> T {
        let (r, c_) = match uplo {
            Uplo::Upper => {
                if i <= j {
                    (i, j)
                } else {
                    (j, i)
                }
            }
            Uplo::Lower => {
                if i >= j {
                    (i, j)
                } else {
                    (j, i)
                }
            }
        };
        a[r + c_ * lda]
    };
    for j in 0..n {
        for i in 0..m {
            let mut acc = T::zero();
            match side {
                Side::Left => {
                    for p in 0..m {
                        acc = acc + sym(i, p) * b[p + j * ldb];
                    }
                }
                Side::Right => {
                    for p in 0..n {
                        acc = acc + b[i + p * ldb] * sym(p, j);
                    }
                }
            }
            let e = &mut c[i + j * ldc];
            *e = if beta == T::zero() {
                alpha * acc
            } else {
                alpha * acc + beta * *e
            };
        }
    }
}

#[inline]
fn tri_op_at<T: Element>(
    uplo: Uplo,
    trans: Trans,
    diag: Diag,
    a: &[T],
    lda: usize,
    i: usize,
    j: usize,
) -> T {
    let (r, c) = match trans {
        Trans::No => (i, j),
        Trans::Trans => (j, i),
    };
    if r == c {
        return match diag {
            Diag::NonUnit => a[r + c * lda],
            Diag::Unit => T::one(),
        };
    }
    let stored = match uplo {
        Uplo::Upper => r < c,
        Uplo::Lower => r > c,
    };
    if stored {
        a[r + c * lda]
    } else {
        T::zero()
    }
}

/// `B <- alpha * op(A) * B` (Left) or `alpha * B * op(A)` (Right) for
/// triangular `A`.
#[allow(clippy::too_many_arguments)]
pub fn trmm<T: Element>(
    side: Side,
    uplo: Uplo,
    trans: Trans,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    match side {
        Side::Left => {
            // op(A) is m x m; one temporary column keeps it in place.
            let mut tmp = vec![T::zero(); m];
            for j in 0..n {
                for (i, t) in tmp.iter_mut().enumerate() {
                    let mut acc = T::zero();
                    for p in 0..m {
                        acc = acc + tri_op_at(uplo, trans, diag, a, lda, i, p) * b[p + j * ldb];
                    }
                    *t = alpha * acc;
                }
                for i in 0..m {
                    b[i + j * ldb] = tmp[i];
                }
            }
        }
        Side::Right => {
            // op(A) is n x n; one temporary row keeps it in place.
            let mut tmp = vec![T::zero(); n];
            for i in 0..m {
                for (j, t) in tmp.iter_mut().enumerate() {
                    let mut acc = T::zero();
                    for p in 0..n {
                        acc = acc + b[i + p * ldb] * tri_op_at(uplo, trans, diag, a, lda, p, j);
                    }
                    *t = alpha * acc;
                }
                for j in 0..n {
                    b[i + j * ldb] = tmp[j];
                }
            }
        }
    }
}

/// Symmetric rank-k update on the `uplo` triangle of `C`:
/// `C <- alpha * A * A^T + beta * C` (`trans == No`, `A` is `n x k`) or
/// `C <- alpha * A^T * A + beta * C` (`trans == Trans`, `A` is `k x n`).
#[allow(clippy::too_many_arguments)]
pub fn syrk<T: Element>(
    uplo: Uplo,
    trans: Trans,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    for j in 0..n {
        let (lo, hi) = match uplo {
            Uplo::Upper => (0, j + 1),
            Uplo::Lower => (j, n),
        };
        for i in lo..hi {
            let mut acc = T::zero();
            for p in 0..k {
                let (x, y) = match trans {
                    Trans::No => (a[i + p * lda], a[j + p * lda]),
                    Trans::Trans => (a[p + i * lda], a[p + j * lda]),
                };
                acc = acc + x * y;
            }
            let e = &mut c[i + j * ldc];
            *e = if beta == T::zero() {
                alpha * acc
            } else {
                alpha * acc + beta * *e
            };
        }
    }
}

/// Solve `op(A) * X = alpha * B` (Left) or `X * op(A) = alpha * B`
/// (Right) for triangular `A`, overwriting `B` with `X`.
///
/// # Panics
///
/// Panics on a zero diagonal element when `diag` is `NonUnit`.
#[allow(clippy::too_many_arguments)]
pub fn trsm<T: Element>(
    side: Side,
    uplo: Uplo,
    trans: Trans,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    match side {
        Side::Left => {
            let forward = matches!(
                (uplo, trans),
                (Uplo::Lower, Trans::No) | (Uplo::Upper, Trans::Trans)
            );
            for j in 0..n {
                for step in 0..m {
                    let i = if forward { step } else { m - 1 - step };
                    let mut acc = alpha * b[i + j * ldb];
                    let (lo, hi) = if forward { (0, i) } else { (i + 1, m) };
                    for p in lo..hi {
                        acc = acc - tri_op_at(uplo, trans, diag, a, lda, i, p) * b[p + j * ldb];
                    }
                    b[i + j * ldb] = match diag {
                        Diag::NonUnit => {
                            let d = tri_op_at(uplo, trans, diag, a, lda, i, i);
                            assert!(d != T::zero(), "singular triangular system");
                            acc / d
                        }
                        Diag::Unit => acc,
                    };
                }
            }
        }
        Side::Right => {
            // X * op(A) = alpha * B, solved column by column of X.
            let forward = matches!(
                (uplo, trans),
                (Uplo::Upper, Trans::No) | (Uplo::Lower, Trans::Trans)
            );
            for step in 0..n {
                let j = if forward { step } else { n - 1 - step };
                for i in 0..m {
                    let mut acc = alpha * b[i + j * ldb];
                    let (lo, hi) = if forward { (0, j) } else { (j + 1, n) };
                    for p in lo..hi {
                        acc = acc - b[i + p * ldb] * tri_op_at(uplo, trans, diag, a, lda, p, j);
                    }
                    b[i + j * ldb] = match diag {
                        Diag::NonUnit => {
                            let d = tri_op_at(uplo, trans, diag, a, lda, j, j);
                            assert!(d != T::zero(), "singular triangular system");
                            acc / d
                        }
                        Diag::Unit => acc,
                    };
                }
            }
        }
    }
}

/// Product with a diagonal matrix held as a vector:
/// `Y <- alpha * diag(d) * X + beta * Y` (Left) or
/// `Y <- alpha * X * diag(d) + beta * Y` (Right).
///
/// `beta == 0` skips reading `Y` so stale NaN does not propagate.
#[allow(clippy::too_many_arguments)]
pub fn gdmm<T: Element>(
    side: Side,
    m: usize,
    n: usize,
    alpha: T,
    d: &[T],
    incd: usize,
    x: &[T],
    ldx: usize,
    beta: T,
    y: &mut [T],
    ldy: usize,
) {
    for j in 0..n {
        for i in 0..m {
            let scale = match side {
                Side::Left => d[i * incd],
                Side::Right => d[j * incd],
            };
            let v = alpha * scale * x[i + j * ldx];
            let e = &mut y[i + j * ldy];
            *e = if beta == T::zero() { v } else { v + beta * *e };
        }
    }
}
