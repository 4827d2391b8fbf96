//! Whole-matrix utility kernels

#![allow(clippy::too_many_arguments)]

use crate::dtype::Element;

/// Sets `A` to the identity. Off-square matrices get ones on the main
/// diagonal only.
pub fn ident<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize) {
    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = if i == j { T::one() } else { T::zero() };
        }
    }
}

/// `B <- A^T`. `A` is `m x n`, `B` is `n x m`.
pub fn transpose<T: Element>(
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    for j in 0..n {
        for i in 0..m {
            b[j + i * ldb] = a[i + j * lda];
        }
    }
}

/// `B <- A`, column by column when either side is padded.
pub fn matrix_copy<T: Element>(m: usize, n: usize, a: &[T], lda: usize, b: &mut [T], ldb: usize) {
    if lda == m && ldb == m {
        b[..m * n].copy_from_slice(&a[..m * n]);
    } else {
        for j in 0..n {
            let src = &a[j * lda..j * lda + m];
            b[j * ldb..j * ldb + m].copy_from_slice(src);
        }
    }
}

/// `Y <- alpha * X + Y` elementwise, or `alpha * X` when `clear` is
/// set. Collapses to a single pass when both layouts are packed.
pub fn matrix_axpy<T: Element>(
    alpha: T,
    m: usize,
    n: usize,
    x: &[T],
    ldx: usize,
    y: &mut [T],
    ldy: usize,
    clear: bool,
) {
    if ldx == m && ldy == m {
        super::level1::axpy(m * n, alpha, x, 1, y, 1, clear);
    } else {
        for j in 0..n {
            super::level1::axpy(m, alpha, &x[j * ldx..], 1, &mut y[j * ldy..], 1, clear);
        }
    }
}

/// `A <- alpha * A` elementwise. Collapses to a single pass when the
/// layout is packed.
pub fn matrix_scal<T: Element>(alpha: T, m: usize, n: usize, a: &mut [T], lda: usize) {
    if lda == m {
        super::level1::scal(m * n, alpha, a, 1);
    } else {
        for j in 0..n {
            super::level1::scal(m, alpha, &mut a[j * lda..], 1);
        }
    }
}
