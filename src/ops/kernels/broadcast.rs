//! Row and column broadcast kernels
//!
//! Row variants apply a length-`n` vector across every row, column
//! variants a length-`m` vector down every column. Results are
//! identical for packed and padded leading dimensions.

use crate::dtype::Element;

/// `A[i, j] <- x[j]` for every row `i`.
pub fn set_rows<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, x: &[T], incx: usize) {
    for j in 0..n {
        let v = x[j * incx];
        for i in 0..m {
            a[i + j * lda] = v;
        }
    }
}

/// `A[i, j] <- x[i]` for every column `j`.
pub fn set_columns<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, x: &[T], incx: usize) {
    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = x[i * incx];
        }
    }
}

/// `A[i, j] <- A[i, j] + x[j]` for every row `i`.
pub fn add_rows<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, x: &[T], incx: usize) {
    for j in 0..n {
        let v = x[j * incx];
        for i in 0..m {
            a[i + j * lda] = a[i + j * lda] + v;
        }
    }
}

/// `A[i, j] <- A[i, j] + x[i]` for every column `j`.
pub fn add_columns<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, x: &[T], incx: usize) {
    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = a[i + j * lda] + x[i * incx];
        }
    }
}

/// `A[i, j] <- A[i, j] - x[j]` for every row `i`.
pub fn sub_rows<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, x: &[T], incx: usize) {
    for j in 0..n {
        let v = x[j * incx];
        for i in 0..m {
            a[i + j * lda] = a[i + j * lda] - v;
        }
    }
}

/// `A[i, j] <- A[i, j] - x[i]` for every column `j`.
pub fn sub_columns<T: Element>(m: usize, n: usize, a: &mut [T], lda: usize, x: &[T], incx: usize) {
    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = a[i + j * lda] - x[i * incx];
        }
    }
}
