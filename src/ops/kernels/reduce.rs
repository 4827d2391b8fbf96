//! Row and column reduction kernels
//!
//! Naming follows the historical convention of the consuming filters:
//! `dot_*` reduce along the named direction (one result per column for
//! `dot_columns`), while `sum_*` reduce across it (one result per row
//! for `sum_columns`). The pairs are not symmetric; see each kernel.

use crate::dtype::Element;

/// Sum of squares down each column: `y[j] <- sum_i A[i, j]^2`,
/// `|y| = n`.
pub fn dot_columns<T: Element>(m: usize, n: usize, a: &[T], lda: usize, y: &mut [T], incy: usize) {
    for j in 0..n {
        let mut acc = T::zero();
        for i in 0..m {
            let v = a[i + j * lda];
            acc = acc + v * v;
        }
        y[j * incy] = acc;
    }
}

/// Sum of squares along each row: `y[i] <- sum_j A[i, j]^2`, `|y| = m`.
pub fn dot_rows<T: Element>(m: usize, n: usize, a: &[T], lda: usize, y: &mut [T], incy: usize) {
    for i in 0..m {
        y[i * incy] = T::zero();
    }
    for j in 0..n {
        for i in 0..m {
            let v = a[i + j * lda];
            y[i * incy] = y[i * incy] + v * v;
        }
    }
}

/// Sum across columns, one result per row: `y[i] <- sum_j A[i, j]`,
/// `|y| = m`.
pub fn sum_columns<T: Element>(m: usize, n: usize, a: &[T], lda: usize, y: &mut [T], incy: usize) {
    for i in 0..m {
        y[i * incy] = T::zero();
    }
    for j in 0..n {
        for i in 0..m {
            y[i * incy] = y[i * incy] + a[i + j * lda];
        }
    }
}

/// Sum across rows, one result per column: `y[j] <- sum_i A[i, j]`,
/// `|y| = n`.
pub fn sum_rows<T: Element>(m: usize, n: usize, a: &[T], lda: usize, y: &mut [T], incy: usize) {
    for j in 0..n {
        let mut acc = T::zero();
        for i in 0..m {
            acc = acc + a[i + j * lda];
        }
        y[j * incy] = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [[1, 3, 5], [2, 4, 6]] column-major
    const A: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    #[test]
    fn test_dot_columns() {
        let mut y = [0.0f64; 3];
        dot_columns(2, 3, &A, 2, &mut y, 1);
        assert_eq!(y, [5.0, 25.0, 61.0]);
    }

    #[test]
    fn test_dot_rows() {
        let mut y = [0.0f64; 2];
        dot_rows(2, 3, &A, 2, &mut y, 1);
        assert_eq!(y, [35.0, 56.0]);
    }

    #[test]
    fn test_sum_columns_is_per_row() {
        let mut y = [0.0f64; 2];
        sum_columns(2, 3, &A, 2, &mut y, 1);
        assert_eq!(y, [9.0, 12.0]);
    }

    #[test]
    fn test_sum_rows_is_per_column() {
        let mut y = [0.0f64; 3];
        sum_rows(2, 3, &A, 2, &mut y, 1);
        assert_eq!(y, [3.0, 7.0, 11.0]);
    }
}
