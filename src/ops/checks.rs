//! Shape preconditions shared by the backend implementations
//!
//! Violations are caller defects and fatal; nothing here is ever
//! surfaced as a recoverable error.

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::{Side, Trans};
use crate::runtime::Runtime;

pub(crate) fn same_len<T: Element, R: Runtime>(x: &Vector<T, R>, y: &Vector<T, R>) {
    assert_eq!(x.len(), y.len(), "vector length mismatch");
}

pub(crate) fn square<T: Element, R: Runtime>(a: &Matrix<T, R>) {
    assert_eq!(a.rows(), a.cols(), "matrix must be square");
}

pub(crate) fn same_shape<T: Element, R: Runtime>(a: &Matrix<T, R>, b: &Matrix<T, R>) {
    assert_eq!(a.rows(), b.rows(), "row count mismatch");
    assert_eq!(a.cols(), b.cols(), "column count mismatch");
}

pub(crate) fn gemv<T: Element, R: Runtime>(
    trans: Trans,
    a: &Matrix<T, R>,
    x: &Vector<T, R>,
    y: &Vector<T, R>,
) {
    match trans {
        Trans::No => {
            assert_eq!(a.cols(), x.len(), "gemv: A columns must match x");
            assert_eq!(a.rows(), y.len(), "gemv: A rows must match y");
        }
        Trans::Trans => {
            assert_eq!(a.rows(), x.len(), "gemv: A^T columns must match x");
            assert_eq!(a.cols(), y.len(), "gemv: A^T rows must match y");
        }
    }
}

/// Dimensions `(m, n, k)` of `C <- op(A) * op(B)`, after validating all
/// four transpose combinations.
pub(crate) fn gemm<T: Element, R: Runtime>(
    transa: Trans,
    transb: Trans,
    a: &Matrix<T, R>,
    b: &Matrix<T, R>,
    c: &Matrix<T, R>,
) -> (usize, usize, usize) {
    let (am, ak) = match transa {
        Trans::No => (a.rows(), a.cols()),
        Trans::Trans => (a.cols(), a.rows()),
    };
    let (bk, bn) = match transb {
        Trans::No => (b.rows(), b.cols()),
        Trans::Trans => (b.cols(), b.rows()),
    };
    assert_eq!(ak, bk, "gemm: inner dimensions must match");
    assert_eq!(c.rows(), am, "gemm: C rows must match op(A)");
    assert_eq!(c.cols(), bn, "gemm: C columns must match op(B)");
    (am, bn, ak)
}

pub(crate) fn side_square<T: Element, R: Runtime>(side: Side, a: &Matrix<T, R>, b: &Matrix<T, R>) {
    square(a);
    match side {
        Side::Left => assert_eq!(a.rows(), b.rows(), "left operand must match B rows"),
        Side::Right => assert_eq!(a.rows(), b.cols(), "right operand must match B columns"),
    }
}

/// `|x|` must equal the column count (one entry per column).
pub(crate) fn row_vector<T: Element, R: Runtime>(a: &Matrix<T, R>, x: &Vector<T, R>) {
    assert_eq!(x.len(), a.cols(), "vector length must match matrix columns");
}

/// `|x|` must equal the row count (one entry per row).
pub(crate) fn column_vector<T: Element, R: Runtime>(a: &Matrix<T, R>, x: &Vector<T, R>) {
    assert_eq!(x.len(), a.rows(), "vector length must match matrix rows");
}

pub(crate) fn factor_pair<T: Element, R: Runtime>(a: &Matrix<T, R>, l: &Matrix<T, R>) {
    square(a);
    same_shape(a, l);
}

pub(crate) fn factor_update<T: Element, R: Runtime>(
    u: &Matrix<T, R>,
    a: &Vector<T, R>,
    b: &Vector<T, R>,
) {
    square(u);
    assert_eq!(u.rows(), a.len(), "update vector must match factor order");
    assert_eq!(u.rows(), b.len(), "workspace must match factor order");
}
