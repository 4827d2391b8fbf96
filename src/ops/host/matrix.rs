use super::{mat_mut, mat_ref};
use crate::dense::Matrix;
use crate::dtype::Element;
use crate::ops::traits::MatrixOps;
use crate::ops::{checks, kernels};
use crate::runtime::host::{HostClient, HostRuntime};

impl MatrixOps<HostRuntime> for HostClient {
    fn ident<T: Element>(&self, a: &mut Matrix<T, HostRuntime>) {
        let (m, n, lda) = (a.rows(), a.cols(), a.lead());
        kernels::matrix::ident(m, n, mat_mut(a), lda);
    }

    fn transpose<T: Element>(&self, a: &Matrix<T, HostRuntime>, b: &mut Matrix<T, HostRuntime>) {
        assert_eq!(b.rows(), a.cols(), "transpose: B rows must match A columns");
        assert_eq!(b.cols(), a.rows(), "transpose: B columns must match A rows");
        let (m, n, lda, ldb) = (a.rows(), a.cols(), a.lead(), b.lead());
        kernels::matrix::transpose(m, n, mat_ref(a), lda, mat_mut(b), ldb);
    }

    fn matrix_copy<T: Element>(&self, a: &Matrix<T, HostRuntime>, b: &mut Matrix<T, HostRuntime>) {
        checks::same_shape(a, b);
        let (m, n, lda, ldb) = (a.rows(), a.cols(), a.lead(), b.lead());
        kernels::matrix::matrix_copy(m, n, mat_ref(a), lda, mat_mut(b), ldb);
    }

    fn matrix_axpy<T: Element>(
        &self,
        alpha: T,
        x: &Matrix<T, HostRuntime>,
        y: &mut Matrix<T, HostRuntime>,
        clear: bool,
    ) {
        checks::same_shape(x, y);
        let (m, n, ldx, ldy) = (x.rows(), x.cols(), x.lead(), y.lead());
        kernels::matrix::matrix_axpy(alpha, m, n, mat_ref(x), ldx, mat_mut(y), ldy, clear);
    }

    fn matrix_scal<T: Element>(&self, alpha: T, a: &mut Matrix<T, HostRuntime>) {
        let (m, n, lda) = (a.rows(), a.cols(), a.lead());
        kernels::matrix::matrix_scal(alpha, m, n, mat_mut(a), lda);
    }
}
