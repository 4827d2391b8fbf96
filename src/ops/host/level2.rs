use super::{mat_mut, mat_ref, vec_mut, vec_ref};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::Level2Ops;
use crate::ops::{checks, kernels, Diag, Trans, Uplo};
use crate::runtime::host::{HostClient, HostRuntime};

impl Level2Ops<HostRuntime> for HostClient {
    fn gemv<T: Element>(
        &self,
        trans: Trans,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        x: &Vector<T, HostRuntime>,
        beta: T,
        y: &mut Vector<T, HostRuntime>,
    ) {
        checks::gemv(trans, a, x, y);
        let (m, n, lda) = (a.rows(), a.cols(), a.lead());
        let (incx, incy) = (x.inc(), y.inc());
        kernels::level2::gemv(
            trans,
            m,
            n,
            alpha,
            mat_ref(a),
            lda,
            vec_ref(x),
            incx,
            beta,
            vec_mut(y),
            incy,
        );
    }

    fn symv<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        x: &Vector<T, HostRuntime>,
        beta: T,
        y: &mut Vector<T, HostRuntime>,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        checks::column_vector(a, y);
        let (n, lda) = (a.rows(), a.lead());
        let (incx, incy) = (x.inc(), y.inc());
        kernels::level2::symv(
            uplo,
            n,
            alpha,
            mat_ref(a),
            lda,
            vec_ref(x),
            incx,
            beta,
            vec_mut(y),
            incy,
        );
    }

    fn trmv<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        a: &Matrix<T, HostRuntime>,
        x: &mut Vector<T, HostRuntime>,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        let (n, lda, incx) = (a.rows(), a.lead(), x.inc());
        kernels::level2::trmv(uplo, trans, diag, n, mat_ref(a), lda, vec_mut(x), incx);
    }

    fn gdmv<T: Element>(
        &self,
        alpha: T,
        d: &Vector<T, HostRuntime>,
        x: &Vector<T, HostRuntime>,
        beta: T,
        y: &mut Vector<T, HostRuntime>,
    ) {
        checks::same_len(d, x);
        checks::same_len(x, y);
        let n = x.len();
        let incy = y.inc();
        kernels::level2::gdmv(
            n,
            alpha,
            vec_ref(d),
            d.inc(),
            vec_ref(x),
            x.inc(),
            beta,
            vec_mut(y),
            incy,
        );
    }

    fn trsv<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        a: &Matrix<T, HostRuntime>,
        x: &mut Vector<T, HostRuntime>,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        let (n, lda, incx) = (a.rows(), a.lead(), x.inc());
        kernels::level2::trsv(uplo, trans, diag, n, mat_ref(a), lda, vec_mut(x), incx);
    }

    fn ger<T: Element>(
        &self,
        alpha: T,
        x: &Vector<T, HostRuntime>,
        y: &Vector<T, HostRuntime>,
        a: &mut Matrix<T, HostRuntime>,
        clear: bool,
    ) {
        assert_eq!(a.rows(), x.len(), "ger: A rows must match x");
        assert_eq!(a.cols(), y.len(), "ger: A columns must match y");
        let (m, n, lda) = (a.rows(), a.cols(), a.lead());
        let (incx, incy) = (x.inc(), y.inc());
        kernels::level2::ger(
            m,
            n,
            alpha,
            vec_ref(x),
            incx,
            vec_ref(y),
            incy,
            mat_mut(a),
            lda,
            clear,
        );
    }

    fn syr<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        x: &Vector<T, HostRuntime>,
        a: &mut Matrix<T, HostRuntime>,
        clear: bool,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        let (n, lda, incx) = (a.rows(), a.lead(), x.inc());
        kernels::level2::syr(uplo, n, alpha, vec_ref(x), incx, mat_mut(a), lda, clear);
    }

    fn syr2<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        x: &Vector<T, HostRuntime>,
        y: &Vector<T, HostRuntime>,
        a: &mut Matrix<T, HostRuntime>,
        clear: bool,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        checks::column_vector(a, y);
        let (n, lda) = (a.rows(), a.lead());
        let (incx, incy) = (x.inc(), y.inc());
        kernels::level2::syr2(
            uplo,
            n,
            alpha,
            vec_ref(x),
            incx,
            vec_ref(y),
            incy,
            mat_mut(a),
            lda,
            clear,
        );
    }
}
