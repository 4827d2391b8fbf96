use super::{mat_mut, mat_ref, vec_ref};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::Level3Ops;
use crate::ops::{checks, kernels, Diag, Side, Trans, Uplo};
use crate::runtime::host::{HostClient, HostRuntime};

impl Level3Ops<HostRuntime> for HostClient {
    fn gemm<T: Element>(
        &self,
        transa: Trans,
        transb: Trans,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        b: &Matrix<T, HostRuntime>,
        beta: T,
        c: &mut Matrix<T, HostRuntime>,
    ) {
        let (m, n, k) = checks::gemm(transa, transb, a, b, c);
        let (lda, ldb, ldc) = (a.lead(), b.lead(), c.lead());
        kernels::level3::gemm(
            transa,
            transb,
            m,
            n,
            k,
            alpha,
            mat_ref(a),
            lda,
            mat_ref(b),
            ldb,
            beta,
            mat_mut(c),
            ldc,
        );
    }

    fn symm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        b: &Matrix<T, HostRuntime>,
        beta: T,
        c: &mut Matrix<T, HostRuntime>,
    ) {
        checks::side_square(side, a, b);
        checks::same_shape(b, c);
        let (m, n) = (c.rows(), c.cols());
        let (lda, ldb, ldc) = (a.lead(), b.lead(), c.lead());
        kernels::level3::symm(
            side,
            uplo,
            m,
            n,
            alpha,
            mat_ref(a),
            lda,
            mat_ref(b),
            ldb,
            beta,
            mat_mut(c),
            ldc,
        );
    }

    fn trmm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        b: &mut Matrix<T, HostRuntime>,
    ) {
        checks::side_square(side, a, b);
        let (m, n, lda, ldb) = (b.rows(), b.cols(), a.lead(), b.lead());
        kernels::level3::trmm(side, uplo, trans, diag, m, n, alpha, mat_ref(a), lda, mat_mut(b), ldb);
    }

    fn trsm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        b: &mut Matrix<T, HostRuntime>,
    ) {
        checks::side_square(side, a, b);
        let (m, n, lda, ldb) = (b.rows(), b.cols(), a.lead(), b.lead());
        kernels::level3::trsm(side, uplo, trans, diag, m, n, alpha, mat_ref(a), lda, mat_mut(b), ldb);
    }

    fn syrk<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        alpha: T,
        a: &Matrix<T, HostRuntime>,
        beta: T,
        c: &mut Matrix<T, HostRuntime>,
    ) {
        checks::square(c);
        let (n, k) = match trans {
            Trans::No => (a.rows(), a.cols()),
            Trans::Trans => (a.cols(), a.rows()),
        };
        assert_eq!(c.rows(), n, "syrk: C order must match op(A)");
        let (lda, ldc) = (a.lead(), c.lead());
        kernels::level3::syrk(uplo, trans, n, k, alpha, mat_ref(a), lda, beta, mat_mut(c), ldc);
    }

    fn gdmm<T: Element>(
        &self,
        side: Side,
        alpha: T,
        d: &Vector<T, HostRuntime>,
        x: &Matrix<T, HostRuntime>,
        beta: T,
        y: &mut Matrix<T, HostRuntime>,
    ) {
        checks::same_shape(x, y);
        match side {
            Side::Left => checks::column_vector(x, d),
            Side::Right => checks::row_vector(x, d),
        }
        let (m, n) = (y.rows(), y.cols());
        let (incd, ldx, ldy) = (d.inc(), x.lead(), y.lead());
        kernels::level3::gdmm(
            side,
            m,
            n,
            alpha,
            vec_ref(d),
            incd,
            mat_ref(x),
            ldx,
            beta,
            mat_mut(y),
            ldy,
        );
    }
}
