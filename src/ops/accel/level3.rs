use super::{MatArgs, VecArgs};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::Level3Ops;
use crate::ops::{checks, kernels, Diag, Side, Trans, Uplo};
use crate::runtime::accel::{AccelClient, AccelRuntime};

impl Level3Ops<AccelRuntime> for AccelClient {
    fn gemm<T: Element>(
        &self,
        transa: Trans,
        transb: Trans,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        b: &Matrix<T, AccelRuntime>,
        beta: T,
        c: &mut Matrix<T, AccelRuntime>,
    ) {
        let (m, n, k) = checks::gemm(transa, transb, a, b, c);
        let (aa, ba, ca) = (MatArgs::of(a), MatArgs::of(b), MatArgs::of(c));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let b = ba.slice::<T>(arena);
            let c = ca.slice_mut::<T>(arena);
            kernels::level3::gemm(
                transa, transb, m, n, k, alpha, a, aa.lead, b, ba.lead, beta, c, ca.lead,
            );
        });
    }

    fn symm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        b: &Matrix<T, AccelRuntime>,
        beta: T,
        c: &mut Matrix<T, AccelRuntime>,
    ) {
        checks::side_square(side, a, b);
        checks::same_shape(b, c);
        let (aa, ba, ca) = (MatArgs::of(a), MatArgs::of(b), MatArgs::of(c));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let b = ba.slice::<T>(arena);
            let c = ca.slice_mut::<T>(arena);
            kernels::level3::symm(
                side, uplo, ca.rows, ca.cols, alpha, a, aa.lead, b, ba.lead, beta, c, ca.lead,
            );
        });
    }

    fn trmm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        b: &mut Matrix<T, AccelRuntime>,
    ) {
        checks::side_square(side, a, b);
        let (aa, ba) = (MatArgs::of(a), MatArgs::of(b));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let b = ba.slice_mut::<T>(arena);
            kernels::level3::trmm(
                side, uplo, trans, diag, ba.rows, ba.cols, alpha, a, aa.lead, b, ba.lead,
            );
        });
    }

    fn trsm<T: Element>(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        b: &mut Matrix<T, AccelRuntime>,
    ) {
        checks::side_square(side, a, b);
        let (aa, ba) = (MatArgs::of(a), MatArgs::of(b));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let b = ba.slice_mut::<T>(arena);
            kernels::level3::trsm(
                side, uplo, trans, diag, ba.rows, ba.cols, alpha, a, aa.lead, b, ba.lead,
            );
        });
    }

    fn syrk<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        beta: T,
        c: &mut Matrix<T, AccelRuntime>,
    ) {
        checks::square(c);
        let (n, k) = match trans {
            Trans::No => (a.rows(), a.cols()),
            Trans::Trans => (a.cols(), a.rows()),
        };
        assert_eq!(c.rows(), n, "syrk: C order must match op(A)");
        let (aa, ca) = (MatArgs::of(a), MatArgs::of(c));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let c = ca.slice_mut::<T>(arena);
            kernels::level3::syrk(uplo, trans, n, k, alpha, a, aa.lead, beta, c, ca.lead);
        });
    }

    fn gdmm<T: Element>(
        &self,
        side: Side,
        alpha: T,
        d: &Vector<T, AccelRuntime>,
        x: &Matrix<T, AccelRuntime>,
        beta: T,
        y: &mut Matrix<T, AccelRuntime>,
    ) {
        checks::same_shape(x, y);
        match side {
            Side::Left => checks::column_vector(x, d),
            Side::Right => checks::row_vector(x, d),
        }
        let (da, xa, ya) = (VecArgs::of(d), MatArgs::of(x), MatArgs::of(y));
        self.run(move |arena| {
            let d = da.slice::<T>(arena);
            let x = xa.slice::<T>(arena);
            let y = ya.slice_mut::<T>(arena);
            kernels::level3::gdmm(
                side, ya.rows, ya.cols, alpha, d, da.inc, x, xa.lead, beta, y, ya.lead,
            );
        });
    }
}
