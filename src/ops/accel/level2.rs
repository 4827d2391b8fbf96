use super::{MatArgs, VecArgs};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::Level2Ops;
use crate::ops::{checks, kernels, Diag, Trans, Uplo};
use crate::runtime::accel::{AccelClient, AccelRuntime};

impl Level2Ops<AccelRuntime> for AccelClient {
    fn gemv<T: Element>(
        &self,
        trans: Trans,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        x: &Vector<T, AccelRuntime>,
        beta: T,
        y: &mut Vector<T, AccelRuntime>,
    ) {
        checks::gemv(trans, a, x, y);
        let (aa, xa, ya) = (MatArgs::of(a), VecArgs::of(x), VecArgs::of(y));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let x = xa.slice::<T>(arena);
            let y = ya.slice_mut::<T>(arena);
            kernels::level2::gemv(
                trans, aa.rows, aa.cols, alpha, a, aa.lead, x, xa.inc, beta, y, ya.inc,
            );
        });
    }

    fn symv<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        a: &Matrix<T, AccelRuntime>,
        x: &Vector<T, AccelRuntime>,
        beta: T,
        y: &mut Vector<T, AccelRuntime>,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        checks::column_vector(a, y);
        let (aa, xa, ya) = (MatArgs::of(a), VecArgs::of(x), VecArgs::of(y));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let x = xa.slice::<T>(arena);
            let y = ya.slice_mut::<T>(arena);
            kernels::level2::symv(uplo, aa.rows, alpha, a, aa.lead, x, xa.inc, beta, y, ya.inc);
        });
    }

    fn trmv<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        a: &Matrix<T, AccelRuntime>,
        x: &mut Vector<T, AccelRuntime>,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        let (aa, xa) = (MatArgs::of(a), VecArgs::of(x));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let x = xa.slice_mut::<T>(arena);
            kernels::level2::trmv(uplo, trans, diag, aa.rows, a, aa.lead, x, xa.inc);
        });
    }

    fn gdmv<T: Element>(
        &self,
        alpha: T,
        d: &Vector<T, AccelRuntime>,
        x: &Vector<T, AccelRuntime>,
        beta: T,
        y: &mut Vector<T, AccelRuntime>,
    ) {
        checks::same_len(d, x);
        checks::same_len(x, y);
        let (da, xa, ya) = (VecArgs::of(d), VecArgs::of(x), VecArgs::of(y));
        self.run(move |arena| {
            let d = da.slice::<T>(arena);
            let x = xa.slice::<T>(arena);
            let y = ya.slice_mut::<T>(arena);
            kernels::level2::gdmv(xa.len, alpha, d, da.inc, x, xa.inc, beta, y, ya.inc);
        });
    }

    fn trsv<T: Element>(
        &self,
        uplo: Uplo,
        trans: Trans,
        diag: Diag,
        a: &Matrix<T, AccelRuntime>,
        x: &mut Vector<T, AccelRuntime>,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        let (aa, xa) = (MatArgs::of(a), VecArgs::of(x));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let x = xa.slice_mut::<T>(arena);
            kernels::level2::trsv(uplo, trans, diag, aa.rows, a, aa.lead, x, xa.inc);
        });
    }

    fn ger<T: Element>(
        &self,
        alpha: T,
        x: &Vector<T, AccelRuntime>,
        y: &Vector<T, AccelRuntime>,
        a: &mut Matrix<T, AccelRuntime>,
        clear: bool,
    ) {
        assert_eq!(a.rows(), x.len(), "ger: A rows must match x");
        assert_eq!(a.cols(), y.len(), "ger: A columns must match y");
        let (xa, ya, aa) = (VecArgs::of(x), VecArgs::of(y), MatArgs::of(a));
        self.run(move |arena| {
            let x = xa.slice::<T>(arena);
            let y = ya.slice::<T>(arena);
            let a = aa.slice_mut::<T>(arena);
            kernels::level2::ger(
                aa.rows, aa.cols, alpha, x, xa.inc, y, ya.inc, a, aa.lead, clear,
            );
        });
    }

    fn syr<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        x: &Vector<T, AccelRuntime>,
        a: &mut Matrix<T, AccelRuntime>,
        clear: bool,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        let (xa, aa) = (VecArgs::of(x), MatArgs::of(a));
        self.run(move |arena| {
            let x = xa.slice::<T>(arena);
            let a = aa.slice_mut::<T>(arena);
            kernels::level2::syr(uplo, aa.rows, alpha, x, xa.inc, a, aa.lead, clear);
        });
    }

    fn syr2<T: Element>(
        &self,
        uplo: Uplo,
        alpha: T,
        x: &Vector<T, AccelRuntime>,
        y: &Vector<T, AccelRuntime>,
        a: &mut Matrix<T, AccelRuntime>,
        clear: bool,
    ) {
        checks::square(a);
        checks::column_vector(a, x);
        checks::column_vector(a, y);
        let (xa, ya, aa) = (VecArgs::of(x), VecArgs::of(y), MatArgs::of(a));
        self.run(move |arena| {
            let x = xa.slice::<T>(arena);
            let y = ya.slice::<T>(arena);
            let a = aa.slice_mut::<T>(arena);
            kernels::level2::syr2(
                uplo, aa.rows, alpha, x, xa.inc, y, ya.inc, a, aa.lead, clear,
            );
        });
    }
}
