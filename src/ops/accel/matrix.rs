use super::MatArgs;
use crate::dense::Matrix;
use crate::dtype::Element;
use crate::ops::traits::MatrixOps;
use crate::ops::{checks, kernels};
use crate::runtime::accel::{AccelClient, AccelRuntime};

impl MatrixOps<AccelRuntime> for AccelClient {
    fn ident<T: Element>(&self, a: &mut Matrix<T, AccelRuntime>) {
        let aa = MatArgs::of(a);
        self.run(move |arena| {
            let a = aa.slice_mut::<T>(arena);
            kernels::matrix::ident(aa.rows, aa.cols, a, aa.lead);
        });
    }

    fn transpose<T: Element>(&self, a: &Matrix<T, AccelRuntime>, b: &mut Matrix<T, AccelRuntime>) {
        assert_eq!(b.rows(), a.cols(), "transpose: B rows must match A columns");
        assert_eq!(b.cols(), a.rows(), "transpose: B columns must match A rows");
        let (aa, ba) = (MatArgs::of(a), MatArgs::of(b));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let b = ba.slice_mut::<T>(arena);
            kernels::matrix::transpose(aa.rows, aa.cols, a, aa.lead, b, ba.lead);
        });
    }

    fn matrix_copy<T: Element>(&self, a: &Matrix<T, AccelRuntime>, b: &mut Matrix<T, AccelRuntime>) {
        checks::same_shape(a, b);
        let (aa, ba) = (MatArgs::of(a), MatArgs::of(b));
        self.run(move |arena| {
            let a = aa.slice::<T>(arena);
            let b = ba.slice_mut::<T>(arena);
            kernels::matrix::matrix_copy(aa.rows, aa.cols, a, aa.lead, b, ba.lead);
        });
    }

    fn matrix_axpy<T: Element>(
        &self,
        alpha: T,
        x: &Matrix<T, AccelRuntime>,
        y: &mut Matrix<T, AccelRuntime>,
        clear: bool,
    ) {
        checks::same_shape(x, y);
        let (xa, ya) = (MatArgs::of(x), MatArgs::of(y));
        self.run(move |arena| {
            let x = xa.slice::<T>(arena);
            let y = ya.slice_mut::<T>(arena);
            kernels::matrix::matrix_axpy(alpha, xa.rows, xa.cols, x, xa.lead, y, ya.lead, clear);
        });
    }

    fn matrix_scal<T: Element>(&self, alpha: T, a: &mut Matrix<T, AccelRuntime>) {
        let aa = MatArgs::of(a);
        self.run(move |arena| {
            let a = aa.slice_mut::<T>(arena);
            kernels::matrix::matrix_scal(alpha, aa.rows, aa.cols, a, aa.lead);
        });
    }
}
