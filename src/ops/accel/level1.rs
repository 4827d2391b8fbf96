use super::VecArgs;
use crate::dense::Vector;
use crate::dtype::Element;
use crate::ops::traits::Level1Ops;
use crate::ops::{checks, kernels};
use crate::runtime::accel::{AccelClient, AccelRuntime};

impl Level1Ops<AccelRuntime> for AccelClient {
    fn dot<T: Element>(&self, x: &Vector<T, AccelRuntime>, y: &Vector<T, AccelRuntime>) -> T {
        checks::same_len(x, y);
        let (xa, ya) = (VecArgs::of(x), VecArgs::of(y));
        self.run_blocking(move |arena| {
            kernels::level1::dot(xa.len, xa.slice::<T>(arena), xa.inc, ya.slice::<T>(arena), ya.inc)
        })
    }

    fn dot_self<T: Element>(&self, x: &Vector<T, AccelRuntime>) -> T {
        let xa = VecArgs::of(x);
        self.run_blocking(move |arena| {
            kernels::level1::dot_self(xa.len, xa.slice::<T>(arena), xa.inc)
        })
    }

    fn iamax<T: Element>(&self, x: &Vector<T, AccelRuntime>) -> usize {
        let xa = VecArgs::of(x);
        self.run_blocking(move |arena| kernels::level1::iamax(xa.len, xa.slice::<T>(arena), xa.inc))
    }

    fn axpy<T: Element>(
        &self,
        alpha: T,
        x: &Vector<T, AccelRuntime>,
        y: &mut Vector<T, AccelRuntime>,
        clear: bool,
    ) {
        checks::same_len(x, y);
        let (xa, ya) = (VecArgs::of(x), VecArgs::of(y));
        self.run(move |arena| {
            let xs = xa.slice::<T>(arena);
            let ys = ya.slice_mut::<T>(arena);
            kernels::level1::axpy(xa.len, alpha, xs, xa.inc, ys, ya.inc, clear);
        });
    }

    fn scal<T: Element>(&self, alpha: T, x: &mut Vector<T, AccelRuntime>) {
        let xa = VecArgs::of(x);
        self.run(move |arena| {
            let xs = xa.slice_mut::<T>(arena);
            kernels::level1::scal(xa.len, alpha, xs, xa.inc);
        });
    }
}
