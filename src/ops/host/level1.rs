use super::{vec_mut, vec_ref};
use crate::dense::Vector;
use crate::dtype::Element;
use crate::ops::traits::Level1Ops;
use crate::ops::{checks, kernels};
use crate::runtime::host::{HostClient, HostRuntime};

impl Level1Ops<HostRuntime> for HostClient {
    fn dot<T: Element>(&self, x: &Vector<T, HostRuntime>, y: &Vector<T, HostRuntime>) -> T {
        checks::same_len(x, y);
        kernels::level1::dot(x.len(), vec_ref(x), x.inc(), vec_ref(y), y.inc())
    }

    fn dot_self<T: Element>(&self, x: &Vector<T, HostRuntime>) -> T {
        kernels::level1::dot_self(x.len(), vec_ref(x), x.inc())
    }

    fn iamax<T: Element>(&self, x: &Vector<T, HostRuntime>) -> usize {
        kernels::level1::iamax(x.len(), vec_ref(x), x.inc())
    }

    fn axpy<T: Element>(
        &self,
        alpha: T,
        x: &Vector<T, HostRuntime>,
        y: &mut Vector<T, HostRuntime>,
        clear: bool,
    ) {
        checks::same_len(x, y);
        let (n, incx, incy) = (x.len(), x.inc(), y.inc());
        kernels::level1::axpy(n, alpha, vec_ref(x), incx, vec_mut(y), incy, clear);
    }

    fn scal<T: Element>(&self, alpha: T, x: &mut Vector<T, HostRuntime>) {
        let (n, incx) = (x.len(), x.inc());
        kernels::level1::scal(n, alpha, vec_mut(x), incx);
    }
}
