use super::{mat_mut, vec_ref};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::BroadcastOps;
use crate::ops::{checks, kernels};
use crate::runtime::host::{HostClient, HostRuntime};

macro_rules! host_broadcast {
    ($name:ident, $check:ident) => {
        fn $name<T: Element>(&self, a: &mut Matrix<T, HostRuntime>, x: &Vector<T, HostRuntime>) {
            checks::$check(a, x);
            let (m, n, lda, incx) = (a.rows(), a.cols(), a.lead(), x.inc());
            kernels::broadcast::$name(m, n, mat_mut(a), lda, vec_ref(x), incx);
        }
    };
}

impl BroadcastOps<HostRuntime> for HostClient {
    host_broadcast!(set_rows, row_vector);
    host_broadcast!(set_columns, column_vector);
    host_broadcast!(add_rows, row_vector);
    host_broadcast!(add_columns, column_vector);
    host_broadcast!(sub_rows, row_vector);
    host_broadcast!(sub_columns, column_vector);
}
