use super::{mat_ref, vec_mut};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::ReduceOps;
use crate::ops::{checks, kernels};
use crate::runtime::host::{HostClient, HostRuntime};

macro_rules! host_reduce {
    ($name:ident, $check:ident) => {
        fn $name<T: Element>(&self, a: &Matrix<T, HostRuntime>, y: &mut Vector<T, HostRuntime>) {
            checks::$check(a, y);
            let (m, n, lda, incy) = (a.rows(), a.cols(), a.lead(), y.inc());
            kernels::reduce::$name(m, n, mat_ref(a), lda, vec_mut(y), incy);
        }
    };
}

impl ReduceOps<HostRuntime> for HostClient {
    host_reduce!(dot_columns, row_vector);
    host_reduce!(dot_rows, column_vector);
    host_reduce!(sum_columns, column_vector);
    host_reduce!(sum_rows, row_vector);
}
