use super::{MatArgs, VecArgs};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::ReduceOps;
use crate::ops::{checks, kernels};
use crate::runtime::accel::{AccelClient, AccelRuntime};

macro_rules! accel_reduce {
    ($name:ident, $check:ident) => {
        fn $name<T: Element>(&self, a: &Matrix<T, AccelRuntime>, y: &mut Vector<T, AccelRuntime>) {
            checks::$check(a, y);
            let (aa, ya) = (MatArgs::of(a), VecArgs::of(y));
            self.run(move |arena| {
                let a = aa.slice::<T>(arena);
                let y = ya.slice_mut::<T>(arena);
                kernels::reduce::$name(aa.rows, aa.cols, a, aa.lead, y, ya.inc);
            });
        }
    };
}

impl ReduceOps<AccelRuntime> for AccelClient {
    accel_reduce!(dot_columns, row_vector);
    accel_reduce!(dot_rows, column_vector);
    accel_reduce!(sum_columns, column_vector);
    accel_reduce!(sum_rows, row_vector);
}
