use super::{MatArgs, VecArgs};
use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::ops::traits::BroadcastOps;
use crate::ops::{checks, kernels};
use crate::runtime::accel::{AccelClient, AccelRuntime};

macro_rules! accel_broadcast {
    ($name:ident, $check:ident) => {
        fn $name<T: Element>(&self, a: &mut Matrix<T, AccelRuntime>, x: &Vector<T, AccelRuntime>) {
            checks::$check(a, x);
            let (aa, xa) = (MatArgs::of(a), VecArgs::of(x));
            self.run(move |arena| {
                let x = xa.slice::<T>(arena);
                let a = aa.slice_mut::<T>(arena);
                kernels::broadcast::$name(aa.rows, aa.cols, a, aa.lead, x, xa.inc);
            });
        }
    };
}

impl BroadcastOps<AccelRuntime> for AccelClient {
    accel_broadcast!(set_rows, row_vector);
    accel_broadcast!(set_columns, column_vector);
    accel_broadcast!(add_rows, row_vector);
    accel_broadcast!(add_columns, column_vector);
    accel_broadcast!(sub_rows, row_vector);
    accel_broadcast!(sub_columns, column_vector);
}
