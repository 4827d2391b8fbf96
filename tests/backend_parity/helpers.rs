//! Parity harness: run the same operation on both backends and compare

use lacore::prelude::*;

pub fn host_client() -> HostClient {
    HostRuntime::default_client(&HostRuntime::default_device())
}

pub fn accel_client() -> AccelClient {
    AccelRuntime::default_client(&AccelRuntime::default_device())
}

/// Runs `op` against both backends on matrices built from `data` and
/// asserts the downloaded results agree exactly. Both backends execute
/// the same scalar loops, so parity is bitwise, not approximate.
pub fn assert_matrix_parity_f64<FH, FA>(
    data: &[f64],
    rows: usize,
    cols: usize,
    host_op: FH,
    accel_op: FA,
    msg: &str,
) where
    FH: FnOnce(&HostClient, &mut Matrix<f64, HostRuntime>),
    FA: FnOnce(&AccelClient, &mut Matrix<f64, AccelRuntime>),
{
    let hc = host_client();
    let ac = accel_client();
    let mut hm = Matrix::<f64, HostRuntime>::from_slice(data, rows, cols, &hc);
    let mut am = Matrix::<f64, AccelRuntime>::from_slice(data, rows, cols, &ac);
    host_op(&hc, &mut hm);
    accel_op(&ac, &mut am);
    let h = hm.to_vec();
    let a = am.to_vec();
    assert_eq!(h, a, "{msg}: backend results differ");
}

/// Vector-output counterpart of [`assert_matrix_parity_f64`].
pub fn assert_vector_parity_f64<FH, FA>(
    data: &[f64],
    rows: usize,
    cols: usize,
    out_len: usize,
    host_op: FH,
    accel_op: FA,
    msg: &str,
) where
    FH: FnOnce(&HostClient, &Matrix<f64, HostRuntime>, &mut Vector<f64, HostRuntime>),
    FA: FnOnce(&AccelClient, &Matrix<f64, AccelRuntime>, &mut Vector<f64, AccelRuntime>),
{
    let hc = host_client();
    let ac = accel_client();
    let hm = Matrix::<f64, HostRuntime>::from_slice(data, rows, cols, &hc);
    let am = Matrix::<f64, AccelRuntime>::from_slice(data, rows, cols, &ac);
    let mut hv = Vector::<f64, HostRuntime>::zeros(out_len, &hc);
    let mut av = Vector::<f64, AccelRuntime>::zeros(out_len, &ac);
    host_op(&hc, &hm, &mut hv);
    accel_op(&ac, &am, &mut av);
    assert_eq!(hv.to_vec(), av.to_vec(), "{msg}: backend results differ");
}
