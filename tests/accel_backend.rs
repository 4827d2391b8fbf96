//! Accelerator backend: queue ordering, barriers, and transfers

mod common;

use common::{accel_client, assert_allclose_f64, host_client};
use lacore::prelude::*;

type M = Matrix<f64, AccelRuntime>;
type V = Vector<f64, AccelRuntime>;

#[test]
fn upload_download_round_trip() {
    let c = accel_client();
    let v = V::from_slice(&[1.0, -2.5, 3.25], &c);
    assert_eq!(v.to_vec(), vec![1.0, -2.5, 3.25]);
}

#[test]
fn issue_order_is_preserved_without_explicit_sync() {
    let c = accel_client();
    let x = V::from_slice(&[1.0, 2.0, 3.0], &c);
    let mut y = V::zeros(3, &c);
    // Three dependent commands, no barrier between them; the read at
    // the end observes all of them.
    c.axpy(2.0, &x, &mut y, true);
    c.scal(0.5, &mut y);
    c.axpy(1.0, &x, &mut y, false);
    assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn synchronize_is_an_explicit_barrier() {
    let c = accel_client();
    let a = M::from_slice(&[4.0, 2.0, 2.0, 3.0], 2, 2, &c);
    let x = V::from_slice(&[1.0, 1.0], &c);
    let mut y = V::zeros(2, &c);
    c.gemv(Trans::No, 1.0, &a, &x, 0.0, &mut y);
    c.synchronize();
    assert_eq!(y.to_vec(), vec![6.0, 5.0]);
}

#[test]
fn views_alias_device_storage() {
    let c = accel_client();
    let m = M::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2, &c);
    let mut col = m.column(0);
    c.scal(10.0, &mut col);
    assert_eq!(m.to_vec(), vec![10.0, 20.0, 3.0, 4.0]);
}

#[test]
fn strided_readback_gathers_on_device() {
    let c = accel_client();
    let m = M::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3, &c);
    assert_eq!(m.row(0).to_vec(), vec![1.0, 3.0, 5.0]);
    assert_eq!(m.diagonal().to_vec(), vec![1.0, 4.0]);
}

#[test]
fn chol_runs_on_device_queue() {
    let c = accel_client();
    let a = M::from_slice(&[4.0, 2.0, 2.0, 3.0], 2, 2, &c);
    let mut l = M::zeros(2, 2, &c);
    c.chol(&a, &mut l, Uplo::Lower, CholeskyStrategy::AdjustDiagonal)
        .unwrap();
    let got = l.to_vec();
    assert_eq!(got[0], 2.0);
    assert_eq!(got[1], 1.0);
    assert!((got[3] - 2.0f64.sqrt()).abs() < 1e-15);
}

#[test]
fn chol_failure_crosses_the_queue() {
    let c = accel_client();
    let a = M::from_slice(&[-1.0, 0.0, 0.0, -1.0], 2, 2, &c);
    let mut l = M::zeros(2, 2, &c);
    let res = c.chol(&a, &mut l, Uplo::Lower, CholeskyStrategy::Fail);
    assert!(matches!(res, Err(Error::Cholesky { info: 1 })));
}

#[test]
fn dot_blocks_for_its_result() {
    let c = accel_client();
    let x = V::from_slice(&[1.0, 2.0, 3.0], &c);
    let y = V::from_slice(&[4.0, 5.0, 6.0], &c);
    assert_eq!(c.dot(&x, &y), 32.0);
}

#[test]
fn transfer_between_backends() {
    let hc = host_client();
    let ac = accel_client();

    let host_m = Matrix::<f64, HostRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2, &hc);
    let dev_m: M = matrix_to_runtime(&host_m, &ac).unwrap();
    let mut dev_out = M::zeros(2, 2, &ac);
    ac.matrix_axpy(2.0, &dev_m, &mut dev_out, true);

    let back: Matrix<f64, HostRuntime> = matrix_to_runtime(&dev_out, &hc).unwrap();
    assert_eq!(back.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn staged_vector_transfer_packs_strides() {
    let hc = host_client();
    let ac = accel_client();
    let m = M::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3, &ac);
    // Strided device view to packed host vector.
    let row: Vector<f64, HostRuntime> = vector_to_runtime(&m.row(1), &hc).unwrap();
    assert!(row.is_contiguous());
    assert_eq!(row.to_vec(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn many_queued_operations_drain_in_order() {
    let c = accel_client();
    let mut y = V::zeros(1, &c);
    let one = V::from_slice(&[1.0], &c);
    for _ in 0..1000 {
        c.axpy(1.0, &one, &mut y, false);
    }
    c.synchronize();
    assert_eq!(y.to_vec(), vec![1000.0]);
}

#[test]
fn reductions_agree_with_host_anchor() {
    let c = accel_client();
    let m = M::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3, &c);
    let mut per_col = V::zeros(3, &c);
    c.dot_columns(&m, &mut per_col);
    assert_allclose_f64(&per_col.to_vec(), &[5.0, 25.0, 61.0], 0.0, 0.0, "dot_columns");
}
