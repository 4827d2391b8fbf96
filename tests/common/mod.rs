//! Shared helpers for integration tests

use lacore::prelude::*;

#[allow(dead_code)]
pub fn host_client() -> HostClient {
    HostRuntime::default_client(&HostRuntime::default_device())
}

#[allow(dead_code)]
pub fn accel_client() -> AccelClient {
    AccelRuntime::default_client(&AccelRuntime::default_device())
}

/// Asserts elementwise closeness with a combined relative/absolute
/// tolerance.
#[allow(dead_code)]
pub fn assert_allclose_f64(actual: &[f64], expected: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(actual.len(), expected.len(), "{msg}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let tol = atol + rtol * e.abs();
        assert!(
            (a - e).abs() <= tol,
            "{msg}: element {i}: {a} vs {e} (tol {tol})"
        );
    }
}

#[allow(dead_code)]
pub fn assert_allclose_f32(actual: &[f32], expected: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(actual.len(), expected.len(), "{msg}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let tol = atol + rtol * e.abs();
        assert!(
            (a - e).abs() <= tol,
            "{msg}: element {i}: {a} vs {e} (tol {tol})"
        );
    }
}
