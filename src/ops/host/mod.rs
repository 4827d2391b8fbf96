//! Host backend operation implementations
//!
//! Each trait method validates shapes, materializes slices over the
//! operands' storage, and calls the shared kernel synchronously on the
//! calling thread.

mod broadcast;
mod factor;
mod level1;
mod level2;
mod level3;
mod matrix;
mod reduce;

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::runtime::host::HostRuntime;

/// Elements a column-major region must span, counting padding.
pub(crate) fn mat_span<T: Element>(m: &Matrix<T, HostRuntime>) -> usize {
    if m.cols() == 0 || m.rows() == 0 {
        0
    } else {
        (m.cols() - 1) * m.lead() + m.rows()
    }
}

/// Borrows a vector's storage as a slice starting at its first
/// element. Host handles are raw pointers, so this is a cast plus a
/// span computation; operands of one call must not alias the output,
/// which is the caller's published contract.
pub(crate) fn vec_ref<T: Element>(v: &Vector<T, HostRuntime>) -> &[T] {
    let span = v.span();
    if span == 0 {
        return &[];
    }
    unsafe {
        std::slice::from_raw_parts((v.handle() as usize + v.byte_offset()) as *const T, span)
    }
}

/// Mutable counterpart of [`vec_ref`].
pub(crate) fn vec_mut<T: Element>(v: &mut Vector<T, HostRuntime>) -> &mut [T] {
    let span = v.span();
    if span == 0 {
        return &mut [];
    }
    unsafe {
        std::slice::from_raw_parts_mut((v.handle() as usize + v.byte_offset()) as *mut T, span)
    }
}

/// Borrows a matrix's storage as a column-major slice starting at
/// element `(0, 0)`.
pub(crate) fn mat_ref<T: Element>(m: &Matrix<T, HostRuntime>) -> &[T] {
    let span = mat_span(m);
    if span == 0 {
        return &[];
    }
    unsafe {
        std::slice::from_raw_parts((m.handle() as usize + m.byte_offset()) as *const T, span)
    }
}

/// Mutable counterpart of [`mat_ref`].
pub(crate) fn mat_mut<T: Element>(m: &mut Matrix<T, HostRuntime>) -> &mut [T] {
    let span = mat_span(m);
    if span == 0 {
        return &mut [];
    }
    unsafe {
        std::slice::from_raw_parts_mut((m.handle() as usize + m.byte_offset()) as *mut T, span)
    }
}
