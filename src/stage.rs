//! Staging of strided operands and cross-backend transfer
//!
//! The primitive kernels accept strides directly, so no operation in
//! this crate stages its operands before dispatch. Mapping exists for
//! consumers that need densely packed data: host readbacks, transfers
//! between backends, and interop with packed formats. It wraps an
//! operand either as a borrow (already contiguous) or as a packed
//! temporary gathered on the operand's own device. The temporary is
//! released when the mapping drops, on every exit path.

use crate::dense::{Matrix, Storage, Vector};
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::Runtime;

/// A vector staged for contiguous access.
pub enum MappedVector<'a, T: Element, R: Runtime> {
    /// The operand was already contiguous; no copy was made.
    Borrowed(&'a Vector<T, R>),
    /// A packed temporary on the same device.
    Owned(Vector<T, R>),
}

impl<'a, T: Element, R: Runtime> MappedVector<'a, T, R> {
    /// The staged, contiguous vector.
    pub fn get(&self) -> &Vector<T, R> {
        match self {
            MappedVector::Borrowed(v) => v,
            MappedVector::Owned(v) => v,
        }
    }

    /// Whether staging made a copy.
    pub fn is_copied(&self) -> bool {
        matches!(self, MappedVector::Owned(_))
    }
}

/// Stages `v` so that consumers can assume `inc == 1`.
///
/// Contiguous vectors are borrowed as-is; strided vectors are gathered
/// into a packed temporary on the same device without a host roundtrip.
pub fn map_vector<T: Element, R: Runtime>(v: &Vector<T, R>) -> Result<MappedVector<'_, T, R>> {
    if v.is_contiguous() {
        return Ok(MappedVector::Borrowed(v));
    }
    let elem = std::mem::size_of::<T>();
    let packed = Storage::<R>::allocate(v.len() * elem, v.device())?;
    R::copy_strided(
        v.handle(),
        v.byte_offset(),
        packed.handle(),
        &[v.len()],
        &[v.inc() as isize],
        elem,
        v.device(),
    )?;
    Ok(MappedVector::Owned(Vector::from_parts(packed, 0, v.len(), 1)))
}

/// A matrix staged for contiguous access.
pub enum MappedMatrix<'a, T: Element, R: Runtime> {
    /// The operand was already contiguous; no copy was made.
    Borrowed(&'a Matrix<T, R>),
    /// A packed temporary on the same device.
    Owned(Matrix<T, R>),
}

impl<'a, T: Element, R: Runtime> MappedMatrix<'a, T, R> {
    /// The staged, contiguous matrix.
    pub fn get(&self) -> &Matrix<T, R> {
        match self {
            MappedMatrix::Borrowed(m) => m,
            MappedMatrix::Owned(m) => m,
        }
    }

    /// Whether staging made a copy.
    pub fn is_copied(&self) -> bool {
        matches!(self, MappedMatrix::Owned(_))
    }
}

/// Stages `m` so that consumers can assume `lead == rows`.
pub fn map_matrix<T: Element, R: Runtime>(m: &Matrix<T, R>) -> Result<MappedMatrix<'_, T, R>> {
    if m.is_contiguous() {
        return Ok(MappedMatrix::Borrowed(m));
    }
    let elem = std::mem::size_of::<T>();
    let storage = Storage::<R>::allocate(m.size() * elem, m.device())?;
    // Last dimension fastest keeps the packed copy column-major.
    R::copy_strided(
        m.handle(),
        m.byte_offset(),
        storage.handle(),
        &[m.cols(), m.rows()],
        &[m.lead() as isize, 1],
        elem,
        m.device(),
    )?;
    Ok(MappedMatrix::Owned(Matrix::from_parts(
        storage,
        0,
        m.rows(),
        m.cols(),
        m.rows(),
    )))
}

/// Moves a vector to another backend through a packed host copy.
///
/// The read from the source backend is a synchronization barrier.
pub fn vector_to_runtime<T: Element, R: Runtime, Q: Runtime>(
    v: &Vector<T, R>,
    client: &Q::Client,
) -> Result<Vector<T, Q>> {
    let host = v.try_to_vec()?;
    Vector::try_from_slice(&host, client)
}

/// Moves a matrix to another backend through a packed host copy.
pub fn matrix_to_runtime<T: Element, R: Runtime, Q: Runtime>(
    m: &Matrix<T, R>,
    client: &Q::Client,
) -> Result<Matrix<T, Q>> {
    let host = m.try_to_vec()?;
    Matrix::try_from_slice(&host, m.rows(), m.cols(), client)
}
