//! Column-major matrix type

use super::storage::Storage;
use super::vector::Vector;
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::{Runtime, RuntimeClient};
use std::marker::PhantomData;

/// A dense column-major matrix.
///
/// Element `(i, j)` lives at `offset + i + j * lead`. The leading
/// dimension `lead` may exceed `rows`, which is how submatrix views
/// alias a parent without copying.
pub struct Matrix<T: Element, R: Runtime> {
    storage: Storage<R>,
    offset: usize,
    rows: usize,
    cols: usize,
    lead: usize,
    _marker: PhantomData<T>,
}

impl<T: Element, R: Runtime> Matrix<T, R> {
    /// Creates a zero-filled `rows x cols` matrix with `lead == rows`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. Use [`Matrix::try_zeros`] to
    /// handle allocation failure.
    pub fn zeros(rows: usize, cols: usize, client: &R::Client) -> Self {
        Self::try_zeros(rows, cols, client).expect("matrix allocation failed")
    }

    /// Creates a zero-filled `rows x cols` matrix with `lead == rows`.
    pub fn try_zeros(rows: usize, cols: usize, client: &R::Client) -> Result<Self> {
        Self::try_zeros_padded(rows, cols, rows, client)
    }

    /// Creates a zero-filled matrix whose columns are `lead` elements
    /// apart. Used to exercise strided layouts.
    ///
    /// # Panics
    ///
    /// Panics if `lead < rows` or the allocation fails.
    pub fn zeros_padded(rows: usize, cols: usize, lead: usize, client: &R::Client) -> Self {
        Self::try_zeros_padded(rows, cols, lead, client).expect("matrix allocation failed")
    }

    /// Creates a zero-filled matrix with an explicit leading dimension.
    pub fn try_zeros_padded(
        rows: usize,
        cols: usize,
        lead: usize,
        client: &R::Client,
    ) -> Result<Self> {
        assert!(lead >= rows, "leading dimension shorter than a column");
        let span = if cols == 0 { 0 } else { (cols - 1) * lead + rows };
        let storage = Storage::allocate(span * std::mem::size_of::<T>(), client.device())?;
        Ok(Self {
            storage,
            offset: 0,
            rows,
            cols,
            lead,
            _marker: PhantomData,
        })
    }

    /// Creates a matrix from column-major host data of length
    /// `rows * cols`.
    ///
    /// # Panics
    ///
    /// Panics if the data length is wrong, or the allocation or
    /// transfer fails.
    pub fn from_slice(data: &[T], rows: usize, cols: usize, client: &R::Client) -> Self {
        Self::try_from_slice(data, rows, cols, client).expect("matrix upload failed")
    }

    /// Creates a matrix from column-major host data.
    ///
    /// Returns [`Error::ShapeMismatch`] when the data length is not
    /// `rows * cols`.
    ///
    /// [`Error::ShapeMismatch`]: crate::error::Error::ShapeMismatch
    pub fn try_from_slice(
        data: &[T],
        rows: usize,
        cols: usize,
        client: &R::Client,
    ) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(crate::error::Error::ShapeMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        let m = Self::try_zeros(rows, cols, client)?;
        R::copy_to_device(bytemuck::cast_slice(data), m.storage.handle(), 0, m.device())?;
        Ok(m)
    }

    pub(crate) fn from_parts(
        storage: Storage<R>,
        offset: usize,
        rows: usize,
        cols: usize,
        lead: usize,
    ) -> Self {
        Self {
            storage,
            offset,
            rows,
            cols,
            lead,
            _marker: PhantomData,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Leading dimension, in elements.
    pub fn lead(&self) -> usize {
        self.lead
    }

    /// Total number of elements, `rows * cols`.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the columns are packed back to back.
    pub fn is_contiguous(&self) -> bool {
        self.lead == self.rows || self.cols <= 1
    }

    /// Backing storage.
    pub fn storage(&self) -> &Storage<R> {
        &self.storage
    }

    /// Buffer handle of the backing storage.
    pub fn handle(&self) -> u64 {
        self.storage.handle()
    }

    /// Offset of element `(0, 0)`, in elements from the buffer start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset of element `(0, 0)`, in bytes from the buffer start.
    pub fn byte_offset(&self) -> usize {
        self.offset * std::mem::size_of::<T>()
    }

    /// Device the matrix lives on.
    pub fn device(&self) -> &R::Device {
        self.storage.device()
    }

    /// View of column `j`.
    pub fn column(&self, j: usize) -> Vector<T, R> {
        assert!(j < self.cols, "column index out of bounds");
        Vector::from_parts(self.storage.clone(), self.offset + j * self.lead, self.rows, 1)
    }

    /// View of row `i`. The increment equals the leading dimension.
    pub fn row(&self, i: usize) -> Vector<T, R> {
        assert!(i < self.rows, "row index out of bounds");
        Vector::from_parts(self.storage.clone(), self.offset + i, self.cols, self.lead)
    }

    /// View of the main diagonal.
    pub fn diagonal(&self) -> Vector<T, R> {
        let n = self.rows.min(self.cols);
        Vector::from_parts(self.storage.clone(), self.offset, n, self.lead + 1)
    }

    /// View of the block starting at `(row0, col0)`.
    ///
    /// # Panics
    ///
    /// Panics if the block exceeds the matrix.
    pub fn submatrix(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> Matrix<T, R> {
        assert!(row0 + rows <= self.rows && col0 + cols <= self.cols, "submatrix out of bounds");
        Matrix {
            storage: self.storage.clone(),
            offset: self.offset + row0 + col0 * self.lead,
            rows,
            cols,
            lead: self.lead,
            _marker: PhantomData,
        }
    }

    /// View of `cols` whole columns starting at `col0`.
    pub fn columns(&self, col0: usize, cols: usize) -> Matrix<T, R> {
        self.submatrix(0, col0, self.rows, cols)
    }

    /// Reinterprets a contiguous matrix as a single vector of length
    /// `rows * cols`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has column padding.
    pub fn as_vector(&self) -> Vector<T, R> {
        assert!(self.is_contiguous(), "padded matrix cannot be viewed as a vector");
        Vector::from_parts(self.storage.clone(), self.offset, self.size(), 1)
    }

    /// Copies the matrix back to the host, packed column-major.
    ///
    /// This is a synchronization barrier on asynchronous backends.
    pub fn to_vec(&self) -> Vec<T> {
        self.try_to_vec().expect("matrix download failed")
    }

    /// Copies the matrix back to the host, packed column-major.
    pub fn try_to_vec(&self) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); self.size()];
        if self.size() == 0 {
            return Ok(out);
        }
        if self.is_contiguous() {
            R::copy_from_device(
                self.handle(),
                self.byte_offset(),
                bytemuck::cast_slice_mut(&mut out),
                self.device(),
            )?;
        } else {
            let elem = std::mem::size_of::<T>();
            let packed = Storage::<R>::allocate(self.size() * elem, self.device())?;
            // Last dimension fastest keeps the packed copy column-major.
            R::copy_strided(
                self.handle(),
                self.byte_offset(),
                packed.handle(),
                &[self.cols, self.rows],
                &[self.lead as isize, 1],
                elem,
                self.device(),
            )?;
            R::copy_from_device(
                packed.handle(),
                0,
                bytemuck::cast_slice_mut(&mut out),
                self.device(),
            )?;
        }
        Ok(out)
    }

    /// Overwrites the matrix from column-major host data of length
    /// `rows * cols`, column by column when the layout is padded.
    ///
    /// # Panics
    ///
    /// Panics if the data length is wrong or a transfer fails.
    pub fn copy_from_slice(&mut self, data: &[T]) {
        assert_eq!(data.len(), self.size(), "data length mismatch");
        let elem = std::mem::size_of::<T>();
        if self.is_contiguous() {
            R::copy_to_device(
                bytemuck::cast_slice(data),
                self.handle(),
                self.byte_offset(),
                self.device(),
            )
            .expect("matrix upload failed");
        } else {
            for j in 0..self.cols {
                let col = &data[j * self.rows..(j + 1) * self.rows];
                R::copy_to_device(
                    bytemuck::cast_slice(col),
                    self.handle(),
                    self.byte_offset() + j * self.lead * elem,
                    self.device(),
                )
                .expect("matrix upload failed");
            }
        }
    }
}

impl<T: Element, R: Runtime> Clone for Matrix<T, R> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            rows: self.rows,
            cols: self.cols,
            lead: self.lead,
            _marker: PhantomData,
        }
    }
}
