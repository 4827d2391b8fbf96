//! Strided vector type

use super::storage::Storage;
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::{Runtime, RuntimeClient};
use std::marker::PhantomData;

/// A dense vector with an element increment.
///
/// Backed by shared [`Storage`]; views produced by [`Matrix`] accessors
/// (columns, rows, diagonals) alias the parent buffer, which is why the
/// increment can be greater than one.
///
/// [`Matrix`]: super::Matrix
pub struct Vector<T: Element, R: Runtime> {
    storage: Storage<R>,
    offset: usize,
    len: usize,
    inc: usize,
    _marker: PhantomData<T>,
}

impl<T: Element, R: Runtime> Vector<T, R> {
    /// Creates a zero-filled vector of `len` elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. Use [`Vector::try_zeros`] to
    /// handle allocation failure.
    pub fn zeros(len: usize, client: &R::Client) -> Self {
        Self::try_zeros(len, client).expect("vector allocation failed")
    }

    /// Creates a zero-filled vector of `len` elements.
    pub fn try_zeros(len: usize, client: &R::Client) -> Result<Self> {
        let storage = Storage::allocate(len * std::mem::size_of::<T>(), client.device())?;
        Ok(Self {
            storage,
            offset: 0,
            len,
            inc: 1,
            _marker: PhantomData,
        })
    }

    /// Creates a vector initialized from a host slice.
    ///
    /// # Panics
    ///
    /// Panics if the allocation or transfer fails.
    pub fn from_slice(data: &[T], client: &R::Client) -> Self {
        Self::try_from_slice(data, client).expect("vector upload failed")
    }

    /// Creates a vector initialized from a host slice.
    pub fn try_from_slice(data: &[T], client: &R::Client) -> Result<Self> {
        let v = Self::try_zeros(data.len(), client)?;
        R::copy_to_device(bytemuck::cast_slice(data), v.storage.handle(), 0, v.device())?;
        Ok(v)
    }

    pub(crate) fn from_parts(storage: Storage<R>, offset: usize, len: usize, inc: usize) -> Self {
        Self {
            storage,
            offset,
            len,
            inc,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance between consecutive elements, in elements.
    pub fn inc(&self) -> usize {
        self.inc
    }

    /// Whether the elements are stored without gaps.
    pub fn is_contiguous(&self) -> bool {
        self.inc == 1 || self.len <= 1
    }

    /// Backing storage.
    pub fn storage(&self) -> &Storage<R> {
        &self.storage
    }

    /// Buffer handle of the backing storage.
    pub fn handle(&self) -> u64 {
        self.storage.handle()
    }

    /// Offset of the first element, in elements from the buffer start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset of the first element, in bytes from the buffer start.
    pub fn byte_offset(&self) -> usize {
        self.offset * std::mem::size_of::<T>()
    }

    /// Device the vector lives on.
    pub fn device(&self) -> &R::Device {
        self.storage.device()
    }

    /// Number of elements the backing region must span, counting gaps.
    pub fn span(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.len - 1) * self.inc + 1
        }
    }

    /// A view of `len` elements starting at `start`, keeping the
    /// increment.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the vector.
    pub fn subrange(&self, start: usize, len: usize) -> Vector<T, R> {
        assert!(start + len <= self.len, "subrange out of bounds");
        Vector::from_parts(self.storage.clone(), self.offset + start * self.inc, len, self.inc)
    }

    /// Copies the elements back to the host, densely packed.
    ///
    /// This is a synchronization barrier on asynchronous backends.
    pub fn to_vec(&self) -> Vec<T> {
        self.try_to_vec().expect("vector download failed")
    }

    /// Copies the elements back to the host, densely packed.
    pub fn try_to_vec(&self) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); self.len];
        if self.len == 0 {
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
            let packed = Storage::<R>::allocate(self.len * elem, self.device())?;
            R::copy_strided(
                self.handle(),
                self.byte_offset(),
                packed.handle(),
                &[self.len],
                &[self.inc as isize],
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

    /// Overwrites the vector from a host slice of the same length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ or the vector is not contiguous.
    pub fn copy_from_slice(&mut self, data: &[T]) {
        assert_eq!(data.len(), self.len, "length mismatch");
        assert!(self.is_contiguous(), "destination must be contiguous");
        R::copy_to_device(
            bytemuck::cast_slice(data),
            self.handle(),
            self.byte_offset(),
            self.device(),
        )
        .expect("vector upload failed");
    }
}

impl<T: Element, R: Runtime> Clone for Vector<T, R> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            len: self.len,
            inc: self.inc,
            _marker: PhantomData,
        }
    }
}
