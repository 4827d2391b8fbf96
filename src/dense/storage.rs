//! Reference-counted device memory

use crate::error::Result;
use crate::runtime::Runtime;
use std::sync::Arc;

/// Reference-counted handle to a device allocation.
///
/// Cloning is cheap and shares the underlying buffer; the allocation is
/// released when the last owner drops. Views (columns, rows, diagonals)
/// clone the storage and carry their own offset and strides.
pub struct Storage<R: Runtime> {
    inner: Arc<StorageInner<R>>,
}

struct StorageInner<R: Runtime> {
    handle: u64,
    size_bytes: usize,
    device: R::Device,
}

impl<R: Runtime> Storage<R> {
    /// Allocates `size_bytes` of zeroed memory on `device`.
    pub fn allocate(size_bytes: usize, device: &R::Device) -> Result<Self> {
        let handle = R::allocate(size_bytes, device)?;
        Ok(Self {
            inner: Arc::new(StorageInner {
                handle,
                size_bytes,
                device: device.clone(),
            }),
        })
    }

    /// The opaque buffer handle.
    pub fn handle(&self) -> u64 {
        self.inner.handle
    }

    /// Allocation size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.inner.size_bytes
    }

    /// Device the buffer lives on.
    pub fn device(&self) -> &R::Device {
        &self.inner.device
    }
}

impl<R: Runtime> Clone for Storage<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Runtime> Drop for StorageInner<R> {
    fn drop(&mut self) {
        if self.size_bytes > 0 {
            R::deallocate(self.handle, self.size_bytes, &self.device);
        }
    }
}
