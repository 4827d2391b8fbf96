//! Host runtime implementation

use super::client::HostClient;
use super::device::HostDevice;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::alloc::{alloc_zeroed, dealloc, Layout as AllocLayout};

/// Host compute runtime
///
/// The default runtime. Memory is allocated on the heap with 64-byte
/// alignment; handles are raw pointers cast to `u64`.
#[derive(Clone, Debug, Default)]
pub struct HostRuntime;

/// Allocation alignment, wide enough for any vector extension
const ALIGN: usize = 64;

impl Runtime for HostRuntime {
    type Device = HostDevice;
    type Client = HostClient;

    fn name() -> &'static str {
        "host"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout = AllocLayout::from_size_align(size_bytes, ALIGN)
            .map_err(|_| Error::OutOfMemory { size: size_bytes })?;
        let ptr = unsafe { alloc_zeroed(layout) };
        if ptr.is_null() {
            return Err(Error::OutOfMemory { size: size_bytes });
        }
        Ok(ptr as u64)
    }

    fn deallocate(handle: u64, size_bytes: usize, _device: &Self::Device) {
        if handle == 0 || size_bytes == 0 {
            return;
        }

        let layout =
            AllocLayout::from_size_align(size_bytes, ALIGN).expect("invalid allocation layout");
        unsafe {
            dealloc(handle as *mut u8, layout);
        }
    }

    fn copy_to_device(
        src: &[u8],
        dst: u64,
        dst_byte_offset: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(
                src.as_ptr(),
                (dst as usize + dst_byte_offset) as *mut u8,
                src.len(),
            );
        }
        Ok(())
    }

    fn copy_from_device(
        src: u64,
        src_byte_offset: usize,
        dst: &mut [u8],
        _device: &Self::Device,
    ) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(
                (src as usize + src_byte_offset) as *const u8,
                dst.as_mut_ptr(),
                dst.len(),
            );
        }
        Ok(())
    }

    fn copy_strided(
        src: u64,
        src_byte_offset: usize,
        dst: u64,
        shape: &[usize],
        strides: &[isize],
        elem_size: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if src == 0 || dst == 0 || shape.is_empty() {
            return Ok(());
        }

        let src_base = (src as usize + src_byte_offset) as *const u8;
        let dst_base = dst as *mut u8;
        unsafe {
            crate::runtime::gather::gather_strided(src_base, dst_base, shape, strides, elem_size);
        }
        Ok(())
    }

    fn default_device() -> Self::Device {
        HostDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        HostClient::new(device.clone())
    }
}
