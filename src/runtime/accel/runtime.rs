//! Accelerator runtime implementation

use super::client::{get_or_create_client, AccelClient};
use super::device::AccelDevice;
use super::queue::{next_buffer_id, Command, Queue};
use crate::error::Result;
use crate::runtime::Runtime;
use std::sync::mpsc;

/// Asynchronous accelerator runtime.
///
/// Buffers live in a worker-owned arena and are addressed by opaque
/// ids, never by host pointers. Every operation is a command on the
/// shared queue; reads back to the host block and thereby synchronize.
#[derive(Clone, Debug, Default)]
pub struct AccelRuntime;

impl Runtime for AccelRuntime {
    type Device = AccelDevice;
    type Client = AccelClient;

    fn name() -> &'static str {
        "accel"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        let id = next_buffer_id();
        Queue::global().submit(Command::Alloc {
            id,
            size: size_bytes,
        })?;
        Ok(id)
    }

    fn deallocate(handle: u64, _size_bytes: usize, _device: &Self::Device) {
        // Queue order guarantees pending kernels on this buffer run first.
        Queue::global().submit_infallible(Command::Dealloc { id: handle });
    }

    fn copy_to_device(
        src: &[u8],
        dst: u64,
        dst_byte_offset: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if src.is_empty() {
            return Ok(());
        }
        Queue::global().submit(Command::Write {
            dst,
            dst_byte_offset,
            data: src.to_vec(),
        })
    }

    fn copy_from_device(
        src: u64,
        src_byte_offset: usize,
        dst: &mut [u8],
        _device: &Self::Device,
    ) -> Result<()> {
        if dst.is_empty() {
            return Ok(());
        }
        let (tx, rx) = mpsc::channel();
        Queue::global().submit(Command::Read {
            src,
            src_byte_offset,
            len: dst.len(),
            reply: tx,
        })?;
        let bytes = rx
            .recv()
            .map_err(|_| crate::error::Error::Backend("accelerator worker is gone".into()))?;
        dst.copy_from_slice(&bytes);
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
        Queue::global().submit(Command::Gather {
            src,
            src_byte_offset,
            dst,
            shape: shape.to_vec(),
            strides: strides.to_vec(),
            elem_size,
        })
    }

    fn default_device() -> Self::Device {
        AccelDevice::default()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        get_or_create_client(device)
    }
}
