//! Command queue and buffer arena for the accelerator backend
//!
//! All device work funnels through a single queue served by a dedicated
//! worker thread. Commands execute strictly in issue order, so a read
//! or fence observes every write and kernel launched before it.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::OnceLock;
use std::thread;

/// Next buffer id. Ids are process-global so handles stay meaningful
/// across clients.
static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates a fresh buffer id.
pub(crate) fn next_buffer_id() -> u64 {
    NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)
}

/// A closure executed on the worker thread with access to the arena.
pub(crate) type Kernel = Box<dyn FnOnce(&mut Arena) + Send>;

/// One entry in the device command stream.
pub(crate) enum Command {
    /// Create a zero-filled buffer of `size` bytes under `id`.
    Alloc { id: u64, size: usize },
    /// Release the buffer under `id`.
    Dealloc { id: u64 },
    /// Copy host bytes into a buffer.
    Write {
        dst: u64,
        dst_byte_offset: usize,
        data: Vec<u8>,
    },
    /// Copy buffer bytes back to the host. Blocks the issuing thread
    /// through `reply`, which makes every read a synchronization point.
    Read {
        src: u64,
        src_byte_offset: usize,
        len: usize,
        reply: Sender<Vec<u8>>,
    },
    /// Pack a strided region of `src` contiguously into `dst`.
    Gather {
        src: u64,
        src_byte_offset: usize,
        dst: u64,
        shape: Vec<usize>,
        strides: Vec<isize>,
        elem_size: usize,
    },
    /// Run an arbitrary kernel against the arena.
    Run(Kernel),
    /// Barrier. The reply fires once everything before it has executed.
    Fence(Sender<()>),
}

/// A single device buffer.
struct Buffer {
    data: Vec<u8>,
}

/// Owns every live device buffer. Only the worker thread touches it.
pub struct Arena {
    buffers: HashMap<u64, Buffer>,
}

impl Arena {
    fn new() -> Self {
        Self {
            buffers: HashMap::new(),
        }
    }

    /// Borrows a typed slice of a buffer.
    ///
    /// # Panics
    ///
    /// Panics if the handle is unknown or the range is out of bounds.
    pub fn slice<T: bytemuck::Pod>(&self, handle: u64, byte_offset: usize, len: usize) -> &[T] {
        let buf = self
            .buffers
            .get(&handle)
            .unwrap_or_else(|| panic!("unknown device buffer {handle}"));
        let bytes = &buf.data[byte_offset..byte_offset + len * std::mem::size_of::<T>()];
        bytemuck::cast_slice(bytes)
    }

    /// Borrows a typed mutable slice of a buffer.
    ///
    /// # Panics
    ///
    /// Panics if the handle is unknown or the range is out of bounds.
    pub fn slice_mut<T: bytemuck::Pod>(
        &mut self,
        handle: u64,
        byte_offset: usize,
        len: usize,
    ) -> &mut [T] {
        let buf = self
            .buffers
            .get_mut(&handle)
            .unwrap_or_else(|| panic!("unknown device buffer {handle}"));
        let bytes = &mut buf.data[byte_offset..byte_offset + len * std::mem::size_of::<T>()];
        bytemuck::cast_slice_mut(bytes)
    }

    /// Borrows a typed slice with a lifetime untied from the arena, so
    /// a kernel can hold several operands at once.
    ///
    /// # Safety
    ///
    /// The handle must refer to a live buffer, the range must be in
    /// bounds, and no concurrent mutable access to the same region may
    /// exist. Kernels run alone on the worker thread, so the last point
    /// reduces to not aliasing a [`Arena::raw_mut`] region of the same
    /// call.
    pub unsafe fn raw<'a, T: bytemuck::Pod>(
        &self,
        handle: u64,
        byte_offset: usize,
        len: usize,
    ) -> &'a [T] {
        let buf = self
            .buffers
            .get(&handle)
            .unwrap_or_else(|| panic!("unknown device buffer {handle}"));
        assert!(byte_offset + len * std::mem::size_of::<T>() <= buf.data.len());
        std::slice::from_raw_parts(buf.data.as_ptr().add(byte_offset) as *const T, len)
    }

    /// Mutable counterpart of [`Arena::raw`].
    ///
    /// # Safety
    ///
    /// Same as [`Arena::raw`], and the region must not overlap any
    /// other slice held by the kernel.
    pub unsafe fn raw_mut<'a, T: bytemuck::Pod>(
        &mut self,
        handle: u64,
        byte_offset: usize,
        len: usize,
    ) -> &'a mut [T] {
        let buf = self
            .buffers
            .get_mut(&handle)
            .unwrap_or_else(|| panic!("unknown device buffer {handle}"));
        assert!(byte_offset + len * std::mem::size_of::<T>() <= buf.data.len());
        std::slice::from_raw_parts_mut(buf.data.as_mut_ptr().add(byte_offset) as *mut T, len)
    }

}

fn worker_loop(rx: mpsc::Receiver<Command>) {
    let mut arena = Arena::new();
    while let Ok(cmd) = rx.recv() {
        match cmd {
            Command::Alloc { id, size } => {
                arena.buffers.insert(id, Buffer {
                    data: vec![0u8; size],
                });
            }
            Command::Dealloc { id } => {
                arena.buffers.remove(&id);
            }
            Command::Write {
                dst,
                dst_byte_offset,
                data,
            } => {
                let buf = arena.buffers.get_mut(&dst).expect("write to unknown buffer");
                buf.data[dst_byte_offset..dst_byte_offset + data.len()].copy_from_slice(&data);
            }
            Command::Read {
                src,
                src_byte_offset,
                len,
                reply,
            } => {
                let buf = arena.buffers.get(&src).expect("read from unknown buffer");
                let out = buf.data[src_byte_offset..src_byte_offset + len].to_vec();
                let _ = reply.send(out);
            }
            Command::Gather {
                src,
                src_byte_offset,
                dst,
                shape,
                strides,
                elem_size,
            } => {
                let total: usize = shape.iter().product();
                assert_ne!(src, dst, "gather requires distinct buffers");
                let src_ptr = {
                    let buf = arena.buffers.get(&src).expect("gather from unknown buffer");
                    unsafe { buf.data.as_ptr().add(src_byte_offset) }
                };
                let dst_buf = arena.buffers.get_mut(&dst).expect("gather to unknown buffer");
                assert!(dst_buf.data.len() >= total * elem_size);
                unsafe {
                    crate::runtime::gather::gather_strided(
                        src_ptr,
                        dst_buf.data.as_mut_ptr(),
                        &shape,
                        &strides,
                        elem_size,
                    );
                }
            }
            Command::Run(kernel) => kernel(&mut arena),
            Command::Fence(reply) => {
                let _ = reply.send(());
            }
        }
    }
}

/// Handle to the shared command stream.
#[derive(Clone)]
pub(crate) struct Queue {
    tx: Sender<Command>,
}

impl Queue {
    /// Returns the process-wide queue, spawning the worker on first use.
    pub(crate) fn global() -> &'static Queue {
        static QUEUE: OnceLock<Queue> = OnceLock::new();
        QUEUE.get_or_init(|| {
            let (tx, rx) = mpsc::channel();
            thread::Builder::new()
                .name("lacore-accel".into())
                .spawn(move || worker_loop(rx))
                .expect("failed to spawn accelerator worker");
            Queue { tx }
        })
    }

    /// Enqueues a command.
    pub(crate) fn submit(&self, cmd: Command) -> Result<()> {
        self.tx
            .send(cmd)
            .map_err(|_| Error::Backend("accelerator worker is gone".into()))
    }

    /// Enqueues a command, panicking if the worker is gone. Used on
    /// paths that cannot surface an error, such as Drop.
    pub(crate) fn submit_infallible(&self, cmd: Command) {
        self.tx
            .send(cmd)
            .expect("accelerator worker is gone");
    }

    /// Blocks until every previously issued command has executed.
    pub(crate) fn fence(&self) {
        let (tx, rx) = mpsc::channel();
        self.submit_infallible(Command::Fence(tx));
        let _ = rx.recv();
    }
}
