//! Core trait for compute backends

/// Core trait for compute backends
///
/// `Runtime` abstracts over the two execution targets of the layer: the
/// host CPU and the device accelerator. It uses static dispatch via
/// generics; the runtime of an operation's *output* operand is the runtime
/// the call resolves against, which is how the backend is selected.
///
/// Buffer handles are opaque `u64` values: a raw pointer on the host, a
/// buffer id resolved on the device worker for the accelerator. All
/// copies take byte offsets so that views into a shared allocation can be
/// staged without handle arithmetic.
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: super::Device;

    /// Client for dispatching operations
    type Client: super::RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate zeroed memory on the device
    ///
    /// Returns an opaque buffer handle, or `Err(OutOfMemory)` if the
    /// allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> crate::error::Result<u64>;

    /// Deallocate memory previously returned by [`Runtime::allocate`]
    fn deallocate(handle: u64, size_bytes: usize, device: &Self::Device);

    /// Copy host bytes into a device buffer
    ///
    /// Ordered after any previously issued work touching `dst`.
    fn copy_to_device(
        src: &[u8],
        dst: u64,
        dst_byte_offset: usize,
        device: &Self::Device,
    ) -> crate::error::Result<()>;

    /// Copy a device buffer back to host bytes
    ///
    /// This is a synchronization barrier: it completes only after all
    /// previously issued work on the device queue has executed.
    fn copy_from_device(
        src: u64,
        src_byte_offset: usize,
        dst: &mut [u8],
        device: &Self::Device,
    ) -> crate::error::Result<()>;

    /// Gather strided elements into the front of a contiguous buffer
    ///
    /// `shape`/`strides` describe the source walk in elements, last
    /// dimension fastest; the destination is written sequentially from
    /// offset zero. This is the primitive behind stride staging.
    fn copy_strided(
        src: u64,
        src_byte_offset: usize,
        dst: u64,
        shape: &[usize],
        strides: &[isize],
        elem_size: usize,
        device: &Self::Device,
    ) -> crate::error::Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}
