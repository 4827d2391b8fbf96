//! Accelerator backend
//!
//! Models an attached compute device: buffers are opaque ids owned by a
//! worker thread, operations are enqueued on a single shared command
//! stream and run asynchronously in issue order, and transfers back to
//! the host block until the stream has drained up to the read.

mod client;
mod device;
pub(crate) mod queue;
mod runtime;

pub use client::AccelClient;
pub use device::AccelDevice;
pub use queue::Arena;
pub use runtime::AccelRuntime;
