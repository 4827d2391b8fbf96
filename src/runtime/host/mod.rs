//! Host (CPU) backend
//!
//! Synchronous execution on the calling thread with heap-allocated
//! buffers. This is the default backend.

mod client;
mod device;
mod runtime;

pub use client::HostClient;
pub use device::HostDevice;
pub use runtime::HostRuntime;
