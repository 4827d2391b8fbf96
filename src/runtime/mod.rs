//! Compute backends: the host CPU and the device accelerator
//!
//! The two runtimes implement the same [`Runtime`] contract. Host work
//! executes synchronously on the calling thread; device work is issued in
//! order onto a single shared per-process compute queue and only blocks at
//! explicit synchronization barriers.

pub mod accel;
pub(crate) mod gather;
pub mod host;
mod traits;

pub use traits::{Device, Runtime, RuntimeClient};
