//! Trait for runtime clients that handle operation dispatch

use super::Runtime;

/// Trait for runtime clients that handle operation dispatch
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending operations to complete
    ///
    /// Establishes a happens-before relationship between all previously
    /// issued device work and any subsequent host read. A no-op on the
    /// host backend, which executes synchronously.
    fn synchronize(&self);
}
