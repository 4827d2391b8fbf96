//! Device identity

/// Identity of an execution device.
///
/// Exactly two device kinds exist, the host CPU and the accelerator,
/// so the trait carries only what placement and diagnostics need.
pub trait Device: Clone + Send + Sync + 'static {
    /// Ordinal of this device within its backend.
    fn id(&self) -> usize;

    /// Human-readable name for diagnostics.
    fn name(&self) -> String;
}
