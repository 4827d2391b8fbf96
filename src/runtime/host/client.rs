//! Host client implementation

use super::device::HostDevice;
use super::runtime::HostRuntime;
use crate::runtime::RuntimeClient;

/// Host client for operation dispatch
#[derive(Clone, Debug, Default)]
pub struct HostClient {
    device: HostDevice,
}

impl HostClient {
    /// Create a new host client
    pub fn new(device: HostDevice) -> Self {
        Self { device }
    }
}

impl RuntimeClient<HostRuntime> for HostClient {
    fn device(&self) -> &HostDevice {
        &self.device
    }

    fn synchronize(&self) {
        // Host operations are synchronous, nothing to do
    }
}
