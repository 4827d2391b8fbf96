//! Host device implementation

use crate::runtime::Device;

/// Host device (there's only one: the host CPU)
#[derive(Clone, Debug, Default)]
pub struct HostDevice {
    id: usize,
}

impl HostDevice {
    /// Create a new host device
    pub fn new() -> Self {
        Self { id: 0 }
    }
}

impl Device for HostDevice {
    fn id(&self) -> usize {
        self.id
    }

    fn name(&self) -> String {
        "host".to_string()
    }
}
