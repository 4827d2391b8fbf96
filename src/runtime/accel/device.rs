//! Accelerator device handle

use crate::runtime::Device;

/// An accelerator device identified by ordinal.
///
/// The backend exposes a single logical device per process; distinct
/// ordinals still compare as different devices for placement checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccelDevice {
    id: usize,
}

impl AccelDevice {
    /// Creates a handle to device `id`.
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl Default for AccelDevice {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Device for AccelDevice {
    fn id(&self) -> usize {
        self.id
    }

    fn name(&self) -> String {
        format!("accel:{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_identity() {
        assert_eq!(AccelDevice::default().id(), 0);
        assert_eq!(AccelDevice::new(3).name(), "accel:3");
        assert_ne!(AccelDevice::new(0), AccelDevice::new(1));
    }
}
