//! Accelerator client

use super::device::AccelDevice;
use super::queue::{Arena, Command, Queue};
use super::runtime::AccelRuntime;
use crate::runtime::RuntimeClient;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::mpsc;

/// Client for the accelerator backend.
///
/// Cheap to clone; all clients for a device share the process-wide
/// command queue. Operations are issued asynchronously and execute in
/// issue order; `synchronize` and blocking reads act as barriers.
#[derive(Clone)]
pub struct AccelClient {
    device: AccelDevice,
    queue: Queue,
}

impl AccelClient {
    pub(crate) fn new(device: AccelDevice) -> Self {
        Self {
            device,
            queue: Queue::global().clone(),
        }
    }

    /// Issues a kernel without waiting for it.
    pub(crate) fn run<F>(&self, f: F)
    where
        F: FnOnce(&mut Arena) + Send + 'static,
    {
        self.queue.submit_infallible(Command::Run(Box::new(f)));
    }

    /// Issues a kernel and blocks until it has produced its result.
    pub(crate) fn run_blocking<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&mut Arena) -> O + Send + 'static,
        O: Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.queue.submit_infallible(Command::Run(Box::new(move |arena| {
            let _ = tx.send(f(arena));
        })));
        rx.recv().expect("accelerator worker is gone")
    }
}

impl RuntimeClient<AccelRuntime> for AccelClient {
    fn device(&self) -> &AccelDevice {
        &self.device
    }

    fn synchronize(&self) {
        self.queue.fence();
    }
}

/// Returns the cached client for `device`, creating it on first use.
pub(crate) fn get_or_create_client(device: &AccelDevice) -> AccelClient {
    static CLIENTS: Mutex<Option<HashMap<usize, AccelClient>>> = Mutex::new(None);

    use crate::runtime::Device;
    let mut guard = CLIENTS.lock();
    let map = guard.get_or_insert_with(HashMap::new);
    map.entry(device.id())
        .or_insert_with(|| AccelClient::new(device.clone()))
        .clone()
}
