//! Helpers for tests that go through the global logger.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::{Mutex, MutexGuard};

use crate::libs::print::Print;

static SERIAL: Mutex<()> = Mutex::new(());

/// Serialises tests that use the global logger or the captured serial output.
pub fn serial_lock() -> MutexGuard<'static, ()> {
    SERIAL.lock()
}

/// A recording sink whose bytes stay readable after it is handed over for good.
#[derive(Clone, Default)]
pub struct SharedSink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `'static` handle on the same buffer, as [`set_stream`] on the global
    /// logger requires.
    ///
    /// [`set_stream`]: crate::StreamLogger::set_stream
    pub fn leak(&self) -> &'static mut (dyn Print + Send) {
        Box::leak(Box::new(self.clone()))
    }

    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }
}

impl Print for SharedSink {
    fn write(&mut self, byte: u8) -> usize {
        self.bytes.lock().push(byte);
        1
    }
}
