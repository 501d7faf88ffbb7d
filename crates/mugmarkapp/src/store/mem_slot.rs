use super::SnapshotSlot;
use crate::error::{MugmarkError, Result};
use std::cell::{Cell, RefCell};

/// In-memory slot for tests.
///
/// Uses `RefCell` for interior mutability since the tool is single-threaded,
/// which lets [`SnapshotSlot`] take `&self` everywhere.
#[derive(Default)]
pub struct MemSlot {
    payload: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        let slot = Self::default();
        *slot.payload.borrow_mut() = Some(payload.to_string());
        slot
    }

    /// Enable write error simulation for testing persistence failures.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl SnapshotSlot for MemSlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(MugmarkError::Store("Simulated write error".to_string()));
        }
        *self.payload.borrow_mut() = Some(payload.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
