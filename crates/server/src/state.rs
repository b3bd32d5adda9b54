//! Application state shared across handlers
//!
//! The artifact bundle is established once before the listener starts and
//! never mutated, so handlers read it concurrently without locking.

use artifact::Bundle;
use std::sync::Arc;

/// Read-only handle to the loaded artifacts
#[derive(Clone)]
pub struct AppState {
    bundle: Arc<Bundle>,
}

impl AppState {
    /// Wrap a loaded bundle for sharing across handlers
    pub fn new(bundle: Bundle) -> Self {
        Self {
            bundle: Arc::new(bundle),
        }
    }

    /// The loaded artifacts
    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }
}
