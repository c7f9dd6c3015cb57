// src/engine/gate.rs

//! At-most-one in-flight request.
//!
//! A [`RequestGate`] stands in for the "analyze" and "suggest" controls:
//! while an [`InFlight`] guard is alive the controls are disabled, and the
//! guard re-enables them when dropped, whatever path the request took.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    busy: Arc<AtomicBool>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is in flight (controls disabled).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the gate, or `None` if another request already holds it.
    pub fn try_acquire(&self) -> Option<InFlight> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        trace!("request gate acquired");
        Some(InFlight {
            busy: Arc::clone(&self.busy),
        })
    }
}

/// Proof that the holder owns the gate. Releases it on drop.
#[derive(Debug)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        trace!("request gate released");
    }
}
