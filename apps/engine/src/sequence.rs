//! Stale-response guard for callers that recompute on refresh or live search.
//!
//! Each request is tagged with a ticket from `issue()`. When its computation finishes, the
//! result is applied only if its ticket is newer than the last one applied; older results
//! are dropped. Dropping is advisory: the computation itself is never interrupted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

#[derive(Debug, Default)]
pub struct SequenceGuard {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ticket. Strictly increasing, starting at 1.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Marks `seq` as applied if it is newer than every ticket applied so far.
    pub fn accept(&self, seq: u64) -> bool {
        let mut current = self.applied.load(Ordering::SeqCst);
        loop {
            if seq <= current {
                debug!(seq, last_applied = current, "discarding stale result");
                return false;
            }
            match self
                .applied
                .compare_exchange(current, seq, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}

/// Holds the most recently *issued* result that has completed, ignoring late arrivals
/// from older requests.
#[derive(Debug, Default)]
pub struct LatestResult<T> {
    guard: SequenceGuard,
    value: Mutex<Option<(u64, T)>>,
}

impl<T: Clone> LatestResult<T> {
    pub fn new() -> Self {
        Self {
            guard: SequenceGuard::new(),
            value: Mutex::new(None),
        }
    }

    pub fn issue(&self) -> u64 {
        self.guard.issue()
    }

    /// Stores `value` if `seq` is the newest completed ticket. Returns whether it was kept.
    pub fn offer(&self, seq: u64, value: T) -> bool {
        let mut slot = self.value.lock().unwrap_or_else(|e| e.into_inner());
        if !self.guard.accept(seq) {
            return false;
        }
        *slot = Some((seq, value));
        true
    }

    pub fn current(&self) -> Option<T> {
        self.value
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|(_, v)| v.clone())
    }

    pub fn current_seq(&self) -> Option<u64> {
        self.value
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|(seq, _)| *seq)
    }
}
