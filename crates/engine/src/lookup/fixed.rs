use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use relist_types::{LookupRejection, LookupRequest, RawRecord};

use super::RecordLookup;

/// In-memory lookup that always answers with the same outcome.
///
/// Records the number of invocations and the last request so callers can
/// assert on whether (and how) the service was reached.
#[derive(Debug)]
pub struct StaticLookup {
    outcome: Result<Vec<RawRecord>, LookupRejection>,
    calls: AtomicUsize,
    last_request: Mutex<Option<LookupRequest>>,
}

impl StaticLookup {
    pub fn records(records: Vec<RawRecord>) -> Self {
        Self::with_outcome(Ok(records))
    }

    pub fn rejecting(rejection: LookupRejection) -> Self {
        Self::with_outcome(Err(rejection))
    }

    fn with_outcome(outcome: Result<Vec<RawRecord>, LookupRejection>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<LookupRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait::async_trait]
impl RecordLookup for StaticLookup {
    async fn fetch_related(&self, request: &LookupRequest) -> Result<Vec<RawRecord>, LookupRejection> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.outcome.clone()
    }
}
