//! Recording test doubles for the synchronizer's collaborators.

use std::cell::RefCell;

use ufn_core::errors::{Result, UfnError, UfnErrorKind};
use ufn_core::model::{Member, Snapshot};
use ufn_core::notify::{NotificationRecord, NotificationSink};
use ufn_core::provider::SourceProvider;
use ufn_core::store::{MemoryStore, SnapshotStore};

/// Provider that returns a pre-scripted snapshot or failure
pub struct ScriptedProvider {
    result: Result<Snapshot>,
}

impl ScriptedProvider {
    #[allow(dead_code)]
    pub fn returning(members: Vec<Member>) -> Self {
        Self {
            result: Ok(Snapshot::from_members(members)),
        }
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            result: Err(UfnError::new(UfnErrorKind::Fetch)
                .with_op("fetch_current")
                .with_message("scripted provider failure")),
        }
    }
}

impl SourceProvider for ScriptedProvider {
    fn fetch(&self) -> Result<Snapshot> {
        self.result.clone()
    }
}

/// Store wrapper that records every applied batch
pub struct RecordingStore {
    inner: MemoryStore,
    pub batches: Vec<(Vec<Member>, Vec<u64>)>,
    fail_reads: bool,
}

impl RecordingStore {
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            inner: MemoryStore::new(),
            batches: Vec::new(),
            fail_reads: false,
        }
    }

    #[allow(dead_code)]
    pub fn seeded(members: Vec<Member>) -> Self {
        Self {
            inner: MemoryStore::with_members(members),
            batches: Vec::new(),
            fail_reads: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    #[allow(dead_code)]
    pub fn cached_snapshot(&self) -> Snapshot {
        self.inner.get_all().unwrap()
    }
}

impl SnapshotStore for RecordingStore {
    fn get_all(&self) -> Result<Snapshot> {
        if self.fail_reads {
            return Err(UfnError::new(UfnErrorKind::StoreRead)
                .with_op("get_all")
                .with_message("scripted read failure"));
        }
        self.inner.get_all()
    }

    fn apply_batch(&mut self, puts: &[Member], deletes: &[u64]) -> Result<()> {
        self.batches.push((puts.to_vec(), deletes.to_vec()));
        self.inner.apply_batch(puts, deletes)
    }
}

/// Sink that records sent records and optionally fails the first N sends
pub struct RecordingSink {
    pub sent: RefCell<Vec<NotificationRecord>>,
    failures_remaining: RefCell<usize>,
}

impl RecordingSink {
    #[allow(dead_code)]
    pub fn accepting() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            failures_remaining: RefCell::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn failing_first(n: usize) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            failures_remaining: RefCell::new(n),
        }
    }

    #[allow(dead_code)]
    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&self, record: &NotificationRecord) -> Result<()> {
        let mut remaining = self.failures_remaining.borrow_mut();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(UfnError::new(UfnErrorKind::Delivery)
                .with_op("send_notification")
                .with_message("scripted delivery failure"));
        }
        self.sent.borrow_mut().push(record.clone());
        Ok(())
    }
}
