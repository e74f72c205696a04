//! Shared result aggregation for concurrent fetch units

use parking_lot::Mutex;
use stratus_core::MetricRecord;

/// Append-only collection shared by the fetch units of one job.
///
/// The lock is held only for the append itself; remote calls and record
/// construction happen outside the critical section.
#[derive(Debug, Default)]
pub(crate) struct ResultSink {
    records: Mutex<Vec<MetricRecord>>,
}

impl ResultSink {
    pub(crate) fn append(&self, records: Vec<MetricRecord>) {
        if records.is_empty() {
            return;
        }
        self.records.lock().extend(records);
    }

    /// Drain the accumulated records. Only meaningful after every producer
    /// has finished.
    pub(crate) fn take(&self) -> Vec<MetricRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}
