//! Sequential batch annotation
//!
//! Resolves identifiers one at a time, in input order, pausing a fixed delay
//! between consecutive lookups so the run stays under NCBI's request-rate
//! policy. The pause is unconditional and is not adjusted by responses.

use crate::entrez::GeneDatabase;
use crate::resolver::{FailureKind, Resolver};
use locus_common::types::AnnotationRecord;
use std::time::Duration;
use tracing::{info, warn};

/// Default pause between consecutive identifiers, in milliseconds
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 340;

/// Receives progress while a batch runs
pub trait BatchObserver {
    /// Called before the identifier at `index` (1-based) is resolved
    fn on_start(&self, _index: usize, _total: usize, _input_id: &str) {}

    /// Called once the identifier's record is ready
    fn on_record(&self, _record: &AnnotationRecord) {}

    /// Run `emit` while any terminal display is cleared, so log lines written
    /// to stderr do not interleave with it
    fn suspended(&self, emit: &mut dyn FnMut()) {
        emit();
    }
}

impl BatchObserver for () {}

/// Outcome counts of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub resolved: usize,
    pub not_found: usize,
    pub invalid: usize,
    pub errors: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.resolved + self.not_found + self.invalid + self.errors
    }

    fn count(&mut self, outcome: Option<FailureKind>) {
        match outcome {
            None => self.resolved += 1,
            Some(FailureKind::NotFound) => self.not_found += 1,
            Some(FailureKind::InvalidFormat) => self.invalid += 1,
            Some(FailureKind::Remote) => self.errors += 1,
        }
    }
}

/// Records of a finished batch, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub records: Vec<AnnotationRecord>,
    pub summary: BatchSummary,
}

/// Annotate `ids` in order, one record per identifier.
///
/// Callers pass identifiers already de-duplicated; see
/// [`locus_common::table::collect_identifiers`].
pub async fn annotate_all<D, O>(
    resolver: &Resolver<D>,
    ids: &[String],
    delay: Duration,
    observer: &O,
) -> BatchReport
where
    D: GeneDatabase,
    O: BatchObserver + ?Sized,
{
    let total = ids.len();
    let mut report = BatchReport {
        records: Vec::with_capacity(total),
        summary: BatchSummary::default(),
    };

    for (position, input_id) in ids.iter().enumerate() {
        if position > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        observer.on_start(position + 1, total, input_id);

        let record = match resolver.resolve(input_id).await {
            Ok(record) => {
                report.summary.count(None);
                record
            },
            Err(err) => {
                if err.kind() == FailureKind::Remote {
                    observer.suspended(&mut || {
                        warn!(input_id = %input_id, error = %err, "Lookup failed");
                    });
                }
                report.summary.count(Some(err.kind()));
                err.to_record(input_id)
            },
        };

        observer.on_record(&record);
        report.records.push(record);
    }

    info!(
        total,
        resolved = report.summary.resolved,
        not_found = report.summary.not_found,
        invalid = report.summary.invalid,
        errors = report.summary.errors,
        "Batch complete"
    );

    report
}
