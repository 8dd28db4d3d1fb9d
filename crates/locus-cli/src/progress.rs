//! Progress bar utilities for CLI operations
//!
//! Draws to stderr and stays hidden when stderr is not a terminal.

use crate::batch::BatchObserver;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use locus_common::types::AnnotationRecord;

/// Create a progress bar counting identifiers
pub fn create_progress_bar(total: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

impl BatchObserver for ProgressBar {
    fn on_start(&self, index: usize, total: usize, input_id: &str) {
        self.set_message(format!("Processing {}/{}: {}", index, total, input_id));
    }

    fn on_record(&self, _record: &AnnotationRecord) {
        self.inc(1);
    }

    fn suspended(&self, emit: &mut dyn FnMut()) {
        self.suspend(emit);
    }
}
