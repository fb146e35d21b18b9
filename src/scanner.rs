//! Scanning a tree of elements
//!
//! The scanner drives the [`RuleRunner`] over a batch of elements, in
//! parallel when configured, and collects per-element results into a
//! [`ScanReport`]. Cancellation is cooperative: the token is checked between
//! elements and between rules, and results already produced are kept.

use crate::registry::RuleRegistry;
use crate::results::{ScanResults, ScanStatus};
use crate::runner::RuleRunner;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag. Clone freely; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Evaluate elements in parallel.
    pub parallel: bool,
    /// Worker threads when parallel; 0 means one per logical CPU.
    pub jobs: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            jobs: 0,
        }
    }
}

impl ScanOptions {
    fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        }
    }
}

/// All results for one scanned element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementResult {
    pub element_id: i32,
    /// An exclusion rule removed the element from the main pass.
    pub excluded: bool,
    pub results: ScanResults,
}

/// Outcome of a scan over a batch of elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub elements: Vec<ElementResult>,
    pub pass_count: usize,
    pub fail_count: usize,
    pub uncertain_count: usize,
    pub unsupported_count: usize,
    pub duration: Duration,
    /// The scan stopped early on a cancel request; `elements` holds whatever
    /// completed before the stop.
    pub cancelled: bool,
}

impl ScanReport {
    pub fn has_failures(&self) -> bool {
        self.fail_count > 0
    }

    /// Fold another report into this one. Counts add; duration takes the
    /// longer of the two since merged scans ran concurrently.
    pub fn merge(&mut self, other: ScanReport) {
        self.elements.extend(other.elements);
        self.pass_count += other.pass_count;
        self.fail_count += other.fail_count;
        self.uncertain_count += other.uncertain_count;
        self.unsupported_count += other.unsupported_count;
        self.duration = self.duration.max(other.duration);
        self.cancelled |= other.cancelled;
    }

    fn tally(&mut self, results: &ScanResults) {
        self.pass_count += results.count_of(ScanStatus::Pass);
        self.fail_count += results.count_of(ScanStatus::Fail);
        self.uncertain_count += results.count_of(ScanStatus::Uncertain);
        self.unsupported_count += results.count_of(ScanStatus::ScanNotSupported);
    }
}

/// Runs the rule set over batches of elements.
pub struct Scanner {
    registry: Arc<RuleRegistry>,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self::with_options(registry, ScanOptions::default())
    }

    pub fn with_options(registry: Arc<RuleRegistry>, options: ScanOptions) -> Self {
        Self { registry, options }
    }

    /// Scan a batch of elements, two-phase per element: exclusion rules
    /// first, then the main pass for elements that survive.
    pub fn scan(
        &self,
        elements: &[Arc<dyn crate::element::Element>],
        cancel: &CancelToken,
    ) -> ScanReport {
        let start = Instant::now();
        log::debug!(
            "scanning {} elements with {} rules",
            elements.len(),
            self.registry.len()
        );

        let per_element: Vec<Option<ElementResult>> = if self.options.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.effective_jobs())
                .build();
            match pool {
                Ok(pool) => pool.install(|| {
                    elements
                        .par_iter()
                        .map(|e| self.scan_element(e.as_ref(), cancel))
                        .collect()
                }),
                // Pool construction failed (thread limits); fall back to the
                // current thread.
                Err(err) => {
                    log::warn!("thread pool unavailable ({}), scanning serially", err);
                    elements
                        .iter()
                        .map(|e| self.scan_element(e.as_ref(), cancel))
                        .collect()
                }
            }
        } else {
            elements
                .iter()
                .map(|e| self.scan_element(e.as_ref(), cancel))
                .collect()
        };

        let mut report = ScanReport::default();
        for result in per_element.into_iter().flatten() {
            report.tally(&result.results);
            report.elements.push(result);
        }
        report.cancelled = cancel.is_cancelled();
        report.duration = start.elapsed();
        report
    }

    /// Scan a single element. Returns `None` when cancellation preempted the
    /// element entirely.
    fn scan_element(
        &self,
        element: &dyn crate::element::Element,
        cancel: &CancelToken,
    ) -> Option<ElementResult> {
        if cancel.is_cancelled() {
            return None;
        }

        let runner = RuleRunner::new(&self.registry);
        let mut results = ScanResults::new();

        let excluded = runner
            .exclude_from_run(element, &mut results, cancel)
            .ok()?;
        if !excluded {
            runner.run(element, &mut results, cancel).ok()?;
        }

        Some(ElementResult {
            element_id: element.unique_id(),
            excluded,
            results,
        })
    }
}
