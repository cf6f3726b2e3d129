//! Lock-free metrics sink for parallel adjudication.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use ironlaws_core::traits::MetricsSink;
use ironlaws_core::{IronLawsReport, LawCode, Severity, Verdict};

use super::AdjudicationMetrics;

/// Shared counters. Record from any thread; [`snapshot`](Self::snapshot) to read.
#[derive(Debug, Default)]
pub struct ConcurrentMetrics {
    total_validations: AtomicU64,
    repair_attempts: AtomicU64,
    successful_repairs: AtomicU64,
    rejections: AtomicU64,
    catastrophic_failures: AtomicU64,
    verdict_counts: DashMap<Verdict, u64>,
    violation_histogram: DashMap<(LawCode, Severity), u64>,
}

impl ConcurrentMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, report: &IronLawsReport) {
        self.total_validations.fetch_add(1, Ordering::Relaxed);
        if report.was_repaired() {
            self.repair_attempts.fetch_add(1, Ordering::Relaxed);
            if report.repair_succeeded() {
                self.successful_repairs.fetch_add(1, Ordering::Relaxed);
            }
        }
        match report.overall_result {
            Verdict::Rejected => {
                self.rejections.fetch_add(1, Ordering::Relaxed);
            }
            Verdict::CatastrophicFailure => {
                self.catastrophic_failures.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
        *self.verdict_counts.entry(report.overall_result).or_insert(0) += 1;
        for violation in &report.violations {
            *self
                .violation_histogram
                .entry((violation.law_code, violation.severity))
                .or_insert(0) += 1;
        }
    }

    pub fn total_validations(&self) -> u64 {
        self.total_validations.load(Ordering::Relaxed)
    }

    /// Point-in-time copy. Not atomic across counters while recording continues.
    pub fn snapshot(&self) -> AdjudicationMetrics {
        AdjudicationMetrics {
            total_validations: self.total_validations.load(Ordering::Relaxed),
            repair_attempts: self.repair_attempts.load(Ordering::Relaxed),
            successful_repairs: self.successful_repairs.load(Ordering::Relaxed),
            rejections: self.rejections.load(Ordering::Relaxed),
            catastrophic_failures: self.catastrophic_failures.load(Ordering::Relaxed),
            verdict_counts: self
                .verdict_counts
                .iter()
                .map(|e| (*e.key(), *e.value()))
                .collect(),
            violation_histogram: self
                .violation_histogram
                .iter()
                .map(|e| (*e.key(), *e.value()))
                .collect(),
        }
    }

    pub fn reset(&self) {
        self.total_validations.store(0, Ordering::Relaxed);
        self.repair_attempts.store(0, Ordering::Relaxed);
        self.successful_repairs.store(0, Ordering::Relaxed);
        self.rejections.store(0, Ordering::Relaxed);
        self.catastrophic_failures.store(0, Ordering::Relaxed);
        self.verdict_counts.clear();
        self.violation_histogram.clear();
    }
}

impl MetricsSink for ConcurrentMetrics {
    fn record_adjudication(&self, report: &IronLawsReport) {
        self.record(report);
    }
}
