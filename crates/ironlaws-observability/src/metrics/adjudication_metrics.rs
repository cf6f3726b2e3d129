//! Cumulative counters over adjudication reports.

use std::collections::BTreeMap;

use ironlaws_core::{IronLawsReport, LawCode, Severity, Verdict};
use serde::{Deserialize, Serialize};

/// Counters over every report recorded since creation or the last reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationMetrics {
    pub total_validations: u64,
    /// Reports whose initial verdict sent them through repair.
    pub repair_attempts: u64,
    /// Repairs that ended valid or approved with warnings.
    pub successful_repairs: u64,
    pub rejections: u64,
    pub catastrophic_failures: u64,
    /// Final verdict → count.
    pub verdict_counts: BTreeMap<Verdict, u64>,
    /// Original violations by law code and severity.
    #[serde(with = "histogram_entries")]
    pub violation_histogram: BTreeMap<(LawCode, Severity), u64>,
}

impl AdjudicationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &IronLawsReport) {
        self.total_validations += 1;
        if report.was_repaired() {
            self.repair_attempts += 1;
            if report.repair_succeeded() {
                self.successful_repairs += 1;
            }
        }
        match report.overall_result {
            Verdict::Rejected => self.rejections += 1,
            Verdict::CatastrophicFailure => self.catastrophic_failures += 1,
            _ => {}
        }
        *self.verdict_counts.entry(report.overall_result).or_default() += 1;
        for violation in &report.violations {
            *self
                .violation_histogram
                .entry((violation.law_code, violation.severity))
                .or_default() += 1;
        }
    }

    /// Successful repairs over attempted repairs; 0.0 when nothing was repaired.
    pub fn repair_success_rate(&self) -> f64 {
        if self.repair_attempts == 0 {
            return 0.0;
        }
        self.successful_repairs as f64 / self.repair_attempts as f64
    }

    pub fn verdict_count(&self, verdict: Verdict) -> u64 {
        self.verdict_counts.get(&verdict).copied().unwrap_or(0)
    }

    /// Violations recorded for one law code, across all severities.
    pub fn violations_for(&self, code: LawCode) -> u64 {
        self.violation_histogram
            .iter()
            .filter(|((c, _), _)| *c == code)
            .map(|(_, n)| n)
            .sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// JSON object keys must be strings, so the `(law, severity)` histogram is
/// written as a list of entries.
mod histogram_entries {
    use std::collections::BTreeMap;

    use ironlaws_core::{LawCode, Severity};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Entry {
        law_code: LawCode,
        severity: Severity,
        count: u64,
    }

    pub fn serialize<S>(map: &BTreeMap<(LawCode, Severity), u64>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<Entry> = map
            .iter()
            .map(|(&(law_code, severity), &count)| Entry {
                law_code,
                severity,
                count,
            })
            .collect();
        entries.serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<BTreeMap<(LawCode, Severity), u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(d)?;
        let mut map = BTreeMap::new();
        for e in entries {
            *map.entry((e.law_code, e.severity)).or_default() += e.count;
        }
        Ok(map)
    }
}
