//! FAME lead-role test
//!
//! A movie passes when at least half of its lead-credited rows are female.
//! Movies are processed in first-seen order; each consumes the next block of
//! rows from the record stream, sized by its row count. Rows for a movie are
//! assumed contiguous in the source file. That is not checked: a table that
//! interleaves movies shifts rows across movie boundaries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FameConfig;
use crate::records::CastRecord;

/// Outcome of the test for one movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FameResult {
    pub leads: usize,
    pub female_leads: usize,
    pub passed: bool,
}

impl FameResult {
    /// Share of lead rows that are female, `None` without any lead rows
    pub fn ratio(&self) -> Option<f64> {
        if self.leads == 0 {
            None
        } else {
            Some(self.female_leads as f64 / self.leads as f64)
        }
    }

    /// `1` for a pass, `0` otherwise
    pub fn flag(&self) -> u8 {
        u8::from(self.passed)
    }
}

/// Per-movie results keyed by movie, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FameReport {
    pub results: IndexMap<String, FameResult>,
}

impl FameReport {
    pub fn get(&self, movie: &str) -> Option<&FameResult> {
        self.results.get(movie)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FameResult)> {
        self.results.iter().map(|(m, r)| (m.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.results.values().filter(|r| r.passed).count()
    }
}

/// Score one movie's rows
pub fn score<'a>(rows: impl IntoIterator<Item = &'a CastRecord>, config: &FameConfig) -> FameResult {
    let mut leads = 0;
    let mut female_leads = 0;

    for row in rows {
        if row.is_lead(&config.lead_marker) {
            leads += 1;
            if row.gender.contains(config.female_marker.as_str()) {
                female_leads += 1;
            }
        }
    }

    let passed = leads > 0 && female_leads as f64 / leads as f64 >= config.threshold;
    FameResult {
        leads,
        female_leads,
        passed,
    }
}

/// Run the test over `records`, consuming `count` rows for each `(movie, count)` in order
pub fn compute(records: &[CastRecord], blocks: &[(&str, usize)], config: &FameConfig) -> FameReport {
    let mut rows = records.iter();
    let mut report = FameReport::default();

    for &(movie, count) in blocks {
        let result = score(rows.by_ref().take(count), config);
        debug!(
            "{}: {}/{} female leads, passed = {}",
            movie, result.female_leads, result.leads, result.passed
        );
        report.results.insert(movie.to_string(), result);
    }

    report
}
