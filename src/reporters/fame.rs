//! FAME results file
//!
//! A header line followed by `<movie>, <0|1>` per movie in first-seen order.

use crate::error::Result;
use crate::fame::FameReport;
use std::path::Path;
use tracing::info;

/// Header written as the first line of the report
pub const HEADER: &str = "Movie, FAME Results";

/// Render FAME results as text
pub fn render(report: &FameReport) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for (movie, result) in report.iter() {
        out.push_str(&format!("{}, {}\n", movie, result.flag()));
    }
    out
}

/// Write FAME results to `path`
pub fn write(report: &FameReport, path: &Path) -> Result<()> {
    super::write_atomic(path, &render(report))?;
    info!(
        "Wrote FAME results for {} movies to {}",
        report.len(),
        path.display()
    );
    Ok(())
}
