//! Report rendering and filename assembly
//!
//! Turns one scored entry into the operator-facing text block and the
//! timestamped filename it is saved under. Pure string building; writing
//! lives in `persist`.

use chrono::{DateTime, Local};
use types::ids::EntryId;
use types::score::{Priority, ScoreResult};

/// Timestamp format used in report filenames
const FILENAME_TIMESTAMP: &str = "%Y.%m.%d-%H:%M:%S";

/// Metadata for one scored entry
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub entry_id: EntryId,
    pub scanner: String,
    pub entry_name: String,
    pub recorded_at: DateTime<Local>,
}

impl ReportMetadata {
    /// Capture metadata for an entry starting now
    pub fn capture(scanner: impl Into<String>, entry_name: impl Into<String>) -> Self {
        Self {
            entry_id: EntryId::new(),
            scanner: scanner.into(),
            entry_name: entry_name.into(),
            recorded_at: Local::now(),
        }
    }
}

/// Render the result block for one score.
pub fn render_results(result: &ScoreResult) -> String {
    format!(
        "\nData Severity Rating (DSV): {}\
         \nThreat Score (T): {}\
         \nLevel of Effort Quotient (LOEQ): {}\
         \nIR Value (Threat Score × LOEQ): {}\
         \n\nPriority Level: {}",
        result.dsv, result.threat_score, result.loeq, result.inherent_risk, result.priority,
    )
}

/// Render the full report: the question/answer transcript followed by the
/// result block.
pub fn render_report(transcript: &[String], result: &ScoreResult) -> String {
    let mut report = transcript.join("\n");
    report.push('\n');
    report.push_str(&render_results(result));
    report
}

/// Assemble the report filename:
/// `{scanner}_{priority}_{timestamp}_{entry}.txt`
pub fn build_filename(metadata: &ReportMetadata, priority: Priority) -> String {
    format!(
        "{}_{}_{}_{}.txt",
        metadata.scanner,
        priority,
        metadata.recorded_at.format(FILENAME_TIMESTAMP),
        metadata.entry_name,
    )
}
