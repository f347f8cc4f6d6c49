// src/driver.rs

use csv::StringRecord;
use tracing::{error, info, instrument, warn};

use crate::controls::ControlRow;
use crate::error::Result;
use crate::issue::IssuePayload;
use crate::tracker::{IssueSink, Submission};

/// Tally printed at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub failed: usize,
}

/// Submit one issue per row, in order. A rejected submission is logged and
/// the next row is tried; malformed rows and transport failures end the run.
#[instrument(level = "info", skip_all)]
pub fn run<I, S>(rows: I, sink: &S) -> Result<RunSummary>
where
    I: IntoIterator<Item = Result<StringRecord>>,
    S: IssueSink + ?Sized,
{
    let mut summary = RunSummary::default();
    let mut seen = 0usize;

    for record in rows {
        let record = record?;
        seen += 1;
        let row = ControlRow::from_record(&record)?;
        let payload = IssuePayload::from_row(&row);

        match sink.submit(&payload)? {
            Submission::Created { title } => {
                info!(%title, "created issue for control");
                summary.created += 1;
            }
            Submission::Rejected {
                title,
                status,
                response,
            } => {
                error!(%title, status, %response, "failed to create issue for control");
                summary.failed += 1;
            }
        }
    }

    if seen == 0 {
        warn!("no controls found in control file");
    }
    info!(
        created = summary.created,
        failed = summary.failed,
        "all rows submitted"
    );
    Ok(summary)
}
