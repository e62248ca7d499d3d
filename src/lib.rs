mod error;
mod fonts;
mod input;
mod model;
mod pdf;

pub use error::Error;
pub use input::{load_analytics, load_sessions, parse_analytics, parse_sessions};
pub use model::{AnalyticsSummary, SessionRecord};
pub use pdf::{ROWS_PER_PAGE, ScoreBand, page_count};

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;

/// `interviewace-report-YYYY-MM-DD.pdf`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("interviewace-report-{}.pdf", date.format("%Y-%m-%d"))
}

/// Renders the report to PDF bytes. `generated` is printed in every page's
/// title block; identical arguments produce identical bytes.
pub fn render_report(
    sessions: &[SessionRecord],
    analytics: Option<&AnalyticsSummary>,
    user_name: &str,
    generated: NaiveDate,
) -> Result<Vec<u8>, Error> {
    pdf::render(sessions, analytics, user_name, generated)
}

/// Renders the report dated today (local time) and saves it in `out_dir`
/// under its conventional file name. Returns the written path.
pub fn write_report(
    sessions: &[SessionRecord],
    analytics: Option<&AnalyticsSummary>,
    user_name: &str,
    out_dir: &Path,
) -> Result<PathBuf, Error> {
    let today = chrono::Local::now().date_naive();
    write_report_dated(sessions, analytics, user_name, today, &out_dir.join(report_file_name(today)))
}

/// Like [`write_report`] with an explicit date and destination.
pub fn write_report_dated(
    sessions: &[SessionRecord],
    analytics: Option<&AnalyticsSummary>,
    user_name: &str,
    generated: NaiveDate,
    output: &Path,
) -> Result<PathBuf, Error> {
    let t0 = Instant::now();

    let bytes = render_report(sessions, analytics, user_name, generated)?;
    let t_render = t0.elapsed();

    // The file is only created once the whole document exists in memory.
    std::fs::write(output, &bytes).map_err(|e| {
        Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", e, output.display())))
    })?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(output.to_path_buf())
}

/// Exports the report into `out_dir`. Every failure, including a panic while
/// rendering, is logged and reported as `false`; callers may simply retry.
pub fn export_report(
    sessions: &[SessionRecord],
    analytics: Option<&AnalyticsSummary>,
    user_name: &str,
    out_dir: &Path,
) -> bool {
    let result = catch_unwind(AssertUnwindSafe(|| {
        write_report(sessions, analytics, user_name, out_dir)
    }));
    match result {
        Ok(Ok(path)) => {
            log::info!("Report saved to {}", path.display());
            true
        }
        Ok(Err(e)) => {
            log::error!("PDF export failed: {e}");
            false
        }
        Err(_) => {
            log::error!("PDF export failed: renderer panicked");
            false
        }
    }
}
