pub(crate) mod content;
pub(crate) mod layout;
pub(crate) mod table;
pub(crate) mod writer;

use chrono::NaiveDate;

use crate::error::Error;
use crate::model::{AnalyticsSummary, SessionRecord};

use layout::{PageContext, build_page_content};
use writer::ObjectWriter;

pub use table::ScoreBand;

pub const ROWS_PER_PAGE: usize = 28;

/// Number of pages a report with `session_count` rows occupies. Never zero.
pub fn page_count(session_count: usize) -> usize {
    session_count.div_ceil(ROWS_PER_PAGE).max(1)
}

pub fn render(
    sessions: &[SessionRecord],
    analytics: Option<&AnalyticsSummary>,
    user_name: &str,
    generated: NaiveDate,
) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let total_pages = page_count(sessions.len());
    let mut pdf = ObjectWriter::new();

    // An empty list still yields one page, hence chunks over at least `[]`.
    let mut chunks: Vec<&[SessionRecord]> = sessions.chunks(ROWS_PER_PAGE).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }
    debug_assert_eq!(chunks.len(), total_pages);

    for (i, page_sessions) in chunks.into_iter().enumerate() {
        let page_number = i + 1;
        let ctx = PageContext {
            user_name,
            page_number,
            total_pages,
            generated,
        };
        let page_analytics = if page_number == 1 { analytics } else { None };
        let text = build_page_content(page_sessions, page_analytics, &ctx)?;
        let content_id = pdf.add_content(&text);
        pdf.add_page(content_id);
    }

    debug_assert_eq!(pdf.page_count(), total_pages);
    let t_layout = t0.elapsed();
    let bytes = pdf.build();

    log::info!(
        "Render phases: layout={:.1}ms, assembly={:.1}ms ({} sessions, {} pages, {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t0.elapsed() - t_layout).as_secs_f64() * 1000.0,
        sessions.len(),
        total_pages,
        bytes.len(),
    );

    Ok(bytes)
}
