use chrono::NaiveDate;

use crate::error::Error;
use crate::model::{AnalyticsSummary, SessionRecord};

use super::content::{ContentStream, Rgb};
use super::table::{render_rows, render_table_header};
use super::writer::A4_WIDTH;

pub const PAGE_WIDTH: f32 = A4_WIDTH;
pub const MARGIN: f32 = 50.0;

const INDIGO: Rgb = Rgb(0.388, 0.4, 0.945);
const SUBTLE_TEXT: Rgb = Rgb(0.4, 0.4, 0.4);
const TILE_FILL: Rgb = Rgb(0.95, 0.95, 1.0);
const TILE_BORDER: Rgb = Rgb(0.8, 0.8, 0.9);
const TILE_LABEL: Rgb = Rgb(0.45, 0.45, 0.55);
const DIVIDER: Rgb = Rgb(0.85, 0.85, 0.9);
const FOOTER_RULE: Rgb = Rgb(0.8, 0.8, 0.9);
const FOOTER_TEXT: Rgb = Rgb(0.6, 0.6, 0.7);

const BANNER: &str = "🎯 InterviewAce — Practice History Report";
const FOOTER: &str =
    "InterviewAce · AI-Powered Interview Preparation · github.com/Leelasankar-09/interviewace";

/// Page-level facts shared by every element drawn on a page.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    pub user_name: &'a str,
    /// 1-based.
    pub page_number: usize,
    pub total_pages: usize,
    pub generated: NaiveDate,
}

/// Lays out one report page. Summary tiles are drawn only on page 1 and only
/// when `analytics` is present. Output depends on nothing but the arguments.
pub fn build_page_content(
    sessions: &[SessionRecord],
    analytics: Option<&AnalyticsSummary>,
    ctx: &PageContext<'_>,
) -> Result<String, Error> {
    if ctx.page_number == 0 || ctx.page_number > ctx.total_pages {
        return Err(Error::Layout(format!(
            "page {} is outside a {}-page document",
            ctx.page_number, ctx.total_pages
        )));
    }

    let mut content = ContentStream::new();

    render_banner(&mut content);
    let mut y = render_title(&mut content, ctx);

    if ctx.page_number == 1 {
        if let Some(analytics) = analytics {
            y = render_summary_tiles(&mut content, analytics, y);
        }
    }

    render_table_header(&mut content, y);
    let (drawn, _) = render_rows(&mut content, sessions, y - 22.0);
    render_footer(&mut content);

    log::debug!(
        "Page {}/{}: {} of {} rows drawn, {} content bytes",
        ctx.page_number,
        ctx.total_pages,
        drawn,
        sessions.len(),
        content.as_str().len()
    );

    Ok(content.finish())
}

fn render_banner(content: &mut ContentStream) {
    content.set_fill_color(INDIGO);
    content.rect(0.0, 820.0, PAGE_WIDTH, 25.0, true);
    content.set_fill_color(Rgb::WHITE);
    content.text(MARGIN, 828.0, BANNER, 12.0, true);
    content.set_fill_color(Rgb::BLACK);
}

/// Returns the cursor below the title block.
fn render_title(content: &mut ContentStream, ctx: &PageContext<'_>) -> f32 {
    let y = 790.0;
    content.set_fill_color(INDIGO);
    content.text(
        MARGIN,
        y,
        &format!("Practice Report — {}", ctx.user_name),
        16.0,
        true,
    );
    content.set_fill_color(SUBTLE_TEXT);
    content.text(
        MARGIN,
        y - 18.0,
        &format!(
            "Generated: {}   Page {} of {}",
            ctx.generated.format("%-d %B %Y"),
            ctx.page_number,
            ctx.total_pages
        ),
        8.0,
        false,
    );
    content.set_fill_color(Rgb::BLACK);
    y - 40.0
}

fn render_summary_tiles(content: &mut ContentStream, analytics: &AnalyticsSummary, mut y: f32) -> f32 {
    content.set_line_width(0.5);
    content.set_stroke_color(TILE_BORDER);

    let tile_w = (PAGE_WIDTH - MARGIN * 2.0) / 4.0;
    let tiles = [
        ("Total Sessions", analytics.total_sessions.unwrap_or(0).to_string()),
        ("Avg Score", format!("{}%", analytics.avg_score.unwrap_or(0.0))),
        ("Best Score", format!("{}%", analytics.best_score.unwrap_or(0.0))),
        ("Streak Days", format!("{} 🔥", analytics.streak_days.unwrap_or(0))),
    ];
    for (i, (label, value)) in tiles.iter().enumerate() {
        let sx = MARGIN + i as f32 * tile_w;
        content.set_fill_color(TILE_FILL);
        content.rect(sx, y - 30.0, tile_w - 6.0, 40.0, true);
        content.set_fill_color(INDIGO);
        content.text(sx + 6.0, y - 8.0, value, 14.0, true);
        content.set_fill_color(TILE_LABEL);
        content.text(sx + 6.0, y - 22.0, label, 7.0, false);
    }
    content.set_fill_color(Rgb::BLACK);
    y -= 52.0;

    content.set_stroke_color(DIVIDER);
    content.set_line_width(0.5);
    content.line(MARGIN, y, PAGE_WIDTH - MARGIN, y);
    y - 16.0
}

fn render_footer(content: &mut ContentStream) {
    content.set_stroke_color(FOOTER_RULE);
    content.set_line_width(0.5);
    content.line(MARGIN, 40.0, PAGE_WIDTH - MARGIN, 40.0);
    content.set_fill_color(FOOTER_TEXT);
    content.text(MARGIN, 28.0, FOOTER, 7.0, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(page_number: usize, total_pages: usize) -> PageContext<'static> {
        PageContext {
            user_name: "Asha (QA)",
            page_number,
            total_pages,
            generated: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        }
    }

    fn analytics() -> AnalyticsSummary {
        AnalyticsSummary {
            total_sessions: Some(30),
            avg_score: Some(85.0),
            best_score: Some(95.0),
            streak_days: Some(5),
        }
    }

    #[test]
    fn title_block_and_footer() {
        let text = build_page_content(&[], None, &ctx(2, 3)).unwrap();
        assert!(text.starts_with("0.388 0.4 0.945 rg\n0 820 595 25 re f\n1 1 1 rg\n"));
        assert!(text.contains("BT /F2 12 Tf 50 828 Td (? InterviewAce ? Practice History Report) Tj ET"));
        assert!(text.contains("BT /F2 16 Tf 50 790 Td (Practice Report ? Asha \\(QA\\)) Tj ET"));
        assert!(text.contains("(Generated: 16 October 2026   Page 2 of 3)"));
        assert!(text.contains("BT /F2 8 Tf 54 752 Td (Date) Tj ET"));
        assert!(text.ends_with(
            "50 40 m 545 40 l S\n0.6 0.6 0.7 rg\nBT /F1 7 Tf 50 28 Td (InterviewAce ? AI-Powered Interview Preparation ? github.com/Leelasankar-09/interviewace) Tj ET"
        ));
    }

    #[test]
    fn tiles_only_on_first_page() {
        let first = build_page_content(&[], Some(&analytics()), &ctx(1, 2)).unwrap();
        let second = build_page_content(&[], Some(&analytics()), &ctx(2, 2)).unwrap();
        for label in ["Total Sessions", "Avg Score", "Best Score", "Streak Days"] {
            assert!(first.contains(label), "{label}");
            assert!(!second.contains(label), "{label}");
        }
        assert!(first.contains("BT /F2 14 Tf 56 742 Td (30) Tj ET"));
        assert!(first.contains("BT /F2 14 Tf 179.75 742 Td (85%) Tj ET"));
        assert!(first.contains("BT /F2 14 Tf 303.5 742 Td (95%) Tj ET"));
        assert!(first.contains("BT /F2 14 Tf 427.25 742 Td (5 ?) Tj ET"));
        assert!(first.contains("0.95 0.95 1 rg\n50 720 117.75 40 re f"));
        // Table header moves down below the tiles and divider.
        assert!(first.contains("50 698 m 545 698 l S"));
        assert!(first.contains("BT /F2 8 Tf 54 684 Td (Date) Tj ET"));
    }

    #[test]
    fn missing_analytics_fields_render_as_zero() {
        let text = build_page_content(&[], Some(&AnalyticsSummary::default()), &ctx(1, 1)).unwrap();
        assert!(text.contains("(0) Tj"));
        assert!(text.contains("(0%) Tj"));
        assert!(text.contains("(0 ?) Tj"));
    }

    #[test]
    fn output_is_deterministic() {
        let sessions = vec![
            SessionRecord {
                created_at: Some("2025-02-01T09:00:00".into()),
                session_type: Some("voice".into()),
                overall_score: Some(64.0),
                ..Default::default()
            };
            5
        ];
        let a = build_page_content(&sessions, Some(&analytics()), &ctx(1, 1)).unwrap();
        let b = build_page_content(&sessions, Some(&analytics()), &ctx(1, 1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_page_outside_document() {
        assert!(matches!(
            build_page_content(&[], None, &ctx(0, 1)),
            Err(Error::Layout(_))
        ));
        assert!(matches!(
            build_page_content(&[], None, &ctx(3, 2)),
            Err(Error::Layout(_))
        ));
    }
}
