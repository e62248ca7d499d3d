use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::SessionRecord;

use super::content::{ContentStream, Rgb};
use super::layout::{MARGIN, PAGE_WIDTH};

/// Left edge of each column: Date, Type, Score, Grade, Duration, Question.
pub const COLUMN_X: [f32; 6] = [
    MARGIN + 4.0,
    MARGIN + 130.0,
    MARGIN + 210.0,
    MARGIN + 280.0,
    MARGIN + 330.0,
    MARGIN + 390.0,
];
const HEADERS: [&str; 6] = ["Date", "Type", "Score", "Grade", "Duration", "Question"];

const HEADER_FILL: Rgb = Rgb(0.15, 0.15, 0.25);
const ZEBRA_FILL: Rgb = Rgb(0.97, 0.97, 1.0);
const QUESTION_COLOR: Rgb = Rgb(0.3, 0.3, 0.4);

pub const ROW_PITCH: f32 = 17.0;
/// Rows whose baseline would land below this are not drawn.
pub const BOTTOM_GUARD: f32 = 60.0;

const TYPE_MAX_CHARS: usize = 10;
const QUESTION_MAX_CHARS: usize = 40;

pub const MISSING: &str = "—";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    Strong,
    /// 60 up to but excluding 80.
    Fair,
    Weak,
}

impl ScoreBand {
    /// A missing score is treated as 0.
    pub fn for_score(score: Option<f64>) -> Self {
        let score = score.unwrap_or(0.0);
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            ScoreBand::Strong => Rgb(0.06, 0.73, 0.51),
            ScoreBand::Fair => Rgb(0.96, 0.62, 0.04),
            ScoreBand::Weak => Rgb(0.94, 0.27, 0.27),
        }
    }
}

/// Display strings for one table row.
#[derive(Debug, PartialEq)]
pub struct RowCells {
    pub date: String,
    pub kind: String,
    pub score: String,
    pub grade: String,
    pub duration: String,
    pub question: String,
}

impl RowCells {
    pub fn from_session(session: &SessionRecord) -> Self {
        RowCells {
            date: format_date(session.created_at.as_deref()),
            kind: session
                .session_type
                .as_deref()
                .unwrap_or_default()
                .to_uppercase()
                .chars()
                .take(TYPE_MAX_CHARS)
                .collect(),
            score: match session.overall_score {
                Some(score) => format!("{score}%"),
                None => MISSING.to_string(),
            },
            grade: match session.grade.as_deref() {
                Some(grade) if !grade.is_empty() => grade.to_string(),
                _ => MISSING.to_string(),
            },
            duration: match session.duration_secs {
                Some(secs) if secs > 0 => format!("{}m", secs / 60),
                _ => MISSING.to_string(),
            },
            question: session
                .question_text
                .as_deref()
                .unwrap_or_default()
                .chars()
                .take(QUESTION_MAX_CHARS)
                .collect(),
        }
    }
}

/// Accepts RFC 3339, naive ISO-8601 date-times (as the API serializes them)
/// and plain dates. Offset timestamps keep the calendar date of their own offset.
pub fn parse_session_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return MISSING.to_string();
    };
    match parse_session_date(raw) {
        Some(date) => date.format("%-d/%-m/%Y").to_string(),
        None => {
            log::warn!("Unparseable session date {raw:?}, rendering as blank");
            MISSING.to_string()
        }
    }
}

pub fn render_table_header(content: &mut ContentStream, y: f32) {
    content.set_fill_color(HEADER_FILL);
    content.rect(MARGIN, y - 6.0, PAGE_WIDTH - MARGIN * 2.0, 18.0, true);
    content.set_fill_color(Rgb::WHITE);
    for (x, label) in COLUMN_X.iter().zip(HEADERS) {
        content.text(*x, y + 2.0, label, 8.0, true);
    }
    content.set_fill_color(Rgb::BLACK);
}

/// Draws body rows starting at baseline `y`. Returns the number of rows drawn
/// and the cursor after the last one.
pub fn render_rows(content: &mut ContentStream, sessions: &[SessionRecord], mut y: f32) -> (usize, f32) {
    let mut drawn = 0;
    for (idx, session) in sessions.iter().enumerate() {
        if y < BOTTOM_GUARD {
            log::debug!(
                "Row guard reached at y={y}, {} rows not drawn",
                sessions.len() - idx
            );
            break;
        }

        if idx % 2 == 1 {
            content.set_fill_color(ZEBRA_FILL);
            content.rect(MARGIN, y - 4.0, PAGE_WIDTH - MARGIN * 2.0, 16.0, true);
        }

        let cells = RowCells::from_session(session);

        content.set_fill_color(ScoreBand::for_score(session.overall_score).color());
        content.text(COLUMN_X[2], y, &cells.score, 8.0, true);

        content.set_fill_color(Rgb::BLACK);
        content.text(COLUMN_X[0], y, &cells.date, 8.0, false);
        content.text(COLUMN_X[1], y, &cells.kind, 8.0, false);
        content.text(COLUMN_X[3], y, &cells.grade, 8.0, false);
        content.text(COLUMN_X[4], y, &cells.duration, 8.0, false);
        content.set_fill_color(QUESTION_COLOR);
        content.text(COLUMN_X[5], y, &cells.question, 7.0, false);
        content.set_fill_color(Rgb::BLACK);

        y -= ROW_PITCH;
        drawn += 1;
    }
    (drawn, y)
}
