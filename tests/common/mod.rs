#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use practice_report_pdf::{AnalyticsSummary, SessionRecord};

/// Output directory: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create output dir");
    dir
}

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn session(score: f64) -> SessionRecord {
    SessionRecord {
        created_at: Some("2026-10-01T18:42:07.311204".into()),
        session_type: Some("voice".into()),
        overall_score: Some(score),
        grade: Some("A".into()),
        duration_secs: Some(600),
        question_text: Some("Describe a project you are proud of.".into()),
    }
}

pub fn sessions(n: usize, score: f64) -> Vec<SessionRecord> {
    (0..n).map(|_| session(score)).collect()
}

pub fn analytics() -> AnalyticsSummary {
    AnalyticsSummary {
        total_sessions: Some(30),
        avg_score: Some(85.0),
        best_score: Some(95.0),
        streak_days: Some(5),
    }
}

/// Minimal reader for the files this crate writes: uncompressed, a single
/// classic xref section, one stream per page.
pub struct ParsedPdf {
    pub text: String,
    /// (object id, offset) for every in-use xref entry.
    pub xref: Vec<(u32, usize)>,
    pub xref_offset: usize,
    pub startxref: usize,
    pub size: usize,
}

impl ParsedPdf {
    pub fn parse(bytes: &[u8]) -> Self {
        let text = String::from_utf8(bytes.to_vec()).expect("report is ASCII");
        assert!(text.is_ascii(), "non-ASCII byte in output");
        let xref_offset = text.find("\nxref\n").expect("xref keyword") + 1;

        let mut lines = text[xref_offset..].lines().skip(1);
        let subsection = lines.next().expect("xref subsection");
        let size: usize = subsection
            .strip_prefix("0 ")
            .and_then(|n| n.parse().ok())
            .expect("xref subsection header");

        let mut xref = Vec::new();
        for id in 0..size {
            let entry = lines.next().expect("xref entry");
            assert_eq!(entry.len() + 1, 20, "entry {id} is not 20 bytes");
            if entry.ends_with(" n ") {
                xref.push((id as u32, entry[..10].parse().unwrap()));
            }
        }

        let startxref = text
            .split("startxref\n")
            .nth(1)
            .and_then(|rest| rest.lines().next())
            .and_then(|n| n.parse().ok())
            .expect("startxref");

        ParsedPdf {
            text,
            xref,
            xref_offset,
            startxref,
            size,
        }
    }

    pub fn offset_of(&self, id: u32) -> usize {
        self.xref
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, off)| *off)
            .unwrap_or_else(|| panic!("object {id} not in xref"))
    }

    /// Dictionary or stream body of object `id`, located through the xref table.
    pub fn object(&self, id: u32) -> &str {
        let start = self.offset_of(id);
        let header = format!("{id} 0 obj\n");
        assert!(self.text[start..].starts_with(&header), "object {id} offset");
        let body_start = start + header.len();
        let end = self.text[body_start..].find("\nendobj\n").expect("endobj") + body_start;
        &self.text[body_start..end]
    }

    pub fn root_id(&self) -> u32 {
        let trailer = &self.text[self.text.find("trailer").expect("trailer")..];
        reference_after(trailer, "/Root ")
    }

    pub fn page_ids(&self) -> Vec<u32> {
        let catalog = self.object(self.root_id());
        let pages = self.object(reference_after(catalog, "/Pages "));
        let kids = &pages[pages.find("/Kids [").unwrap() + 7..];
        let kids = &kids[..kids.find(']').unwrap()];
        kids.split(" 0 R")
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| k.parse().unwrap())
            .collect()
    }

    /// Content stream payload of every page, in page order.
    pub fn page_contents(&self) -> Vec<String> {
        self.page_ids()
            .into_iter()
            .map(|page| {
                let content = self.object(reference_after(self.object(page), "/Contents "));
                let start = content.find("stream\n").expect("stream") + 7;
                let end = content.rfind("\nendstream").expect("endstream");
                content[start..end].to_string()
            })
            .collect()
    }
}

fn reference_after(haystack: &str, key: &str) -> u32 {
    let rest = &haystack[haystack.find(key).unwrap_or_else(|| panic!("{key} missing")) + key.len()..];
    rest.split_whitespace().next().unwrap().parse().unwrap()
}

/// Number of table body rows drawn in a page's content stream.
pub fn body_rows(content: &str) -> usize {
    content.matches("BT /F1 7 Tf 440 ").count()
}
