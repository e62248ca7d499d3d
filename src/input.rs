use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::model::{AnalyticsSummary, SessionRecord};

/// The history endpoint wraps sessions in a paging envelope; exports saved by
/// hand are usually a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SessionsDocument {
    Envelope { sessions: Vec<SessionRecord> },
    Bare(Vec<SessionRecord>),
}

fn read_input(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())),
        ),
        _ => Error::Io(e),
    })
}

pub fn parse_sessions(json: &str) -> Result<Vec<SessionRecord>, Error> {
    let sessions = match serde_json::from_str::<SessionsDocument>(json)? {
        SessionsDocument::Envelope { sessions } => sessions,
        SessionsDocument::Bare(sessions) => sessions,
    };
    Ok(sessions)
}

pub fn parse_analytics(json: &str) -> Result<AnalyticsSummary, Error> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_sessions(path: &Path) -> Result<Vec<SessionRecord>, Error> {
    let sessions = parse_sessions(&read_input(path)?)?;
    log::debug!("Loaded {} sessions from {}", sessions.len(), path.display());
    Ok(sessions)
}

pub fn load_analytics(path: &Path) -> Result<AnalyticsSummary, Error> {
    parse_analytics(&read_input(path)?)
}
