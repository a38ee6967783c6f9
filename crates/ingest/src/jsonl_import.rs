//! Line-delimited JSON import of reading events.
//!
//! Every field is required except `read_time`: a missing or `null` read time
//! loads as 0, since only events that measured reading carry one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use docreads_core::{DocReadsError, Event, EventType};
use tracing::{info, warn};

/// What to do with a line that is not a valid event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop at the first malformed line and return its error.
    #[default]
    Abort,
    /// Log the line, count it, and keep going.
    Skip,
}

impl MalformedPolicy {
    pub fn from_skip_flag(skip: bool) -> Self {
        if skip {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        }
    }
}

/// Outcome of a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Raw record shape. Accepts both the short field names and the ones used
/// by the reading-log dumps (`visitor_uuid`, `subject_doc_id`, ...).
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "visitor_uuid")]
    visitor_id: Option<String>,
    #[serde(alias = "subject_doc_id")]
    document_id: Option<String>,
    #[serde(alias = "visitor_country")]
    country_code: Option<String>,
    #[serde(alias = "visitor_useragent")]
    user_agent: Option<String>,
    #[serde(alias = "event_readtime")]
    read_time: Option<f64>,
    event_type: Option<String>,
}

fn required(value: Option<String>, field: &str, line: usize) -> Result<String, DocReadsError> {
    value.ok_or_else(|| DocReadsError::malformed(line, format!("missing field `{field}`")))
}

fn required_non_empty(value: Option<String>, field: &str, line: usize) -> Result<String, DocReadsError> {
    let value = required(value, field, line)?;
    if value.trim().is_empty() {
        return Err(DocReadsError::malformed(line, format!("empty field `{field}`")));
    }
    Ok(value)
}

/// Parse one line (1-based `line` is used for error reporting).
pub fn parse_line(line: usize, text: &str) -> Result<Event, DocReadsError> {
    let raw: RawRecord = serde_json::from_str(text)
        .map_err(|e| DocReadsError::malformed(line, format!("invalid record: {e}")))?;

    let read_time = raw.read_time.unwrap_or(0.0);
    if !read_time.is_finite() || read_time < 0.0 {
        return Err(DocReadsError::malformed(
            line,
            format!("invalid `read_time`: {read_time}"),
        ));
    }

    Ok(Event {
        visitor_id: required_non_empty(raw.visitor_id, "visitor_id", line)?,
        document_id: required_non_empty(raw.document_id, "document_id", line)?,
        country_code: required(raw.country_code, "country_code", line)?,
        user_agent: required(raw.user_agent, "user_agent", line)?,
        read_time,
        event_type: EventType::from(required_non_empty(raw.event_type, "event_type", line)?),
    })
}

pub struct JsonlImporter;

impl JsonlImporter {
    /// Read a line-delimited JSON file into events.
    pub fn import(path: &Path, policy: MalformedPolicy) -> Result<(Vec<Event>, LoadReport), DocReadsError> {
        let file = File::open(path)?;
        let (events, report) = Self::read(BufReader::new(file), policy)?;
        info!(
            loaded = report.loaded,
            skipped = report.skipped,
            "Imported events from {}",
            path.display()
        );
        Ok((events, report))
    }

    /// Read events from any buffered source. Blank lines are ignored.
    pub fn read<R: BufRead>(reader: R, policy: MalformedPolicy) -> Result<(Vec<Event>, LoadReport), DocReadsError> {
        let mut events = Vec::new();
        let mut report = LoadReport::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(idx + 1, &line) {
                Ok(event) => {
                    events.push(event);
                    report.loaded += 1;
                }
                Err(e) => match policy {
                    MalformedPolicy::Abort => return Err(e),
                    MalformedPolicy::Skip => {
                        warn!(error = %e, "skipping malformed record");
                        report.skipped += 1;
                    }
                },
            }
        }

        Ok((events, report))
    }
}
