//! Integration tests for loading reading-log files from disk.

use std::io::Write;

use docreads_core::DocReadsError;
use docreads_ingest::{JsonlImporter, LoadReport, MalformedPolicy};

fn write_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn import_reads_every_record() {
    let file = write_file(&[
        r#"{"visitor_uuid":"v1","subject_doc_id":"d1","visitor_country":"US","visitor_useragent":"Mozilla/5.0 (X11)","event_readtime":1,"event_type":"read","ts":1393631989}"#,
        r#"{"visitor_uuid":"v2","subject_doc_id":"d1","visitor_country":"CAN","visitor_useragent":"Opera/9.80","event_type":"impression"}"#,
    ]);

    let (events, report) = JsonlImporter::import(file.path(), MalformedPolicy::Abort).unwrap();

    assert_eq!(report, LoadReport { loaded: 2, skipped: 0 });
    assert_eq!(events[0].visitor_id, "v1");
    assert_eq!(events[1].country_code, "CAN");
    assert!(!events[1].is_read());
}

#[test]
fn import_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonlImporter::import(&dir.path().join("nope.json"), MalformedPolicy::Skip).unwrap_err();
    assert!(matches!(err, DocReadsError::Io(_)));
}

#[test]
fn import_policy_decides_on_bad_lines() {
    let file = write_file(&[
        r#"{"visitor_uuid":"v1","subject_doc_id":"d1","visitor_country":"US","visitor_useragent":"a/b","event_type":"read"}"#,
        r#"{"visitor_uuid":"v2","visitor_country":"US","visitor_useragent":"a/b","event_type":"read"}"#,
    ]);

    let err = JsonlImporter::import(file.path(), MalformedPolicy::Abort).unwrap_err();
    assert!(matches!(err, DocReadsError::MalformedRecord { line: 2, .. }));

    let (events, report) = JsonlImporter::import(file.path(), MalformedPolicy::Skip).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(report.skipped, 1);
}
