//! End-to-end query tests: load a reading log from disk and run every query group.

use std::collections::HashMap;
use std::io::Write;

use docreads_compute::pipeline::also_likes::{co_read_events, readers_of, top_likes};
use docreads_compute::pipeline::counts::value_counts;
use docreads_compute::pipeline::ranking::{read_time_by_visitor, top_readers};
use docreads_compute::AnalysisSession;
use docreads_core::{Event, EventType, ReadPair};
use docreads_store::{EventStore, MalformedPolicy};

// ============================================================================
// Test Helpers
// ============================================================================

fn record(visitor: &str, doc: &str, country: &str, agent: &str, read_time: u32, event_type: &str) -> String {
    format!(
        r#"{{"visitor_uuid":"{visitor}","subject_doc_id":"{doc}","visitor_country":"{country}","visitor_useragent":"{agent}","event_readtime":{read_time},"event_type":"{event_type}"}}"#
    )
}

fn load(lines: &[String]) -> EventStore {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    EventStore::load(file.path(), MalformedPolicy::Abort).unwrap()
}

fn make_event(visitor: &str, document: &str, country: &str, read_time: f64, event_type: &str) -> Event {
    Event {
        visitor_id: visitor.to_string(),
        document_id: document.to_string(),
        country_code: country.to_string(),
        user_agent: "Mozilla/5.0".to_string(),
        read_time,
        event_type: EventType::from(event_type),
    }
}

fn reading_log() -> EventStore {
    load(&[
        record("v1", "d1", "US", "Mozilla/5.0 (Macintosh)", 1, "read"),
        record("v1", "d2", "US", "Mozilla/5.0 (Macintosh)", 5, "read"),
        record("v2", "d1", "CA", "Opera/9.80", 2, "read"),
        record("v3", "d1", "DEU", "Dalvik", 0, "impression"),
        record("v3", "d2", "DEU", "Dalvik", 9, "read"),
        record("v2", "d3", "CA", "Opera/9.80", 4, "read"),
    ])
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn small_scenario() {
    let store = EventStore::from_events(vec![
        make_event("v1", "d1", "US", 1.0, "read"),
        make_event("v1", "d2", "US", 5.0, "read"),
        make_event("v2", "d1", "CA", 2.0, "read"),
    ]);

    assert_eq!(
        top_readers(&store, 10),
        vec![("v1".to_string(), 6.0), ("v2".to_string(), 2.0)]
    );
    assert_eq!(readers_of(&store, "d1"), vec!["v1", "v2"]);
    assert_eq!(
        top_likes(&store, "d1", Some("v1"), 10),
        vec![(ReadPair::new("v2", "d1"), 1)]
    );
}

#[test]
fn alpha3_matches_alpha2_by_name() {
    let store = EventStore::from_events(vec![
        make_event("v1", "d1", "USA", 1.0, "read"),
        make_event("v2", "d1", "US", 1.0, "read"),
    ]);
    let mut session = AnalysisSession::new(&store);
    let names = session.countries_for_document("d1").unwrap();
    assert_eq!(names[0], names[1]);
}

#[test]
fn loaded_log_geo_and_browsers() {
    let store = reading_log();
    let mut session = AnalysisSession::new(&store);

    let countries = session.countries_for_document("d1").unwrap();
    assert_eq!(
        value_counts(countries),
        vec![
            ("United States".to_string(), 1),
            ("Canada".to_string(), 1),
            ("Germany".to_string(), 1),
        ]
    );
    assert_eq!(
        value_counts(session.continents_for_last_query().unwrap()),
        vec![("North America".to_string(), 2), ("Europe".to_string(), 1)]
    );

    assert_eq!(
        value_counts(session.browser_names()),
        vec![
            ("Mozilla".to_string(), 2),
            ("Opera".to_string(), 2),
            ("Dalvik".to_string(), 2),
        ]
    );
    assert_eq!(session.browser_agents_raw().len(), store.len());
}

#[test]
fn loaded_log_rankings() {
    let store = reading_log();

    let top = top_readers(&store, 2);
    assert_eq!(top, vec![("v3".to_string(), 9.0), ("v1".to_string(), 6.0)]);

    // Returned totals match the grouped sums for the same visitors.
    let totals: HashMap<String, f64> = read_time_by_visitor(&store).into_iter().collect();
    for (visitor, total) in &top {
        assert_eq!(totals[visitor], *total);
    }

    // v3 only saw an impression of d1, so is not a reader.
    assert_eq!(readers_of(&store, "d1"), vec!["v1", "v2"]);

    let co_reads = co_read_events(&store, "d1", Some("v2"));
    assert!(co_reads.iter().all(|e| e.visitor_id == "v1" && e.is_read()));

    let likes = top_likes(&store, "d1", Some("v1"), 10);
    assert_eq!(
        likes,
        vec![(ReadPair::new("v2", "d1"), 1), (ReadPair::new("v2", "d3"), 1)]
    );
}

#[test]
fn top_readers_respects_n_for_every_n() {
    let store = reading_log();
    let all = top_readers(&store, usize::MAX);
    for n in 0..=all.len() + 1 {
        let top = top_readers(&store, n);
        assert!(top.len() <= n);
        assert_eq!(top[..], all[..top.len()]);
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}

#[test]
fn graph_for_loaded_log() {
    let store = reading_log();
    let session = AnalysisSession::new(&store);
    let graph = session.also_likes_graph("d1", Some("v1"), 10);
    let dot = docreads_graph::to_dot(&graph);

    assert_eq!(dot.matches("->").count(), 2);
    assert!(dot.contains("\"d_d1\" [label=\"d1\", shape=ellipse, style=filled"));
    assert!(dot.contains("\"v_v1\" [label=\"v1\", shape=box, style=filled"));
}

#[test]
fn empty_store_never_errors() {
    let store = load(&[]);
    let mut session = AnalysisSession::new(&store);
    assert!(session.countries_for_document("d1").unwrap().is_empty());
    assert!(session.continents_for_last_query().unwrap().is_empty());
    assert!(session.top_readers(10).is_empty());
    assert!(session.top_likes("d1", Some("v1"), 10).is_empty());
    assert!(value_counts(session.browser_names()).is_empty());
}
