use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use docreads_core::{DocReadsError, Event};
use docreads_ingest::{JsonlImporter, LoadReport, MalformedPolicy};

use crate::filter::EventFilter;

/// Overall statistics for the event store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoreStats {
    pub event_count: usize,
    pub read_count: usize,
    pub visitor_count: usize,
    pub document_count: usize,
}

/// Immutable in-memory table of events, loaded once per session.
///
/// Every query returns a fresh view; nothing here mutates stored events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    report: LoadReport,
}

impl EventStore {
    pub fn from_events(events: Vec<Event>) -> Self {
        let report = LoadReport {
            loaded: events.len(),
            skipped: 0,
        };
        Self { events, report }
    }

    /// Load a line-delimited JSON file.
    pub fn load(path: &Path, policy: MalformedPolicy) -> Result<Self, DocReadsError> {
        let (events, report) = JsonlImporter::import(path, policy)?;
        let store = Self { events, report };
        info!(
            path = %path.display(),
            events = store.len(),
            skipped = report.skipped,
            "Event store loaded"
        );
        Ok(store)
    }

    pub fn load_report(&self) -> LoadReport {
        self.report
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, in load order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events matching the given filter, in load order.
    pub fn scan(&self, filter: &EventFilter) -> Vec<&Event> {
        let results: Vec<&Event> = self.events.iter().filter(|e| filter.matches(e)).collect();

        debug!(
            document = ?filter.document_id,
            event_type = ?filter.event_type,
            results = results.len(),
            "Scan completed"
        );

        results
    }

    /// Events matching an arbitrary predicate, in load order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Event>
    where
        P: Fn(&Event) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).collect()
    }

    /// Group all events by a derived key. Groups appear in the order their
    /// key was first encountered; events keep load order inside a group.
    pub fn group_by<K, F>(&self, key: F) -> IndexMap<K, Vec<&Event>>
    where
        K: Hash + Eq,
        F: Fn(&Event) -> K,
    {
        group_events(self.events.iter(), key)
    }

    pub fn stats(&self) -> StoreStats {
        let visitors: HashSet<&str> = self.events.iter().map(|e| e.visitor_id.as_str()).collect();
        let documents: HashSet<&str> = self.events.iter().map(|e| e.document_id.as_str()).collect();

        StoreStats {
            event_count: self.events.len(),
            read_count: self.events.iter().filter(|e| e.is_read()).count(),
            visitor_count: visitors.len(),
            document_count: documents.len(),
        }
    }
}

/// Group any sequence of events by a derived key, preserving first-encounter order.
pub fn group_events<'a, I, K, F>(events: I, key: F) -> IndexMap<K, Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
    K: Hash + Eq,
    F: Fn(&Event) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a Event>> = IndexMap::new();
    for event in events {
        groups.entry(key(event)).or_default().push(event);
    }
    groups
}
