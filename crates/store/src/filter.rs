use std::collections::HashSet;

use docreads_core::{Event, EventType};

/// Conditions for scanning events. Every set condition must hold.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Keep events on this document.
    pub document_id: Option<String>,
    /// Keep events by this visitor.
    pub visitor_id: Option<String>,
    /// Keep events of this type (exact match).
    pub event_type: Option<EventType>,
    /// Drop events by this visitor.
    pub exclude_visitor: Option<String>,
    /// Keep events whose visitor is in this set.
    pub visitors: Option<HashSet<String>>,
}

impl EventFilter {
    /// Create an empty filter that matches all events.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn visitor(mut self, visitor_id: impl Into<String>) -> Self {
        self.visitor_id = Some(visitor_id.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<EventType>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Shorthand for `event_type(EventType::Read)`.
    pub fn reads(self) -> Self {
        self.event_type(EventType::Read)
    }

    /// Exclude one visitor. An empty id excludes nobody.
    pub fn excluding_visitor(mut self, visitor_id: Option<&str>) -> Self {
        self.exclude_visitor = visitor_id
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        self
    }

    pub fn visitor_in(mut self, visitors: HashSet<String>) -> Self {
        self.visitors = Some(visitors);
        self
    }

    /// Test if an event matches this filter.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(ref document_id) = self.document_id {
            if &event.document_id != document_id {
                return false;
            }
        }

        if let Some(ref visitor_id) = self.visitor_id {
            if &event.visitor_id != visitor_id {
                return false;
            }
        }

        if let Some(ref event_type) = self.event_type {
            if &event.event_type != event_type {
                return false;
            }
        }

        if let Some(ref excluded) = self.exclude_visitor {
            if &event.visitor_id == excluded {
                return false;
            }
        }

        if let Some(ref visitors) = self.visitors {
            if !visitors.contains(&event.visitor_id) {
                return false;
            }
        }

        true
    }
}
