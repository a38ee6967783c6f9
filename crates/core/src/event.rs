use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque visitor identifier.
pub type VisitorId = String;

/// Opaque document identifier.
pub type DocumentId = String;

/// One visitor-document interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub visitor_id: VisitorId,
    pub document_id: DocumentId,
    /// ISO 3166-1 alpha-2 or alpha-3 code, as it appeared in the source.
    pub country_code: String,
    /// Raw client identifier, usually `"<name>/<rest>"`.
    pub user_agent: String,
    /// Seconds spent on the document. Never negative.
    pub read_time: f64,
    pub event_type: EventType,
}

impl Event {
    pub fn is_read(&self) -> bool {
        self.event_type == EventType::Read
    }
}

/// A (visitor, document) pair, the unit the also-likes ranking counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadPair {
    pub visitor_id: VisitorId,
    pub document_id: DocumentId,
}

impl ReadPair {
    pub fn new(visitor_id: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            visitor_id: visitor_id.into(),
            document_id: document_id.into(),
        }
    }

    pub fn of(event: &Event) -> Self {
        Self::new(event.visitor_id.clone(), event.document_id.clone())
    }
}

/// Action classification. Only the literal `"read"` is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Read,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Read => "read",
            EventType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        if s == "read" {
            EventType::Read
        } else {
            EventType::Other(s)
        }
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        EventType::from(s.to_string())
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        match t {
            EventType::Read => "read".to_string(),
            EventType::Other(s) => s,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
