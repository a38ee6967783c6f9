pub mod filter;
pub mod store;

// Re-export key types
pub use docreads_ingest::{LoadReport, MalformedPolicy};
pub use filter::EventFilter;
pub use store::{EventStore, StoreStats};
