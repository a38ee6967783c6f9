pub mod jsonl_import;

pub use jsonl_import::{JsonlImporter, LoadReport, MalformedPolicy};
