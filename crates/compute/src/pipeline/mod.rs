//! Query stages over a loaded event store.
//!
//! - **geo**: countries and continents of a document's readers.
//! - **browser**: raw user agents and browser names.
//! - **ranking**: visitors by total read time.
//! - **also_likes**: co-reader pairs of a document.
//! - **counts**: label frequencies for presentation.

pub mod also_likes;
pub mod browser;
pub mod counts;
pub mod geo;
pub mod ranking;
