pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod geo;

pub use config::Config;
pub use entity::*;
pub use error::*;
pub use event::*;
