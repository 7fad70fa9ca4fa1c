//! Source collection contract.
//!
//! Each source (GitHub, RSS, calendar) implements [`Collector`] against its
//! own section of the configuration; the digest pipeline only sees
//! [`CollectorResult`]s.

pub mod error;
pub mod items;
pub mod source;

pub use error::CollectError;
pub use items::{CollectorItem, CollectorResult};
pub use source::Collector;
