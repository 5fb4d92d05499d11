//! Approximate ("fuzzy") substring search.
//!
//! Given a text and a list of patterns, reports for each pattern the
//! character offsets where a substring approximately matching the pattern
//! begins, using Levenshtein distance as the similarity measure. Pattern
//! scans run concurrently on a bounded worker pool.

pub mod config;
pub mod distance;
pub mod errors;
pub mod results;
pub mod search;

pub use config::SearchOptions;
pub use errors::{SearchError, SearchResult};
pub use results::SearchReport;
pub use search::search;
