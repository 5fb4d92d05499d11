//! Approximate search: the entry point plus the per-pattern scan.

pub mod engine;
pub mod scanner;

pub use engine::search;
pub use scanner::scan_pattern;
