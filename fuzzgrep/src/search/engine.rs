//! Search entry point and worker dispatch.

use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::scanner::scan_pattern;
use crate::config::SearchOptions;
use crate::errors::{SearchError, SearchResult};
use crate::results::SearchReport;

/// Performs a concurrent approximate search for `patterns` in `src`.
///
/// `src` is the text to search, or a file path to read it from when the
/// `in_file` option is set. Passing `None` for `options` applies the
/// defaults from [`SearchOptions::default`].
///
/// One unit of work is one pattern's full scan. Scans run on a worker pool
/// sized to `min(available CPUs, pattern count)`, and the call blocks until
/// every pattern's result has been collected; partial results are never
/// observable. Within a pattern, offsets are ascending (descending with the
/// `reverse` option) and truncated to `match_limit` entries after ordering.
///
/// # Errors
///
/// Fails with [`SearchError::ConfigError`] when `match_limit` or
/// `dist_threshold` is negative, and with an I/O-class error when `in_file`
/// is set and the source path cannot be read. Both are surfaced before any
/// worker runs. Nothing else fails: empty text or an empty pattern list
/// simply produce an empty report.
pub fn search(
    src: &str,
    patterns: &[String],
    options: Option<&SearchOptions>,
) -> SearchResult<SearchReport> {
    let default_options;
    let options = match options {
        Some(options) => options,
        None => {
            default_options = SearchOptions::default();
            &default_options
        }
    };

    options.validate()?;

    info!("Starting search for {} patterns", patterns.len());

    let mut text = if options.in_file {
        read_source_file(Path::new(src))?
    } else {
        src.to_string()
    };

    // Fold case once, up front, never per comparison.
    let mut patterns: Vec<String> = patterns.to_vec();
    if options.case_insensitive {
        text = text.to_lowercase();
        for pattern in &mut patterns {
            *pattern = pattern.to_lowercase();
        }
    }

    if patterns.is_empty() {
        debug!("No search patterns provided, returning empty report");
        return Ok(SearchReport::new());
    }

    let text_chars: Vec<char> = text.chars().collect();
    let dist_threshold = options.dist_threshold as usize;
    let match_limit = options.match_limit as usize;

    // Never spawn more workers than there are patterns.
    let workers = num_cpus::get().min(patterns.len());
    debug!(
        "Dispatching {} patterns across {} workers ({} chars of text)",
        patterns.len(),
        workers,
        text_chars.len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SearchError::config_error(format!("failed to build worker pool: {e}")))?;

    let pattern_results: Vec<(String, Vec<usize>)> = pool.install(|| {
        patterns
            .par_iter()
            .map(|pattern| {
                let mut offsets = scan_pattern(&text_chars, pattern, dist_threshold);
                if options.reverse {
                    offsets.reverse();
                }
                // After reversal, so reverse decides which offsets survive.
                offsets.truncate(match_limit);
                (pattern.clone(), offsets)
            })
            .collect()
    });

    let mut report = SearchReport::new();
    for (pattern, offsets) in pattern_results {
        report.add_pattern_result(pattern, offsets);
    }

    info!(
        "Search complete: {} matches across {} patterns",
        report.total_matches, report.patterns_with_matches
    );

    Ok(report)
}

fn read_source_file(path: &Path) -> SearchResult<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SearchError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => SearchError::permission_denied(path),
        _ => SearchError::IoError(e),
    })
}
