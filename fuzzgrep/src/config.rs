use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{SearchError, SearchResult};

/// Default maximum number of match offsets reported per pattern.
pub const DEFAULT_MATCH_LIMIT: isize = 10;

/// Default maximum Levenshtein distance for a candidate to count as a match.
pub const DEFAULT_DIST_THRESHOLD: isize = 1;

/// Configuration for a search operation.
///
/// The configuration can be loaded from multiple locations in order of
/// precedence:
/// 1. Custom config file passed to [`SearchOptions::load_from`]
/// 2. Local `.fuzzgrep.yaml` in the current directory
/// 3. Global `$CONFIG_DIR/fuzzgrep/config.yaml`
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Treat the source as a file path
/// in_file: false
///
/// # Fold text and patterns to lowercase before matching
/// case_insensitive: true
///
/// # Emit match offsets in descending order
/// reverse: false
///
/// # Maximum matches reported per pattern
/// match_limit: 10
///
/// # Maximum edit distance for a match
/// dist_threshold: 1
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// When using the CLI, command-line arguments take precedence over config
/// file values; the merging behavior is defined in `merge_with_cli`.
///
/// `match_limit` and `dist_threshold` are signed so an out-of-range value
/// coming from a file or a caller is representable and rejected by
/// [`SearchOptions::validate`] instead of silently wrapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Treat the search source as a file path and read text from it
    #[serde(default)]
    pub in_file: bool,

    /// Lowercase both text and patterns before matching
    #[serde(default)]
    pub case_insensitive: bool,

    /// Emit match offsets in descending rather than ascending order
    #[serde(default)]
    pub reverse: bool,

    /// Maximum number of match offsets returned per pattern
    #[serde(default = "default_match_limit")]
    pub match_limit: isize,

    /// Maximum Levenshtein distance at which a candidate counts as a match
    #[serde(default = "default_dist_threshold")]
    pub dist_threshold: isize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_match_limit() -> isize {
    DEFAULT_MATCH_LIMIT
}

fn default_dist_threshold() -> isize {
    DEFAULT_DIST_THRESHOLD
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            in_file: false,
            case_insensitive: false,
            reverse: false,
            match_limit: DEFAULT_MATCH_LIMIT,
            dist_threshold: DEFAULT_DIST_THRESHOLD,
            log_level: default_log_level(),
        }
    }
}

impl SearchOptions {
    /// Checks that the numeric limits are in range.
    ///
    /// Fails with [`SearchError::ConfigError`] when `match_limit` or
    /// `dist_threshold` is negative. Called by the search entry point
    /// before any work is dispatched.
    pub fn validate(&self) -> SearchResult<()> {
        if self.match_limit < 0 || self.dist_threshold < 0 {
            return Err(SearchError::config_error(
                "match_limit and dist_threshold must be >= 0",
            ));
        }
        Ok(())
    }

    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file, falling back to the
    /// default locations for anything it does not set
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("fuzzgrep/config.yaml")),
            // Local config
            Some(PathBuf::from(".fuzzgrep.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_options: SearchOptions) -> Self {
        // CLI values take precedence over config file values
        if cli_options.in_file {
            self.in_file = true;
        }
        if cli_options.case_insensitive {
            self.case_insensitive = true;
        }
        if cli_options.reverse {
            self.reverse = true;
        }
        if cli_options.match_limit != DEFAULT_MATCH_LIMIT {
            self.match_limit = cli_options.match_limit;
        }
        if cli_options.dist_threshold != DEFAULT_DIST_THRESHOLD {
            self.dist_threshold = cli_options.dist_threshold;
        }
        if cli_options.log_level != default_log_level() {
            self.log_level = cli_options.log_level;
        }
        self
    }
}
