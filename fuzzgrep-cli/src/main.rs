use anyhow::{Context, Result};
use clap::Parser;
use colored::{Color, Colorize};
use fuzzgrep::{search, SearchOptions, SearchReport};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_SOURCE: &str = "The quick brown fox jumps over the lazy dog";
const DEFAULT_PATTERNS: &str = "teh doug brown";

/// Colors cycled per match. A fixed palette keeps the rendering
/// deterministic; the highlight color carries no meaning.
const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

#[derive(Parser)]
#[command(author, version, about = "Approximate substring search", long_about = None)]
struct Cli {
    /// Search source: literal text, or a file path with --file
    #[arg(short = 's', long = "source", default_value = DEFAULT_SOURCE)]
    source: String,

    /// Space-separated search patterns
    #[arg(short = 'p', long = "patterns", default_value = DEFAULT_PATTERNS)]
    patterns: String,

    /// Treat the source as a file path and search its contents
    #[arg(short = 'f', long = "file")]
    in_file: bool,

    /// Case-insensitive search
    #[arg(short = 'c', long = "ignore-case")]
    case_insensitive: bool,

    /// Emit match offsets in descending order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Maximum number of matches displayed per pattern
    #[arg(
        short = 'm',
        long = "match-limit",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    match_limit: isize,

    /// Levenshtein distance threshold for a match
    #[arg(
        short = 't',
        long = "threshold",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    dist_threshold: isize,

    /// Write the rendered report to this file (without color codes)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print the report as JSON instead of highlighted text
    #[arg(long)]
    json: bool,

    /// Configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn to_options(&self) -> SearchOptions {
        SearchOptions {
            in_file: self.in_file,
            case_insensitive: self.case_insensitive,
            reverse: self.reverse,
            match_limit: self.match_limit,
            dist_threshold: self.dist_threshold,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = SearchOptions::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .merge_with_cli(cli.to_options());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&options.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("Merged options: {:?}", options);

    let mut patterns: Vec<String> = cli
        .patterns
        .split(' ')
        .map(|s| s.to_string())
        .collect();
    if options.case_insensitive {
        for pattern in &mut patterns {
            *pattern = pattern.to_lowercase();
        }
    }

    let report = search(&cli.source, &patterns, Some(&options))?;

    // The rendering needs the searched text again; the library only hands
    // back offsets.
    let mut display_text = if options.in_file {
        fs::read_to_string(&cli.source)
            .with_context(|| format!("failed to read {}", cli.source))?
    } else {
        cli.source.clone()
    };
    if options.case_insensitive {
        display_text = display_text.to_lowercase();
    }
    let text: Vec<char> = display_text.chars().collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&text, &patterns, &report, true));
        println!(
            "Found {} matches across {} of {} patterns",
            report.total_matches,
            report.patterns_with_matches,
            report.matches.len()
        );
    }

    if let Some(path) = &cli.output {
        fs::write(path, render_report(&text, &patterns, &report, false))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

/// Renders every pattern's matches, repeating the full text once per match
/// with the matched span highlighted (or plain when `colorize` is off, for
/// the report file).
fn render_report(
    text: &[char],
    patterns: &[String],
    report: &SearchReport,
    colorize: bool,
) -> String {
    let mut out = String::new();

    for pattern in patterns {
        let Some(offsets) = report.offsets(pattern) else {
            continue;
        };

        out.push_str(&format!("`{}` matches:\n", pattern));
        if offsets.is_empty() {
            out.push_str("No matches found\n\n");
            continue;
        }

        let pattern_len = pattern.chars().count();
        for (n, &offset) in offsets.iter().enumerate() {
            // Matches near the end may cover fewer than pattern_len chars.
            let end = (offset + pattern_len).min(text.len());
            let before: String = text[..offset].iter().collect();
            let matched: String = text[offset..end].iter().collect();
            let after: String = text[end..].iter().collect();

            if colorize {
                let color = PALETTE[n % PALETTE.len()];
                out.push_str(&format!("{}{}{}\n", before, matched.color(color), after));
            } else {
                out.push_str(&format!("{}{}{}\n", before, matched, after));
            }
        }
        out.push('\n');
    }

    out
}
