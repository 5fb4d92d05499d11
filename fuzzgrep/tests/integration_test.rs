use anyhow::Result;
use fuzzgrep::{search, SearchError, SearchOptions};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

const FOX: &str = "The quick brown fox jumps over the lazy dog";

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_exact_match_with_defaults() -> Result<()> {
    let report = search(FOX, &patterns(&["brown"]), None)?;
    assert_eq!(report.offsets("brown"), Some(&[10][..]));
    assert_eq!(report.total_matches, 1);
    assert_eq!(report.patterns_with_matches, 1);
    Ok(())
}

#[test]
fn test_case_insensitive_exact_match() -> Result<()> {
    let options = SearchOptions {
        case_insensitive: true,
        ..Default::default()
    };
    let report = search(FOX, &patterns(&["BROWN"]), Some(&options))?;
    // Keys are the folded patterns.
    assert_eq!(report.offsets("brown"), Some(&[10][..]));
    Ok(())
}

#[test]
fn test_case_fold_symmetry() -> Result<()> {
    let options = SearchOptions {
        case_insensitive: true,
        ..Default::default()
    };
    let upper_text = search("ABC", &patterns(&["abc"]), Some(&options))?;
    let upper_pattern = search("abc", &patterns(&["ABC"]), Some(&options))?;
    assert_eq!(upper_text.offsets("abc"), upper_pattern.offsets("abc"));
    assert_eq!(upper_text.offsets("abc"), Some(&[0][..]));
    Ok(())
}

#[test]
fn test_transposed_pattern_within_two_edits() -> Result<()> {
    // "teh" is two substitutions from "the"; the windows at offsets 0 and
    // 31 both qualify at threshold 2 once case is folded.
    let options = SearchOptions {
        case_insensitive: true,
        dist_threshold: 2,
        ..Default::default()
    };
    let report = search(FOX, &patterns(&["teh"]), Some(&options))?;
    let offsets = report.offsets("teh").unwrap();
    assert!(offsets.contains(&0), "offsets: {offsets:?}");
    assert!(offsets.contains(&31), "offsets: {offsets:?}");
    Ok(())
}

#[test]
fn test_zero_threshold_returns_only_exact_offsets() -> Result<()> {
    let options = SearchOptions {
        dist_threshold: 0,
        ..Default::default()
    };
    let report = search("abcabcabc", &patterns(&["abc", "cab"]), Some(&options))?;
    assert_eq!(report.offsets("abc"), Some(&[0, 3, 6][..]));
    assert_eq!(report.offsets("cab"), Some(&[2, 5][..]));
    Ok(())
}

#[test]
fn test_match_limit_truncates() -> Result<()> {
    let options = SearchOptions {
        dist_threshold: 0,
        match_limit: 2,
        ..Default::default()
    };
    let report = search("abcabcabc", &patterns(&["abc"]), Some(&options))?;
    assert_eq!(report.offsets("abc"), Some(&[0, 3][..]));
    Ok(())
}

#[test]
fn test_reverse_applies_before_truncation() -> Result<()> {
    let options = SearchOptions {
        dist_threshold: 0,
        match_limit: 2,
        reverse: true,
        ..Default::default()
    };
    let report = search("abcabcabc", &patterns(&["abc"]), Some(&options))?;
    // The limit keeps the first two of the reversed list, not a reversed
    // prefix of the ascending list.
    assert_eq!(report.offsets("abc"), Some(&[6, 3][..]));
    Ok(())
}

#[test]
fn test_reverse_is_exact_reversal_without_truncation() -> Result<()> {
    let forward = SearchOptions {
        dist_threshold: 1,
        match_limit: 1000,
        ..Default::default()
    };
    let backward = SearchOptions {
        reverse: true,
        ..forward.clone()
    };

    let fwd = search(FOX, &patterns(&["the"]), Some(&forward))?;
    let bwd = search(FOX, &patterns(&["the"]), Some(&backward))?;

    let mut reversed = fwd.offsets("the").unwrap().to_vec();
    reversed.reverse();
    assert_eq!(bwd.offsets("the"), Some(&reversed[..]));
    Ok(())
}

#[test]
fn test_offsets_unique_and_within_limit() -> Result<()> {
    let options = SearchOptions {
        dist_threshold: 2,
        match_limit: 5,
        ..Default::default()
    };
    let report = search(FOX, &patterns(&["the", "fox", "dg"]), Some(&options))?;
    for (pattern, offsets) in &report.matches {
        assert!(offsets.len() <= 5, "{pattern}: {offsets:?}");
        let mut seen = offsets.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), offsets.len(), "{pattern}: {offsets:?}");
    }
    Ok(())
}

#[test]
fn test_in_file_search() -> Result<()> {
    let dir = tempdir()?;
    let file_path = dir.path().join("source.txt");
    let mut file = File::create(&file_path)?;
    write!(file, "{}", FOX)?;

    let options = SearchOptions {
        in_file: true,
        ..Default::default()
    };
    let report = search(
        file_path.to_str().unwrap(),
        &patterns(&["brown"]),
        Some(&options),
    )?;
    assert_eq!(report.offsets("brown"), Some(&[10][..]));
    Ok(())
}

#[test]
fn test_unreadable_file_is_an_error() {
    let options = SearchOptions {
        in_file: true,
        ..Default::default()
    };
    let err = search(
        "no-such-directory/missing.txt",
        &patterns(&["brown"]),
        Some(&options),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::FileNotFound(_)));
}

#[test]
fn test_negative_options_are_errors() {
    for options in [
        SearchOptions {
            match_limit: -1,
            ..Default::default()
        },
        SearchOptions {
            dist_threshold: -1,
            ..Default::default()
        },
    ] {
        let err = search(FOX, &patterns(&["fox"]), Some(&options)).unwrap_err();
        assert!(matches!(err, SearchError::ConfigError(_)));
    }
}

#[test]
fn test_empty_inputs() -> Result<()> {
    let report = search(FOX, &[], None)?;
    assert!(report.matches.is_empty());

    let report = search("", &patterns(&["fox"]), None)?;
    assert_eq!(report.offsets("fox"), Some(&[][..]));
    Ok(())
}

#[test]
fn test_multibyte_text_offsets_are_character_indices() -> Result<()> {
    let options = SearchOptions {
        dist_threshold: 0,
        ..Default::default()
    };
    let report = search("żółw über fox", &patterns(&["fox"]), Some(&options))?;
    assert_eq!(report.offsets("fox"), Some(&[10][..]));
    Ok(())
}

#[test]
fn test_dispatch_is_deterministic() -> Result<()> {
    // A single pattern runs on one worker, many patterns fan out across the
    // pool; either way a pattern's offsets are identical run to run.
    let many: Vec<String> = (0..16).map(|_| "the".to_string()).collect();
    let single = patterns(&["the"]);

    let fanned = search(FOX, &many, None)?;
    let alone = search(FOX, &single, None)?;
    assert_eq!(fanned.offsets("the"), alone.offsets("the"));

    let again = search(FOX, &single, None)?;
    assert_eq!(alone.offsets("the"), again.offsets("the"));
    Ok(())
}
