use std::path::PathBuf;

use clap::Args;

use crate::cli::{parse_threshold, truncate, CatalogPath, OutputFormat};
use crate::core::candidate::HymnalCandidate;
use crate::matching::engine::{DisambiguationEngine, DuplicateReport, MatchingConfig, ScoredHymnal};

#[derive(Args)]
pub struct CheckArgs {
    /// Candidate hymnal file (JSON, or YAML for any other extension)
    #[arg(required = true)]
    pub candidate: PathBuf,

    #[command(flatten)]
    pub catalog: CatalogPath,

    /// Minimum name similarity for a hymnal to be considered (0.0-1.0)
    #[arg(long, default_value = "0.7", value_parser = parse_threshold)]
    pub name_threshold: f64,

    /// Minimum content similarity for high/medium confidence (0.0-1.0)
    #[arg(long, default_value = "0.8", value_parser = parse_threshold)]
    pub content_threshold: f64,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the candidate or catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let candidate = HymnalCandidate::load_from_file(&args.candidate)?;

    if verbose {
        eprintln!(
            "Candidate '{}' with {} hymns",
            candidate.name,
            candidate.hymns.len()
        );
    }

    let duplicates = candidate.duplicate_numbers();
    if !duplicates.is_empty() {
        let numbers: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
        eprintln!(
            "Warning: duplicate hymn numbers in candidate: {}",
            numbers.join(", ")
        );
    }

    let catalog = args.catalog.load(verbose)?;

    let config = MatchingConfig {
        name_threshold: args.name_threshold,
        content_threshold: args.content_threshold,
        ..MatchingConfig::default()
    };
    let engine = DisambiguationEngine::with_config(&catalog, config);
    let report = engine.check_candidate(&candidate)?;

    match format {
        OutputFormat::Text => print_text_report(&candidate, &report),
        OutputFormat::Json => print_json_report(&candidate, &report, engine.config())?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(candidate: &HymnalCandidate, report: &DuplicateReport) {
    println!("Duplicate Check: {}", candidate.name);
    println!("{}", "=".repeat(60));

    if let Some(exact) = &report.exact_match {
        println!("\nExact match: {} ({})", exact.name, exact.id);
        if !exact.owner_name.is_empty() {
            println!("  Owner: {}", exact.owner_name);
        }
        println!("  Hymns: {}", exact.hymn_count);
    } else {
        print_bucket("High confidence", &report.high_confidence);
        print_bucket("Medium confidence", &report.medium_confidence);
        print_bucket("Low confidence", &report.low_confidence);

        if report.total_candidates() == 0 {
            println!("\nNo similar hymnals found.");
        }
    }

    println!();
    if report.needs_disambiguation() {
        println!("Verdict: probable duplicate, choose between a new hymnal and a new version");
    } else {
        println!("Verdict: no probable duplicate, safe to create");
    }
}

fn print_bucket(title: &str, entries: &[ScoredHymnal]) {
    if entries.is_empty() {
        return;
    }

    println!("\n{title} ({}):", entries.len());
    for entry in entries {
        println!(
            "  {:<40} name {:>3}%  content {:>3}%  [{}]",
            truncate(entry.hymnal.display_name(), 40),
            entry.name_percent(),
            entry.content_percent(),
            entry.hymnal.id
        );
    }
}

fn print_json_report(
    candidate: &HymnalCandidate,
    report: &DuplicateReport,
    config: &MatchingConfig,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "candidate": {
            "name": candidate.name,
            "hymn_count": candidate.hymns.len(),
            "duplicate_numbers": candidate.duplicate_numbers(),
        },
        "report": report,
        "needs_disambiguation": report.needs_disambiguation(),
        "best_confidence": report.best_confidence(),
        "configuration": config,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &DuplicateReport) {
    println!("confidence\tid\tname\tname_score\tcontent_score");

    if let Some(exact) = &report.exact_match {
        println!("exact\t{}\t{}\t1.0000\t", exact.id, exact.name);
        return;
    }

    let buckets = [
        ("high", &report.high_confidence),
        ("medium", &report.medium_confidence),
        ("low", &report.low_confidence),
    ];
    for (label, entries) in buckets {
        for entry in entries {
            println!(
                "{label}\t{}\t{}\t{:.4}\t{:.4}",
                entry.hymnal.id, entry.hymnal.name, entry.name_score, entry.content_score
            );
        }
    }
}
