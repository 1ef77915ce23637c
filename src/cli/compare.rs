use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::candidate::HymnalCandidate;
use crate::matching::scoring::{compare_content, ContentWeights, DEFAULT_SAMPLE_SIZE};
use crate::matching::similarity::{normalize_name, string_similarity};

#[derive(Args)]
pub struct CompareArgs {
    /// First candidate hymnal file
    #[arg(required = true)]
    pub input_a: PathBuf,

    /// Second candidate hymnal file
    #[arg(required = true)]
    pub input_b: PathBuf,

    /// Number of hymns (lowest numbers first) to compare
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let hymnal_a = HymnalCandidate::load_from_file(&args.input_a)?;
    let hymnal_b = HymnalCandidate::load_from_file(&args.input_b)?;

    if verbose {
        eprintln!("Input A: '{}' ({} hymns)", hymnal_a.name, hymnal_a.hymns.len());
        eprintln!("Input B: '{}' ({} hymns)", hymnal_b.name, hymnal_b.hymns.len());
    }

    let name_score = string_similarity(
        &normalize_name(&hymnal_a.name),
        &normalize_name(&hymnal_b.name),
    );
    let content_score = compare_content(
        &hymnal_a.hymns,
        &hymnal_b.hymns,
        args.sample_size,
        &ContentWeights::default(),
    );

    match format {
        OutputFormat::Text => {
            println!("Comparison Results");
            println!("{}", "=".repeat(60));
            println!("\nInput A: {} ({})", hymnal_a.name, args.input_a.display());
            println!("  Hymns: {}", hymnal_a.hymns.len());
            println!("\nInput B: {} ({})", hymnal_b.name, args.input_b.display());
            println!("  Hymns: {}", hymnal_b.hymns.len());
            println!("\nSimilarity Scores:");
            println!("  Name: {:.2}%", name_score * 100.0);
            println!(
                "  Content (first {} hymns): {:.2}%",
                args.sample_size,
                content_score * 100.0
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input_a": {
                    "path": args.input_a.display().to_string(),
                    "name": hymnal_a.name,
                    "hymn_count": hymnal_a.hymns.len(),
                },
                "input_b": {
                    "path": args.input_b.display().to_string(),
                    "name": hymnal_b.name,
                    "hymn_count": hymnal_b.hymns.len(),
                },
                "sample_size": args.sample_size,
                "name_score": name_score,
                "content_score": content_score,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name_score\tcontent_score");
            println!("{name_score:.4}\t{content_score:.4}");
        }
    }

    Ok(())
}
