use clap::Args;

use crate::catalog::index::{DEFAULT_NAME_THRESHOLD, DEFAULT_SIMILAR_LIMIT};
use crate::cli::{parse_threshold, truncate, CatalogPath, OutputFormat};
use crate::matching::engine::DisambiguationEngine;

#[derive(Args)]
pub struct SimilarArgs {
    /// Hymnal name to look up
    #[arg(required = true)]
    pub name: String,

    #[command(flatten)]
    pub catalog: CatalogPath,

    /// Minimum name similarity (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_NAME_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Maximum number of results
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIMILAR_LIMIT)]
    pub limit: usize,
}

/// Execute similar subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SimilarArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.catalog.load(verbose)?;
    let engine = DisambiguationEngine::new(&catalog);

    let similar = engine.find_similar(&args.name, args.threshold, args.limit)?;

    match format {
        OutputFormat::Text => {
            if similar.is_empty() {
                println!("No hymnals within {:.2} of '{}'.", args.threshold, args.name);
                return Ok(());
            }
            println!("{:<40}  {:>6}  ID", "NAME", "SCORE");
            for (hymnal, score) in &similar {
                println!(
                    "{:<40}  {:>5.1}%  {}",
                    truncate(&hymnal.name, 40),
                    score * 100.0,
                    hymnal.id
                );
            }
        }
        OutputFormat::Json => {
            let results: Vec<serde_json::Value> = similar
                .iter()
                .map(|(hymnal, score)| {
                    serde_json::json!({
                        "hymnal": hymnal,
                        "score": score,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "query": args.name,
                "threshold": args.threshold,
                "limit": args.limit,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tscore");
            for (hymnal, score) in &similar {
                println!("{}\t{}\t{:.4}", hymnal.id, hymnal.name, score);
            }
        }
    }

    Ok(())
}
