use clap::Args;

use crate::cli::{CatalogPath, OutputFormat, SearchArgs};
use crate::matching::engine::DisambiguationEngine;
use crate::matching::suggest::DEFAULT_SUGGESTION_LIMIT;
use crate::search::client::TypesenseClient;

#[derive(Args)]
pub struct SuggestArgs {
    /// Free-text query (hymnal name, hymn title, lyrics...)
    #[arg(required = true)]
    pub query: String,

    #[command(flatten)]
    pub catalog: CatalogPath,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Number of search hits to request
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,
}

/// Execute suggest subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded. A misconfigured or
/// unreachable search service only yields no suggestions.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SuggestArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.catalog.load(verbose)?;
    let engine = DisambiguationEngine::new(&catalog);

    let suggestions = match TypesenseClient::new(args.search.to_config()) {
        Ok(client) => engine.suggest_similar(&client, &args.query, args.limit),
        Err(e) => {
            tracing::warn!("Keyword search unavailable, no suggestions: {}", e);
            Vec::new()
        }
    };

    match format {
        OutputFormat::Text => {
            if suggestions.is_empty() {
                println!("No suggestions for '{}'.", args.query);
                return Ok(());
            }
            println!("Suggestions for '{}':", args.query);
            for s in &suggestions {
                println!(
                    "  {} ({} hymns) [{}]",
                    s.hymnal.display_name(),
                    s.hymn_count,
                    s.hymnal.id
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": args.query,
                "suggestions": suggestions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\thymn_count");
            for s in &suggestions {
                println!("{}\t{}\t{}", s.hymnal.id, s.hymnal.name, s.hymn_count);
            }
        }
    }

    Ok(())
}
