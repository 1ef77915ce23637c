use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::{truncate, CatalogPath, OutputFormat};
use crate::core::types::HymnalId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all hymnals in the catalog
    List {
        #[command(flatten)]
        catalog: CatalogPath,

        /// Filter by owner name (case-insensitive substring)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Show details of a specific hymnal
    Show {
        /// Hymnal ID
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        catalog: CatalogPath,

        /// Print the lyrics of every hymn
        #[arg(long)]
        full_text: bool,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        #[command(flatten)]
        catalog: CatalogPath,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the hymnal is unknown,
/// or the export file cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, owner } => {
            run_list(&catalog, owner.as_deref(), format, verbose)
        }
        CatalogCommands::Show {
            id,
            catalog,
            full_text,
        } => run_show(&id, &catalog, full_text, format, verbose),
        CatalogCommands::Export { output, catalog } => run_export(&output, &catalog, verbose),
    }
}

fn run_list(
    catalog_path: &CatalogPath,
    owner_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = catalog_path.load(verbose)?;

    let filtered: Vec<_> = catalog
        .hymnals
        .iter()
        .filter(|h| {
            owner_filter.map_or(true, |owner| {
                h.owner_name.to_lowercase().contains(&owner.to_lowercase())
            })
        })
        .collect();

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = filtered
                .iter()
                .map(|h| h.id.0.chars().count())
                .max()
                .unwrap_or(2)
                .max(2);

            println!("{:<id_width$}  {:<40}  {:<25}  HYMNS", "ID", "NAME", "OWNER");
            for h in &filtered {
                println!(
                    "{:<id_width$}  {:<40}  {:<25}  {}",
                    h.id.0,
                    truncate(&h.name, 40),
                    truncate(&h.owner_name, 25),
                    h.hymn_count
                );
            }
            println!("\nTotal: {} hymnals", filtered.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\towner_name\thymn_count");
            for h in &filtered {
                println!("{}\t{}\t{}\t{}", h.id, h.name, h.owner_name, h.hymn_count);
            }
        }
    }

    Ok(())
}

fn run_show(
    id: &str,
    catalog_path: &CatalogPath,
    full_text: bool,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = catalog_path.load(verbose)?;
    let hymnal_id = HymnalId::new(id);

    let hymnal = catalog
        .get(&hymnal_id)
        .ok_or_else(|| anyhow::anyhow!("Hymnal '{id}' not found in catalog"))?;
    let hymns = catalog.hymns_of(&hymnal_id).unwrap_or_default();

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            println!("{} ({})", hymnal.name, hymnal.id);
            if let Some(intro) = &hymnal.intro_name {
                println!("Short name: {intro}");
            }
            if !hymnal.owner_name.is_empty() {
                println!("Owner: {}", hymnal.owner_name);
            }
            if let Some(description) = &hymnal.description {
                println!("Description: {description}");
            }
            println!("Hymns: {}", hymns.len());

            for hymn in hymns {
                println!("\n{:>4}. {}", hymn.number, hymn.title);
                if full_text {
                    for line in hymn.text.lines() {
                        println!("      {line}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "hymnal": hymnal,
                "hymns": hymns,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn run_export(
    output: &Path,
    catalog_path: &CatalogPath,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = catalog_path.load(verbose)?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!(
        "Exported {} hymnals to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
