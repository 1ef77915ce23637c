//! # hymnal-dedup
//!
//! A library for detecting duplicate hymnals ("hinários") before they are
//! added to a collection.
//!
//! The same hymnal is often transcribed by different people: the name gets
//! an article dropped or a suffix added, the numbering starts at a different
//! offset, and the lyrics pick up small differences. `hymnal-dedup` compares a
//! proposed hymnal against a catalog of existing ones and tells you how
//! likely it is to be a duplicate.
//!
//! ## Features
//!
//! - **Exact matching**: Case- and whitespace-insensitive name equality
//! - **Fuzzy name matching**: Gestalt sequence similarity on normalized names
//! - **Content sampling**: Compares the first hymns of both hymnals, weighting lyrics over titles
//! - **Tiered verdicts**: Exact, high, medium and low confidence buckets
//! - **Keyword suggestions**: Optional typo-tolerant lookups through a search service
//!
//! ## Example
//!
//! ```rust,no_run
//! use hymnal_dedup::{DisambiguationEngine, HymnalCandidate, HymnalCatalog};
//! use std::path::Path;
//!
//! let catalog = HymnalCatalog::load_from_file(Path::new("catalog.json")).unwrap();
//! let candidate = HymnalCandidate::load_from_file(Path::new("upload.yaml")).unwrap();
//!
//! let engine = DisambiguationEngine::new(&catalog);
//! let report = engine.check_candidate(&candidate).unwrap();
//!
//! if let Some(existing) = &report.exact_match {
//!     println!("Already in catalog: {}", existing.name);
//! } else if report.needs_disambiguation() {
//!     println!("{} probable duplicates", report.high_confidence.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog access trait, in-memory store and name lookups
//! - [`core`]: Core data types for hymns, hymnals and candidates
//! - [`matching`]: Disambiguation engine and scoring algorithms
//! - [`search`]: Keyword search client for suggestions
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod search;

// Re-export commonly used types for convenience
pub use catalog::source::HymnalSource;
pub use catalog::store::HymnalCatalog;
pub use core::candidate::HymnalCandidate;
pub use core::hymn::HymnStub;
pub use core::hymnal::KnownHymnal;
pub use core::types::*;
pub use matching::engine::{DisambiguationEngine, DuplicateReport, MatchingConfig, ScoredHymnal};
