//! Hymnal duplicate detection and scoring algorithms.
//!
//! - [`DisambiguationEngine`]: Main entry point for checking a candidate hymnal
//! - [`DuplicateReport`]: Tiered verdict (exact / high / medium / low)
//! - [`similarity`]: Name normalization and string similarity
//! - [`scoring`]: Sampled content comparison and tier classification
//!
//! ## Algorithm
//!
//! 1. **Exact match**: case- and whitespace-insensitive name equality.
//!    A hit ends the search.
//! 2. **Name candidates**: up to 10 hymnals whose name similarity reaches
//!    the name threshold, best first.
//! 3. **Content score**: the first 5 hymns of each side (by number) are
//!    paired by position and compared, 30% title and 70% lyrics.
//! 4. **Classification**, first rule that holds:
//!    - High: name ≥ 0.9 and content ≥ content threshold
//!    - Medium: name ≥ name threshold and content ≥ content threshold
//!    - Low: name ≥ name threshold or content ≥ 0.6
//!
//! ## Example
//!
//! ```rust,no_run
//! use hymnal_dedup::{DisambiguationEngine, HymnalCatalog, HymnStub};
//! use std::path::Path;
//!
//! let catalog = HymnalCatalog::load_from_file(Path::new("catalog.json")).unwrap();
//! let engine = DisambiguationEngine::new(&catalog);
//!
//! let hymns = vec![HymnStub::new(1, "Lua Branca", "Da luz serena\nDo mar sagrado")];
//! let report = engine.find_duplicates("Cruzeiro", &hymns).unwrap();
//!
//! for m in &report.high_confidence {
//!     println!("{}: name {}%, content {}%", m.hymnal.name, m.name_percent(), m.content_percent());
//! }
//! ```
//!
//! [`DisambiguationEngine`]: engine::DisambiguationEngine
//! [`DuplicateReport`]: engine::DuplicateReport

pub mod engine;
pub mod scoring;
pub mod similarity;
pub mod suggest;

pub use suggest::Suggestion;
