//! Core data types for hymnal disambiguation.
//!
//! - [`HymnStub`]: The `{number, title, text}` triple used for similarity scoring
//! - [`HymnalCandidate`]: A proposed hymnal (name + hymns) awaiting a duplicate check
//! - [`KnownHymnal`]: A hymnal already stored in the catalog
//! - [`HymnalId`], [`Confidence`]: Identifiers and result classification
//!
//! [`HymnStub`]: hymn::HymnStub
//! [`HymnalCandidate`]: candidate::HymnalCandidate
//! [`KnownHymnal`]: hymnal::KnownHymnal
//! [`HymnalId`]: types::HymnalId
//! [`Confidence`]: types::Confidence

pub mod candidate;
pub mod hymn;
pub mod hymnal;
pub mod types;
