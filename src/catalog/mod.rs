//! Hymnal catalog storage and lookup.
//!
//! The engine reads the catalog only through the [`HymnalSource`] trait, so
//! any store that can enumerate hymnals and fetch hymns by number can back it.
//! [`HymnalCatalog`] is the in-memory implementation, loaded from JSON:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "created_at": "2026-01-01T00:00:00Z",
//!   "hymnals": [
//!     {
//!       "id": "3f2a...",
//!       "name": "O Cruzeiro",
//!       "owner_name": "Mestre Irineu",
//!       "hymns": [{"number": 1, "title": "Lua Branca", "text": "..."}]
//!     }
//!   ]
//! }
//! ```
//!
//! File order is catalog order: it decides which hymnal an exact-match
//! lookup returns first and how equal similarity scores are ranked.
//!
//! [`HymnalSource`]: source::HymnalSource
//! [`HymnalCatalog`]: store::HymnalCatalog

pub mod index;
pub mod source;
pub mod store;
