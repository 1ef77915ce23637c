//! Keyword search collaborator used for typo-tolerant hymnal suggestions.
//!
//! [`KeywordSearch`] is the seam the engine depends on; [`TypesenseClient`]
//! implements it against a Typesense server whose `hymns` collection holds
//! one document per hymn (with `hymn_book_id`, `hymn_book_name`, `title`,
//! `text`, ...).
//!
//! Search failures are reported as [`SearchError`]. Deciding what to do
//! with them is left to the caller; the disambiguation engine treats them
//! as "no suggestions".
//!
//! [`KeywordSearch`]: client::KeywordSearch
//! [`TypesenseClient`]: client::TypesenseClient
//! [`SearchError`]: client::SearchError

pub mod client;
