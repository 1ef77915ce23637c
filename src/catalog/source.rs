use crate::catalog::store::CatalogError;
use crate::core::hymn::HymnStub;
use crate::core::hymnal::KnownHymnal;
use crate::core::types::HymnalId;

/// Read-only access to the hymnals the engine matches against.
///
/// Implementations must enumerate in a stable order: exact-match lookups
/// return the first hit and equal similarity scores keep this order.
pub trait HymnalSource {
    /// All hymnals, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn list_all(&self) -> Result<Vec<KnownHymnal>, CatalogError>;

    /// Up to `limit` hymns of one hymnal, ascending by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the hymnal is unknown.
    fn get_hymns(&self, id: &HymnalId, limit: usize) -> Result<Vec<HymnStub>, CatalogError>;
}
