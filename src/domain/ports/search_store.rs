//! Saved search term storage port.

use crate::domain::error::DomainError;

/// Simple key-list storage for saved search terms. The scan pipeline only
/// reads terms; add/remove exist for the CLI.
pub trait SavedSearchStore: Send + Sync {
    /// All saved terms in insertion order.
    fn list(&self) -> Result<Vec<String>, DomainError>;

    /// Save a term. Saving an already-saved term is a no-op.
    fn add(&self, term: &str) -> Result<(), DomainError>;

    /// Remove a term. `NotFound` when the term was never saved.
    fn remove(&self, term: &str) -> Result<(), DomainError>;
}
