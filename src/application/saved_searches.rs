//! Saved searches use case.

use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::ports::search_store::SavedSearchStore;

pub struct SavedSearchesUseCase {
    store: Arc<dyn SavedSearchStore>,
}

impl SavedSearchesUseCase {
    pub fn new(store: Arc<dyn SavedSearchStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<String>, DomainError> {
        self.store.list()
    }

    pub fn add(&self, term: &str) -> Result<(), DomainError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DomainError::InvalidInput(
                "cannot save an empty search term".into(),
            ));
        }
        self.store.add(term)
    }

    pub fn remove(&self, term: &str) -> Result<(), DomainError> {
        self.store.remove(term.trim())
    }
}
