pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::export::ExportUseCase;
use crate::application::saved_searches::SavedSearchesUseCase;
use crate::application::scan::{ScanReport, ScanUseCase};
use crate::domain::entities::deal::DealRow;
use crate::domain::entities::search_config::SearchConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::marketplace::Marketplace;
use crate::domain::ports::price_lookup::PriceLookup;
use crate::domain::ports::search_store::SavedSearchStore;
use crate::infrastructure::marketplaces::craigslist::CraigslistMarketplace;
use crate::infrastructure::marketplaces::facebook::FacebookMarketplace;
use crate::infrastructure::pricing::ebay::EbayPriceLookup;
use crate::infrastructure::pricing::noop::NoopPriceLookup;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::search_repo::SqliteSearchStore;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;

pub struct LocalFlip {
    scan_uc: ScanUseCase,
    searches_uc: SavedSearchesUseCase,
    export_uc: ExportUseCase,
}

impl LocalFlip {
    /// Default wiring: craigslist + facebook adapters, eBay price lookup
    /// when `LOCALFLIP_EBAY_APP_TOKEN` is set, otherwise the noop lookup
    /// (raw mode).
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let marketplaces: Vec<Arc<dyn Marketplace>> = vec![
            Arc::new(CraigslistMarketplace::new()),
            Arc::new(FacebookMarketplace::new()),
        ];
        let prices: Arc<dyn PriceLookup> = match EbayPriceLookup::from_env() {
            Some(lookup) => Arc::new(lookup),
            None => Arc::new(NoopPriceLookup),
        };
        Self::with_providers(db_path, marketplaces, prices)
    }

    pub fn with_providers(
        db_path: &str,
        marketplaces: Vec<Arc<dyn Marketplace>>,
        prices: Arc<dyn PriceLookup>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        run_migrations(&conn)?;
        let store: Arc<dyn SavedSearchStore> = Arc::new(SqliteSearchStore::new(conn));

        Ok(Self {
            scan_uc: ScanUseCase::new(marketplaces, prices),
            searches_uc: SavedSearchesUseCase::new(store),
            export_uc: ExportUseCase::new(PathBuf::from("exports")),
        })
    }

    // Delegating methods
    pub async fn scan(&self, config: &SearchConfig, query: &str) -> Result<ScanReport, DomainError> {
        self.scan_uc.execute(config, query).await
    }

    pub async fn scan_terms(
        &self,
        config: &SearchConfig,
        terms: &[String],
    ) -> Result<ScanReport, DomainError> {
        self.scan_uc.execute_terms(config, terms).await
    }

    pub fn saved_searches(&self) -> Result<Vec<String>, DomainError> {
        self.searches_uc.list()
    }

    pub fn add_saved_search(&self, term: &str) -> Result<(), DomainError> {
        self.searches_uc.add(term)
    }

    pub fn remove_saved_search(&self, term: &str) -> Result<(), DomainError> {
        self.searches_uc.remove(term)
    }

    pub fn export_csv(&self, rows: &[DealRow], mode: &str) -> Result<PathBuf, DomainError> {
        self.export_uc.write_csv(rows, mode)
    }
}
