pub mod marketplace;
pub mod price_lookup;
pub mod search_store;
