pub mod deal;
pub mod listing;
pub mod search_config;
