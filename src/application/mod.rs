pub mod export;
pub mod saved_searches;
pub mod scan;
