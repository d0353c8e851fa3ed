pub mod migrations;
pub mod search_repo;
