pub mod marketplaces;
pub mod pricing;
pub mod sqlite;
