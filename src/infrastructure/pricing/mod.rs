pub mod ebay;
pub mod noop;
