pub mod craigslist;
pub mod facebook;
