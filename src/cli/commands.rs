use clap::{Args, Parser, Subcommand};

use crate::domain::entities::search_config::SearchConfig;

#[derive(Parser)]
#[command(name = "localflip", about = "Local marketplace resale arbitrage scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Search knobs shared by the scan commands. Defaults put the pipeline in
/// raw mode (zero thresholds, no price ceiling).
#[derive(Args)]
pub struct ScanArgs {
    /// Craigslist region subdomain
    #[arg(long, default_value = "sfbay")]
    pub site: String,
    /// Starting ZIP for the radius search
    #[arg(long, default_value = "96001")]
    pub postal: String,
    /// Search radius in miles
    #[arg(long, default_value = "50")]
    pub radius: f64,
    /// Local price ceiling in dollars
    #[arg(long)]
    pub max_price: Option<f64>,
    /// Max listings per source
    #[arg(long, default_value = "50")]
    pub max_results: usize,
    /// Minimum external-price profit in dollars
    #[arg(long, default_value = "0")]
    pub min_profit: f64,
    /// Minimum external-price margin percent
    #[arg(long, default_value = "0")]
    pub min_margin: f64,
    /// Also search Facebook Marketplace
    #[arg(long)]
    pub include_facebook: bool,
    /// Your car's fuel economy (mpg)
    #[arg(long, default_value = "22")]
    pub mpg: f64,
    /// Gas price in dollars per gallon
    #[arg(long, default_value = "4.50")]
    pub gas_price: f64,
    /// Write the ranked rows to exports/ as CSV
    #[arg(long)]
    pub export_csv: bool,
}

impl ScanArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            site: self.site.clone(),
            postal: self.postal.clone(),
            radius_miles: self.radius,
            max_price: self.max_price,
            max_results: self.max_results,
            min_profit: self.min_profit,
            min_margin_pct: self.min_margin,
            include_facebook: self.include_facebook,
            mpg: self.mpg,
            gas_price: self.gas_price,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan marketplaces for one search query
    Scan {
        /// Search keywords
        query: String,
        #[command(flatten)]
        args: ScanArgs,
    },
    /// Scan every saved search term and aggregate the results
    ScanSaved {
        #[command(flatten)]
        args: ScanArgs,
    },
    /// List saved search terms
    Searches,
    /// Save a search term
    SearchAdd {
        term: String,
    },
    /// Remove a saved search term
    SearchRemove {
        term: String,
    },
}
