//! CSV export of a ranked result set.
//!
//! One flat row per deal with a fixed header, so downstream sheet syncs
//! can diff runs reliably. The CSV string is built by hand; fields are
//! quoted whenever they contain a comma, quote, or newline.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::entities::deal::DealRow;
use crate::domain::error::DomainError;

/// Column order matches the field order on [`DealRow`]. Never reorder.
pub const CSV_HEADER: &str = "search_term,source,title,location,local_price,\
market_avg_sold,est_profit_market,profit_margin_pct,market_samples,\
condition,condition_score,seller_rating,rule_market_value,rule_profit,\
travel_cost,effective_profit,demand_score,listing_url,market_search_url";

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render rows as a CSV document with the stable header.
pub fn rows_to_csv(rows: &[DealRow]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for row in rows {
        let fields = [
            csv_field(row.search_term.as_deref().unwrap_or("")),
            csv_field(&row.source),
            csv_field(&row.title),
            csv_field(&row.location),
            format!("{:.2}", row.local_price),
            format!("{:.2}", row.market_avg_sold),
            format!("{:.2}", row.est_profit_market),
            format!("{:.2}", row.profit_margin_pct),
            row.market_samples.to_string(),
            csv_field(&row.condition_label.to_string()),
            format!("{:.2}", row.condition_score),
            format!("{:.2}", row.seller_rating),
            format!("{:.2}", row.rule_market_value),
            format!("{:.2}", row.rule_profit),
            format!("{:.2}", row.travel_cost),
            format!("{:.2}", row.effective_profit),
            format!("{:.2}", row.demand_score),
            csv_field(&row.listing_url),
            csv_field(&row.market_search_url),
        ];
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }

    csv
}

pub struct ExportUseCase {
    exports_dir: PathBuf,
}

impl ExportUseCase {
    pub fn new(exports_dir: impl Into<PathBuf>) -> Self {
        Self {
            exports_dir: exports_dir.into(),
        }
    }

    /// Write rows to `<exports_dir>/localflip_<mode>_<timestamp>.csv` and
    /// return the path.
    pub fn write_csv(&self, rows: &[DealRow], mode: &str) -> Result<PathBuf, DomainError> {
        std::fs::create_dir_all(&self.exports_dir)
            .map_err(|e| DomainError::Export(format!("create {:?}: {e}", self.exports_dir)))?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self
            .exports_dir
            .join(format!("localflip_{mode}_{timestamp}.csv"));

        std::fs::write(&path, rows_to_csv(rows))
            .map_err(|e| DomainError::Export(format!("write {path:?}: {e}")))?;
        Ok(path)
    }

    pub fn exports_dir(&self) -> &Path {
        &self.exports_dir
    }
}
