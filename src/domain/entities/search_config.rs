use crate::domain::error::DomainError;
use serde::Serialize;

/// Per-run search configuration. Immutable for the duration of a scan.
///
/// Validation happens before the pipeline runs: parameter combinations
/// that would produce economically meaningless results (negative fuel
/// economy, negative thresholds) are fatal, not degraded.
#[derive(Debug, Clone, Serialize)]
pub struct SearchConfig {
    /// Craigslist region subdomain, e.g. "sfbay".
    pub site: String,
    /// Starting ZIP for the radius search.
    pub postal: String,
    pub radius_miles: f64,
    /// Local price ceiling. `None` disables the ceiling.
    pub max_price: Option<f64>,
    /// Max listings taken per source.
    pub max_results: usize,
    /// Minimum external-price profit for the deal filter. Zero in raw mode.
    pub min_profit: f64,
    /// Minimum external-price margin percent. Zero in raw mode.
    pub min_margin_pct: f64,
    pub include_facebook: bool,
    /// Fuel economy in miles per gallon.
    pub mpg: f64,
    /// Fuel price in dollars per gallon.
    pub gas_price: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            site: "sfbay".into(),
            postal: "96001".into(),
            radius_miles: 50.0,
            max_price: None,
            max_results: 50,
            min_profit: 0.0,
            min_margin_pct: 0.0,
            include_facebook: false,
            mpg: 22.0,
            gas_price: 4.50,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.radius_miles < 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "search radius must be non-negative, got {}",
                self.radius_miles
            )));
        }
        if self.mpg <= 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "fuel economy must be positive, got {}",
                self.mpg
            )));
        }
        if self.gas_price <= 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "gas price must be positive, got {}",
                self.gas_price
            )));
        }
        if self.min_profit < 0.0 || self.min_margin_pct < 0.0 {
            return Err(DomainError::InvalidConfig(
                "profit and margin thresholds must be non-negative".into(),
            ));
        }
        if let Some(ceiling) = self.max_price {
            if ceiling <= 0.0 {
                return Err(DomainError::InvalidConfig(format!(
                    "price ceiling must be positive when set, got {ceiling}"
                )));
            }
        }
        if self.max_results == 0 {
            return Err(DomainError::InvalidConfig(
                "max results per source must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_radius_is_valid() {
        let config = SearchConfig {
            radius_miles: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_mpg_rejected() {
        let config = SearchConfig {
            mpg: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_gas_price_rejected() {
        let config = SearchConfig {
            gas_price: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_thresholds_rejected() {
        let config = SearchConfig {
            min_profit: -5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_price_ceiling_rejected() {
        let config = SearchConfig {
            max_price: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
