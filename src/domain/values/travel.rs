//! Travel cost model.
//!
//! Converts the search radius into a monetary round-trip estimate, assuming
//! a drive to the radius boundary and back. Computed once per search
//! configuration, not per listing.

use crate::domain::values::round2;

/// Round-trip fuel cost for a pickup at the search radius boundary.
///
/// Zero radius means zero cost. `mpg` and `gas_price` must be positive;
/// that is enforced by [`SearchConfig::validate`] before any scan runs,
/// and guarded here so the function itself can never divide by zero.
///
/// [`SearchConfig::validate`]: crate::domain::entities::search_config::SearchConfig::validate
pub fn travel_cost(radius_miles: f64, mpg: f64, gas_price: f64) -> f64 {
    if radius_miles <= 0.0 || mpg <= 0.0 || gas_price <= 0.0 {
        return 0.0;
    }
    let round_trip_miles = radius_miles * 2.0;
    round2(round_trip_miles / mpg * gas_price)
}
