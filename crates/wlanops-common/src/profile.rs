//! Environment profiles and insight thresholds
//!
//! A deployment profile (retail floor, warehouse, campus, ...) selects the
//! threshold record the insight rules evaluate against. The catalog is fixed;
//! an unknown profile name fails closed rather than defaulting.

use crate::error::{WlanOpsError, WlanOpsResult};
use serde::{Deserialize, Serialize};

/// Per-profile numeric limits for the insight rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    /// RFQI below this is considered poor (0-100)
    pub rfqi_poor: f64,
    /// RFQI at or above this is the health target (0-100)
    pub rfqi_target: f64,
    /// Channel utilization above this is congested (%)
    pub channel_utilization_pct: f64,
    /// Interference above this is high (0-1 fraction)
    pub interference_high: f64,
    /// Retry rate above this is excessive (%)
    pub retry_rate_pct: f64,
    /// Target client count per online AP
    pub client_density_target: f64,
}

impl Thresholds {
    /// Retail: dense client turnover, moderate RF expectations
    pub const RETAIL: Self = Self {
        rfqi_poor: 65.0,
        rfqi_target: 80.0,
        channel_utilization_pct: 70.0,
        interference_high: 0.30,
        retry_rate_pct: 15.0,
        client_density_target: 30.0,
    };

    /// Warehouse: long ranges, racking attenuation, tolerant thresholds
    pub const WAREHOUSE: Self = Self {
        rfqi_poor: 60.0,
        rfqi_target: 75.0,
        channel_utilization_pct: 75.0,
        interference_high: 0.35,
        retry_rate_pct: 20.0,
        client_density_target: 20.0,
    };

    /// Campus: high-density roaming population
    pub const CAMPUS: Self = Self {
        rfqi_poor: 70.0,
        rfqi_target: 85.0,
        channel_utilization_pct: 80.0,
        interference_high: 0.25,
        retry_rate_pct: 12.0,
        client_density_target: 40.0,
    };

    /// Office: latency-sensitive collaboration traffic
    pub const OFFICE: Self = Self {
        rfqi_poor: 70.0,
        rfqi_target: 85.0,
        channel_utilization_pct: 75.0,
        interference_high: 0.25,
        retry_rate_pct: 10.0,
        client_density_target: 25.0,
    };

    /// Healthcare: strictest limits, life-safety telemetry on the WLAN
    pub const HEALTHCARE: Self = Self {
        rfqi_poor: 75.0,
        rfqi_target: 90.0,
        channel_utilization_pct: 65.0,
        interference_high: 0.20,
        retry_rate_pct: 8.0,
        client_density_target: 20.0,
    };

    /// Look up the thresholds for a named environment profile.
    ///
    /// Unknown names are a configuration error, not a fallback case.
    pub fn for_profile(name: &str) -> WlanOpsResult<Self> {
        match name {
            "retail" => Ok(Self::RETAIL),
            "warehouse" => Ok(Self::WAREHOUSE),
            "campus" => Ok(Self::CAMPUS),
            "office" => Ok(Self::OFFICE),
            "healthcare" => Ok(Self::HEALTHCARE),
            other => Err(WlanOpsError::UnknownProfile(other.to_string())),
        }
    }
}

/// Names of all profiles in the catalog, for UI pickers
pub const fn profile_names() -> &'static [&'static str] {
    &["retail", "warehouse", "campus", "office", "healthcare"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_profiles_resolve() {
        for name in profile_names() {
            assert!(Thresholds::for_profile(name).is_ok(), "profile {name}");
        }
    }

    #[test]
    fn test_unknown_profile_fails_closed() {
        let err = Thresholds::for_profile("datacenter").unwrap_err();
        assert!(matches!(err, WlanOpsError::UnknownProfile(ref n) if n == "datacenter"));
    }

    #[test]
    fn test_poor_below_target() {
        for name in profile_names() {
            let t = Thresholds::for_profile(name).unwrap();
            assert!(t.rfqi_poor < t.rfqi_target);
        }
    }
}
