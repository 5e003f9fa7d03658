use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One carbon-intensity reading, in gCO2eq/kWh.
///
/// The same record shape is served by the latest, past, past-range, and
/// history endpoints; history entries omit the `zone` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonIntensity {
    #[serde(default)]
    pub zone: Option<String>,
    /// Null when the upstream has no data for the slot.
    pub carbon_intensity: Option<f64>,
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub emission_factor_type: Option<String>,
    #[serde(default)]
    pub is_estimated: Option<bool>,
    #[serde(default)]
    pub estimation_method: Option<String>,
}

/// The last 24h of carbon intensity for a zone, at 60-minute resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonIntensityHistory {
    pub zone: String,
    pub history: Vec<CarbonIntensity>,
}

/// Carbon intensity over a past date range (end exclusive; the upstream API
/// caps ranges at 10 days).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonIntensityRange {
    #[serde(default)]
    pub zone: Option<String>,
    pub data: Vec<CarbonIntensity>,
}
