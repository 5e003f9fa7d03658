use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Megawatts per source type (`"wind"`, `"solar"`, `"batteryDischarge"`, ...)
/// or per neighbouring zone for import/export breakdowns. Values are null
/// when the upstream has no figure for a source.
pub type Breakdown = BTreeMap<String, Option<f64>>;

/// The origin of electricity in an area at one point in time.
///
/// Production is what the zone generated; consumption additionally accounts
/// for imports and exports. Import/export maps are keyed by neighbouring
/// zone. The same record shape is served by the latest, past, past-range,
/// and history endpoints; history entries omit the `zone` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerBreakdown {
    #[serde(default)]
    pub zone: Option<String>,
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub power_production_breakdown: Breakdown,
    #[serde(default)]
    pub power_production_total: Option<f64>,
    #[serde(default)]
    pub power_consumption_breakdown: Breakdown,
    #[serde(default)]
    pub power_consumption_total: Option<f64>,
    #[serde(default)]
    pub power_import_breakdown: Breakdown,
    #[serde(default)]
    pub power_import_total: Option<f64>,
    #[serde(default)]
    pub power_export_breakdown: Breakdown,
    #[serde(default)]
    pub power_export_total: Option<f64>,
    /// Share of consumption from renewables and nuclear, in percent.
    #[serde(default)]
    pub fossil_free_percentage: Option<f64>,
    #[serde(default)]
    pub renewable_percentage: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_estimated: Option<bool>,
    #[serde(default)]
    pub estimation_method: Option<String>,
}

/// The last 24h of power breakdowns for a zone, at 60-minute resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerBreakdownHistory {
    pub zone: String,
    pub history: Vec<PowerBreakdown>,
}

/// Power breakdowns over a past date range (end exclusive; the upstream API
/// caps ranges at 10 days).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerBreakdownRange {
    #[serde(default)]
    pub zone: Option<String>,
    pub data: Vec<PowerBreakdown>,
}
