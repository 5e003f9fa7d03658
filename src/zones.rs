//! The zone catalogue endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{EmClient, EmError, net, query::Query};

/// Descriptor for one grid zone, keyed by zone identifier in [`EmClient::zones`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Absent for zones that are not whole countries (e.g. `"DK-DK1"`).
    #[serde(default)]
    pub country_name: Option<String>,
    pub zone_name: String,
    /// Routes available with the presented token; empty for anonymous calls.
    #[serde(default)]
    pub access: Vec<String>,
}

impl EmClient {
    /// Fetches all available zones, keyed by zone identifier.
    ///
    /// Without an auth token this returns the full catalogue; with one it
    /// returns the zones and routes the token grants access to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn zones(&self) -> Result<BTreeMap<String, Zone>, EmError> {
        net::get_json(self, "zones", &Query::new()).await
    }
}
