use chrono::{DateTime, SecondsFormat, Utc};

/// Where to query: a zone identifier, or a lon/lat geolocation.
///
/// The API accepts either form; sending both is the caller's mistake and is
/// passed through as-is. Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    zone: Option<String>,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

impl Location {
    /// Query by zone identifier (e.g. `"DE"`, `"DK-DK1"`).
    pub fn zone(zone: impl Into<String>) -> Self {
        Self {
            zone: Some(zone.into()),
            ..Self::default()
        }
    }

    /// Query by geolocation.
    pub fn coordinates(longitude: f64, latitude: f64) -> Self {
        Self {
            zone: None,
            longitude: Some(longitude),
            latitude: Some(latitude),
        }
    }
}

/// Accumulates the query pairs for one request.
///
/// A key is emitted iff the corresponding field is set; `lon`/`lat` are only
/// emitted as a pair, and `estimationFallback` only when the flag is true.
#[derive(Debug, Clone)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub(crate) fn for_location(location: &Location) -> Self {
        let mut query = Self::new();
        if let Some(zone) = &location.zone {
            query.pairs.push(("zone", zone.clone()));
        }
        if let (Some(lon), Some(lat)) = (location.longitude, location.latitude) {
            query.pairs.push(("lon", lon.to_string()));
            query.pairs.push(("lat", lat.to_string()));
        }
        query
    }

    pub(crate) fn datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.pairs.push(("datetime", iso8601(datetime)));
        self
    }

    pub(crate) fn range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.pairs.push(("start", iso8601(start)));
        self.pairs.push(("end", iso8601(end)));
        self
    }

    pub(crate) fn estimation_fallback(mut self, enabled: bool) -> Self {
        if enabled {
            self.pairs.push(("estimationFallback", "true".to_string()));
        }
        self
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

fn iso8601(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}
