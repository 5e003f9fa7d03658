use chrono::{DateTime, Utc};

use crate::carbon::model::{CarbonIntensity, CarbonIntensityHistory, CarbonIntensityRange};
use crate::core::{
    EmClient, EmError, net,
    query::{Location, Query},
};

pub(super) async fn fetch_latest(
    client: &EmClient,
    location: &Location,
) -> Result<CarbonIntensity, EmError> {
    net::get_json(client, "carbon-intensity/latest", &Query::for_location(location)).await
}

pub(super) async fn fetch_history(
    client: &EmClient,
    location: &Location,
) -> Result<CarbonIntensityHistory, EmError> {
    net::get_json(client, "carbon-intensity/history", &Query::for_location(location)).await
}

pub(super) async fn fetch_past(
    client: &EmClient,
    location: &Location,
    datetime: DateTime<Utc>,
    estimation_fallback: bool,
) -> Result<CarbonIntensity, EmError> {
    let query = Query::for_location(location)
        .datetime(datetime)
        .estimation_fallback(estimation_fallback);
    net::get_json(client, "carbon-intensity/past", &query).await
}

pub(super) async fn fetch_past_range(
    client: &EmClient,
    location: &Location,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    estimation_fallback: bool,
) -> Result<CarbonIntensityRange, EmError> {
    let query = Query::for_location(location)
        .range(start, end)
        .estimation_fallback(estimation_fallback);
    net::get_json(client, "carbon-intensity/past-range", &query).await
}
