use chrono::{DateTime, Utc};

use crate::core::{
    EmClient, EmError, net,
    query::{Location, Query},
};
use crate::power::model::{PowerBreakdown, PowerBreakdownHistory, PowerBreakdownRange};

pub(super) async fn fetch_latest(
    client: &EmClient,
    location: &Location,
) -> Result<PowerBreakdown, EmError> {
    net::get_json(client, "power-breakdown/latest", &Query::for_location(location)).await
}

pub(super) async fn fetch_history(
    client: &EmClient,
    location: &Location,
) -> Result<PowerBreakdownHistory, EmError> {
    // The recent endpoint lives under a different path family than the rest.
    net::get_json(
        client,
        "power-consumption-breakdown/history",
        &Query::for_location(location),
    )
    .await
}

pub(super) async fn fetch_past(
    client: &EmClient,
    location: &Location,
    datetime: DateTime<Utc>,
    estimation_fallback: bool,
) -> Result<PowerBreakdown, EmError> {
    let query = Query::for_location(location)
        .datetime(datetime)
        .estimation_fallback(estimation_fallback);
    net::get_json(client, "power-breakdown/past", &query).await
}

pub(super) async fn fetch_past_range(
    client: &EmClient,
    location: &Location,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    estimation_fallback: bool,
) -> Result<PowerBreakdownRange, EmError> {
    let query = Query::for_location(location)
        .range(start, end)
        .estimation_fallback(estimation_fallback);
    net::get_json(client, "power-breakdown/past-range", &query).await
}
