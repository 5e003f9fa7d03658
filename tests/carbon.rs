mod common;

use chrono::{TimeZone, Utc};
use electricitymap_rs::Location;
use httpmock::Method::GET;

#[tokio::test]
async fn latest_by_zone_sends_only_the_zone_param() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/carbon-intensity/latest")
            .header("auth-token", common::TOKEN)
            .query_param("zone", "DE")
            .query_param_missing("lon")
            .query_param_missing("lat")
            .query_param_missing("datetime")
            .query_param_missing("estimationFallback");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("carbon_latest", "DE"));
    });

    let client = common::client(&server);
    let ci = client
        .carbon_intensity_latest(&Location::zone("DE"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(ci.zone.as_deref(), Some("DE"));
    assert_eq!(ci.carbon_intensity, Some(302.0));
    assert_eq!(ci.datetime, Utc.with_ymd_and_hms(2023, 3, 1, 13, 0, 0).unwrap());
    assert_eq!(ci.is_estimated, Some(true));
    assert_eq!(ci.estimation_method.as_deref(), Some("TIME_SLICER_AVERAGE"));
}

#[tokio::test]
async fn history_decodes_all_points() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/carbon-intensity/history")
            .header("auth-token", common::TOKEN)
            .query_param("zone", "DE");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("carbon_history", "DE"));
    });

    let client = common::client(&server);
    let history = client
        .carbon_intensity_history(&Location::zone("DE"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(history.zone, "DE");
    assert_eq!(history.history.len(), 3);
    assert_eq!(history.history[0].carbon_intensity, Some(413.0));
    // history points carry no zone of their own
    assert_eq!(history.history[0].zone, None);
    // a slot with no measurement decodes as None, not as an error
    assert_eq!(history.history[2].carbon_intensity, None);
    assert_eq!(history.history[2].is_estimated, Some(true));
}

#[tokio::test]
async fn past_with_estimation_fallback_sends_the_flag() {
    let datetime = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();

    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/carbon-intensity/past")
            .header("auth-token", common::TOKEN)
            .query_param("zone", "DE")
            .query_param("datetime", "2023-01-01T12:00:00Z")
            .query_param("estimationFallback", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("carbon_past", "DE"));
    });

    let client = common::client(&server);
    let ci = client
        .carbon_intensity_past(&Location::zone("DE"), datetime, true)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(ci.carbon_intensity, Some(322.0));
    assert_eq!(ci.datetime, datetime);
}

#[tokio::test]
async fn past_without_estimation_fallback_omits_the_flag() {
    let datetime = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();

    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/carbon-intensity/past")
            .query_param("zone", "DE")
            .query_param("datetime", "2023-01-01T12:00:00Z")
            .query_param_missing("estimationFallback");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("carbon_past", "DE"));
    });

    let client = common::client(&server);
    client
        .carbon_intensity_past(&Location::zone("DE"), datetime, false)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn past_range_sends_exactly_zone_start_end() {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 1, 10, 0, 0, 0).unwrap();

    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/carbon-intensity/past-range")
            .header("auth-token", common::TOKEN)
            .query_param("zone", "FR")
            .query_param("start", "2023-01-01T00:00:00Z")
            .query_param("end", "2023-01-10T00:00:00Z")
            .query_param_missing("datetime")
            .query_param_missing("estimationFallback");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("carbon_past_range", "FR"));
    });

    let client = common::client(&server);
    let range = client
        .carbon_intensity_past_range(&Location::zone("FR"), start, end, false)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(range.zone.as_deref(), Some("FR"));
    assert_eq!(range.data.len(), 2);
    assert_eq!(range.data[0].carbon_intensity, Some(64.0));
    assert_eq!(range.data[1].datetime, Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap());
}
