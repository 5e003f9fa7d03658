//! Carbon-intensity endpoints (gCO2eq/kWh per zone).

mod api;
mod model;

pub use model::{CarbonIntensity, CarbonIntensityHistory, CarbonIntensityRange};

use chrono::{DateTime, Utc};

use crate::core::{EmClient, EmError, query::Location};

impl EmClient {
    /// Fetches the last known carbon intensity of electricity consumed in an
    /// area, queried by zone identifier or by geolocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn carbon_intensity_latest(
        &self,
        location: &Location,
    ) -> Result<CarbonIntensity, EmError> {
        api::fetch_latest(self, location).await
    }

    /// Fetches the last 24h of carbon intensity of an area, at 60-minute
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn carbon_intensity_history(
        &self,
        location: &Location,
    ) -> Result<CarbonIntensityHistory, EmError> {
        api::fetch_history(self, location).await
    }

    /// Fetches the carbon intensity of an area at a past datetime.
    ///
    /// With `estimation_fallback`, the API falls back to estimated data when
    /// no measured data exists for the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn carbon_intensity_past(
        &self,
        location: &Location,
        datetime: DateTime<Utc>,
        estimation_fallback: bool,
    ) -> Result<CarbonIntensity, EmError> {
        api::fetch_past(self, location, datetime, estimation_fallback).await
    }

    /// Fetches the carbon intensity of an area over a past date range.
    ///
    /// `end` is exclusive; the upstream API limits ranges to 10 days and this
    /// client does not enforce that locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn carbon_intensity_past_range(
        &self,
        location: &Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        estimation_fallback: bool,
    ) -> Result<CarbonIntensityRange, EmError> {
        api::fetch_past_range(self, location, start, end, estimation_fallback).await
    }
}
