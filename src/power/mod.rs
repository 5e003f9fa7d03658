//! Power-breakdown endpoints (MW per production source, per zone).

mod api;
mod model;

pub use model::{Breakdown, PowerBreakdown, PowerBreakdownHistory, PowerBreakdownRange};

use chrono::{DateTime, Utc};

use crate::core::{EmClient, EmError, query::Location};

impl EmClient {
    /// Fetches the last known power breakdown of an area: production,
    /// consumption, and physical import/export flows, broken down by source
    /// type, plus renewable and fossil-free percentages.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn power_breakdown_latest(
        &self,
        location: &Location,
    ) -> Result<PowerBreakdown, EmError> {
        api::fetch_latest(self, location).await
    }

    /// Fetches the last 24h of power consumption and production breakdowns
    /// of an area, at 60-minute resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn power_breakdown_history(
        &self,
        location: &Location,
    ) -> Result<PowerBreakdownHistory, EmError> {
        api::fetch_history(self, location).await
    }

    /// Fetches the power breakdown of an area at a past datetime.
    ///
    /// With `estimation_fallback`, the API falls back to estimated data when
    /// no measured data exists for the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn power_breakdown_past(
        &self,
        location: &Location,
        datetime: DateTime<Utc>,
        estimation_fallback: bool,
    ) -> Result<PowerBreakdown, EmError> {
        api::fetch_past(self, location, datetime, estimation_fallback).await
    }

    /// Fetches the power breakdown of an area over a past date range.
    ///
    /// `end` is exclusive; the upstream API limits ranges to 10 days and this
    /// client does not enforce that locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-200 status, or the response cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn power_breakdown_past_range(
        &self,
        location: &Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        estimation_fallback: bool,
    ) -> Result<PowerBreakdownRange, EmError> {
        api::fetch_past_range(self, location, start, end, estimation_fallback).await
    }
}
