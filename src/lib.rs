//! electricitymap-rs: typed client for the Electricity Maps API v3.
//!
//! Wraps the REST endpoints at `https://api.electricitymap.org/v3`: the zone
//! catalogue, live/recent/past carbon intensity, and live/recent/past power
//! breakdowns. Every call is a single authenticated GET that decodes straight
//! into a typed response; errors come back as values, never panics.
//!
//! ```no_run
//! use electricitymap_rs::{EmClient, Location};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), electricitymap_rs::EmError> {
//!     let client = EmClient::new("my-auth-token")?;
//!     let ci = client.carbon_intensity_latest(&Location::zone("DE")).await?;
//!     println!(
//!         "{}: {:?} gCO2eq/kWh at {}",
//!         ci.zone.as_deref().unwrap_or("?"),
//!         ci.carbon_intensity,
//!         ci.datetime
//!     );
//!     Ok(())
//! }
//! ```

pub mod carbon;
pub mod core;
pub mod power;
pub mod zones;

pub use crate::carbon::{CarbonIntensity, CarbonIntensityHistory, CarbonIntensityRange};
pub use crate::core::{EmClient, EmClientBuilder, EmError, Location};
pub use crate::power::{PowerBreakdown, PowerBreakdownHistory, PowerBreakdownRange};
pub use crate::zones::Zone;
