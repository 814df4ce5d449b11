//! Grand Exchange item snapshots: immutable market data for one traded item,
//! its price trend and windowed price changes, and the catalogue JSON mapping.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod snapshot;
pub mod types;
pub mod wire;

pub use error::{AppError, Result, SnapshotError};
pub use snapshot::{ItemSnapshot, SnapshotBuilder};
pub use types::{PriceChange, PriceChangeBuilder, PriceTrend, PriceTrendBuilder, Trend};
