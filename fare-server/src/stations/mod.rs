//! Station name resolution for national-rail pricing.
//!
//! Provides station code → national-rail name translation, with the
//! underlying display-name lookups cached in memory.

mod cache;
mod names;

pub use cache::{CachedNameResolver, NameCacheConfig};
pub use names::rail_station_name;
