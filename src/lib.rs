//! Look up the approximate location of an IP address in a MaxMind city
//! database, and the distance between two addresses.
//!
//! ```no_run
//! use geoip_location::{distance, Location, LookupService};
//!
//! let db = LookupService::open("db/GeoLite2-City.mmdb")?;
//! let loc = Location::new(&db, "194.232.104.21")?;
//! println!("{:?} {:?} {:?}", loc.country(), loc.city(), loc.timezone());
//!
//! let km = distance(&db, "194.232.104.21", "91.197.28.69")?;
//! println!("{km:.1} km");
//! # Ok::<(), geoip_location::GeoError>(())
//! ```

pub mod config;
pub mod database;
pub mod distance;
pub mod error;
pub mod location;
pub mod lookup;
pub mod record;
pub mod tables;

pub use config::Config;
pub use database::{DatabaseInfo, LookupService};
pub use distance::{distance, great_circle_km};
pub use error::{GeoError, Result};
pub use location::Location;
pub use lookup::GeoLookup;
pub use record::GeoRecord;
