//! Synthetic outbound flight routes for East Coast airports.
//!
//! `generate` builds a reproducible `FlightTable` for a source airport from
//! fixed destination and airline catalogs; `analysis` derives the rankings and
//! distributions shown by the route report.

pub mod analysis;
pub mod cache;
pub mod export;
pub mod generator;
pub mod types;

pub use cache::RouteCache;
pub use generator::{generate, generate_seeded, generate_with_rng, RouteGenerator, DEFAULT_SEED};
pub use types::airline::AIRLINES;
pub use types::airport::{Destination, Region, SourceAirport, DESTINATIONS};
pub use types::flight::{FlightRecord, FlightTable};
pub use types::gen_error::GenError;
