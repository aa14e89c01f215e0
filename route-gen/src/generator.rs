use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::airline::{AIRLINES, DOMESTIC_AIRLINE_COUNT};
use crate::types::airport::{Destination, SourceAirport, DESTINATIONS};
use crate::types::flight::{degree_distance, FlightRecord, FlightTable};
use crate::types::gen_error::GenError;

/// Seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

const BASE_FLIGHTS_MIN: u32 = 5;
const BASE_FLIGHTS_MAX: u32 = 20;
const HOURS_PER_DAY: u8 = 24;

/// Generates synthetic outbound flights over a fixed destination catalog and airline roster.
///
/// The catalogs are validated once, when the generator is built; generation itself
/// cannot fail and performs no I/O.
#[derive(Clone, Copy, Debug)]
pub struct RouteGenerator {
    destinations: &'static [Destination],
    airlines: &'static [&'static str],
}

impl RouteGenerator {
    /// Creates a generator over custom catalogs.
    ///
    /// # Errors
    /// - `GenError::EmptyCatalog` if `destinations` is empty.
    /// - `GenError::MalformedCatalog` if two destinations share a code.
    /// - `GenError::ShortRoster` if `airlines` is shorter than the domestic-weighted prefix.
    pub fn new(
        destinations: &'static [Destination],
        airlines: &'static [&'static str],
    ) -> Result<Self, GenError> {
        if destinations.is_empty() {
            return Err(GenError::EmptyCatalog);
        }

        for (i, destination) in destinations.iter().enumerate() {
            if destinations[..i].iter().any(|d| d.code == destination.code) {
                return Err(GenError::MalformedCatalog(format!(
                    "duplicate destination code {}",
                    destination.code
                )));
            }
        }

        if airlines.len() < DOMESTIC_AIRLINE_COUNT {
            return Err(GenError::ShortRoster(airlines.len()));
        }

        Ok(RouteGenerator {
            destinations,
            airlines,
        })
    }

    /// Generator over the built-in destination catalog and airline roster.
    pub fn standard() -> Self {
        RouteGenerator {
            destinations: &DESTINATIONS,
            airlines: &AIRLINES,
        }
    }

    pub fn destinations(&self) -> &'static [Destination] {
        self.destinations
    }

    pub fn airlines(&self) -> &'static [&'static str] {
        self.airlines
    }

    /// Generates the flight table of `source` drawing from `rng`.
    ///
    /// Per destination, in catalog order: one base count draw, then an airline
    /// draw followed by an hour draw for every flight.
    pub fn generate_with_rng<R: Rng>(&self, source: SourceAirport, rng: &mut R) -> FlightTable {
        let (source_lat, source_lon) = source.coordinates();
        let mut table = FlightTable::new(source);

        for destination in self.destinations {
            let base = rng.gen_range(BASE_FLIGHTS_MIN..BASE_FLIGHTS_MAX);
            let count = pre_scaling_count(base, destination.domestic);

            let distance = degree_distance(
                source_lat,
                source_lon,
                destination.latitude,
                destination.longitude,
            );
            let flights = scale_for_distance(count, distance);

            let airline_pool = if destination.domestic {
                DOMESTIC_AIRLINE_COUNT
            } else {
                self.airlines.len()
            };

            for _ in 0..flights {
                let airline = self.airlines[rng.gen_range(0..airline_pool)];
                let flight_hour = rng.gen_range(0..HOURS_PER_DAY);
                table.push(FlightRecord::new(
                    source,
                    destination,
                    airline,
                    flight_hour,
                    distance,
                ));
            }
        }

        table
    }

    /// Generates the flight table of `source` from a fresh `ChaCha8Rng` seeded with `seed`.
    pub fn generate_seeded(&self, source: SourceAirport, seed: u64) -> FlightTable {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with_rng(source, &mut rng)
    }
}

impl Default for RouteGenerator {
    fn default() -> Self {
        RouteGenerator::standard()
    }
}

/// Flight count before distance scaling: domestic destinations get twice the draw.
pub fn pre_scaling_count(base: u32, domestic: bool) -> u32 {
    if domestic {
        base * 2
    } else {
        base
    }
}

/// Scales a flight count down with distance, truncating and keeping at least one flight.
pub fn scale_for_distance(count: u32, distance: f64) -> usize {
    let scaled = (count as f64 * (1.0 / (0.01 * distance + 0.5))) as usize;
    scaled.max(1)
}

/// Generates the built-in route table for a source airport code with the default seed.
///
/// # Errors
/// Returns `GenError::UnknownAirport` if `source_code` is not one of the five source airports.
pub fn generate(source_code: &str) -> Result<FlightTable, GenError> {
    let source = SourceAirport::from_code(source_code)?;
    Ok(generate_seeded(source, DEFAULT_SEED))
}

pub fn generate_seeded(source: SourceAirport, seed: u64) -> FlightTable {
    RouteGenerator::standard().generate_seeded(source, seed)
}

pub fn generate_with_rng<R: Rng>(source: SourceAirport, rng: &mut R) -> FlightTable {
    RouteGenerator::standard().generate_with_rng(source, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::airport::Region;
    use rand::rngs::mock::StepRng;

    static EMPTY: [Destination; 0] = [];
    static DUPLICATED: [Destination; 2] = [
        Destination::new("LAX", "Los Angeles International", 33.9416, -118.4085, true, Region::West),
        Destination::new("LAX", "Los Angeles International", 33.9416, -118.4085, true, Region::West),
    ];
    static SHORT_ROSTER: [&str; 2] = ["American Airlines", "Delta Air Lines"];

    #[test]
    fn test_standard_catalogs_are_valid() {
        assert!(RouteGenerator::new(&DESTINATIONS, &AIRLINES).is_ok());
    }

    #[test]
    fn test_invalid_catalogs_fail_at_construction() {
        assert_eq!(
            RouteGenerator::new(&EMPTY, &AIRLINES).unwrap_err(),
            GenError::EmptyCatalog
        );
        assert!(matches!(
            RouteGenerator::new(&DUPLICATED, &AIRLINES),
            Err(GenError::MalformedCatalog(_))
        ));
        assert_eq!(
            RouteGenerator::new(&DESTINATIONS, &SHORT_ROSTER).unwrap_err(),
            GenError::ShortRoster(2)
        );
    }

    #[test]
    fn test_domestic_count_is_doubled() {
        for base in BASE_FLIGHTS_MIN..BASE_FLIGHTS_MAX {
            assert_eq!(pre_scaling_count(base, true), 2 * pre_scaling_count(base, false));
        }
    }

    #[test]
    fn test_scale_for_distance() {
        // 38 / (0.01 * 14.19 + 0.5) = 59.2
        assert_eq!(scale_for_distance(38, 14.19), 59);
        assert_eq!(scale_for_distance(5, 236.994), 1);
        assert_eq!(scale_for_distance(10, 0.0), 20);
    }

    #[test]
    fn test_same_seed_same_table() {
        let first = generate("JFK").unwrap();
        let second = generate("jfk").unwrap();
        assert_eq!(first, second);

        let other_seed = generate_seeded(SourceAirport::Jfk, 7);
        assert_eq!(other_seed.source(), SourceAirport::Jfk);
    }

    #[test]
    fn test_unknown_source_is_a_validation_error() {
        assert_eq!(
            generate("XXX").unwrap_err(),
            GenError::UnknownAirport("XXX".to_string())
        );
    }

    #[test]
    fn test_records_are_within_bounds() {
        for airport in SourceAirport::ALL {
            let table = generate(airport.code()).unwrap();
            for record in &table {
                assert!(record.flight_hour < 24);
                let destination = DESTINATIONS
                    .iter()
                    .find(|d| d.code == record.destination_airport)
                    .expect("destination outside the catalog");
                if destination.domestic {
                    assert!(AIRLINES[..DOMESTIC_AIRLINE_COUNT].contains(&record.airline));
                } else {
                    assert!(AIRLINES.contains(&record.airline));
                }
            }
        }
    }

    #[test]
    fn test_destination_order_follows_catalog() {
        let table = generate("ATL").unwrap();
        let mut seen: Vec<&str> = Vec::new();
        for record in &table {
            if seen.last() != Some(&record.destination_airport) {
                seen.push(record.destination_airport);
            }
        }
        let catalog: Vec<&str> = DESTINATIONS.iter().map(|d| d.code).collect();
        assert_eq!(seen, catalog);
    }

    #[test]
    fn test_custom_rng_is_used() {
        // A constant RNG always yields the lowest value of every range.
        let mut rng = StepRng::new(0, 0);
        let table = generate_with_rng(SourceAirport::Jfk, &mut rng);
        for record in &table {
            assert_eq!(record.flight_hour, 0);
            assert_eq!(record.airline, "American Airlines");
        }
        let ord = table
            .iter()
            .filter(|r| r.destination_airport == "ORD")
            .count();
        assert_eq!(ord, scale_for_distance(10, 14.190));
    }
}
