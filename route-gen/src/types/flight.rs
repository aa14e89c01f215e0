use serde::Serialize;

use super::airport::{Destination, Region, SourceAirport};

/// Multiplier applied to the degree distance before it is stored on a record.
pub const DEGREE_DISTANCE_SCALE: f64 = 60.0;

/// One synthetic flight from a source airport to a catalog destination.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlightRecord {
    pub source_airport: &'static str,
    pub destination_airport: &'static str,
    pub destination_name: &'static str,
    pub destination_lat: f64,
    pub destination_lon: f64,
    pub airline: &'static str,
    pub flight_hour: u8,
    pub domestic: bool,
    pub region: Region,
    pub distance: f64,
}

impl FlightRecord {
    /// Creates a record, `degree_distance` being the raw planar distance in degrees.
    pub fn new(
        source: SourceAirport,
        destination: &Destination,
        airline: &'static str,
        flight_hour: u8,
        degree_distance: f64,
    ) -> Self {
        FlightRecord {
            source_airport: source.code(),
            destination_airport: destination.code,
            destination_name: destination.name,
            destination_lat: destination.latitude,
            destination_lon: destination.longitude,
            airline,
            flight_hour,
            domestic: destination.domestic,
            region: destination.region,
            distance: degree_distance * DEGREE_DISTANCE_SCALE,
        }
    }
}

/// Flights produced by one generator call, in generation order.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightTable {
    source: SourceAirport,
    records: Vec<FlightRecord>,
}

impl FlightTable {
    pub fn new(source: SourceAirport) -> Self {
        FlightTable {
            source,
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: FlightRecord) {
        self.records.push(record);
    }

    pub fn source(&self) -> SourceAirport {
        self.source
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a FlightTable {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Planar Euclidean distance over raw latitude/longitude degrees.
///
/// This is not a great-circle distance; generated flight counts depend on it.
pub fn degree_distance(origin_lat: f64, origin_lon: f64, dest_lat: f64, dest_lon: f64) -> f64 {
    let delta_lat = origin_lat - dest_lat;
    let delta_lon = origin_lon - dest_lon;
    (delta_lat.powi(2) + delta_lon.powi(2)).sqrt()
}
