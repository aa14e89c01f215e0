use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::gen_error::GenError;

/// East Coast airports the synthetic routes depart from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceAirport {
    Jfk,
    Atl,
    Mia,
    Bos,
    Phl,
}

impl SourceAirport {
    /// Every source airport, in selector order.
    pub const ALL: [SourceAirport; 5] = [
        SourceAirport::Jfk,
        SourceAirport::Atl,
        SourceAirport::Mia,
        SourceAirport::Bos,
        SourceAirport::Phl,
    ];

    /// Returns the IATA code of the airport.
    pub fn code(&self) -> &'static str {
        match self {
            SourceAirport::Jfk => "JFK",
            SourceAirport::Atl => "ATL",
            SourceAirport::Mia => "MIA",
            SourceAirport::Bos => "BOS",
            SourceAirport::Phl => "PHL",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceAirport::Jfk => "John F. Kennedy International (New York)",
            SourceAirport::Atl => "Hartsfield-Jackson Atlanta International",
            SourceAirport::Mia => "Miami International",
            SourceAirport::Bos => "Boston Logan International",
            SourceAirport::Phl => "Philadelphia International",
        }
    }

    /// Returns `(latitude, longitude)` in degrees.
    pub fn coordinates(&self) -> (f64, f64) {
        match self {
            SourceAirport::Jfk => (40.6413, -73.7781),
            SourceAirport::Atl => (33.6407, -84.4277),
            SourceAirport::Mia => (25.7932, -80.2906),
            SourceAirport::Bos => (42.3656, -71.0096),
            SourceAirport::Phl => (39.8729, -75.2437),
        }
    }

    /// Label shown by the airport selector, e.g. `MIA - Miami International`.
    pub fn selector_label(&self) -> String {
        format!("{} - {}", self.code(), self.name())
    }

    /// Resolves a source airport from its code or from a full selector label.
    ///
    /// Only the text before `" - "` is considered, trimmed and case-insensitive.
    pub fn from_code(input: &str) -> Result<Self, GenError> {
        let code = input.split(" - ").next().unwrap_or(input).trim();
        match code.to_ascii_uppercase().as_str() {
            "JFK" => Ok(SourceAirport::Jfk),
            "ATL" => Ok(SourceAirport::Atl),
            "MIA" => Ok(SourceAirport::Mia),
            "BOS" => Ok(SourceAirport::Bos),
            "PHL" => Ok(SourceAirport::Phl),
            _ => Err(GenError::UnknownAirport(code.to_string())),
        }
    }
}

impl FromStr for SourceAirport {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceAirport::from_code(s)
    }
}

impl fmt::Display for SourceAirport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Coarse geographic label attached to each destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    West,
    Midwest,
    South,
    Europe,
    Asia,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::West => "West",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
        }
    }
}

/// Represents a destination airport of the synthetic route network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Destination {
    pub code: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub domestic: bool,
    pub region: Region,
}

impl Destination {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        latitude: f64,
        longitude: f64,
        domestic: bool,
        region: Region,
    ) -> Self {
        Destination {
            code,
            name,
            latitude,
            longitude,
            domestic,
            region,
        }
    }
}

/// Destination catalog, in generation order: domestic first, then international.
pub static DESTINATIONS: [Destination; 14] = [
    Destination::new("LAX", "Los Angeles International", 33.9416, -118.4085, true, Region::West),
    Destination::new("ORD", "Chicago O'Hare International", 41.9786, -87.9048, true, Region::Midwest),
    Destination::new("DFW", "Dallas/Fort Worth International", 32.8968, -97.0380, true, Region::South),
    Destination::new("DEN", "Denver International", 39.8561, -104.6737, true, Region::West),
    Destination::new("SFO", "San Francisco International", 37.6213, -122.3790, true, Region::West),
    Destination::new("SEA", "Seattle-Tacoma International", 47.4502, -122.3088, true, Region::West),
    Destination::new("MCO", "Orlando International", 28.4312, -81.3081, true, Region::South),
    Destination::new("LHR", "London Heathrow", 51.4700, -0.4543, false, Region::Europe),
    Destination::new("CDG", "Paris Charles de Gaulle", 49.0097, 2.5479, false, Region::Europe),
    Destination::new("FRA", "Frankfurt Airport", 50.0379, 8.5622, false, Region::Europe),
    Destination::new("NRT", "Tokyo Narita International", 35.7647, 140.3864, false, Region::Asia),
    Destination::new("HKG", "Hong Kong International", 22.3080, 113.9185, false, Region::Asia),
    Destination::new("SYD", "Sydney Airport", -33.9399, 151.1753, false, Region::Oceania),
    Destination::new(
        "GRU",
        "São Paulo/Guarulhos International",
        -23.4356,
        -46.4731,
        false,
        Region::SouthAmerica,
    ),
];
