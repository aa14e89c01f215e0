use std::fmt;

/// Represents errors that can occur while generating or exporting synthetic routes.
#[derive(Debug, PartialEq)]
pub enum GenError {
    UnknownAirport(String),   // Source code outside the fixed coordinate table
    EmptyCatalog,             // A generator was built over zero destinations
    MalformedCatalog(String), // Duplicate destination codes and the like
    ShortRoster(usize),       // Fewer airlines than the domestic-weighted prefix
    CacheLock(String),        // The route cache lock was poisoned
    Export(String),           // CSV or file errors while exporting a table
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::UnknownAirport(ref code) => write!(f, "Unknown source airport: {}", code),
            GenError::EmptyCatalog => write!(f, "The destination catalog is empty"),
            GenError::MalformedCatalog(ref msg) => {
                write!(f, "Malformed destination catalog: {}", msg)
            }
            GenError::ShortRoster(len) => write!(
                f,
                "Airline roster has {} entries, at least {} are required",
                len,
                super::airline::DOMESTIC_AIRLINE_COUNT
            ),
            GenError::CacheLock(msg) => write!(f, "Route cache lock error: {}", msg),
            GenError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for GenError {}

impl From<csv::Error> for GenError {
    fn from(err: csv::Error) -> Self {
        GenError::Export(err.to_string())
    }
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        GenError::Export(err.to_string())
    }
}
