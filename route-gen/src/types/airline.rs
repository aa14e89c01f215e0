/// Carriers assigned to synthetic flights.
///
/// Domestic routes only draw from the first `DOMESTIC_AIRLINE_COUNT` entries,
/// international routes draw from the whole roster.
pub static AIRLINES: [&str; 9] = [
    "American Airlines",
    "Delta Air Lines",
    "United Airlines",
    "Southwest Airlines",
    "JetBlue Airways",
    "British Airways",
    "Lufthansa",
    "Air France",
    "Emirates",
];

pub const DOMESTIC_AIRLINE_COUNT: usize = 5;
