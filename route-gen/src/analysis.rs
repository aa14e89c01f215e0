//! Aggregations over a generated `FlightTable`.
//!
//! Every ranking sorts by count descending; ties keep the order in which the
//! key first appeared in the table.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::airport::SourceAirport;
use crate::types::flight::{FlightRecord, FlightTable};

/// Number of airlines kept by the airline ranking.
pub const TOP_AIRLINES: usize = 5;

/// Number of destinations shown by the destination ranking.
pub const TOP_DESTINATIONS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct DestinationCount {
    pub code: &'static str,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelCount {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightTypeSplit {
    pub domestic: usize,
    pub international: usize,
    pub domestic_pct: f64,
    pub international_pct: f64,
}

impl FlightTypeSplit {
    pub fn total(&self) -> usize {
        self.domestic + self.international
    }
}

/// Time-of-day bins, each a half-open hour range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Night,
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
    ];

    /// Night [0,6), Morning [6,12), Afternoon [12,18), Evening [18,24).
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..=5 => TimeOfDay::Night,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Night => "Night (0-6)",
            TimeOfDay::Morning => "Morning (6-12)",
            TimeOfDay::Afternoon => "Afternoon (12-18)",
            TimeOfDay::Evening => "Evening (18-24)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourBucket {
    pub period: TimeOfDay,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AirlineTypeCount {
    pub airline: &'static str,
    pub domestic: usize,
    pub international: usize,
}

/// A source-to-destination line for the route map.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLine {
    pub code: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub domestic: bool,
    pub flights: usize,
    pub weight: f64,
}

/// Every aggregation of one table, as rendered by the report front-end.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary {
    pub source: SourceAirport,
    pub total_flights: usize,
    pub top_destinations: Vec<DestinationCount>,
    pub split: FlightTypeSplit,
    pub hourly: Vec<HourBucket>,
    pub top_airlines: Vec<LabelCount>,
    pub airline_by_type: Vec<AirlineTypeCount>,
    pub regions: Vec<LabelCount>,
    pub routes: Vec<RouteLine>,
}

impl RouteSummary {
    pub fn from_table(table: &FlightTable, top_destinations_n: usize) -> Self {
        let top_airlines = top_airlines(table, TOP_AIRLINES);
        let airline_by_type = airline_by_type(table, &top_airlines);

        RouteSummary {
            source: table.source(),
            total_flights: table.len(),
            top_destinations: top_destinations(table, top_destinations_n),
            split: flight_type_split(table),
            hourly: hourly_distribution(table),
            top_airlines,
            airline_by_type,
            regions: region_counts(table),
            routes: route_lines(table),
        }
    }
}

// Counts records per key, in first-appearance order.
fn tally<K, F>(table: &FlightTable, key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    F: Fn(&FlightRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for record in table {
        let k = key(record);
        match positions.get(&k) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }

    counts
}

// Stable sort, so equal counts stay in first-appearance order.
fn rank<K>(mut counts: Vec<(K, usize)>) -> Vec<(K, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Destinations with the most flights, at most `n` of them.
pub fn top_destinations(table: &FlightTable, n: usize) -> Vec<DestinationCount> {
    rank(tally(table, |r| (r.destination_airport, r.destination_name)))
        .into_iter()
        .take(n)
        .map(|((code, name), count)| DestinationCount { code, name, count })
        .collect()
}

/// Domestic vs international counts, with percentages rounded to one decimal.
pub fn flight_type_split(table: &FlightTable) -> FlightTypeSplit {
    let domestic = table.iter().filter(|r| r.domestic).count();
    let international = table.len() - domestic;

    let pct = |count: usize| {
        if table.is_empty() {
            0.0
        } else {
            round_one_decimal(count as f64 / table.len() as f64 * 100.0)
        }
    };

    FlightTypeSplit {
        domestic,
        international,
        domestic_pct: pct(domestic),
        international_pct: pct(international),
    }
}

/// Flights per time-of-day bin, always four buckets in `TimeOfDay::ALL` order.
pub fn hourly_distribution(table: &FlightTable) -> Vec<HourBucket> {
    let mut counts = [0usize; 4];
    for record in table {
        let period = TimeOfDay::from_hour(record.flight_hour);
        counts[period as usize] += 1;
    }

    TimeOfDay::ALL
        .iter()
        .zip(counts)
        .map(|(&period, count)| HourBucket { period, count })
        .collect()
}

/// Airlines with the most flights, at most `n` of them.
pub fn top_airlines(table: &FlightTable, n: usize) -> Vec<LabelCount> {
    rank(tally(table, |r| r.airline))
        .into_iter()
        .take(n)
        .map(|(label, count)| LabelCount { label, count })
        .collect()
}

/// Domestic/international split of the airlines in `ranking`, in ranking order.
pub fn airline_by_type(table: &FlightTable, ranking: &[LabelCount]) -> Vec<AirlineTypeCount> {
    ranking
        .iter()
        .map(|entry| {
            let (domestic, international) = table
                .iter()
                .filter(|r| r.airline == entry.label)
                .fold((0, 0), |(dom, intl), r| {
                    if r.domestic {
                        (dom + 1, intl)
                    } else {
                        (dom, intl + 1)
                    }
                });
            AirlineTypeCount {
                airline: entry.label,
                domestic,
                international,
            }
        })
        .collect()
}

pub fn region_counts(table: &FlightTable) -> Vec<LabelCount> {
    rank(tally(table, |r| r.region))
        .into_iter()
        .map(|(region, count)| LabelCount {
            label: region.as_str(),
            count,
        })
        .collect()
}

/// One line per distinct destination, weighted `1 + flights / 10`.
pub fn route_lines(table: &FlightTable) -> Vec<RouteLine> {
    let counts = tally(table, |r| r.destination_airport);

    counts
        .into_iter()
        .filter_map(|(code, flights)| {
            let record = table.iter().find(|r| r.destination_airport == code)?;
            Some(RouteLine {
                code,
                name: record.destination_name,
                latitude: record.destination_lat,
                longitude: record.destination_lon,
                domestic: record.domestic,
                flights,
                weight: 1.0 + flights as f64 / 10.0,
            })
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::types::airport::DESTINATIONS;

    fn table_from(flights: &[(usize, &'static str, u8)]) -> FlightTable {
        let mut table = FlightTable::new(SourceAirport::Jfk);
        for &(dest, airline, hour) in flights {
            table.push(FlightRecord::new(
                SourceAirport::Jfk,
                &DESTINATIONS[dest],
                airline,
                hour,
                10.0,
            ));
        }
        table
    }

    #[test]
    fn test_top_destinations_ties_keep_first_appearance() {
        // LAX x2, LHR x3, ORD x2
        let table = table_from(&[
            (0, "Delta Air Lines", 1),
            (7, "Lufthansa", 2),
            (1, "Delta Air Lines", 3),
            (7, "Lufthansa", 4),
            (0, "Delta Air Lines", 5),
            (1, "Delta Air Lines", 6),
            (7, "Emirates", 7),
        ]);

        let top = top_destinations(&table, 5);
        let codes: Vec<&str> = top.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["LHR", "LAX", "ORD"]);
        assert_eq!(top[0].name, "London Heathrow");
        assert_eq!(top[0].count, 3);

        assert_eq!(top_destinations(&table, 1).len(), 1);
    }

    #[test]
    fn test_flight_type_split_rounding() {
        // 1 domestic out of 3: 33.3 / 66.7
        let table = table_from(&[
            (0, "Delta Air Lines", 1),
            (7, "Lufthansa", 2),
            (8, "Air France", 3),
        ]);
        let split = flight_type_split(&table);
        assert_eq!(split.domestic, 1);
        assert_eq!(split.international, 2);
        assert_eq!(split.domestic_pct, 33.3);
        assert_eq!(split.international_pct, 66.7);
    }

    #[test]
    fn test_flight_type_split_empty_table() {
        let split = flight_type_split(&FlightTable::new(SourceAirport::Phl));
        assert_eq!(split.total(), 0);
        assert_eq!(split.domestic_pct, 0.0);
        assert_eq!(split.international_pct, 0.0);
    }

    #[test]
    fn test_hour_bins_are_half_open() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);

        let table = table_from(&[
            (0, "Delta Air Lines", 0),
            (0, "Delta Air Lines", 6),
            (0, "Delta Air Lines", 18),
            (0, "Delta Air Lines", 23),
        ]);
        let counts: Vec<usize> = hourly_distribution(&table)
            .iter()
            .map(|b| b.count)
            .collect();
        assert_eq!(counts, vec![1, 1, 0, 2]);
    }

    #[test]
    fn test_airline_by_type_follows_ranking() {
        let table = table_from(&[
            (0, "Delta Air Lines", 1),
            (7, "Delta Air Lines", 2),
            (7, "Lufthansa", 3),
            (0, "Delta Air Lines", 4),
        ]);
        let ranking = top_airlines(&table, TOP_AIRLINES);
        let cross = airline_by_type(&table, &ranking);

        assert_eq!(
            cross,
            vec![
                AirlineTypeCount {
                    airline: "Delta Air Lines",
                    domestic: 2,
                    international: 1,
                },
                AirlineTypeCount {
                    airline: "Lufthansa",
                    domestic: 0,
                    international: 1,
                },
            ]
        );
    }

    #[test]
    fn test_route_lines_weight_by_flights() {
        let table = table_from(&[
            (7, "Lufthansa", 1),
            (0, "Delta Air Lines", 2),
            (7, "Lufthansa", 3),
        ]);
        let lines = route_lines(&table);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].code, "LHR");
        assert_eq!(lines[0].flights, 2);
        assert!((lines[0].weight - 1.2).abs() < 1e-9);
        assert!(lines[1].domestic);
    }

    #[test]
    fn test_summary_of_generated_table() {
        let table = generate("JFK").unwrap();
        let summary = RouteSummary::from_table(&table, TOP_DESTINATIONS);

        assert_eq!(summary.total_flights, table.len());
        assert_eq!(summary.split.total(), table.len());
        let pct_sum = summary.split.domestic_pct + summary.split.international_pct;
        assert!((pct_sum - 100.0).abs() <= 0.1 + 1e-9, "got {}", pct_sum);
        assert_eq!(
            summary.hourly.iter().map(|b| b.count).sum::<usize>(),
            table.len()
        );
        assert!(summary.top_airlines.len() <= TOP_AIRLINES);
        assert!(summary
            .top_airlines
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
        assert_eq!(summary.airline_by_type.len(), summary.top_airlines.len());
        assert_eq!(summary.routes.len(), DESTINATIONS.len());
        assert_eq!(
            summary.regions.iter().map(|r| r.count).sum::<usize>(),
            table.len()
        );
    }
}
