use std::fmt::Write;

use route_gen::analysis::{
    AirlineTypeCount, DestinationCount, FlightTypeSplit, HourBucket, LabelCount, RouteLine,
    RouteSummary,
};
use route_gen::SourceAirport;

// Writing into a String cannot fail, so the fmt::Results below are ignored.

pub fn render_airports(selected: SourceAirport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{:<3} {:<10} {:<10} {:<45}", "", "Latitude", "Longitude", "Airport");
    for airport in SourceAirport::ALL {
        let (lat, lon) = airport.coordinates();
        let marker = if airport == selected { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<3} {:<10.4} {:<10.4} {:<45}",
            marker,
            lat,
            lon,
            airport.selector_label()
        );
    }
    out
}

pub fn render_top_destinations(top: &[DestinationCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{:<12} {:<40} {:>8}", "Destination", "Name", "Flights");
    for destination in top {
        let _ = writeln!(
            out,
            "{:<12} {:<40} {:>8}",
            destination.code, destination.name, destination.count
        );
    }
    out
}

pub fn render_split(split: &FlightTypeSplit) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{:<15} {:>8} {:>8}", "Flight Type", "Flights", "Share");
    let _ = writeln!(
        out,
        "{:<15} {:>8} {:>7}%",
        "Domestic", split.domestic, split.domestic_pct
    );
    let _ = writeln!(
        out,
        "{:<15} {:>8} {:>7}%",
        "International", split.international, split.international_pct
    );
    out
}

pub fn render_hours(buckets: &[HourBucket]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{:<20} {:>8}", "Time of Day", "Flights");
    for bucket in buckets {
        let _ = writeln!(out, "{:<20} {:>8}", bucket.period.label(), bucket.count);
    }
    out
}

pub fn render_airlines(ranking: &[LabelCount], by_type: &[AirlineTypeCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{:<22} {:>8} {:>10} {:>14}",
        "Airline", "Flights", "Domestic", "International"
    );
    for (entry, split) in ranking.iter().zip(by_type) {
        let _ = writeln!(
            out,
            "{:<22} {:>8} {:>10} {:>14}",
            entry.label, entry.count, split.domestic, split.international
        );
    }
    out
}

pub fn render_regions(regions: &[LabelCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{:<15} {:>8}", "Region", "Flights");
    for region in regions {
        let _ = writeln!(out, "{:<15} {:>8}", region.label, region.count);
    }
    out
}

pub fn render_routes(source: SourceAirport, routes: &[RouteLine]) -> String {
    let (lat, lon) = source.coordinates();
    let mut out = String::new();
    let _ = writeln!(out, "\nRoutes from {} ({:.4}, {:.4})", source, lat, lon);
    let _ = writeln!(
        out,
        "{:<6} {:<15} {:>10} {:>10} {:>8} {:>7}",
        "Code", "Type", "Latitude", "Longitude", "Flights", "Weight"
    );
    for route in routes {
        let kind = if route.domestic {
            "domestic"
        } else {
            "international"
        };
        let _ = writeln!(
            out,
            "{:<6} {:<15} {:>10.4} {:>10.4} {:>8} {:>7.1}",
            route.code, kind, route.latitude, route.longitude, route.flights, route.weight
        );
    }
    out
}

pub fn render_summary(summary: &RouteSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Airport: {} - {} ({} flights)",
        summary.source.code(),
        summary.source.name(),
        summary.total_flights
    );
    out.push_str(&render_top_destinations(&summary.top_destinations));
    out.push_str(&render_split(&summary.split));
    out.push_str(&render_hours(&summary.hourly));
    out.push_str(&render_airlines(&summary.top_airlines, &summary.airline_by_type));
    out.push_str(&render_regions(&summary.regions));
    out
}
