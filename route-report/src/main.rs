mod config;
mod render;
mod report_error;

use std::env;
use std::io::{self, Write};
use std::path::Path;

use config::ReportConfig;
use logger::{Color, Logger};
use render::{
    render_airlines, render_airports, render_hours, render_regions, render_routes, render_split,
    render_summary, render_top_destinations,
};
use report_error::ReportError;
use route_gen::analysis::{
    airline_by_type, flight_type_split, hourly_distribution, region_counts, route_lines,
    top_airlines, top_destinations, RouteSummary, TOP_AIRLINES,
};
use route_gen::export::export_csv;
use route_gen::{RouteCache, RouteGenerator, SourceAirport};

/// State of an interactive report session.
struct Session {
    cache: RouteCache,
    current: SourceAirport,
    top: usize,
    logger: Logger,
}

impl Session {
    fn new(config: &ReportConfig, logger: Logger) -> Self {
        Session {
            cache: RouteCache::new(RouteGenerator::standard(), config.seed),
            current: config.airport,
            top: config.top,
            logger,
        }
    }

    fn select(&mut self, code: &str) -> Result<(), ReportError> {
        let airport = SourceAirport::from_code(code)?;
        self.current = airport;
        let table = self.cache.get_or_generate(airport)?;
        self.logger.info(
            &format!(
                "Selected {} ({} flights, seed {})",
                airport.selector_label(),
                table.len(),
                self.cache.seed()
            ),
            Color::Cyan,
            false,
        )?;
        Ok(())
    }

    fn summary(&self) -> Result<String, ReportError> {
        let table = self.cache.get_or_generate(self.current)?;
        Ok(render_summary(&RouteSummary::from_table(&table, self.top)))
    }

    fn export(&self, path: &Path) -> Result<usize, ReportError> {
        let table = self.cache.get_or_generate(self.current)?;
        let written = export_csv(&table, path)?;
        self.logger.info(
            &format!(
                "Exported {} flights from {} to {}",
                written,
                self.current,
                path.display()
            ),
            Color::Green,
            true,
        )?;
        Ok(written)
    }

    /// Runs one REPL command. Returns `false` when the session should end.
    fn execute(&mut self, args: &[&str]) -> Result<bool, ReportError> {
        let table = self.cache.get_or_generate(self.current)?;

        match args[0] {
            "select" => match args.get(1) {
                Some(code) => {
                    self.select(code)?;
                    println!("{}", self.summary()?);
                }
                None => println!("Usage: select <CODE>"),
            },

            "list-airports" => print!("{}", render_airports(self.current)),

            "summary" => println!("{}", self.summary()?),

            "top" => {
                let n = match args.get(1) {
                    Some(n) => n
                        .parse()
                        .map_err(|_| ReportError::Config(format!("invalid count: {}", n)))?,
                    None => self.top,
                };
                print!("{}", render_top_destinations(&top_destinations(&table, n)));
            }

            "split" => print!("{}", render_split(&flight_type_split(&table))),

            "hours" => print!("{}", render_hours(&hourly_distribution(&table))),

            "airlines" => {
                let ranking = top_airlines(&table, TOP_AIRLINES);
                let by_type = airline_by_type(&table, &ranking);
                print!("{}", render_airlines(&ranking, &by_type));
            }

            "regions" => print!("{}", render_regions(&region_counts(&table))),

            "routes" => print!("{}", render_routes(self.current, &route_lines(&table))),

            "export" => match args.get(1) {
                Some(path) => {
                    self.export(Path::new(path))?;
                }
                None => println!("Usage: export <PATH>"),
            },

            "-h" | "help" => print_help(),

            "exit" => return Ok(false),

            _ => eprintln!("Invalid command. Use -h for help."),
        }

        Ok(true)
    }
}

fn main() -> Result<(), ReportError> {
    let config = ReportConfig::from_args(env::args().skip(1))?;
    let logger = Logger::new(&config.log_dir, config.airport.code())?;
    let mut session = Session::new(&config, logger);

    session.select(config.airport.code())?;

    // Batch mode: export and leave.
    if let Some(path) = &config.export {
        session.export(path)?;
        return Ok(());
    }

    println!("{}", session.summary()?);

    loop {
        println!("Enter command (type '-h' or 'help' for options): ");
        io::stdout().flush()?;

        let mut command = String::new();
        if io::stdin().read_line(&mut command)? == 0 {
            break;
        }

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        match session.execute(&args) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("{}", e);
                if let Err(log_err) = session.logger.error(&e.to_string(), false) {
                    eprintln!("{}", log_err);
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  select <CODE>");
    println!("    Switches the source airport (JFK, ATL, MIA, BOS, PHL) and shows its summary.");
    println!("  list-airports");
    println!("    Shows the source airports; the current one is marked with '*'.");
    println!("  summary");
    println!("    Shows every aggregation of the current airport.");
    println!("  top [N]");
    println!("    Shows the N destinations with the most flights.");
    println!("  split");
    println!("    Shows domestic vs. international flights.");
    println!("  hours");
    println!("    Shows flights per time of day.");
    println!("  airlines");
    println!("    Shows the top 5 airlines split by flight type.");
    println!("  regions");
    println!("    Shows flights per destination region.");
    println!("  routes");
    println!("    Shows the direct routes with their map coordinates and line weight.");
    println!("  export <PATH>");
    println!("    Writes the current flight table as CSV.");
    println!("  exit");
    println!("    Closes this application.");
}
