use std::path::PathBuf;

use route_gen::analysis::TOP_DESTINATIONS;
use route_gen::{SourceAirport, DEFAULT_SEED};

use crate::report_error::ReportError;

pub const USAGE: &str =
    "Usage: route-report [AIRPORT] [--seed N] [--top N] [--log-dir DIR] [--export PATH]";

/// Settings of one `route-report` run, read from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub airport: SourceAirport,
    pub seed: u64,
    pub top: usize,
    pub log_dir: PathBuf,
    pub export: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            airport: SourceAirport::Jfk,
            seed: DEFAULT_SEED,
            top: TOP_DESTINATIONS,
            log_dir: PathBuf::from("."),
            export: None,
        }
    }
}

impl ReportConfig {
    /// Parses the arguments that follow the program name.
    ///
    /// # Errors
    /// Returns `ReportError::Config` for unknown flags, missing or invalid values,
    /// and unknown airports.
    pub fn from_args<I>(args: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ReportConfig::default();
        let mut airport_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = required_value(&mut args, "--seed")?;
                    config.seed = value
                        .parse()
                        .map_err(|_| ReportError::Config(format!("invalid seed: {}", value)))?;
                }
                "--top" => {
                    let value = required_value(&mut args, "--top")?;
                    config.top = match value.parse::<usize>() {
                        Ok(top) if top > 0 => top,
                        _ => {
                            return Err(ReportError::Config(format!(
                                "invalid --top value: {}",
                                value
                            )))
                        }
                    };
                }
                "--log-dir" => {
                    config.log_dir = PathBuf::from(required_value(&mut args, "--log-dir")?);
                }
                "--export" => {
                    config.export = Some(PathBuf::from(required_value(&mut args, "--export")?));
                }
                flag if flag.starts_with("--") => {
                    return Err(ReportError::Config(format!("unknown flag {}\n{}", flag, USAGE)));
                }
                code => {
                    if airport_seen {
                        return Err(ReportError::Config(format!(
                            "unexpected argument {}\n{}",
                            code, USAGE
                        )));
                    }
                    config.airport = SourceAirport::from_code(code)
                        .map_err(|e| ReportError::Config(e.to_string()))?;
                    airport_seen = true;
                }
            }
        }

        Ok(config)
    }
}

fn required_value<I>(args: &mut I, flag: &str) -> Result<String, ReportError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ReportError::Config(format!("{} requires a value\n{}", flag, USAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ReportConfig, ReportError> {
        ReportConfig::from_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.airport, SourceAirport::Jfk);
        assert_eq!(config.seed, 42);
        assert_eq!(config.top, 5);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "atl", "--seed", "7", "--top", "3", "--log-dir", "/tmp", "--export", "atl.csv",
        ])
        .unwrap();
        assert_eq!(config.airport, SourceAirport::Atl);
        assert_eq!(config.seed, 7);
        assert_eq!(config.top, 3);
        assert_eq!(config.log_dir, PathBuf::from("/tmp"));
        assert_eq!(config.export, Some(PathBuf::from("atl.csv")));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(parse(&["XXX"]), Err(ReportError::Config(_))));
        assert!(matches!(parse(&["--seed"]), Err(ReportError::Config(_))));
        assert!(matches!(parse(&["--seed", "abc"]), Err(ReportError::Config(_))));
        assert!(matches!(parse(&["--top", "0"]), Err(ReportError::Config(_))));
        assert!(matches!(parse(&["--verbose"]), Err(ReportError::Config(_))));
        assert!(matches!(parse(&["JFK", "BOS"]), Err(ReportError::Config(_))));
    }
}
