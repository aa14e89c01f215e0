use std::fmt;

use logger::LoggerError;
use route_gen::GenError;

/// Represents errors that can occur in the route report application.
#[derive(Debug)]
pub enum ReportError {
    Config(String),         // Invalid command-line arguments
    Generation(GenError),   // Errors from the route generator, cache or export
    Logger(LoggerError),    // The log file could not be created or written
    Io(String),             // Console input/output failures
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            ReportError::Generation(e) => write!(f, "{}", e),
            ReportError::Logger(e) => write!(f, "Logger error: {}", e),
            ReportError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Generation(e) => Some(e),
            ReportError::Logger(e) => Some(e),
            ReportError::Config(_) | ReportError::Io(_) => None,
        }
    }
}

impl From<GenError> for ReportError {
    fn from(err: GenError) -> Self {
        ReportError::Generation(err)
    }
}

impl From<LoggerError> for ReportError {
    fn from(err: LoggerError) -> Self {
        ReportError::Logger(err)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}
