use crate::config::ConfigError;
use crate::marketplace::{DistanceTableError, ListingError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    DistanceTable(DistanceTableError),
    Listing(ListingError),
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::DistanceTable(err) => write!(f, "pricing error: {}", err),
            AppError::Listing(err) => write!(f, "listing rejected: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::DistanceTable(err) => Some(err),
            AppError::Listing(err) => Some(err),
            AppError::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DistanceTableError> for AppError {
    fn from(value: DistanceTableError) -> Self {
        Self::DistanceTable(value)
    }
}

impl From<ListingError> for AppError {
    fn from(value: ListingError) -> Self {
        Self::Listing(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn listing_errors_keep_their_source() {
        let err = AppError::from(ListingError::Blank { field: "from" });
        assert_eq!(err.to_string(), "listing rejected: from must not be blank");
        assert!(err.source().is_some());
    }

    #[test]
    fn json_errors_are_wrapped() {
        let parse = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let err = AppError::from(parse);
        assert!(matches!(err, AppError::Json(_)));
        assert!(err.to_string().starts_with("json error"));
    }
}
