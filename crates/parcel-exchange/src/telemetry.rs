use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level when present.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Targets that receive the configured level; everything else stays at `warn`.
const MARKETPLACE_TARGETS: [&str; 2] = ["parcel_exchange", "parcel_exchange_cli"];

/// A bare level such as `debug` is scoped to the marketplace crates. Anything containing a
/// directive (`=` or `,`) is used verbatim.
fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let level = level.trim();
    let directives = if level.contains(['=', ',']) {
        level.to_string()
    } else {
        scoped_directives(level)
    };

    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

fn scoped_directives(level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        MARKETPLACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter_directives() {
        let err = build_filter("parcel_exchange=loud").expect_err("directive is malformed");
        assert!(matches!(err, TelemetryError::EnvFilter { .. }));
        assert!(err.to_string().contains("parcel_exchange=loud"));
    }

    #[test]
    fn plain_levels_are_scoped_to_marketplace_crates() {
        assert_eq!(
            scoped_directives("debug"),
            "warn,parcel_exchange=debug,parcel_exchange_cli=debug"
        );
        let filter = build_filter(" debug ").expect("plain level builds");
        assert!(filter.to_string().contains("parcel_exchange=debug"));
    }

    #[test]
    fn unknown_plain_level_reports_what_was_configured() {
        let err = build_filter("chatty").expect_err("not a level");
        assert!(matches!(err, TelemetryError::EnvFilter { ref value, .. } if value == "chatty"));
    }

    #[test]
    fn explicit_directives_pass_through() {
        let filter = build_filter("info,csv=trace").expect("directives build");
        assert!(filter.to_string().contains("csv=trace"));
        assert!(!filter.to_string().contains("parcel_exchange"));
    }
}
