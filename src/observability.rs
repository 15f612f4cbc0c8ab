use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing
///
/// - Structured JSON logging when `ENVIRONMENT=production`
/// - Console logging otherwise
/// - `RUST_LOG` overrides the configured level
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_observability(service_name: &str, service_version: &str, log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::debug!(
        service.name = service_name,
        service.version = service_version,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_init_only_once() {
        let first = init_observability("test-service", "0.1.0", "debug");
        let second = init_observability("test-service", "0.1.0", "debug");

        assert!(first.is_ok(), "first init should succeed: {:?}", first.err());
        assert!(second.is_err());
    }
}
