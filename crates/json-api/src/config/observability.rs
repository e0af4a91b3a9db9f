//! Logging, tracing export and request timing config

use std::time::Duration;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log filter directives (e.g. `info`, `influencers_json=debug`)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}

/// Request timing and OpenTelemetry settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Requests slower than this are logged as warnings.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,

    /// OpenTelemetry trace export.
    #[command(flatten)]
    pub tracing: TracingConfig,
}

/// OpenTelemetry trace export settings.
#[derive(Debug, Args)]
pub struct TracingConfig {
    /// Export traces over OTLP.
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false)]
    pub enabled: bool,

    /// Continue traces from incoming `traceparent` headers.
    #[arg(
        long = "otel-parent-propagation-enabled",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false
    )]
    pub parent_propagation: bool,

    /// Fraction of root traces sampled, within [0.0, 1.0].
    #[arg(
        long = "otel-trace-sample-ratio",
        env = "OTEL_TRACE_SAMPLE_RATIO",
        default_value_t = 1.0_f64,
        value_parser = parse_sample_ratio
    )]
    pub sample_ratio: f64,

    /// Where spans are sent.
    #[command(flatten)]
    pub exporter: OtlpExporterConfig,

    /// Resource attributes attached to every span.
    #[command(flatten)]
    pub service: ServiceIdentity,
}

impl TracingConfig {
    /// Parent contexts are only honoured while export is on.
    pub fn propagates_parent(&self) -> bool {
        self.enabled && self.parent_propagation
    }
}

/// OTLP gRPC exporter settings.
#[derive(Debug, Args)]
pub struct OtlpExporterConfig {
    /// OTLP gRPC endpoint.
    #[arg(
        long = "otel-exporter-otlp-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// Export timeout in seconds.
    #[arg(
        long = "otel-exporter-otlp-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3_u64
    )]
    pub timeout_seconds: u64,
}

impl OtlpExporterConfig {
    /// Export timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Service identity reported with exported spans.
#[derive(Debug, Args)]
pub struct ServiceIdentity {
    /// `service.name`
    #[arg(
        long = "otel-service-name",
        env = "OTEL_SERVICE_NAME",
        default_value = "influencers-json"
    )]
    pub name: String,

    /// `service.version`
    #[arg(
        long = "otel-service-version",
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub version: String,

    /// `deployment.environment.name`
    #[arg(
        long = "otel-deployment-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,
}

fn parse_sample_ratio(value: &str) -> Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|error| format!("`{value}` is not a number: {error}"))?;

    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("`{value}` is outside 0.0..=1.0"))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        logging: LoggingConfig,

        #[command(flatten)]
        observability: ObservabilityConfig,
    }

    #[test]
    fn defaults_leave_export_off() -> TestResult {
        let cli = Cli::try_parse_from(["influencers-json"])?;

        assert_eq!(cli.logging.log_format, LogFormat::Compact);
        assert_eq!(cli.observability.slow_request_threshold_ms, 1_000);
        assert!(!cli.observability.tracing.enabled);
        assert_eq!(cli.observability.tracing.service.name, "influencers-json");
        assert_eq!(
            cli.observability.tracing.exporter.timeout(),
            Duration::from_secs(3)
        );

        Ok(())
    }

    #[test]
    fn parent_propagation_requires_export() -> TestResult {
        let without_export =
            Cli::try_parse_from(["influencers-json", "--otel-parent-propagation-enabled"])?;

        let with_export = Cli::try_parse_from([
            "influencers-json",
            "--otel-enabled",
            "--otel-parent-propagation-enabled",
        ])?;

        assert!(!without_export.observability.tracing.propagates_parent());
        assert!(with_export.observability.tracing.propagates_parent());

        Ok(())
    }

    #[test]
    fn sample_ratio_outside_unit_interval_is_rejected() {
        assert!(
            parse_sample_ratio("0.25").is_ok_and(|ratio| (ratio - 0.25).abs() < f64::EPSILON),
            "inside the interval"
        );
        assert!(parse_sample_ratio("1").is_ok(), "bounds are inclusive");
        assert!(parse_sample_ratio("1.5").is_err(), "above 1.0");
        assert!(parse_sample_ratio("-0.2").is_err(), "below 0.0");
        assert!(parse_sample_ratio("half").is_err(), "not a number");
    }
}
