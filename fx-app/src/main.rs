//! # FX Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the rate provider adapter
//! - Create the converter service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::{ProviderKind, build_provider};
use fx_hex::{ConverterService, inbound::HttpServer};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("fx-converter"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // OpenTelemetry export only when a collector is configured
    let (telemetry, otel_provider) = match &config.otlp_endpoint {
        Some(_) => {
            let (otel_tracer, otel_provider) = init_tracer()?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(otel_tracer)),
                Some(otel_provider),
            )
        }
        None => (None, None),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fx_app=debug,fx_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting currency converter on port {}", config.port);
    tracing::info!("Using rate provider: {}", config.provider_kind);

    if config.provider_kind == ProviderKind::ExchangeRateApi && !config.provider.has_api_key() {
        tracing::warn!("API_KEY is not set: every upstream rate request will be rejected");
    }

    // Build the rate provider
    let provider = build_provider(config.provider_kind, config.provider.clone());

    // Create the converter service
    let service = ConverterService::new(provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service).with_static_dir(&config.static_dir);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
