//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fx_types::domain::{CurrencyCode, HistorySeries};
use fx_types::dto::{ConvertForm, ErrorResponse, HealthResponse, HistoryQuery};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse, example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Converter page
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "HTML page with the currency selectors and an empty result", content_type = "text/html", body = String)
    )
)]
async fn index() {}

/// Convert an amount and re-render the page
#[utoipa::path(
    post,
    path = "/convert",
    tag = "pages",
    request_body(content = ConvertForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "HTML page showing either the converted amount or an error message", content_type = "text/html", body = String)
    )
)]
async fn convert() {}

/// Rate data for a currency pair
#[utoipa::path(
    get,
    path = "/history",
    tag = "rates",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Upstream rate value for the pair, `null` when the pair is unknown", body = HistorySeries),
        (status = 400, description = "`from` or `to` is missing", body = ErrorResponse, example = json!({"error": "Les paramètres \"from\" et \"to\" sont requis."})),
        (status = 500, description = "The upstream rate provider failed", body = ErrorResponse, example = json!({"error": "Erreur lors de la récupération des données."}))
    )
)]
async fn history() {}

/// OpenAPI documentation for the converter.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter",
        version = "1.0.0",
        description = "Server-rendered currency converter backed by ExchangeRate-API.\n\nThe HTML routes render the converter page; `/history` returns JSON for the client-side chart.",
        license(name = "MIT"),
    ),
    paths(health, index, convert, history),
    components(
        schemas(
            ConvertForm,
            ErrorResponse,
            HealthResponse,
            HistorySeries,
            CurrencyCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Server-rendered HTML pages"),
        (name = "rates", description = "JSON rate data"),
    )
)]
pub struct ApiDoc;
