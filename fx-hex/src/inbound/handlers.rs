//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use fx_types::{
    AppError, ConversionResult, ConvertForm, ErrorResponse, HealthResponse, HistoryQuery,
    HistorySeries, RateProvider,
};

use super::page::IndexPage;
use crate::ConverterService;

/// Generic message for upstream failures on the JSON surface; the detail is
/// only logged.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Erreur lors de la récupération des données.";

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConverterService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conversion { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_FAILURE_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}

/// Converter page with an empty form.
#[tracing::instrument(skip(state))]
pub async fn index<P: RateProvider>(State(state): State<Arc<AppState<P>>>) -> IndexPage {
    IndexPage::new(state.service.list_currencies().await)
}

/// Converts the submitted form and re-renders the page with the outcome.
///
/// The currency list is fetched again on both paths so the selectors stay
/// populated. An undecodable body is reported in the error block.
#[tracing::instrument(skip_all)]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    form: Result<Form<ConvertForm>, FormRejection>,
) -> IndexPage {
    let (form, result) = match form {
        Ok(Form(form)) => {
            let result = state.service.convert(&form.to_request()).await;
            (form, result)
        }
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!("Erreur lors de la conversion : {}", message);
            (ConvertForm::default(), ConversionResult::Failed { message })
        }
    };
    let currencies = state.service.list_currencies().await;

    IndexPage::new(currencies)
        .with_form(form)
        .with_result(result)
}

/// Rate data for one pair, as JSON for the chart script.
#[tracing::instrument(skip_all)]
pub async fn history<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistorySeries>, ApiError> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let series = state.service.history(&query).await?;
    Ok(Json(series))
}
