//! # FX Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Application service (conversion, currency list, history)
//! - `inbound/` - HTTP adapter (Axum server, page renderer)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `P: RateProvider`, allowing
//! different rate providers to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ConverterService;
