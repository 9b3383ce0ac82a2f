//! # FX Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! formatting rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateSnapshot, ConversionResult)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Upstream and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConversionRequest, ConversionResult, CurrencyCatalog, CurrencyCode, HistoryRates,
    HistorySeries, RateSnapshot,
};
pub use dto::*;
pub use error::{AppError, UpstreamError};
pub use ports::RateProvider;
