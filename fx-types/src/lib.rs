//! # Fx Types
//!
//! Domain types and port traits for the currency exchange and payment flows.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (rounding, ExchangeTransaction)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Request/response objects crossing the service boundary
//! - `error/` - Port error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ExchangeTransaction, round_to_cents};
pub use dto::{
    ExchangeRequest, ExchangeResponse, PaymentPolicy, PaymentRequest, PaymentResult,
};
pub use error::{GatewayError, RateError, StoreError};
pub use ports::{PaymentGateway, RateProvider, TransactionStore};
