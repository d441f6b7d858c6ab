//! # Fx Core
//!
//! Application service layer for the currency exchange and payment flows.
//!
//! ## Architecture
//!
//! - `service/exchange` - currency exchange orchestration
//! - `service/payment` - payment orchestration
//!
//! Each service is generic over its port traits, so adapters are injected
//! at compile time: real implementations in production, in-memory ones
//! (see `fx-memory`) in tests.

pub mod service;


pub use service::{ExchangeService, PaymentService};
