//! Application services.
//!
//! Orchestrate one request each: validate, call the injected collaborators
//! in order, map the outcome into a response. No infrastructure logic here.

pub mod exchange;
pub mod payment;

pub use exchange::ExchangeService;
pub use payment::PaymentService;
