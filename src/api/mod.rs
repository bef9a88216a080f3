//! HTTP API module for the rental pricing engine.
//!
//! This module provides the REST endpoints for quoting rentals and
//! browsing the fleet's pricing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, ApiErrorResponse, CarSummary};
pub use state::AppState;
