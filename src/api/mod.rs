//! HTTP API module for the Stay Engine.
//!
//! This module provides the REST API endpoints for quoting stays, searching
//! the room catalogue, building reminders, and keeping the rent ledger.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DocumentRequest, PaymentRequest, QuoteRequest, RemindersRequest, RentSummaryRequest,
};
pub use response::{ApiError, RemindersResponse, RoomSearchResponse};
pub use state::AppState;
