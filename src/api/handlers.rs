//! HTTP request handlers for the Stay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{filter_rooms, quote_stay, record_payment, run_reminders, summarize_rent};
use crate::error::EngineResult;
use crate::models::{RoomSearch, TrackedDocument};

use super::request::{
    PaymentRequest, QuoteRequest, RemindersRequest, RentSummaryRequest, resolve_now,
    validate_charges,
};
use super::response::{ApiError, ApiErrorResponse, RemindersResponse, RoomSearchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/rooms/search", post(search_rooms_handler))
        .route("/reminders", post(reminders_handler))
        .route("/rent/summary", post(rent_summary_handler))
        .route("/rent/payments", post(record_payment_handler))
        .with_state(state)
}

fn ok_json<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON payload, turning extractor rejections into 400 responses.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Logs an engine error and converts it into a response.
fn engine_error(err: crate::error::EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /quote.
///
/// Looks the room up in the catalogue and prices the stay.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let quote = state
        .config()
        .get_room(&request.room_id)
        .and_then(|room| quote_stay(room, request.check_in, request.check_out, request.guests));

    match quote {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                room_id = %quote.room_id,
                nights = quote.stay.nights,
                total_price = %quote.stay.total_price,
                "Quote completed"
            );
            ok_json(quote)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for POST /rooms/search.
async fn search_rooms_handler(
    State(state): State<AppState>,
    payload: Result<Json<RoomSearch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let search = match parse_payload(payload, correlation_id) {
        Ok(search) => search,
        Err(response) => return response.into_response(),
    };

    let rooms: Vec<_> = filter_rooms(state.config().rooms(), &search)
        .into_iter()
        .cloned()
        .collect();

    info!(
        correlation_id = %correlation_id,
        matches = rooms.len(),
        "Room search completed"
    );
    ok_json(RoomSearchResponse {
        count: rooms.len(),
        rooms,
    })
}

/// Handler for POST /reminders.
///
/// Refreshes document statuses and builds the reminder list at `now`.
///
/// Day counts are floored against the deadline's midnight, so a document
/// expiring tomorrow gets no expiry reminder once today's midnight has
/// passed. Without `now` the current time of day is used; send a midnight
/// `now` (or a bare date) for date-granular results.
async fn reminders_handler(
    State(state): State<AppState>,
    payload: Result<Json<RemindersRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reminders request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let default_window = state.config().reminders().default_reminder_window_days;
    let documents: EngineResult<Vec<TrackedDocument>> = request
        .documents
        .into_iter()
        .map(|doc| doc.into_document(default_window))
        .collect();
    let documents = match documents.and_then(|docs| {
        validate_charges(&request.charges)?;
        Ok(docs)
    }) {
        Ok(documents) => documents,
        Err(err) => return engine_error(err, correlation_id),
    };

    let now = resolve_now(request.now);
    let start_time = Instant::now();
    let run = run_reminders(&documents, &request.charges, now);

    info!(
        correlation_id = %correlation_id,
        now = %now,
        documents = documents.len(),
        charges = request.charges.len(),
        reminders = run.reminders.len(),
        warnings = run.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Reminders built"
    );
    ok_json(RemindersResponse {
        documents: run.documents,
        reminders: run.reminders,
        audit_trace: run.audit_trace,
    })
}

/// Handler for POST /rent/summary.
async fn rent_summary_handler(
    State(_state): State<AppState>,
    payload: Result<Json<RentSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };
    if let Err(err) = validate_charges(&request.charges) {
        return engine_error(err, correlation_id);
    }

    let summary = summarize_rent(&request.charges, resolve_now(request.now));
    info!(
        correlation_id = %correlation_id,
        month = %summary.month,
        paid = summary.paid_this_month,
        pending = summary.pending_this_month,
        "Rent summary completed"
    );
    ok_json(summary)
}

/// Handler for POST /rent/payments.
///
/// Returns the payment record; the caller appends it to the charge's history.
async fn record_payment_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let (charge, entry, now) = request.into_parts();
    let payment = charge
        .validate()
        .and_then(|_| record_payment(&charge, entry, resolve_now(now)));

    match payment {
        Ok(payment) => {
            info!(
                correlation_id = %correlation_id,
                charge_id = %charge.id,
                due_date = %payment.due_date,
                status = ?payment.status,
                "Payment recorded"
            );
            ok_json(payment)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}
