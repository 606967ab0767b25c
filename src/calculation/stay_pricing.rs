//! Stay pricing: nights × nightly rate.
//!
//! A booking form is priced on every keystroke, so partial input is normal.
//! Missing dates, a non-positive rate, or an empty/inverted range all price
//! to zero nights at zero cost rather than failing.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, DateRange, PricedStay, Room, StayQuote};

/// The result of pricing a stay, including the audit step.
#[derive(Debug, Clone)]
pub struct StayPricingResult {
    /// Nights and total price.
    pub stay: PricedStay,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the number of nights and total price of a stay.
///
/// # Arguments
///
/// * `check_in` - The check-in date, if entered
/// * `check_out` - The check-out date, if entered
/// * `nightly_rate` - Price per night
///
/// # Returns
///
/// [`PricedStay::ZERO`] when either date is missing, the rate is not
/// positive, or check-out is on or before check-in. Otherwise the whole
/// number of nights between the dates and `nights * nightly_rate`.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::compute_stay;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 3, 1);
/// let check_out = NaiveDate::from_ymd_opt(2024, 3, 4);
///
/// let stay = compute_stay(check_in, check_out, Decimal::new(100, 0));
/// assert_eq!(stay.nights, 3);
/// assert_eq!(stay.total_price, Decimal::new(300, 0));
///
/// // Mid-entry: no check-out yet
/// let partial = compute_stay(check_in, None, Decimal::new(100, 0));
/// assert_eq!(partial.nights, 0);
/// ```
pub fn compute_stay(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    nightly_rate: Decimal,
) -> PricedStay {
    let (Some(start), Some(end)) = (check_in, check_out) else {
        return PricedStay::ZERO;
    };
    if nightly_rate <= Decimal::ZERO {
        return PricedStay::ZERO;
    }

    let nights = DateRange { start, end }.nights();
    if nights == 0 {
        return PricedStay::ZERO;
    }

    PricedStay {
        nights,
        total_price: Decimal::from(nights) * nightly_rate,
    }
}

/// Prices a stay and records an audit step for it.
///
/// Same semantics as [`compute_stay`]; `subject_id` names the room being
/// priced in the audit step.
pub fn price_stay(
    subject_id: &str,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    nightly_rate: Decimal,
    step_number: u32,
) -> StayPricingResult {
    let stay = compute_stay(check_in, check_out, nightly_rate);

    let reasoning = match (check_in, check_out) {
        (None, _) | (_, None) => "Check-in or check-out not entered, stay not billable".to_string(),
        _ if nightly_rate <= Decimal::ZERO => format!(
            "Nightly rate ${} is not positive, stay not billable",
            nightly_rate.normalize()
        ),
        (Some(start), Some(end)) if stay.nights == 0 => format!(
            "Check-out {} is not after check-in {}, stay not billable",
            end, start
        ),
        _ => format!(
            "{} nights x ${} = ${}",
            stay.nights,
            nightly_rate.normalize(),
            stay.total_price.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "stay_pricing".to_string(),
        rule_name: "Stay Pricing".to_string(),
        subject_id: subject_id.to_string(),
        input: serde_json::json!({
            "check_in": check_in.map(|d| d.to_string()),
            "check_out": check_out.map(|d| d.to_string()),
            "nightly_rate": nightly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "nights": stay.nights,
            "total_price": stay.total_price.normalize().to_string()
        }),
        reasoning,
    };

    StayPricingResult { stay, audit_step }
}

/// Quotes a stay in a catalogue room.
///
/// # Errors
///
/// - [`EngineError::RoomUnavailable`] if the room is closed for booking
/// - [`EngineError::InvalidBooking`] if `guests` is zero or exceeds the room's capacity
pub fn quote_stay(
    room: &Room,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u32,
) -> EngineResult<StayQuote> {
    if !room.available {
        return Err(EngineError::RoomUnavailable {
            room_id: room.id.clone(),
        });
    }
    if guests == 0 {
        return Err(EngineError::InvalidBooking {
            field: "guests".to_string(),
            message: "at least one guest is required".to_string(),
        });
    }
    if !room.fits_guests(guests) {
        return Err(EngineError::InvalidBooking {
            field: "guests".to_string(),
            message: format!(
                "{} guests exceeds room capacity of {}",
                guests, room.max_guests
            ),
        });
    }

    let mut audit_trace = AuditTrace::default();
    let capacity_step = AuditStep {
        step_number: audit_trace.next_step_number(),
        rule_id: "guest_capacity".to_string(),
        rule_name: "Guest Capacity".to_string(),
        subject_id: room.id.clone(),
        input: serde_json::json!({
            "guests": guests,
            "max_guests": room.max_guests
        }),
        output: serde_json::json!({ "accepted": true }),
        reasoning: format!("{} guests fits room capacity of {}", guests, room.max_guests),
    };
    audit_trace.steps.push(capacity_step);

    let priced = price_stay(
        &room.id,
        check_in,
        check_out,
        room.nightly_rate,
        audit_trace.next_step_number(),
    );
    audit_trace.steps.push(priced.audit_step);

    Ok(StayQuote {
        room_id: room.id.clone(),
        check_in,
        check_out,
        guests,
        nightly_rate: room.nightly_rate,
        stay: priced.stay,
        audit_trace,
    })
}
