//! Request validation applied before forwarding to the core server.
//!
//! Bodies are validated as raw JSON so the original payload can be relayed
//! untouched once it passes. The booking time rules duplicate the core
//! server's checks, in the same order with the same messages, so a rejected
//! request reads the same no matter which side caught it.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::GatewayError;

const STATE_FILTERS: &[&str] = &["ALL", "CURRENT", "PAST", "FUTURE", "WAITING", "REJECTED"];

fn field_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).is_none_or(str::is_empty)
}

/// Creating a user requires a non-blank email.
pub fn user_create(body: &Value) -> Result<(), GatewayError> {
    if is_blank(field_str(body, "email")) {
        return Err(GatewayError::InvalidInput(
            "Cannot create user without email".to_string(),
        ));
    }
    Ok(())
}

/// Creating an item requires name, description and availability.
pub fn item_create(body: &Value) -> Result<(), GatewayError> {
    let complete = !is_blank(field_str(body, "name"))
        && !is_blank(field_str(body, "description"))
        && body.get("available").and_then(Value::as_bool).is_some();

    if !complete {
        return Err(GatewayError::InvalidInput(
            "Required fields are missing".to_string(),
        ));
    }
    Ok(())
}

/// Validates the requested booking window against `now`.
///
/// The rules run in a fixed order and the first violated one is reported:
/// null or unparseable start or end, end in the past, end before start,
/// start equal to end, start in the past.
pub fn booking_create(body: &Value, now: NaiveDateTime) -> Result<(), GatewayError> {
    let start = field_str(body, "start").and_then(|s| s.parse::<NaiveDateTime>().ok());
    let end = field_str(body, "end").and_then(|s| s.parse::<NaiveDateTime>().ok());

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(GatewayError::InvalidInput(
                "start or end is null".to_string(),
            ))
        }
    };

    if end < now {
        return Err(GatewayError::InvalidInput("end in past tense".to_string()));
    }
    if end < start {
        return Err(GatewayError::InvalidInput("end before start".to_string()));
    }
    if start == end {
        return Err(GatewayError::InvalidInput("start equal end".to_string()));
    }
    if start < now {
        return Err(GatewayError::InvalidInput(
            "start in past tense".to_string(),
        ));
    }

    Ok(())
}

/// Creating a comment requires a non-blank text.
pub fn comment_create(body: &Value) -> Result<(), GatewayError> {
    if is_blank(field_str(body, "text")) {
        return Err(GatewayError::InvalidInput(
            "Comment text cannot be blank".to_string(),
        ));
    }
    Ok(())
}

/// Creating a request requires a non-blank description.
pub fn request_create(body: &Value) -> Result<(), GatewayError> {
    if is_blank(field_str(body, "description")) {
        return Err(GatewayError::InvalidInput(
            "Request description cannot be blank".to_string(),
        ));
    }
    Ok(())
}

/// List endpoints accept a non-negative offset and a page size of 1 to 100.
pub fn pagination(from: i64, size: i64) -> Result<(), GatewayError> {
    if from < 0 {
        return Err(GatewayError::InvalidInput(
            "from must not be negative".to_string(),
        ));
    }
    if !(1..=100).contains(&size) {
        return Err(GatewayError::InvalidInput(
            "size must be between 1 and 100".to_string(),
        ));
    }
    Ok(())
}

/// A booking state filter must be one of the known values.
pub fn booking_state(state: Option<&str>) -> Result<(), GatewayError> {
    match state {
        None => Ok(()),
        Some(value) if STATE_FILTERS.contains(&value) => Ok(()),
        Some(value) => Err(GatewayError::InvalidInput(format!(
            "Unknown state: {}",
            value
        ))),
    }
}
