use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::errors::InternalError;

/// Wire format for every timestamp the API reads or writes
///
/// Seconds precision, no timezone offset and no fractional seconds,
/// e.g. `2024-03-01T09:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current server wall-clock time, truncated to whole seconds
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Render a timestamp in [`TIMESTAMP_FORMAT`]
pub fn format(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`]
///
/// # Arguments
/// * `field` - Name of the input the value came from, used in the error
/// * `raw` - The raw string to parse
///
/// # Returns
/// * `Ok(NaiveDateTime)` - Parsed timestamp
/// * `Err(InternalError::MalformedInput)` - Value is not in the expected format
pub fn parse(field: &str, raw: &str) -> Result<NaiveDateTime, InternalError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|e| {
        InternalError::malformed_input(
            field,
            format!("expected YYYY-MM-DDTHH:MM:SS, got '{}': {}", raw, e),
        )
    })
}
