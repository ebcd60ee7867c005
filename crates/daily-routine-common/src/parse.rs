// Conversion of raw prompt input into typed activity fields.
//
// Every function here runs before the store is touched, so a rejection
// aborts the operation with nothing written.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Role;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_SHAPE: &str = "dddd-dd-dd";
const TIME_FORMAT: &str = "%H:%M:%S";
const TIME_SHAPE: &str = "dd:dd";

/// True when `input` has exactly the layout of `shape`, where `d` stands for
/// an ASCII digit and every other byte must match literally.
///
/// chrono tolerates signs, padding and single-digit fields, so the layout is
/// checked first.
fn has_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            _ => c == s,
        })
}

/// Parse a calendar date in the fixed `yyyy-MM-dd` pattern.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if !has_shape(input, DATE_SHAPE) {
        debug!("Rejected date {:?}: not in yyyy-MM-dd form", input);
        return Err(Error::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| {
        debug!("Rejected date {:?}: {}", input, e);
        Error::InvalidDate(input.to_string())
    })
}

/// Parse an `HH:mm` time of day. Seconds are always zero.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let input = input.trim();
    if !has_shape(input, TIME_SHAPE) {
        debug!("Rejected time {:?}: not in HH:mm form", input);
        return Err(Error::InvalidTime(input.to_string()));
    }
    let with_seconds = format!("{}:00", input);

    NaiveTime::parse_from_str(&with_seconds, TIME_FORMAT).map_err(|e| {
        debug!("Rejected time {:?}: {}", input, e);
        Error::InvalidTime(input.to_string())
    })
}

/// Parse a role menu selection (1 to 5).
pub fn parse_role_choice(input: &str) -> Result<Role> {
    let input = input.trim();
    let choice: i64 = input.parse().map_err(|_| Error::InvalidRoleChoice(input.to_string()))?;
    Role::from_choice(choice)
}
