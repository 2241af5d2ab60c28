//! Typed column readers shared by the repositories.
//!
//! Ids are TEXT, instants are INTEGER milliseconds, dates are `YYYY-MM-DD`
//! TEXT so they sort lexically, and vectors/lists are JSON TEXT.

use crate::{DbError, Result as DbErrorResult};

use std::fmt::Display;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[track_caller]
fn decode_error(column: &str, message: impl Display) -> DbError {
    DbError::Decode {
        message: format!("{column}: {message}"),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub fn uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| decode_error(column, format!("invalid UUID: {e}")))
}

#[track_caller]
pub fn opt_uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Option<Uuid>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| Uuid::parse_str(&s))
        .transpose()
        .map_err(|e| decode_error(column, format!("invalid UUID: {e}")))
}

#[track_caller]
pub fn timestamp(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| decode_error(column, format!("timestamp out of range: {millis}")))
}

#[track_caller]
pub fn date(row: &SqliteRow, column: &str) -> DbErrorResult<NaiveDate> {
    let raw: String = row.try_get(column)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| decode_error(column, format!("invalid date '{raw}': {e}")))
}

/// Parse an enum stored by its `as_str` name
#[track_caller]
pub fn parsed<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|e| decode_error(column, e))
}

#[track_caller]
pub fn json<T: DeserializeOwned>(row: &SqliteRow, column: &str) -> DbErrorResult<T> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw).map_err(|e| decode_error(column, format!("invalid JSON: {e}")))
}

#[track_caller]
pub fn to_json<T: Serialize + ?Sized>(value: &T, column: &str) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|e| decode_error(column, format!("encode failed: {e}")))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
