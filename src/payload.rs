//! Helpers turning raw response bodies into typed payloads.
//!
//! The reconciliation functions take typed payloads; these helpers cover the
//! step before that, reporting the JSON path of the first mismatch so a
//! vendor schema drift is diagnosable from the error alone.

use crate::models::netatmo::{HomeStatus, HomesData};
use core::fmt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PayloadError {
    /// Body was not valid JSON, or did not match the payload shape.
    Json(serde_path_to_error::Error<serde_json::Error>),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Json(e) => write!(f, "payload error: {}", e),
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PayloadError::Json(e) => Some(e),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for PayloadError {
    fn from(value: serde_path_to_error::Error<serde_json::Error>) -> Self {
        PayloadError::Json(value)
    }
}

fn from_str<T: DeserializeOwned>(raw: &str) -> Result<T, PayloadError> {
    let mut de = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut de).map_err(PayloadError::Json)
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, PayloadError> {
    serde_path_to_error::deserialize(value).map_err(PayloadError::Json)
}

pub fn parse_home_status(raw: &str) -> Result<HomeStatus, PayloadError> {
    from_str(raw)
}

pub fn parse_homes_data(raw: &str) -> Result<HomesData, PayloadError> {
    from_str(raw)
}

/// For callers that already hold a decoded [`Value`] body.
pub fn home_status_from_value(value: Value) -> Result<HomeStatus, PayloadError> {
    from_value(value)
}

pub fn homes_data_from_value(value: Value) -> Result<HomesData, PayloadError> {
    from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_fixture_payloads() {
        let raw = std::fs::read_to_string("tests/data/homestatus.json").expect("fixture present");
        let status = parse_home_status(&raw).expect("parse homestatus");
        let home = status.body.and_then(|b| b.home).expect("home present");
        assert_eq!(home.rooms.map(|r| r.len()), Some(2));
        assert_eq!(home.modules.map(|m| m.len()), Some(3));

        let raw = std::fs::read_to_string("tests/data/homesdata.json").expect("fixture present");
        let data = parse_homes_data(&raw).expect("parse homesdata");
        let homes = data.body.and_then(|b| b.homes).expect("homes present");
        assert_eq!(homes.len(), 1);
    }

    #[test]
    fn shape_mismatch_reports_the_json_path() {
        let err = parse_home_status(r#"{"body":{"home":{"rooms":"nope"}}}"#).expect_err("must fail");
        assert!(err.to_string().contains("body.home.rooms"));
    }

    #[test]
    fn value_variant_accepts_decoded_bodies() {
        let value = json!({"body": {"homes": [{"rooms": [{"id": "r1", "name": "Kitchen"}]}]}});
        let data = homes_data_from_value(value).expect("parse");
        assert!(data.body.is_some());
    }

    #[test]
    fn empty_object_is_a_valid_payload() {
        let status = parse_home_status("{}").expect("parse");
        assert_eq!(status, HomeStatus::default());
    }
}
