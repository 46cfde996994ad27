//! Models for the Netatmo Energy API payloads consumed by this crate.
//!
//! Scope: types only — no API client/server code.
//!
//! Notes
//! - Every field is optional: the vendor omits fields freely and the
//!   reconciliation contract requires surviving any partial shape.
//! - Only the `homestatus` and `homesdata` subsets this crate reads are
//!   modeled; unknown fields are ignored by serde.

use serde::{Deserialize, Serialize};

// =====================
// Scalar ID newtype wrappers
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

/// Module ids are the device MAC addresses, e.g. `04:00:00:6d:61:08`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub String);

// =====================
// homestatus payload
// =====================

/// Top-level `/homestatus` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomeStatus {
    pub status: Option<String>,
    pub time_server: Option<i64>,
    pub body: Option<HomeStatusBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomeStatusBody {
    pub home: Option<HomeStatusHome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomeStatusHome {
    pub id: Option<HomeId>,
    pub rooms: Option<Vec<StatusRoom>>,
    pub modules: Option<Vec<StatusModule>>,
}

/// Live per-room state as reported by `/homestatus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatusRoom {
    pub id: Option<RoomId>,
    pub reachable: Option<bool>,
    pub anticipating: Option<bool>,
    pub heating_power_request: Option<i64>,
    pub open_window: Option<bool>,
    pub therm_measured_temperature: Option<f64>,
    pub therm_setpoint_temperature: Option<f64>,
    /// Known values include `schedule`, `manual`, `max`, `off`, `hg`;
    /// kept as a string so unknown vendor values cannot break parsing.
    pub therm_setpoint_mode: Option<String>,
}

/// Live per-module (device) state as reported by `/homestatus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatusModule {
    pub id: Option<ModuleId>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    /// Known values include `max`, `full`, `high`, `medium`, `low`,
    /// `very_low`; kept as a string for the same reason as setpoint modes.
    pub battery_state: Option<String>,
    pub battery_level: Option<i64>,
    pub rf_strength: Option<i64>,
    pub wifi_strength: Option<i64>,
    pub firmware_revision: Option<i64>,
    pub reachable: Option<bool>,
    pub boiler_status: Option<bool>,
}

// =====================
// homesdata payload
// =====================

/// Top-level `/homesdata` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomesData {
    pub status: Option<String>,
    pub body: Option<HomesDataBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomesDataBody {
    pub homes: Option<Vec<ConfigHome>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigHome {
    pub id: Option<HomeId>,
    pub name: Option<String>,
    pub rooms: Option<Vec<ConfigRoom>>,
}

/// Static per-room topology: identity plus the modules installed in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigRoom {
    pub id: Option<RoomId>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub module_ids: Option<Vec<ModuleId>>,
}
