//! Room reconciliation: project the live `homestatus` and static `homesdata`
//! payloads into minimal per-room views and merge them by room id.
//!
//! None of these functions fail. Any missing or malformed nesting degrades
//! to an empty result or an annotation field on the affected room.

use crate::models::netatmo::{HomeStatus, HomesData, RoomId};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Annotation set on every config-only room when the live feed is empty.
pub const MISSING_HOMESTATUS: &str = "Missing homestatus data from Netatmo";
/// Annotation set on a live room with no topology entry.
pub const MISSING_ROOM_CONFIG: &str = "Missing room config";

/// Per-room live state projected out of a [`HomeStatus`] payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoomState {
    pub id: Option<RoomId>,
    pub reachable: Option<bool>,
    pub anticipating: Option<bool>,
    pub open_window: Option<bool>,
    pub therm_measured_temperature: Option<f64>,
    pub therm_setpoint_temperature: Option<f64>,
    pub therm_setpoint_mode: Option<String>,
}

/// Per-room identity projected out of a [`HomesData`] payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoomInfo {
    pub id: Option<RoomId>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
}

/// Union of a [`RoomState`] and a [`RoomInfo`], optionally overlaid with
/// module telemetry and annotated where source data was missing.
///
/// Telemetry and annotation fields are omitted from serialized output when
/// unset; the state and identity fields always serialize, as explicit nulls
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CombinedRoom {
    pub id: Option<RoomId>,
    pub reachable: Option<bool>,
    pub anticipating: Option<bool>,
    pub open_window: Option<bool>,
    pub therm_measured_temperature: Option<f64>,
    pub therm_setpoint_temperature: Option<f64>,
    pub therm_setpoint_mode: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rf_strength: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_revision: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_config: Option<String>,
}

impl CombinedRoom {
    fn from_state(state: &RoomState) -> Self {
        CombinedRoom {
            id: state.id.clone(),
            reachable: state.reachable,
            anticipating: state.anticipating,
            open_window: state.open_window,
            therm_measured_temperature: state.therm_measured_temperature,
            therm_setpoint_temperature: state.therm_setpoint_temperature,
            therm_setpoint_mode: state.therm_setpoint_mode.clone(),
            ..Default::default()
        }
    }

    fn from_info(info: &RoomInfo) -> Self {
        CombinedRoom {
            id: info.id.clone(),
            name: info.name.clone(),
            r#type: info.r#type.clone(),
            ..Default::default()
        }
    }
}

// The vendor feed does not distinguish `false`, `0` or `""` from an absent
// field; all of them normalize to `None` here and downstream consumers rely
// on that collapse.
fn flag(value: Option<bool>) -> Option<bool> {
    value.filter(|&b| b)
}

fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|&v| v != 0.0)
}

fn text(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn room_id(value: &Option<RoomId>) -> Option<RoomId> {
    value.as_ref().filter(|id| !id.0.is_empty()).cloned()
}

/// Project a `homestatus` payload into per-room live state, in source order.
///
/// Returns an empty vec when any of `body`, `body.home` or `body.home.rooms`
/// is missing.
pub fn extract_room_states(payload: &HomeStatus) -> Vec<RoomState> {
    let Some(rooms) = payload
        .body
        .as_ref()
        .and_then(|b| b.home.as_ref())
        .and_then(|h| h.rooms.as_ref())
    else {
        debug!("homestatus payload carries no rooms");
        return Vec::new();
    };

    rooms
        .iter()
        .map(|room| RoomState {
            id: room_id(&room.id),
            reachable: flag(room.reachable),
            anticipating: flag(room.anticipating),
            open_window: flag(room.open_window),
            therm_measured_temperature: reading(room.therm_measured_temperature),
            therm_setpoint_temperature: reading(room.therm_setpoint_temperature),
            therm_setpoint_mode: text(&room.therm_setpoint_mode),
        })
        .collect()
}

/// Project a `homesdata` payload into per-room identity, in source order.
///
/// Only the first home is consulted; multi-home accounts are unsupported.
/// Returns an empty vec when `body.homes` is missing or empty, or the first
/// home has no `rooms`.
pub fn extract_room_infos(payload: &HomesData) -> Vec<RoomInfo> {
    let Some(rooms) = payload
        .body
        .as_ref()
        .and_then(|b| b.homes.as_ref())
        .and_then(|homes| homes.first())
        .and_then(|home| home.rooms.as_ref())
    else {
        debug!("homesdata payload carries no rooms for the first home");
        return Vec::new();
    };

    rooms
        .iter()
        .map(|room| RoomInfo {
            id: room_id(&room.id),
            name: text(&room.name),
            r#type: text(&room.r#type),
        })
        .collect()
}

/// Merge live state and identity by room id.
///
/// The live rooms drive order and membership. A live room with no identity
/// match is annotated with [`MISSING_ROOM_CONFIG`]. When the live feed is
/// empty but identities exist, every identity is returned annotated with
/// [`MISSING_HOMESTATUS`] — topology is the baseline source of which rooms
/// exist, so they surface with an error rather than disappearing.
pub fn combine_rooms(status_rooms: &[RoomState], config_rooms: &[RoomInfo]) -> Vec<CombinedRoom> {
    if status_rooms.is_empty() && !config_rooms.is_empty() {
        warn!(
            "homestatus supplied no rooms; returning {} config-only room(s)",
            config_rooms.len()
        );
        return config_rooms
            .iter()
            .map(|info| {
                let mut room = CombinedRoom::from_info(info);
                room.error = Some(MISSING_HOMESTATUS.to_string());
                room
            })
            .collect();
    }

    status_rooms
        .iter()
        .map(|state| match config_rooms.iter().find(|info| info.id == state.id) {
            Some(info) => {
                let mut room = CombinedRoom::from_state(state);
                room.name = info.name.clone();
                room.r#type = info.r#type.clone();
                room
            }
            None => {
                let mut room = CombinedRoom::from_state(state);
                room.warning = Some(MISSING_ROOM_CONFIG.to_string());
                room
            }
        })
        .collect()
}
