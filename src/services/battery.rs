//! Battery/radio telemetry overlay for combined rooms.
//!
//! A third, module-level view of the `homestatus` payload carries battery
//! and connectivity readings per device. This pass maps those readings onto
//! already-combined rooms through the room→module membership declared in
//! `homesdata`, annotating instead of failing whenever a link is missing.

use crate::models::netatmo::{HomeStatus, HomesData, ModuleId, StatusModule};
use crate::services::rooms::CombinedRoom;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Annotation set on every room when the membership topology is absent.
pub const MISSING_HOMESDATA: &str = "Missing homesdata configuration";
/// Annotation set on rooms whose membership declares no modules.
pub const NO_MODULE_IDS: &str = "No module_ids found for this room";

/// The raw payloads the enrichment draws from, as assembled by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverviewMeta {
    pub homestatus: Option<HomeStatus>,
    pub homesdata: Option<HomesData>,
}

/// Combined rooms plus the raw payloads needed to enrich them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomOverview {
    pub rooms: Vec<CombinedRoom>,
    pub meta: OverviewMeta,
}

/// Overlay battery, radio and firmware telemetry onto the combined rooms.
///
/// Pure transform: consumes the overview and returns it with the `rooms`
/// entries updated, leaving `meta` untouched. Modules without a battery
/// state (relay bridges, for example) are skipped. When several modules in
/// one room report telemetry, the last one in membership order wins.
pub fn enrich_battery(overview: RoomOverview) -> RoomOverview {
    let RoomOverview { mut rooms, meta } = overview;

    // Module id -> telemetry, for modules that report a battery at all.
    // Later duplicates overwrite earlier ones.
    let mut telemetry: BTreeMap<ModuleId, StatusModule> = BTreeMap::new();
    if let Some(modules) = meta
        .homestatus
        .as_ref()
        .and_then(|hs| hs.body.as_ref())
        .and_then(|b| b.home.as_ref())
        .and_then(|h| h.modules.as_ref())
    {
        for module in modules {
            let has_battery = module.battery_state.as_deref().is_some_and(|s| !s.is_empty());
            if has_battery && let Some(id) = module.id.clone() {
                telemetry.insert(id, module.clone());
            }
        }
    }
    debug!("indexed telemetry for {} module(s)", telemetry.len());

    // Only the first home's rooms carry the membership we honor.
    let membership = meta
        .homesdata
        .as_ref()
        .and_then(|hd| hd.body.as_ref())
        .and_then(|b| b.homes.as_ref())
        .and_then(|homes| homes.first())
        .and_then(|home| home.rooms.as_ref());

    match membership {
        None => {
            warn!("homesdata topology missing; flagging {} room(s)", rooms.len());
            for room in &mut rooms {
                room.error_config = Some(MISSING_HOMESDATA.to_string());
            }
        }
        Some(config_rooms) => {
            for config_room in config_rooms {
                let module_ids = config_room.module_ids.as_deref().unwrap_or(&[]);
                if module_ids.is_empty() {
                    for room in rooms.iter_mut().filter(|r| r.id == config_room.id) {
                        room.warning = Some(NO_MODULE_IDS.to_string());
                    }
                    continue;
                }
                for module_id in module_ids {
                    let Some(module) = telemetry.get(module_id) else {
                        continue;
                    };
                    for room in rooms.iter_mut().filter(|r| r.id == config_room.id) {
                        room.battery_state = module.battery_state.clone();
                        room.battery_level = module.battery_level;
                        room.rf_strength = module.rf_strength;
                        room.reachable = module.reachable;
                        room.firmware_revision = module.firmware_revision;
                    }
                }
            }
        }
    }

    RoomOverview { rooms, meta }
}
