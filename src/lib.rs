//! Reconciliation of Netatmo room data.
//!
//! Merges the vendor's live `homestatus` feed and static `homesdata`
//! topology into one unified per-room record, then optionally overlays
//! battery/radio telemetry reported per module. Missing or inconsistent
//! source data is annotated on the affected rooms instead of failing.
//!
//! Fetching the payloads, credentials and response serialization are the
//! caller's concern; this crate only transforms already-parsed bodies.

pub mod models {
    pub mod netatmo;
}

pub mod payload;
pub mod services {
    pub mod battery;
    pub mod rooms;
}
