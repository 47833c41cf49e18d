use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_END_HOUR, DEFAULT_INTERVAL_MINUTES, DEFAULT_START_HOUR, MAX_DAILY_TRIGGERS,
};

/// A single time of day at which a daily reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub hour: u32,
    pub minute: u32,
}

impl Slot {
    fn from_minutes(minutes: i64) -> Self {
        Self {
            hour: (minutes / 60) as u32,
            minute: (minutes % 60) as u32,
        }
    }
}

/// Reminder settings governing daily notification generation.
///
/// Serde keys match the persisted settings file; every field falls back to
/// its default independently, so a partially written file still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(rename = "notif_enabled", default)]
    pub enabled: bool,
    #[serde(rename = "notif_start", default = "default_start_time")]
    pub start_time: NaiveTime,
    #[serde(rename = "notif_end", default = "default_end_time")]
    pub end_time: NaiveTime,
    #[serde(rename = "notif_interval", default = "default_interval")]
    pub interval_minutes: i64,
}

fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).unwrap()
}

fn default_end_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_END_HOUR, 0, 0).unwrap()
}

fn default_interval() -> i64 {
    DEFAULT_INTERVAL_MINUTES
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_time: default_start_time(),
            end_time: default_end_time(),
            interval_minutes: default_interval(),
        }
    }
}

impl ReminderConfig {
    fn start_minutes(&self) -> i64 {
        (self.start_time.hour() * 60 + self.start_time.minute()) as i64
    }

    fn end_minutes(&self) -> i64 {
        (self.end_time.hour() * 60 + self.end_time.minute()) as i64
    }
}

/// Compute the daily reminder slots for a configuration.
///
/// An inverted window or a non-positive interval yields an empty list;
/// both are reachable states (user input, stale settings file), not
/// errors. The window end is itself a slot when a step lands on it
/// exactly. Generation stops once `MAX_DAILY_TRIGGERS` slots are emitted.
pub fn compute_slots(config: &ReminderConfig) -> Vec<Slot> {
    let start_min = config.start_minutes();
    let end_min = config.end_minutes();

    if end_min <= start_min || config.interval_minutes <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut current = start_min;
    while current <= end_min && slots.len() < MAX_DAILY_TRIGGERS {
        slots.push(Slot::from_minutes(current));
        current += config.interval_minutes;
    }
    slots
}
