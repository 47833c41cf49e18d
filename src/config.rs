/// Application configuration constants
///
/// Centralized configuration for the affirmations app.

/// Hard ceiling on daily reminder triggers registered at once.
/// Held below the 64 pending-notification limit mobile platforms enforce.
pub const MAX_DAILY_TRIGGERS: usize = 60;

/// Reminder interval choices offered by the settings surface, in minutes
pub const INTERVAL_OPTIONS: [i64; 5] = [15, 30, 60, 120, 180];

/// Default reminder window start hour (09:00)
pub const DEFAULT_START_HOUR: u32 = 9;

/// Default reminder window end hour (18:00)
pub const DEFAULT_END_HOUR: u32 = 18;

/// Default reminder interval in minutes
pub const DEFAULT_INTERVAL_MINUTES: i64 = 60;

/// Seconds between wake-ups of the trigger loop
pub const TRIGGER_TICK_SECONDS: u64 = 30;

/// Tone themes selectable in settings. Opaque identifiers; the frontend
/// owns the visual side.
pub const TONE_OPTIONS: [&str; 3] = ["Soft Feminine", "CEO Powerful", "Calm Spiritual"];

/// Tone applied before the user picks one
pub const DEFAULT_TONE: &str = "Soft Feminine";
