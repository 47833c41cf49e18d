mod local;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::affirmation::LifeArea;
use crate::config::{DEFAULT_TONE, INTERVAL_OPTIONS, TONE_OPTIONS};
use crate::error::{AppError, AppResult};
use crate::schedule::ReminderConfig;

/// Everything the settings surface persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(flatten)]
    pub reminders: ReminderConfig,
    #[serde(default = "default_tone")]
    pub selected_tone: String,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            reminders: ReminderConfig::default(),
            selected_tone: default_tone(),
        }
    }
}

/// A reframe the user saved as a personal affirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAffirmation {
    pub id: Uuid,
    pub text: String,
    pub area: LifeArea,
}

/// Main storage struct managing settings and saved programs on disk
pub struct Storage {
    settings: SettingsData,
    saved: Vec<SavedAffirmation>,
    app_data_path: PathBuf,
}

impl Storage {
    pub fn new() -> AppResult<Self> {
        let app_data_path = dirs::data_local_dir()
            .ok_or_else(|| AppError::storage("failed to get local data dir"))?
            .join("LevelUp");
        Self::open(app_data_path)
    }

    /// Open storage rooted at an explicit directory.
    pub fn open(app_data_path: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&app_data_path).map_err(|e| AppError::storage(e.to_string()))?;

        let mut settings: SettingsData = local::load_json(&app_data_path, local::SETTINGS_FILE)?;
        if !TONE_OPTIONS.contains(&settings.selected_tone.as_str()) {
            settings.selected_tone = default_tone();
        }
        let saved = local::load_json(&app_data_path, local::SAVED_PROGRAMS_FILE)?;

        Ok(Self {
            settings,
            saved,
            app_data_path,
        })
    }

    fn save_settings(&self) -> AppResult<()> {
        local::save_json(&self.app_data_path, local::SETTINGS_FILE, &self.settings)
    }

    fn save_programs(&self) -> AppResult<()> {
        local::save_json(&self.app_data_path, local::SAVED_PROGRAMS_FILE, &self.saved)
    }

    // ============ Reminder settings ============

    pub fn reminder_config(&self) -> &ReminderConfig {
        &self.settings.reminders
    }

    pub fn set_reminders_enabled(&mut self, enabled: bool) -> AppResult<()> {
        self.settings.reminders.enabled = enabled;
        self.save_settings()
    }

    /// Store a new daily window. An inverted window is accepted; slot
    /// generation treats it as empty rather than rejecting the edit.
    pub fn set_reminder_window(&mut self, start: NaiveTime, end: NaiveTime) -> AppResult<()> {
        self.settings.reminders.start_time = start;
        self.settings.reminders.end_time = end;
        self.save_settings()
    }

    pub fn set_reminder_interval(&mut self, minutes: i64) -> AppResult<()> {
        if !INTERVAL_OPTIONS.contains(&minutes) {
            return Err(AppError::validation(format!(
                "unsupported reminder interval: {}",
                minutes
            )));
        }
        self.settings.reminders.interval_minutes = minutes;
        self.save_settings()
    }

    // ============ Theme ============

    pub fn selected_tone(&self) -> &str {
        &self.settings.selected_tone
    }

    pub fn set_selected_tone(&mut self, tone: String) -> AppResult<()> {
        if !TONE_OPTIONS.contains(&tone.as_str()) {
            return Err(AppError::validation(format!("unknown tone: {}", tone)));
        }
        self.settings.selected_tone = tone;
        self.save_settings()
    }

    // ============ Saved programs ============

    pub fn saved_programs(&self) -> &[SavedAffirmation] {
        &self.saved
    }

    pub fn is_saved(&self, text: &str) -> bool {
        self.saved.iter().any(|s| s.text == text)
    }

    /// Save a rewrite as a personal affirmation, newest first. Saving the
    /// same text twice is a no-op.
    pub fn save_program(&mut self, text: String, area: LifeArea) -> AppResult<()> {
        if self.is_saved(&text) {
            return Ok(());
        }
        self.saved.insert(
            0,
            SavedAffirmation {
                id: Uuid::new_v4(),
                text,
                area,
            },
        );
        self.save_programs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_storage(name: &str) -> (Storage, PathBuf) {
        let dir = env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        let storage = Storage::open(dir.clone()).unwrap();
        (storage, dir)
    }

    #[test]
    fn test_first_run_uses_defaults() {
        let (storage, dir) = temp_storage("levelup_test_first_run");

        assert!(!storage.reminder_config().enabled);
        assert_eq!(storage.reminder_config().interval_minutes, 60);
        assert_eq!(storage.selected_tone(), "Soft Feminine");
        assert!(storage.saved_programs().is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let (mut storage, dir) = temp_storage("levelup_test_reopen");

        storage.set_reminders_enabled(true).unwrap();
        storage.set_reminder_interval(120).unwrap();
        storage
            .set_reminder_window(
                NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
                NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            )
            .unwrap();
        storage
            .set_selected_tone("CEO Powerful".to_string())
            .unwrap();

        let reopened = Storage::open(dir.clone()).unwrap();
        assert!(reopened.reminder_config().enabled);
        assert_eq!(reopened.reminder_config().interval_minutes, 120);
        assert_eq!(
            reopened.reminder_config().start_time,
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
        assert_eq!(reopened.selected_tone(), "CEO Powerful");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_settings_file_fills_missing_fields() {
        let dir = env::temp_dir().join("levelup_test_partial");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("settings.json"), r#"{"notif_interval": 15}"#).unwrap();

        let storage = Storage::open(dir.clone()).unwrap();
        assert_eq!(storage.reminder_config().interval_minutes, 15);
        assert!(!storage.reminder_config().enabled);
        assert_eq!(
            storage.reminder_config().start_time,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(storage.selected_tone(), "Soft Feminine");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_persisted_tone_falls_back() {
        let dir = env::temp_dir().join("levelup_test_unknown_tone");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("settings.json"),
            r#"{"selected_tone": "Vaporwave"}"#,
        )
        .unwrap();

        let storage = Storage::open(dir.clone()).unwrap();
        assert_eq!(storage.selected_tone(), "Soft Feminine");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_interval_outside_options_is_rejected() {
        let (mut storage, dir) = temp_storage("levelup_test_bad_interval");

        assert!(storage.set_reminder_interval(45).is_err());
        assert!(storage.set_reminder_interval(-60).is_err());
        assert_eq!(storage.reminder_config().interval_minutes, 60);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_inverted_window_is_stored_verbatim() {
        let (mut storage, dir) = temp_storage("levelup_test_inverted_window");

        storage
            .set_reminder_window(
                NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            )
            .unwrap();
        assert_eq!(
            storage.reminder_config().start_time,
            NaiveTime::from_hms_opt(22, 0, 0).unwrap()
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_saved_programs_dedupe_and_prepend() {
        let (mut storage, dir) = temp_storage("levelup_test_saved_programs");

        storage
            .save_program("The right people stay and grow with me.".to_string(), LifeArea::Relationships)
            .unwrap();
        storage
            .save_program("I am more than enough — always have been.".to_string(), LifeArea::SelfWorth)
            .unwrap();
        storage
            .save_program("The right people stay and grow with me.".to_string(), LifeArea::Relationships)
            .unwrap();

        assert_eq!(storage.saved_programs().len(), 2);
        assert_eq!(storage.saved_programs()[0].area, LifeArea::SelfWorth);

        let reopened = Storage::open(dir.clone()).unwrap();
        assert_eq!(reopened.saved_programs().len(), 2);
        assert!(reopened.is_saved("I am more than enough — always have been."));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_tone_is_rejected_by_setter() {
        let (mut storage, dir) = temp_storage("levelup_test_tone_setter");

        assert!(storage.set_selected_tone("Neon".to_string()).is_err());
        assert_eq!(storage.selected_tone(), "Soft Feminine");

        let _ = fs::remove_dir_all(&dir);
    }
}
