mod affirmation;
mod config;
mod error;
mod notify;
mod program;
mod schedule;
mod scheduler;
mod storage;

use std::sync::Mutex;

use chrono::NaiveTime;
use log::warn;
use tauri::{Emitter, Manager};

use affirmation::{Affirmation, LifeArea};
use error::AppError;
use notify::NotificationService;
use program::HiddenProgram;
use schedule::{compute_slots, ReminderConfig, Slot};
use scheduler::ReminderScheduler;
use storage::{SavedAffirmation, Storage};

pub struct AppState {
    storage: Mutex<Storage>,
    scheduler: ReminderScheduler<NotificationService>,
}

impl AppState {
    /// Lock storage, recovering from poison if needed
    fn lock_storage(&self) -> std::sync::MutexGuard<'_, Storage> {
        self.storage.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("invalid time of day: {}", value)).into())
}

fn emit_settings_changed(app: &tauri::AppHandle, config: &ReminderConfig) {
    if let Err(e) = app.emit("reminder-settings-changed", config.clone()) {
        warn!("failed to emit reminder-settings-changed: {}", e);
    }
}

#[tauri::command]
fn get_reminder_settings(state: tauri::State<AppState>) -> Result<ReminderConfig, String> {
    Ok(state.lock_storage().reminder_config().clone())
}

#[tauri::command]
fn get_reminder_slots(state: tauri::State<AppState>) -> Result<Vec<Slot>, String> {
    Ok(compute_slots(state.lock_storage().reminder_config()))
}

#[tauri::command]
async fn enable_reminders(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
) -> Result<bool, String> {
    let mut storage = state.lock_storage();
    let granted = state.scheduler.enable(&mut storage).map_err(String::from)?;
    if granted {
        emit_settings_changed(&app, storage.reminder_config());
    }
    Ok(granted)
}

#[tauri::command]
fn disable_reminders(
    app: tauri::AppHandle,
    state: tauri::State<AppState>,
) -> Result<(), String> {
    let mut storage = state.lock_storage();
    state.scheduler.disable(&mut storage).map_err(String::from)?;
    emit_settings_changed(&app, storage.reminder_config());
    Ok(())
}

#[tauri::command]
fn set_reminder_window(
    app: tauri::AppHandle,
    state: tauri::State<AppState>,
    start: String,
    end: String,
) -> Result<Vec<Slot>, String> {
    let start = parse_time(&start)?;
    let end = parse_time(&end)?;

    let mut storage = state.lock_storage();
    storage
        .set_reminder_window(start, end)
        .map_err(String::from)?;
    state.scheduler.reschedule(&storage).map_err(String::from)?;
    emit_settings_changed(&app, storage.reminder_config());
    Ok(compute_slots(storage.reminder_config()))
}

#[tauri::command]
fn set_reminder_interval(
    app: tauri::AppHandle,
    state: tauri::State<AppState>,
    minutes: i64,
) -> Result<Vec<Slot>, String> {
    let mut storage = state.lock_storage();
    storage
        .set_reminder_interval(minutes)
        .map_err(String::from)?;
    state.scheduler.reschedule(&storage).map_err(String::from)?;
    emit_settings_changed(&app, storage.reminder_config());
    Ok(compute_slots(storage.reminder_config()))
}

#[tauri::command]
fn get_affirmation_feed(areas: Vec<LifeArea>) -> Result<Vec<Affirmation>, String> {
    Ok(affirmation::feed(&areas))
}

#[tauri::command]
fn get_programs(area: LifeArea) -> Result<Vec<HiddenProgram>, String> {
    Ok(program::programs_for(area))
}

#[tauri::command]
fn get_saved_programs(state: tauri::State<AppState>) -> Result<Vec<SavedAffirmation>, String> {
    Ok(state.lock_storage().saved_programs().to_vec())
}

#[tauri::command]
fn save_program(
    state: tauri::State<AppState>,
    text: String,
    area: LifeArea,
) -> Result<(), String> {
    state
        .lock_storage()
        .save_program(text, area)
        .map_err(String::from)
}

#[tauri::command]
fn is_program_saved(state: tauri::State<AppState>, text: String) -> Result<bool, String> {
    Ok(state.lock_storage().is_saved(&text))
}

#[tauri::command]
fn get_selected_tone(state: tauri::State<AppState>) -> Result<String, String> {
    Ok(state.lock_storage().selected_tone().to_string())
}

#[tauri::command]
fn set_selected_tone(state: tauri::State<AppState>, tone: String) -> Result<(), String> {
    state
        .lock_storage()
        .set_selected_tone(tone)
        .map_err(String::from)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    let storage = Storage::new().expect("Failed to initialize storage");
    let delivery = NotificationService::new();
    let scheduler = ReminderScheduler::new(delivery.clone());

    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .manage(AppState {
            storage: Mutex::new(storage),
            scheduler,
        })
        .setup(move |app| {
            delivery.start(app.handle().clone());

            // Triggers are process-local; rebuild them from persisted
            // settings so an enabled schedule survives a restart.
            let state = app.state::<AppState>();
            let storage = state.lock_storage();
            if storage.reminder_config().enabled {
                if let Err(e) = state.scheduler.reschedule(&storage) {
                    warn!("failed to restore reminder schedule: {}", e);
                }
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_reminder_settings,
            get_reminder_slots,
            enable_reminders,
            disable_reminders,
            set_reminder_window,
            set_reminder_interval,
            get_affirmation_feed,
            get_programs,
            get_saved_programs,
            save_program,
            is_program_saved,
            get_selected_tone,
            set_selected_tone,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
