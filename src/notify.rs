use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use chrono::{Datelike, Local, Timelike};
use log::warn;
use tauri::AppHandle;
use tauri_plugin_notification::{NotificationExt, PermissionState};

use crate::config::TRIGGER_TICK_SECONDS;
use crate::error::{AppError, AppResult};
use crate::scheduler::ReminderDelivery;

const NOTIFICATION_TITLE: &str = "Daily affirmation";

/// One registered daily-repeating trigger.
struct DailyTrigger {
    hour: u32,
    minute: u32,
    message: String,
    // ordinal day-of-year of the last firing, so a trigger fires at most
    // once per day however often the loop wakes up
    last_fired_day: Option<u32>,
}

#[derive(Default)]
struct ServiceState {
    app: Option<AppHandle>,
    triggers: Vec<DailyTrigger>,
}

/// In-process delivery engine.
///
/// Registered triggers live in memory; a background loop wakes every
/// `TRIGGER_TICK_SECONDS`, fires the triggers matching the current local
/// time and shows them through the notification plugin. The process-local
/// schedule is restored from persisted settings at startup.
#[derive(Clone)]
pub struct NotificationService {
    state: Arc<Mutex<ServiceState>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ServiceState::default())),
        }
    }

    /// Lock service state, recovering from poison if needed
    fn lock_state(&self) -> MutexGuard<'_, ServiceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Attach the app handle and start the trigger loop. Called once from
    /// the Tauri setup hook.
    pub fn start(&self, app: AppHandle) {
        self.lock_state().app = Some(app);

        let state = Arc::clone(&self.state);
        thread::spawn(move || loop {
            thread::sleep(Duration::from_secs(TRIGGER_TICK_SECONDS));

            let now = Local::now();
            let (app, due) = {
                let mut guard = state.lock().unwrap_or_else(|e| e.into_inner());
                let app = match guard.app.clone() {
                    Some(app) => app,
                    None => continue,
                };
                let due = due_messages(
                    &mut guard.triggers,
                    now.hour(),
                    now.minute(),
                    now.ordinal(),
                );
                (app, due)
            };

            for message in due {
                if let Err(e) = app
                    .notification()
                    .builder()
                    .title(NOTIFICATION_TITLE)
                    .body(&message)
                    .show()
                {
                    warn!("failed to show reminder notification: {}", e);
                }
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderDelivery for NotificationService {
    fn request_permission(&self) -> AppResult<bool> {
        let app = self
            .lock_state()
            .app
            .clone()
            .ok_or_else(|| AppError::notification("notification service not started"))?;

        let notification = app.notification();
        let current = notification
            .permission_state()
            .map_err(|e| AppError::notification(e.to_string()))?;
        if matches!(current, PermissionState::Granted) {
            return Ok(true);
        }

        let answered = notification
            .request_permission()
            .map_err(|e| AppError::notification(e.to_string()))?;
        Ok(matches!(answered, PermissionState::Granted))
    }

    fn clear_all_pending(&self) {
        self.lock_state().triggers.clear();
    }

    fn register_daily_trigger(&self, hour: u32, minute: u32, message: &str) {
        self.lock_state().triggers.push(DailyTrigger {
            hour,
            minute,
            message: message.to_string(),
            last_fired_day: None,
        });
    }
}

/// Collect the payloads of triggers due at the given local time, marking
/// them fired for the day.
fn due_messages(triggers: &mut [DailyTrigger], hour: u32, minute: u32, day: u32) -> Vec<String> {
    let mut due = Vec::new();
    for trigger in triggers.iter_mut() {
        if trigger.hour == hour && trigger.minute == minute && trigger.last_fired_day != Some(day) {
            trigger.last_fired_day = Some(day);
            due.push(trigger.message.clone());
        }
    }
    due
}
