use log::info;

use crate::affirmation;
use crate::error::AppResult;
use crate::schedule::{compute_slots, ReminderConfig};
use crate::storage::Storage;

/// Host notification facilities the scheduler drives.
///
/// The production implementation lives in [`crate::notify`]; tests use a
/// recording stub, which keeps the scheduling logic free of any platform
/// runtime.
pub trait ReminderDelivery {
    /// Ask the host for notification permission. Blocks until answered.
    fn request_permission(&self) -> AppResult<bool>;

    /// Drop every registered trigger. Safe to call when none exist.
    fn clear_all_pending(&self);

    /// Register one daily-repeating trigger at the given time of day.
    fn register_daily_trigger(&self, hour: u32, minute: u32, message: &str);
}

/// Keeps registered delivery triggers consistent with the stored reminder
/// configuration.
pub struct ReminderScheduler<D: ReminderDelivery> {
    delivery: D,
}

impl<D: ReminderDelivery> ReminderScheduler<D> {
    pub fn new(delivery: D) -> Self {
        Self { delivery }
    }

    /// Turn reminders on. Returns `false` when the host denies notification
    /// permission; in that case nothing is persisted and no triggers are
    /// registered, so the settings toggle reverts to off.
    pub fn enable(&self, storage: &mut Storage) -> AppResult<bool> {
        if !self.delivery.request_permission()? {
            info!("notification permission denied, reminders stay off");
            return Ok(false);
        }

        storage.set_reminders_enabled(true)?;
        self.reschedule(storage)?;
        Ok(true)
    }

    /// Turn reminders off and drop all registered triggers. The clear is
    /// issued even when reminders are already off.
    pub fn disable(&self, storage: &mut Storage) -> AppResult<()> {
        self.delivery.clear_all_pending();
        storage.set_reminders_enabled(false)
    }

    /// Re-register triggers against the stored configuration. Called after
    /// every settings mutation so stale triggers never survive an edit.
    pub fn reschedule(&self, storage: &Storage) -> AppResult<usize> {
        self.schedule(storage.reminder_config())
    }

    /// Clear the previous schedule, then register one daily trigger per
    /// computed slot while reminders are enabled. Each payload is drawn at
    /// registration time from the affirmation pool. An empty slot list is a
    /// valid terminal state, not an error.
    pub fn schedule(&self, config: &ReminderConfig) -> AppResult<usize> {
        self.delivery.clear_all_pending();

        if !config.enabled {
            return Ok(0);
        }

        let slots = compute_slots(config);
        let mut rng = rand::thread_rng();
        for slot in &slots {
            let message = affirmation::random_message(&mut rng);
            self.delivery
                .register_daily_trigger(slot.hour, slot.minute, message);
        }

        info!("scheduled {} daily reminder triggers", slots.len());
        Ok(slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::cell::{Cell, RefCell};
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockDelivery {
        grant: bool,
        clears: Cell<usize>,
        registered: RefCell<Vec<(u32, u32, String)>>,
    }

    impl MockDelivery {
        fn granting() -> Self {
            Self {
                grant: true,
                ..Self::default()
            }
        }

        fn denying() -> Self {
            Self::default()
        }
    }

    impl ReminderDelivery for &MockDelivery {
        fn request_permission(&self) -> AppResult<bool> {
            Ok(self.grant)
        }

        fn clear_all_pending(&self) {
            self.clears.set(self.clears.get() + 1);
            self.registered.borrow_mut().clear();
        }

        fn register_daily_trigger(&self, hour: u32, minute: u32, message: &str) {
            self.registered
                .borrow_mut()
                .push((hour, minute, message.to_string()));
        }
    }

    fn temp_storage(name: &str) -> (Storage, PathBuf) {
        let dir = env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        let storage = Storage::open(dir.clone()).unwrap();
        (storage, dir)
    }

    #[test]
    fn test_enable_with_grant_registers_slots_and_persists() {
        let delivery = MockDelivery::granting();
        let scheduler = ReminderScheduler::new(&delivery);
        let (mut storage, dir) = temp_storage("levelup_test_enable_grant");

        let granted = scheduler.enable(&mut storage).unwrap();
        assert!(granted);
        assert!(storage.reminder_config().enabled);
        // default window 09:00-18:00 hourly
        assert_eq!(delivery.registered.borrow().len(), 10);
        assert_eq!(delivery.registered.borrow()[0].0, 9);
        assert_eq!(delivery.registered.borrow()[9].0, 18);

        let reopened = Storage::open(dir.clone()).unwrap();
        assert!(reopened.reminder_config().enabled);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_enable_with_denial_changes_nothing() {
        let delivery = MockDelivery::denying();
        let scheduler = ReminderScheduler::new(&delivery);
        let (mut storage, dir) = temp_storage("levelup_test_enable_denied");

        let granted = scheduler.enable(&mut storage).unwrap();
        assert!(!granted);
        assert!(!storage.reminder_config().enabled);
        assert!(delivery.registered.borrow().is_empty());
        assert_eq!(delivery.clears.get(), 0);

        let reopened = Storage::open(dir.clone()).unwrap();
        assert!(!reopened.reminder_config().enabled);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_disable_clears_even_when_already_disabled() {
        let delivery = MockDelivery::granting();
        let scheduler = ReminderScheduler::new(&delivery);
        let (mut storage, dir) = temp_storage("levelup_test_disable_idempotent");

        assert!(!storage.reminder_config().enabled);
        scheduler.disable(&mut storage).unwrap();
        assert_eq!(delivery.clears.get(), 1);
        assert!(!storage.reminder_config().enabled);

        scheduler.disable(&mut storage).unwrap();
        assert_eq!(delivery.clears.get(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_schedule_on_disabled_config_clears_but_registers_nothing() {
        let delivery = MockDelivery::granting();
        let scheduler = ReminderScheduler::new(&delivery);

        let registered = scheduler.schedule(&ReminderConfig::default()).unwrap();
        assert_eq!(registered, 0);
        assert_eq!(delivery.clears.get(), 1);
        assert!(delivery.registered.borrow().is_empty());
    }

    #[test]
    fn test_degenerate_window_is_a_valid_empty_schedule() {
        let delivery = MockDelivery::granting();
        let scheduler = ReminderScheduler::new(&delivery);

        let config = ReminderConfig {
            enabled: true,
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            interval_minutes: 60,
        };
        let registered = scheduler.schedule(&config).unwrap();
        assert_eq!(registered, 0);
        assert!(delivery.registered.borrow().is_empty());
    }

    #[test]
    fn test_reschedule_replaces_stale_triggers() {
        let delivery = MockDelivery::granting();
        let scheduler = ReminderScheduler::new(&delivery);
        let (mut storage, dir) = temp_storage("levelup_test_reschedule");

        scheduler.enable(&mut storage).unwrap();
        assert_eq!(delivery.registered.borrow().len(), 10);

        storage.set_reminder_interval(180).unwrap();
        scheduler.reschedule(&storage).unwrap();

        // 09:00, 12:00, 15:00, 18:00 and nothing left over from the
        // hourly schedule
        let registered = delivery.registered.borrow();
        assert_eq!(registered.len(), 4);
        assert!(registered.iter().all(|(_, minute, _)| *minute == 0));
        assert_eq!(registered[1].0, 12);

        drop(registered);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_payloads_come_from_the_affirmation_pool() {
        let delivery = MockDelivery::granting();
        let scheduler = ReminderScheduler::new(&delivery);

        let config = ReminderConfig {
            enabled: true,
            ..ReminderConfig::default()
        };
        scheduler.schedule(&config).unwrap();

        for (_, _, message) in delivery.registered.borrow().iter() {
            assert!(!message.is_empty());
        }
    }
}
