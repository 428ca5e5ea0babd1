//! Daily reset runner.
//!
//! Sleeps until the next occurrence of the configured wall-clock time,
//! then zeroes every session. Missed firings (process down at reset time)
//! are not backfilled: the next firing simply resets whatever accumulated
//! since the last one.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use tokio::sync::{RwLock, mpsc};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::sessions::SessionStore;

/// Messages that can be sent to the scheduler.
#[derive(Debug, Clone)]
pub enum SchedulerMessage {
    /// Reset all sessions immediately.
    TriggerReset,
    /// Stop the scheduler.
    Shutdown,
}

/// Fires the daily counter reset at a fixed local time.
pub struct ResetScheduler {
    /// Shared session store.
    store: Arc<RwLock<SessionStore>>,

    /// Local wall-clock time of the daily reset.
    reset_at: NaiveTime,
}

impl ResetScheduler {
    /// Creates a new reset scheduler.
    #[must_use]
    pub fn new(store: Arc<RwLock<SessionStore>>, reset_at: NaiveTime) -> Self {
        Self { store, reset_at }
    }

    /// Runs the scheduler loop until shutdown.
    pub async fn run(&self, mut rx: mpsc::Receiver<SchedulerMessage>) {
        info!(
            "Daily reset scheduler started, fires at {}",
            self.reset_at.format("%H:%M")
        );

        loop {
            let delay = delay_until(Local::now().naive_local(), self.reset_at);
            debug!("Next reset in {} seconds", delay.num_seconds());

            tokio::select! {
                () = sleep(delay.to_std().unwrap_or_default()) => {
                    self.fire().await;
                }
                msg = rx.recv() => {
                    match msg {
                        Some(SchedulerMessage::TriggerReset) => {
                            debug!("Received reset trigger message");
                            self.fire().await;
                        }
                        Some(SchedulerMessage::Shutdown) | None => {
                            info!("Reset scheduler shutting down");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Performs the reset under an exclusive lock.
    async fn fire(&self) {
        let cleared = self.store.write().await.reset_all();
        info!("Daily counters cleared for {} sessions", cleared);
    }
}

impl std::fmt::Debug for ResetScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetScheduler")
            .field("reset_at", &self.reset_at)
            .finish_non_exhaustive()
    }
}

/// Time until the next occurrence of `at`, strictly in the future.
///
/// A `now` exactly at the target time yields a full day, so the firing that
/// just happened is not repeated.
fn delay_until(now: NaiveDateTime, at: NaiveTime) -> TimeDelta {
    let mut target = now.date().and_time(at);
    if target <= now {
        target = target + TimeDelta::days(1);
    }
    target - now
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn reset_time() -> NaiveTime {
        NaiveTime::from_hms_opt(15, 0, 0).unwrap()
    }

    #[test]
    fn test_delay_until_later_today() {
        assert_eq!(delay_until(at(12, 0, 0), reset_time()), TimeDelta::hours(3));
        assert_eq!(
            delay_until(at(14, 59, 30), reset_time()),
            TimeDelta::seconds(30)
        );
    }

    #[test]
    fn test_delay_until_after_reset_rolls_to_tomorrow() {
        assert_eq!(
            delay_until(at(16, 0, 0), reset_time()),
            TimeDelta::hours(23)
        );
    }

    #[test]
    fn test_delay_until_exactly_at_reset_is_a_full_day() {
        assert_eq!(
            delay_until(at(15, 0, 0), reset_time()),
            TimeDelta::days(1)
        );
    }

    #[tokio::test]
    async fn test_trigger_reset_clears_store() {
        use crate::i18n::Language;
        use crate::sessions::Activity;

        let store = Arc::new(RwLock::new(SessionStore::new(Language::Zh)));
        store
            .write()
            .await
            .get_or_create(1)
            .start(Activity::Work, Local::now());

        let scheduler = ResetScheduler::new(
            Arc::clone(&store),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );
        let (tx, rx) = mpsc::channel(2);
        tx.send(SchedulerMessage::TriggerReset).await.unwrap();
        tx.send(SchedulerMessage::Shutdown).await.unwrap();
        scheduler.run(rx).await;

        let store = store.read().await;
        let session = store.get(1).unwrap();
        assert_eq!(session.work.count, 0);
        assert!(session.open.is_none());
    }
}
