//! Per-user activity timing.
//!
//! A session tracks, for one user and one day, how often each activity was
//! started and how much time it accumulated. At most one activity is open
//! at a time: starting a new one settles the previous one first, so no
//! interval is ever silently lost.

use chrono::{DateTime, Local, TimeDelta};

use crate::i18n::Language;

/// The tracked activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Eat,
    Toilet,
    Smoke,
    Work,
}

impl Activity {
    /// All activities, in summary order.
    pub const ALL: [Self; 4] = [Self::Eat, Self::Toilet, Self::Smoke, Self::Work];

    /// Stable identifier used in logs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Eat => "eat",
            Self::Toilet => "toilet",
            Self::Smoke => "smoke",
            Self::Work => "work",
        }
    }
}

/// Occurrence count and accumulated time for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// How many times the activity was started today.
    pub count: u32,

    /// Total settled time spent on the activity today.
    pub elapsed: TimeDelta,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            count: 0,
            elapsed: TimeDelta::zero(),
        }
    }
}

/// The activity currently being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenActivity {
    pub activity: Activity,
    pub started_at: DateTime<Local>,
}

/// Result of closing an open activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedActivity {
    /// The activity that was closed.
    pub activity: Activity,

    /// How long this occurrence lasted.
    pub duration: TimeDelta,

    /// The activity's accumulated time today, including this occurrence.
    pub activity_total: TimeDelta,
}

/// Result of clocking out of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkStopped {
    /// How long this work stretch lasted.
    pub duration: TimeDelta,

    /// Total work time today, including this stretch.
    pub work_total: TimeDelta,

    /// Total break time today (eat, toilet and smoke).
    pub break_total: TimeDelta,
}

/// One user's accumulated state for the current day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub eat: Tally,
    pub toilet: Tally,
    pub smoke: Tally,
    pub work: Tally,

    /// The at-most-one activity currently being timed.
    pub open: Option<OpenActivity>,

    /// Reply language; survives the daily reset.
    pub language: Language,
}

impl Session {
    /// Creates a fresh session with zeroed tallies.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            eat: Tally::default(),
            toilet: Tally::default(),
            smoke: Tally::default(),
            work: Tally::default(),
            open: None,
            language,
        }
    }

    /// The tally for one activity.
    #[must_use]
    pub const fn tally(&self, activity: Activity) -> &Tally {
        match activity {
            Activity::Eat => &self.eat,
            Activity::Toilet => &self.toilet,
            Activity::Smoke => &self.smoke,
            Activity::Work => &self.work,
        }
    }

    const fn tally_mut(&mut self, activity: Activity) -> &mut Tally {
        match activity {
            Activity::Eat => &mut self.eat,
            Activity::Toilet => &mut self.toilet,
            Activity::Smoke => &mut self.smoke,
            Activity::Work => &mut self.work,
        }
    }

    /// Starts timing an activity and increments its count.
    ///
    /// If another activity is still open it is settled first, and the
    /// settlement is returned so callers can log it.
    pub fn start(&mut self, activity: Activity, now: DateTime<Local>) -> Option<ClosedActivity> {
        let settled = self.close_open(now);

        self.open = Some(OpenActivity {
            activity,
            started_at: now,
        });
        self.tally_mut(activity).count += 1;

        settled
    }

    /// Clocks out of work.
    ///
    /// Only acts when the open activity is [`Activity::Work`]; in every
    /// other state this is a no-op returning `None`.
    pub fn stop_work(&mut self, now: DateTime<Local>) -> Option<WorkStopped> {
        if self.open.as_ref()?.activity != Activity::Work {
            return None;
        }

        let closed = self.close_open(now)?;
        Some(WorkStopped {
            duration: closed.duration,
            work_total: self.work.elapsed,
            break_total: self.break_elapsed(),
        })
    }

    /// Closes whichever activity is open, if any.
    pub fn stop_current(&mut self, now: DateTime<Local>) -> Option<ClosedActivity> {
        self.close_open(now)
    }

    /// Total break time today: eat, toilet and smoke.
    #[must_use]
    pub fn break_elapsed(&self) -> TimeDelta {
        self.eat.elapsed + self.toilet.elapsed + self.smoke.elapsed
    }

    /// Total time across all four activities today.
    #[must_use]
    pub fn total_elapsed(&self) -> TimeDelta {
        self.break_elapsed() + self.work.elapsed
    }

    /// Zeroes all tallies and clears the open activity.
    ///
    /// The language preference is kept.
    pub fn reset(&mut self) {
        self.eat = Tally::default();
        self.toilet = Tally::default();
        self.smoke = Tally::default();
        self.work = Tally::default();
        self.open = None;
    }

    fn close_open(&mut self, now: DateTime<Local>) -> Option<ClosedActivity> {
        let open = self.open.take()?;
        let duration = now - open.started_at;

        let tally = self.tally_mut(open.activity);
        tally.elapsed = tally.elapsed + duration;

        Some(ClosedActivity {
            activity: open.activity,
            duration,
            activity_total: tally.elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(n: i64) -> TimeDelta {
        TimeDelta::minutes(n)
    }

    fn base() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn test_fresh_session_is_zeroed() {
        let session = Session::new(Language::Zh);
        for activity in Activity::ALL {
            let tally = session.tally(activity);
            assert_eq!(tally.count, 0);
            assert_eq!(tally.elapsed, TimeDelta::zero());
        }
        assert!(session.open.is_none());
    }

    #[test]
    fn test_start_then_stop_current_settles_elapsed() {
        let mut session = Session::new(Language::Zh);
        let t1 = base();
        let t2 = t1 + TimeDelta::seconds(90);

        assert!(session.start(Activity::Eat, t1).is_none());
        let closed = session.stop_current(t2).unwrap();

        assert_eq!(closed.activity, Activity::Eat);
        assert_eq!(closed.duration, TimeDelta::seconds(90));
        assert_eq!(closed.activity_total, TimeDelta::seconds(90));
        assert_eq!(session.eat.count, 1);
        assert_eq!(session.eat.elapsed, TimeDelta::seconds(90));
        assert!(session.open.is_none());
    }

    #[test]
    fn test_stop_current_when_idle_is_noop() {
        let mut session = Session::new(Language::Zh);
        let before = session.clone();

        assert!(session.stop_current(base()).is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_start_settles_previous_open_activity() {
        let mut session = Session::new(Language::Zh);
        let t0 = base();

        session.start(Activity::Work, t0);
        let settled = session.start(Activity::Eat, t0 + minutes(30)).unwrap();

        assert_eq!(settled.activity, Activity::Work);
        assert_eq!(settled.duration, minutes(30));
        assert_eq!(session.work.elapsed, minutes(30));
        assert_eq!(session.open.unwrap().activity, Activity::Eat);
    }

    #[test]
    fn test_work_repress_accumulates_both_stretches() {
        let mut session = Session::new(Language::Zh);
        let t0 = base();

        session.start(Activity::Work, t0);
        session.start(Activity::Work, t0 + minutes(5));
        assert_eq!(session.work.count, 2);
        assert_eq!(session.open.unwrap().started_at, t0 + minutes(5));

        let stopped = session.stop_work(t0 + minutes(10)).unwrap();
        assert_eq!(stopped.duration, minutes(5));
        assert_eq!(stopped.work_total, minutes(10));
        assert!(session.open.is_none());
    }

    #[test]
    fn test_stop_work_ignores_open_break() {
        let mut session = Session::new(Language::Zh);
        let t0 = base();

        session.start(Activity::Smoke, t0);
        let before = session.clone();

        assert!(session.stop_work(t0 + minutes(1)).is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_stop_work_reports_break_total() {
        let mut session = Session::new(Language::Zh);
        let t0 = base();

        session.start(Activity::Eat, t0);
        session.stop_current(t0 + minutes(2));
        session.start(Activity::Work, t0 + minutes(2));
        let stopped = session.stop_work(t0 + minutes(62)).unwrap();

        assert_eq!(stopped.duration, minutes(60));
        assert_eq!(stopped.work_total, minutes(60));
        assert_eq!(stopped.break_total, minutes(2));
    }

    #[test]
    fn test_totals() {
        let mut session = Session::new(Language::Zh);
        session.eat.elapsed = minutes(2);
        session.work.elapsed = minutes(60);

        assert_eq!(session.break_elapsed(), minutes(2));
        assert_eq!(session.total_elapsed(), minutes(62));
    }

    #[test]
    fn test_reset_zeroes_everything_but_language() {
        let mut session = Session::new(Language::Km);
        let t0 = base();
        session.start(Activity::Work, t0);
        session.start(Activity::Eat, t0 + minutes(1));

        session.reset();

        for activity in Activity::ALL {
            assert_eq!(*session.tally(activity), Tally::default());
        }
        assert!(session.open.is_none());
        assert_eq!(session.language, Language::Km);
    }
}
