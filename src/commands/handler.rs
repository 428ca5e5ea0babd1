//! Message and command handlers.

use std::sync::Arc;

use chrono::{DateTime, Local};
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::types::Command;
use crate::i18n::{self, ButtonAction, Language};
use crate::sessions::{Activity, ClosedActivity, Session, SessionStore, UserId};

/// Shared handle to the session store.
pub type SharedSessions = Arc<RwLock<SessionStore>>;

/// Dependencies injected into every handler by the dispatcher.
#[derive(Clone)]
pub struct BotState {
    /// Process-wide session store.
    pub sessions: SharedSessions,
}

/// Timestamp format used in check-in replies.
const REPLY_TIME_FORMAT: &str = "%m/%d %H:%M:%S";

/// The update-handler tree: slash commands, membership events, then
/// free-text button presses.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.new_chat_members().is_some())
                .endpoint(handle_new_members),
        )
        .branch(dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handle_message))
}

/// Handles `/start` and the language-switch commands.
pub async fn handle_command(
    bot: Bot,
    state: BotState,
    msg: Message,
    cmd: Command,
) -> ResponseResult<()> {
    let Some(user) = msg.from.clone() else {
        return Ok(());
    };
    let uid = user.id.0;

    if let Some(lang) = cmd.language() {
        state.sessions.write().await.set_language(uid, lang);
        info!(user = uid, language = %lang, "Language switched");

        bot.send_message(msg.chat.id, i18n::language_switched(lang))
            .reply_markup(menu(lang))
            .await?;
        return Ok(());
    }

    // /start
    let lang = state.sessions.write().await.get_or_create(uid).language;
    debug!(user = uid, "Start command");

    bot.send_message(msg.chat.id, i18n::start_text(lang))
        .reply_markup(menu(lang))
        .await?;
    Ok(())
}

/// Greets members joining the chat and initializes their sessions.
pub async fn handle_new_members(bot: Bot, state: BotState, msg: Message) -> ResponseResult<()> {
    let Some(members) = msg.new_chat_members() else {
        return Ok(());
    };

    for member in members {
        let lang = state
            .sessions
            .write()
            .await
            .get_or_create(member.id.0)
            .language;
        info!(user = member.id.0, "New member greeted");

        bot.send_message(msg.chat.id, i18n::welcome(lang, &member.first_name))
            .reply_markup(menu(lang))
            .await?;
    }
    Ok(())
}

/// Handles free-text messages by matching them against the button labels.
///
/// Unrecognized text produces no reply and no state change.
pub async fn handle_message(bot: Bot, state: BotState, msg: Message) -> ResponseResult<()> {
    let Some(user) = msg.from.clone() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(action) = i18n::find_button(text) else {
        debug!(user = user.id.0, "Ignoring unrecognized text");
        return Ok(());
    };

    let now = Local::now();

    // The session mutation and reply composition complete under the write
    // lock; only the final send is awaited outside it, so no other handler
    // can observe a half-updated session.
    let reply = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_or_create(user.id.0);
        apply_action(session, action, &user.first_name, user.id.0, now)
    };

    if let Some(text) = reply {
        bot.send_message(msg.chat.id, text).await?;
    }
    Ok(())
}

/// Builds the reply keyboard for a language.
fn menu(lang: Language) -> KeyboardMarkup {
    let rows = i18n::menu_rows(lang)
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>());
    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Applies a button action to a session and composes the localized reply.
///
/// Returns `None` for the silent no-op transitions (clocking out without an
/// open work activity, returning to the seat with nothing open).
fn apply_action(
    session: &mut Session,
    action: ButtonAction,
    name: &str,
    uid: UserId,
    now: DateTime<Local>,
) -> Option<String> {
    let lang = session.language;
    let ts = now.format(REPLY_TIME_FORMAT).to_string();

    match action {
        ButtonAction::ClockIn => {
            log_settled(uid, session.start(Activity::Work, now));
            Some(i18n::clock_in(lang, name, uid, &ts))
        }
        ButtonAction::ClockOut => session.stop_work(now).map(|stopped| {
            i18n::clock_out(
                lang,
                name,
                uid,
                &ts,
                stopped.work_total,
                stopped.break_total,
            )
        }),
        ButtonAction::Eat => start_break(session, Activity::Eat, name, uid, &ts, now),
        ButtonAction::Toilet => start_break(session, Activity::Toilet, name, uid, &ts, now),
        ButtonAction::Smoke => start_break(session, Activity::Smoke, name, uid, &ts, now),
        ButtonAction::BackToSeat => session
            .stop_current(now)
            .map(|closed| i18n::back_to_seat(lang, name, uid, &ts, &closed, session)),
        ButtonAction::Summary => Some(i18n::daily_summary(lang, name, uid, session)),
    }
}

fn start_break(
    session: &mut Session,
    activity: Activity,
    name: &str,
    uid: UserId,
    ts: &str,
    now: DateTime<Local>,
) -> Option<String> {
    let lang = session.language;
    log_settled(uid, session.start(activity, now));
    let count = session.tally(activity).count;
    Some(i18n::break_started(lang, name, uid, ts, activity, count))
}

fn log_settled(uid: UserId, settled: Option<ClosedActivity>) {
    if let Some(closed) = settled {
        debug!(
            user = uid,
            activity = closed.activity.key(),
            seconds = closed.duration.num_seconds(),
            "Auto-closed previous activity"
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn session() -> Session {
        Session::new(Language::En)
    }

    #[test]
    fn test_clock_in_opens_work_and_replies() {
        let mut s = session();
        let now = Local::now();

        let reply = apply_action(&mut s, ButtonAction::ClockIn, "Alice", 42, now).unwrap();

        assert!(reply.contains("User: Alice"));
        assert!(reply.contains("User ID: 42"));
        assert!(reply.contains("clocked in"));
        assert_eq!(s.work.count, 1);
        assert_eq!(s.open.unwrap().activity, Activity::Work);
    }

    #[test]
    fn test_clock_out_without_open_work_is_silent() {
        let mut s = session();
        assert!(apply_action(&mut s, ButtonAction::ClockOut, "Alice", 42, Local::now()).is_none());
    }

    #[test]
    fn test_clock_out_reports_work_and_break_totals() {
        let mut s = session();
        let t0 = Local::now();

        apply_action(&mut s, ButtonAction::ClockIn, "Alice", 42, t0);
        let reply =
            apply_action(&mut s, ButtonAction::ClockOut, "Alice", 42, t0 + TimeDelta::hours(1))
                .unwrap();

        assert!(reply.contains("Total work time: 01 hours 00 minutes 00 seconds"));
        assert!(reply.contains("Total break time: 00 seconds"));
        assert!(s.open.is_none());
    }

    #[test]
    fn test_eat_reply_carries_meal_ordinal() {
        let mut s = session();
        let reply = apply_action(&mut s, ButtonAction::Eat, "Bob", 7, Local::now()).unwrap();

        assert!(reply.contains("meal #1"));
        assert_eq!(s.eat.count, 1);
    }

    #[test]
    fn test_back_to_seat_settles_open_break() {
        let mut s = session();
        let t0 = Local::now();

        apply_action(&mut s, ButtonAction::Smoke, "Bob", 7, t0);
        let reply =
            apply_action(&mut s, ButtonAction::BackToSeat, "Bob", 7, t0 + TimeDelta::seconds(65))
                .unwrap();

        assert!(reply.contains("back at seat: smoke"));
        assert!(reply.contains("This activity took: 01 minutes 05 seconds"));
        assert!(s.open.is_none());
        assert_eq!(s.smoke.elapsed, TimeDelta::seconds(65));
    }

    #[test]
    fn test_back_to_seat_when_idle_is_silent() {
        let mut s = session();
        let before = s.clone();

        assert!(apply_action(&mut s, ButtonAction::BackToSeat, "Bob", 7, Local::now()).is_none());
        assert_eq!(s, before);
    }

    #[test]
    fn test_summary_is_a_pure_read() {
        let mut s = session();
        s.eat.elapsed = TimeDelta::minutes(2);
        s.work.elapsed = TimeDelta::hours(1);
        let before = s.clone();

        let reply = apply_action(&mut s, ButtonAction::Summary, "Bob", 7, Local::now()).unwrap();

        assert!(reply.contains("Total activity time: 01 hours 02 minutes 00 seconds"));
        assert_eq!(s, before);
    }

    #[test]
    fn test_reply_language_follows_session() {
        let mut s = Session::new(Language::Zh);
        let reply = apply_action(&mut s, ButtonAction::ClockIn, "王", 9, Local::now()).unwrap();

        assert!(reply.contains("用户：王"));
        assert!(reply.contains("上班打卡成功"));
    }
}
