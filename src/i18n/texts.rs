//! Static text catalog.
//!
//! Every user-visible string lives here, keyed by [`Language`]. The rest of
//! the crate never embeds display text directly, so adding a language is a
//! matter of extending the match arms in this file.

use chrono::TimeDelta;

use super::Language;
use crate::sessions::{Activity, ClosedActivity, Session, UserId};

/// Logical actions behind the reply-keyboard buttons.
///
/// Free-text messages are matched against the labels of every supported
/// language, so a user can keep pressing buttons from a previously selected
/// keyboard after switching languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Clock in for work.
    ClockIn,
    /// Clock out of work.
    ClockOut,
    /// Start an eating break.
    Eat,
    /// Start a toilet break.
    Toilet,
    /// Start a smoking break.
    Smoke,
    /// Return to the seat, closing whichever activity is open.
    BackToSeat,
    /// Show today's per-activity summary.
    Summary,
}

impl ButtonAction {
    /// All button actions, in no particular order.
    pub const ALL: [Self; 7] = [
        Self::ClockIn,
        Self::ClockOut,
        Self::Eat,
        Self::Toilet,
        Self::Smoke,
        Self::BackToSeat,
        Self::Summary,
    ];
}

/// Keyboard layout: one row per logical group.
const MENU_LAYOUT: [&[ButtonAction]; 4] = [
    &[ButtonAction::ClockIn, ButtonAction::ClockOut],
    &[ButtonAction::Eat, ButtonAction::Toilet, ButtonAction::Smoke],
    &[ButtonAction::BackToSeat],
    &[ButtonAction::Summary],
];

/// The button label shown on the reply keyboard.
#[must_use]
pub const fn button_label(lang: Language, action: ButtonAction) -> &'static str {
    match (lang, action) {
        (Language::Zh, ButtonAction::ClockIn) => "上班",
        (Language::Zh, ButtonAction::ClockOut) => "下班",
        (Language::Zh, ButtonAction::Eat) => "吃饭",
        (Language::Zh, ButtonAction::Toilet) => "上厕所",
        (Language::Zh, ButtonAction::Smoke) => "抽烟",
        (Language::Zh, ButtonAction::BackToSeat) => "回座",
        (Language::Zh, ButtonAction::Summary) => "📊 今日统计",
        (Language::En, ButtonAction::ClockIn) => "Work",
        (Language::En, ButtonAction::ClockOut) => "Off Work",
        (Language::En, ButtonAction::Eat) => "Eat",
        (Language::En, ButtonAction::Toilet) => "Toilet",
        (Language::En, ButtonAction::Smoke) => "Smoke",
        (Language::En, ButtonAction::BackToSeat) => "Back",
        (Language::En, ButtonAction::Summary) => "📊 Daily Summary",
        (Language::Km, ButtonAction::ClockIn) => "ចូលការងារ",
        (Language::Km, ButtonAction::ClockOut) => "ចេញការងារ",
        (Language::Km, ButtonAction::Eat) => "បាយ",
        (Language::Km, ButtonAction::Toilet) => "បន្ទប់ទឹក",
        (Language::Km, ButtonAction::Smoke) => "ជក់បារី",
        (Language::Km, ButtonAction::BackToSeat) => "ត្រឡប់តុ",
        (Language::Km, ButtonAction::Summary) => "📊 សរុបប្រចាំថ្ងៃ",
    }
}

/// Matches free text against the button labels of all supported languages.
#[must_use]
pub fn find_button(text: &str) -> Option<ButtonAction> {
    let text = text.trim();
    for lang in Language::ALL {
        for action in ButtonAction::ALL {
            if button_label(lang, action) == text {
                return Some(action);
            }
        }
    }
    None
}

/// Keyboard rows of localized labels, one row per logical group.
#[must_use]
pub fn menu_rows(lang: Language) -> Vec<Vec<&'static str>> {
    MENU_LAYOUT
        .iter()
        .map(|row| row.iter().map(|&action| button_label(lang, action)).collect())
        .collect()
}

/// Localized display name of an activity, used in replies and summaries.
#[must_use]
pub const fn activity_name(lang: Language, activity: Activity) -> &'static str {
    match (lang, activity) {
        (Language::Zh, Activity::Eat) => "吃饭",
        (Language::Zh, Activity::Toilet) => "上厕所",
        (Language::Zh, Activity::Smoke) => "抽烟",
        (Language::Zh, Activity::Work) => "工作",
        (Language::En, Activity::Eat) => "eat",
        (Language::En, Activity::Toilet) => "toilet",
        (Language::En, Activity::Smoke) => "smoke",
        (Language::En, Activity::Work) => "work",
        (Language::Km, Activity::Eat) => "បាយ",
        (Language::Km, Activity::Toilet) => "បន្ទប់ទឹក",
        (Language::Km, Activity::Smoke) => "ជក់បារី",
        (Language::Km, Activity::Work) => "ការងារ",
    }
}

const fn duration_units(lang: Language) -> (&'static str, &'static str, &'static str) {
    match lang {
        Language::Zh => ("小时", "分钟", "秒"),
        Language::En => ("hours", "minutes", "seconds"),
        Language::Km => ("ម៉ោង", "នាទី", "វិនាទី"),
    }
}

/// Renders a duration as hours/minutes/seconds, omitting leading zero units.
///
/// Durations under a minute print seconds only; under an hour, minutes and
/// seconds. Fields are zero-padded to two digits.
#[must_use]
pub fn format_duration(lang: Language, duration: TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    let (hours, minutes, seconds) = duration_units(lang);

    if h > 0 {
        format!("{h:02} {hours} {m:02} {minutes} {s:02} {seconds}")
    } else if m > 0 {
        format!("{m:02} {minutes} {s:02} {seconds}")
    } else {
        format!("{s:02} {seconds}")
    }
}

/// The `用户：.../用户标识：...` header carried by every check-in reply.
fn header(lang: Language, name: &str, uid: UserId) -> String {
    match lang {
        Language::Zh => format!("用户：{name}\n用户标识：{uid}"),
        Language::En => format!("User: {name}\nUser ID: {uid}"),
        Language::Km => format!("អ្នកប្រើ៖ {name}\nលេខសម្គាល់អ្នកប្រើ៖ {uid}"),
    }
}

/// Reply to the `/start` command.
#[must_use]
pub const fn start_text(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "状态：已开启便捷回复键盘\n\n✅ 打卡机器人已启动！请选择操作:",
        Language::En => {
            "Status: quick-reply keyboard enabled\n\n✅ Check-in bot started! Please choose an action:"
        }
        Language::Km => {
            "ស្ថានភាព៖ ក្ដារចុចឆ្លើយតបរហ័សត្រូវបានបើក\n\n✅ បូតបានចាប់ផ្តើម! សូមជ្រើសរើសសកម្មភាព:"
        }
    }
}

/// Greeting sent when a new member joins the chat.
#[must_use]
pub fn welcome(lang: Language, name: &str) -> String {
    match lang {
        Language::Zh => format!("状态：已开启便捷回复键盘\n欢迎 {name} !"),
        Language::En => format!("Status: quick-reply keyboard enabled\nWelcome {name}!"),
        Language::Km => format!("ស្ថានភាព៖ ក្ដារចុចឆ្លើយតបរហ័សត្រូវបានបើក\nសូមស្វាគមន៍ {name} !"),
    }
}

/// Confirmation for a language switch, in the newly selected language.
#[must_use]
pub const fn language_switched(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "✅ 已切换到中文",
        Language::En => "✅ Switched to English",
        Language::Km => "✅ បានប្ដូរទៅជាភាសាខ្មែរ",
    }
}

/// Reply to a work clock-in.
#[must_use]
pub fn clock_in(lang: Language, name: &str, uid: UserId, ts: &str) -> String {
    let header = header(lang, name, uid);
    match lang {
        Language::Zh => format!("{header}\n✅ {ts} 上班打卡成功\n提示：请记得下班时打卡下班"),
        Language::En => format!(
            "{header}\n✅ {ts} clocked in\nHint: remember to clock out at the end of the day"
        ),
        Language::Km => format!(
            "{header}\n✅ {ts} ចូលការងារបានជោគជ័យ\nចំណាំ៖ កុំភ្លេចចុចចេញការងារនៅចុងថ្ងៃ"
        ),
    }
}

/// Reply to a work clock-out, with the day's settled work and break totals.
#[must_use]
pub fn clock_out(
    lang: Language,
    name: &str,
    uid: UserId,
    ts: &str,
    work_time: TimeDelta,
    break_time: TimeDelta,
) -> String {
    let header = header(lang, name, uid);
    let work = format_duration(lang, work_time);
    let breaks = format_duration(lang, break_time);
    match lang {
        Language::Zh => format!(
            "{header}\n✅ {ts} 下班打卡成功\n提示：今日工作时长已结算。\n总工作时长：{work}\n总活动时长：{breaks}"
        ),
        Language::En => format!(
            "{header}\n✅ {ts} clocked out\nHint: today's working time has been settled.\nTotal work time: {work}\nTotal break time: {breaks}"
        ),
        Language::Km => format!(
            "{header}\n✅ {ts} ចេញការងារបានជោគជ័យ\nចំណាំ៖ ម៉ោងធ្វើការថ្ងៃនេះត្រូវបានបូកសរុប។\nម៉ោងធ្វើការសរុប៖ {work}\nម៉ោងសម្រាកសរុប៖ {breaks}"
        ),
    }
}

/// Reply to an eat/toilet/smoke check-in.
///
/// The eat variant carries the day's meal ordinal; the others only remind
/// the user to check back in when they return.
#[must_use]
pub fn break_started(
    lang: Language,
    name: &str,
    uid: UserId,
    ts: &str,
    activity: Activity,
    count: u32,
) -> String {
    let header = header(lang, name, uid);
    let act = activity_name(lang, activity);

    let checked_in = match lang {
        Language::Zh => format!("✅ {ts} {act}打卡成功"),
        Language::En => format!("✅ {ts} {act} check-in recorded"),
        Language::Km => format!("✅ {ts} បានកត់ត្រា {act}"),
    };

    let ordinal = match (lang, activity) {
        (Language::Zh, Activity::Eat) => format!("\n注意：这是您第 {count} 次吃饭"),
        (Language::En, Activity::Eat) => format!("\nNote: this is meal #{count} today"),
        (Language::Km, Activity::Eat) => {
            format!("\nចំណាំ៖ នេះជាលើកទី {count} ដែលអ្នកញ៉ាំបាយថ្ងៃនេះ")
        }
        _ => String::new(),
    };

    let hint = match lang {
        Language::Zh => "提示：活动完成后请及时打卡回座",
        Language::En => "Hint: press Back when you return to your seat",
        Language::Km => "ចំណាំ៖ សូមចុច «ត្រឡប់តុ» ពេលអ្នកត្រឡប់មកវិញ",
    };

    format!("{header}\n{checked_in}{ordinal}\n{hint}")
}

/// Reply to the back-to-seat button after closing an open activity.
#[must_use]
pub fn back_to_seat(
    lang: Language,
    name: &str,
    uid: UserId,
    ts: &str,
    closed: &ClosedActivity,
    session: &Session,
) -> String {
    let header = header(lang, name, uid);
    let act = activity_name(lang, closed.activity);
    let duration = format_duration(lang, closed.duration);
    let act_total = format_duration(lang, closed.activity_total);
    let grand_total = format_duration(lang, session.total_elapsed());
    let (eat, toilet, smoke) = (
        session.eat.count,
        session.toilet.count,
        session.smoke.count,
    );

    match lang {
        Language::Zh => format!(
            "{header}\n✅ {ts} 回座打卡成功：{act}\n提示：本次活动时间已结算\n本次活动耗时：{duration}\n今日累计{act}时间：{act_total}\n今日累计活动总时间：{grand_total}\n------------------------\n本日吃饭：{eat} 次\n本日上厕所：{toilet} 次\n本日抽烟：{smoke} 次"
        ),
        Language::En => format!(
            "{header}\n✅ {ts} back at seat: {act}\nHint: this activity's time has been settled.\nThis activity took: {duration}\nTotal {act} time today: {act_total}\nTotal activity time today: {grand_total}\n------------------------\nMeals today: {eat}\nToilet breaks today: {toilet}\nSmoke breaks today: {smoke}"
        ),
        Language::Km => format!(
            "{header}\n✅ {ts} ត្រឡប់តុបានជោគជ័យ៖ {act}\nសេចក្តីជូនដំណឹង៖ ពេលវេលានៃសកម្មភាពនេះត្រូវបានបញ្ចប់\nរយៈពេលសកម្មភាពនេះ៖ {duration}\nសរុប {act} ថ្ងៃនេះ៖ {act_total}\nសរុបសកម្មភាពទាំងអស់ថ្ងៃនេះ៖ {grand_total}\n------------------------\nបាយថ្ងៃនេះ៖ {eat} ដង\nបន្ទប់ទឹកថ្ងៃនេះ៖ {toilet} ដង\nជក់បារីថ្ងៃនេះ៖ {smoke} ដង"
        ),
    }
}

/// The per-activity daily summary.
#[must_use]
pub fn daily_summary(lang: Language, name: &str, uid: UserId, session: &Session) -> String {
    let header = header(lang, name, uid);
    let total = format_duration(lang, session.total_elapsed());

    let line = |emoji: &str, activity: Activity| {
        let tally = session.tally(activity);
        let act = activity_name(lang, activity);
        let elapsed = format_duration(lang, tally.elapsed);
        match lang {
            Language::Zh => format!("{emoji} {act} {} 次 ({elapsed})", tally.count),
            Language::En => format!("{emoji} {act} {} times ({elapsed})", tally.count),
            Language::Km => format!("{emoji} {act} {} ដង ({elapsed})", tally.count),
        }
    };

    let total_line = match lang {
        Language::Zh => format!("📊 总活动时间：{total}"),
        Language::En => format!("📊 Total activity time: {total}"),
        Language::Km => format!("📊 សរុបពេលវេលាសកម្មភាព៖ {total}"),
    };

    format!(
        "{header}\n{}\n{}\n{}\n{}\n{total_line}",
        line("🍽", Activity::Eat),
        line("🚽", Activity::Toilet),
        line("🚬", Activity::Smoke),
        line("💼", Activity::Work),
    )
}
