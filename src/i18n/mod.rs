//! Localized text catalog.
//!
//! Maps a [`Language`] and message to its display string: button labels,
//! keyboard layout, reply texts, and duration formatting. Pure lookups,
//! no state.

mod language;
mod texts;

pub use language::Language;
pub use texts::{
    ButtonAction, activity_name, back_to_seat, break_started, button_label, clock_in, clock_out,
    daily_summary, find_button, format_duration, language_switched, menu_rows, start_text, welcome,
};
