//! Check-in Bot Library
//!
//! A Telegram bot that tracks work and break check-ins.
//!
//! This crate provides the core functionality for:
//! - Per-user sessions counting activities and their accumulated time
//! - A localized text catalog (Chinese, English, Khmer)
//! - Routing slash commands and keyboard button presses to handlers
//! - Resetting all counters daily at a configured local time

pub mod commands;
pub mod config;
pub mod i18n;
pub mod scheduler;
pub mod sessions;
