//! Header lines shared by the greeter and the `hello` management command.

use chrono::{DateTime, SecondsFormat, TimeZone};

use crate::environment::{EnvironmentSnapshot, PROJECT_PLACEHOLDER};

pub const RUSTC_VERSION: &str = env!("HELLO_SCAFFOLD_RUSTC_VERSION");

/// `surface` names where the greeting comes from, e.g. `App` or `CLI`.
pub fn greeting(surface: &str) -> String {
    format!("🎉 Hello World from {PROJECT_PLACEHOLDER} {surface}")
}

pub fn project(env: &EnvironmentSnapshot) -> String {
    format!("📁 Project: {}", env.project_name())
}

pub fn timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("🕒 Timestamp: {}", iso8601(now))
}

pub fn runtime_version() -> String {
    format!("🦀 Rust version: {RUSTC_VERSION}")
}

pub fn environment(env: &EnvironmentSnapshot) -> String {
    format!("🌍 Environment: {}", env.environment_name())
}

pub fn iso8601<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}
