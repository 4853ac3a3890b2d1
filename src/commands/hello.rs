use chrono::{DateTime, Local};

use crate::{banner, environment::EnvironmentSnapshot};

pub const SURFACE: &str = "CLI";

/// Same banner as the greeter, without the runtime-version line.
pub fn lines(env: &EnvironmentSnapshot, now: &DateTime<Local>) -> Vec<String> {
    vec![
        banner::greeting(SURFACE),
        banner::project(env),
        banner::timestamp(now),
        banner::environment(env),
    ]
}
