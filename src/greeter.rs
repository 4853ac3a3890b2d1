use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    banner,
    environment::{EnvironmentSnapshot, PROJECT_PLACEHOLDER, WATCHED},
    masking::MaskingRule,
};

pub const SURFACE: &str = "App";
pub const STACK: &str = "Rust";
pub const VARIABLES_HEADER: &str = "🔧 Environment variables:";

/// The example app: a fixed banner followed by a masked dump of the watched
/// variables.
#[derive(Debug)]
pub struct Greeter<'a> {
    env: &'a EnvironmentSnapshot,
    now: DateTime<Local>,
    rule: MaskingRule,
}

impl<'a> Greeter<'a> {
    pub fn new(env: &'a EnvironmentSnapshot, now: DateTime<Local>) -> Self {
        Self {
            env,
            now,
            rule: MaskingRule,
        }
    }

    /// Output lines in display order. The empty line separates the banner
    /// from the variable listing.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let banner = [
            banner::greeting(SURFACE),
            banner::project(self.env),
            banner::timestamp(&self.now),
            banner::runtime_version(),
            banner::environment(self.env),
            String::new(),
            VARIABLES_HEADER.to_string(),
        ];

        banner.into_iter().chain(
            self.variables()
                .map(|variable| format!("  • {}: {}", variable.name, variable.value)),
        )
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable<'_>> + '_ {
        WATCHED.into_iter().map(move |name| Variable {
            name,
            value: self.rule.render(name, self.env.get(name)),
        })
    }

    pub fn report(&self) -> GreetingReport<'_> {
        GreetingReport {
            message: format!("Hello World from {PROJECT_PLACEHOLDER}"),
            timestamp: banner::iso8601(&self.now),
            project: self.env.project_name(),
            stack: STACK,
            runtime_version: banner::RUSTC_VERSION,
            environment: self.env.environment_name(),
            variables: self.variables().collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Variable<'a> {
    pub name: &'static str,
    pub value: &'a str,
}

/// Machine-readable form of the greeting.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GreetingReport<'a> {
    pub message: String,
    pub timestamp: String,
    pub project: &'a str,
    pub stack: &'static str,
    pub runtime_version: &'static str,
    pub environment: &'a str,
    pub variables: Vec<Variable<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).earliest().unwrap()
    }

    fn snapshot(pairs: &[(&str, &str)]) -> EnvironmentSnapshot {
        pairs.iter().copied().collect()
    }

    #[test]
    fn banner_lines_come_first_in_order() {
        let env = snapshot(&[("PROJECT_NAME", "acme"), ("DJANGO_ENV", "staging")]);
        let lines: Vec<_> = Greeter::new(&env, fixed_now()).lines().collect();

        assert_eq!(lines[0], "🎉 Hello World from {{PROJECT_NAME}} App");
        assert_eq!(lines[1], "📁 Project: acme");
        assert!(lines[2].starts_with("🕒 Timestamp: 2024-03-09T14:05:07"));
        assert!(lines[3].starts_with("🦀 Rust version: "));
        assert_eq!(lines[4], "🌍 Environment: staging");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], VARIABLES_HEADER);
        assert_eq!(lines.len(), 7 + WATCHED.len());
    }

    #[test]
    fn masks_secret_and_shows_plain_values() {
        let env = snapshot(&[("PROJECT_NAME", "acme"), ("SECRET_KEY", "xyz")]);
        let lines: Vec<_> = Greeter::new(&env, fixed_now()).lines().collect();

        assert_eq!(
            &lines[7..],
            [
                "  • PROJECT_NAME: acme",
                "  • DJANGO_ENV: Not set",
                "  • DATABASE_URL: Not set",
                "  • SECRET_KEY: ***",
            ]
        );
    }

    #[test]
    fn unset_environment_uses_defaults() {
        let env = EnvironmentSnapshot::default();
        let lines: Vec<_> = Greeter::new(&env, fixed_now()).lines().collect();

        assert_eq!(lines[1], "📁 Project: {{PROJECT_NAME}}");
        assert_eq!(lines[4], "🌍 Environment: development");
        assert!(lines[7..].iter().all(|line| line.ends_with(": Not set")));
    }

    #[test]
    fn report_serializes_masked_variables() {
        let env = snapshot(&[("SECRET_KEY", "xyz"), ("DATABASE_URL", "sqlite://app.db")]);
        let greeter = Greeter::new(&env, fixed_now());
        let value = serde_json::to_value(greeter.report()).expect("report serializes");

        assert_eq!(value["message"], "Hello World from {{PROJECT_NAME}}");
        assert_eq!(value["project"], "{{PROJECT_NAME}}");
        assert_eq!(value["stack"], "Rust");
        assert_eq!(value["environment"], "development");
        assert_eq!(value["variables"][2]["name"], "DATABASE_URL");
        assert_eq!(value["variables"][2]["value"], "sqlite://app.db");
        assert_eq!(value["variables"][3]["value"], "***");
        assert!(!value.to_string().contains("xyz"));
    }
}
