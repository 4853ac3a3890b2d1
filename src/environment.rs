use std::{collections::BTreeMap, env, path::Path};

pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const DJANGO_ENV: &str = "DJANGO_ENV";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const SECRET_KEY: &str = "SECRET_KEY";

/// Variables listed by the greeter, in display order.
pub const WATCHED: [&str; 4] = [PROJECT_NAME, DJANGO_ENV, DATABASE_URL, SECRET_KEY];

/// Unresolved project placeholder. The project generator substitutes it when
/// the scaffolding is copied into place; this crate never does.
pub const PROJECT_PLACEHOLDER: &str = "{{PROJECT_NAME}}";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Immutable view of the process environment, captured once at start.
///
/// Later changes to the real environment are not reflected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Captures the current process environment. Entries whose name or value
    /// is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        env::vars_os()
            .filter_map(|(name, value)| {
                Some((name.into_string().ok()?, value.into_string().ok()?))
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn project_name(&self) -> &str {
        self.get_or(PROJECT_NAME, PROJECT_PLACEHOLDER)
    }

    pub fn environment_name(&self) -> &str {
        self.get_or(DJANGO_ENV, DEFAULT_ENVIRONMENT)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Loads a dotenv file into the process environment before the snapshot is
/// taken. Existing variables are never overridden.
///
/// Without an explicit path a missing `.env` is not worth reporting; an
/// explicit path that fails to load is logged and otherwise ignored.
pub fn load_env_file(path: Option<&Path>) {
    match path {
        Some(path) => match dotenvy::from_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(error) => tracing::warn!(
                path = %path.display(),
                %error,
                "failed to load env file, continuing with process environment"
            ),
        },
        None => match dotenvy::dotenv() {
            Ok(loaded) => tracing::debug!(path = %loaded.display(), "loaded env file"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(%error, "failed to load .env"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let snapshot = EnvironmentSnapshot::default();
        assert_eq!(snapshot.project_name(), "{{PROJECT_NAME}}");
        assert_eq!(snapshot.environment_name(), "development");
        assert_eq!(snapshot.get(DATABASE_URL), None);
    }

    #[test]
    fn set_values_override_defaults() {
        let snapshot: EnvironmentSnapshot = [(PROJECT_NAME, "acme"), (DJANGO_ENV, "production")]
            .into_iter()
            .collect();
        assert_eq!(snapshot.project_name(), "acme");
        assert_eq!(snapshot.environment_name(), "production");
    }

    #[test]
    fn empty_value_counts_as_set() {
        let snapshot: EnvironmentSnapshot = [(DJANGO_ENV, "")].into_iter().collect();
        assert_eq!(snapshot.environment_name(), "");
    }
}
