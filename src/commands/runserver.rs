use crate::environment::{EnvironmentSnapshot, PROJECT_PLACEHOLDER};

pub const DEFAULT_HOST: &str = "0.0.0.0:8000";

/// Describes the server that would be started. Nothing is bound; `host` is
/// echoed as given, without parsing.
pub fn lines(host: Option<&str>, env: &EnvironmentSnapshot) -> Vec<String> {
    let host = host.unwrap_or(DEFAULT_HOST);
    let environment = env.environment_name();

    tracing::info!(
        target: "hello_scaffold::manage",
        %host,
        %environment,
        "Simulated server start"
    );

    vec![
        format!("✅ {PROJECT_PLACEHOLDER} server would run on {host}"),
        format!("🌐 Access at: https://app.{PROJECT_PLACEHOLDER}.localhost"),
        format!("🔧 Environment: {environment}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_host_when_missing() {
        let lines = lines(None, &EnvironmentSnapshot::default());
        assert_eq!(lines[0], "✅ {{PROJECT_NAME}} server would run on 0.0.0.0:8000");
        assert_eq!(lines[1], "🌐 Access at: https://app.{{PROJECT_NAME}}.localhost");
        assert_eq!(lines[2], "🔧 Environment: development");
    }

    #[test]
    fn echoes_host_verbatim() {
        let env: EnvironmentSnapshot = [("DJANGO_ENV", "production")].into_iter().collect();
        let lines = lines(Some("example:9090"), &env);
        assert_eq!(lines[0], "✅ {{PROJECT_NAME}} server would run on example:9090");
        assert_eq!(lines[2], "🔧 Environment: production");
    }
}
