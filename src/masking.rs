pub const MASK: &str = "***";
pub const NOT_SET: &str = "Not set";

const SENSITIVE_MARKERS: [&str; 3] = ["SECRET", "PASSWORD", "KEY"];

/// Decides how a variable value is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskingRule;

impl MaskingRule {
    /// Case-sensitive: `api_key` is not masked, `API_KEY` is.
    pub fn is_sensitive(&self, name: &str) -> bool {
        SENSITIVE_MARKERS.iter().any(|marker| name.contains(marker))
    }

    pub fn render<'a>(&self, name: &str, value: Option<&'a str>) -> &'a str {
        match value {
            None => NOT_SET,
            Some(_) if self.is_sensitive(name) => MASK,
            Some(value) => value,
        }
    }
}
