pub const HEADER: &str = "Available commands:";
pub const ENTRIES: [(&str, &str); 2] = [
    ("hello", "Display hello world message"),
    ("runserver", "Show server info"),
];

pub fn lines() -> Vec<String> {
    std::iter::once(HEADER.to_string())
        .chain(
            ENTRIES
                .iter()
                .map(|(name, description)| format!("  {name:<10} - {description}")),
        )
        .collect()
}
