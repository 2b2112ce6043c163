//! Report configuration, read from the environment.

use core::str::FromStr;

pub const FORMAT_VAR: &str = "LARDER_REPORT_FORMAT";
pub const TITLE_VAR: &str = "LARDER_REPORT_TITLE";
const DEFAULT_TITLE: &str = "Report";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Read `LARDER_REPORT_FORMAT` and `LARDER_REPORT_TITLE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = match lookup(FORMAT_VAR) {
            None => ReportFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "{FORMAT_VAR} not recognised; using text");
                ReportFormat::Text
            }),
        };

        let title = lookup(TITLE_VAR)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self { format, title }
    }
}
