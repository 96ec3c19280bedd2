use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::JobId;

/// Language used for generated job names and every user-facing label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale '{0}' (expected 'ja' or 'en')")]
pub struct ParseLocaleError(pub String);

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Some(Self::Ja),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }

    /// Placeholder name given to a freshly added job.
    pub fn default_job_name(&self, id: JobId) -> String {
        match self {
            Self::Ja => format!("バイト{id}"),
            Self::En => format!("Job {id}"),
        }
    }

    /// Names of the two starter jobs: an izakaya shift and a private tutor.
    pub fn sample_job_names(&self) -> [&'static str; 2] {
        match self {
            Self::Ja => ["居酒屋", "家庭教師"],
            Self::En => ["Izakaya", "Private tutor"],
        }
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseLocaleError(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!(Locale::parse("ja"), Some(Locale::Ja));
        assert_eq!(Locale::parse(" EN "), Some(Locale::En));
        assert_eq!(Locale::parse("japanese"), Some(Locale::Ja));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn from_str_reports_offending_value() {
        let err = "klingon".parse::<Locale>().unwrap_err();

        assert_eq!(err, ParseLocaleError("klingon".to_string()));
    }

    #[test]
    fn default_job_name_is_localized() {
        assert_eq!(Locale::Ja.default_job_name(3), "バイト3");
        assert_eq!(Locale::En.default_job_name(3), "Job 3");
    }
}
