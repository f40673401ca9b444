use serde::{Deserialize, Serialize};

/// Language used for every human-readable string the workflow produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayLocale {
    #[default]
    English,
    Russian,
}

impl DisplayLocale {
    /// Lenient parse; anything unrecognised falls back to English.
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "ru" | "ru-ru" | "russian" | "русский" => Self::Russian,
            _ => Self::English,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::English => ',',
            Self::Russian => '\u{a0}',
        }
    }
}

/// Formats an integer with the locale's thousands separator.
pub fn format_thousands(value: u32, locale: DisplayLocale) -> String {
    let digits = value.to_string();
    let separator = locale.group_separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
