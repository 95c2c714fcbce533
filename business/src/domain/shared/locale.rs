use serde::{Deserialize, Serialize};

/// Storefront display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Arabic is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ar => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}

/// A product name with an optional Arabic variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

impl LocalizedName {
    pub fn new(en: impl Into<String>, ar: Option<String>) -> Self {
        Self { en: en.into(), ar }
    }

    /// Returns the name for `locale`, falling back to English.
    pub fn display(&self, locale: Locale) -> &str {
        match (locale, &self.ar) {
            (Locale::Ar, Some(ar)) if !ar.trim().is_empty() => ar,
            _ => &self.en,
        }
    }

    /// Case-insensitive substring match against every variant.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.en.to_lowercase().contains(needle_lowercase)
            || self
                .ar
                .as_ref()
                .is_some_and(|ar| ar.to_lowercase().contains(needle_lowercase))
    }
}
