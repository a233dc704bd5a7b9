//! Editor UI language detection. Only picks which bundle the shell asks
//! for; bundle loading itself lives with the UI layer.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }

    /// Detect from a BCP-47 language tag. Any `zh*` variant maps to Chinese,
    /// `ja*` to Japanese, everything else falls back to English.
    pub fn detect(tag: &str) -> Locale {
        let tag = tag.to_ascii_lowercase();
        if tag.starts_with("zh") {
            Locale::Zh
        } else if tag.starts_with("ja") {
            Locale::Ja
        } else {
            Locale::En
        }
    }

    /// Detect from the process environment (`LC_ALL` over `LANG`).
    pub fn from_env() -> Locale {
        std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .map(|tag| Locale::detect(&tag))
            .unwrap_or_default()
    }
}
