//! gha-render — turns the engine's structured descriptions into display
//! strings.
//!
//! The engine emits [`FormattedEvent`] values (catalog key + positional
//! args); this crate owns the catalog and the substitution. The language is
//! always passed in by the caller — there is no ambient "current language"
//! anywhere, the persisted preference lives in the config file and is
//! threaded through from the binary.

pub mod catalog;

use gha_core::FormattedEvent;

use crate::catalog::CATALOG;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Vi,
}

/// A language argument that is neither `en` nor `vi`.
#[derive(Debug, thiserror::Error)]
#[error("invalid language '{0}'")]
pub struct InvalidLanguage(pub String);

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// Lenient form for config values: unknown codes fall back to English
    /// rather than failing, matching the engine's degrade-don't-fail posture.
    pub fn from_config(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for Language {
    type Err = InvalidLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "vi" => Ok(Language::Vi),
            _ => Err(InvalidLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one described event in the given language.
pub fn render_event(event: &FormattedEvent<'_>, lang: Language) -> String {
    let args = event.args();
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    message(event.key(), &refs, lang)
}

/// Look up a catalog message and substitute positional arguments.
///
/// An unknown key is echoed back verbatim — a wrong key is a programming
/// error that should be visible, not a crash.
pub fn message(key: &str, args: &[&str], lang: Language) -> String {
    match CATALOG.get(key) {
        Some(entry) => substitute(entry.text(lang), args),
        None => key.to_string(),
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), arg);
    }
    out
}
