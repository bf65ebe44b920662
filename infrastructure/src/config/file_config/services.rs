//! External service configuration from TOML (`[supabase]`, `[generator]` sections)

use serde::{Deserialize, Serialize};

/// Default Gemini model for question generation
pub const DEFAULT_GENERATOR_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint
pub const DEFAULT_GENERATOR_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Raw Supabase (PostgREST) configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    /// Anon or service key
    pub key: Option<String>,
}

impl FileSupabaseConfig {
    /// Url and key, when both are present and non-blank
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        let key = self.key.as_deref().filter(|k| !k.trim().is_empty())?;
        Some((url, key))
    }
}

/// Raw question generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GENERATOR_MODEL.to_string(),
            endpoint: DEFAULT_GENERATOR_ENDPOINT.to_string(),
        }
    }
}
