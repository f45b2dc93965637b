use std::path::PathBuf;
use url::Url;
use vidprompt_errors::AppError;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: Url,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, api_url: Url) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_api_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| {
        AppError::Configuration(format!("GEMINI_API_URL is not a valid URL: {}", e))
    })
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    /// Directory for the draft file. Drafts live in memory when unset.
    pub draft_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .ok_or_else(|| {
                AppError::Configuration("GEMINI_API_KEY or API_KEY must be set".to_string())
            })?;

        let api_url = parse_api_url(
            non_empty("GEMINI_API_URL")
                .as_deref()
                .unwrap_or(DEFAULT_GEMINI_API_URL),
        )?;
        let mut gemini = GeminiConfig::new(api_key, api_url);

        if let Some(model) = non_empty("GEMINI_MODEL") {
            gemini.model = model;
        }

        if let Some(raw) = non_empty("GEMINI_TIMEOUT_SECS") {
            gemini.timeout_secs = raw.trim().parse().map_err(|_| {
                AppError::Configuration(format!("GEMINI_TIMEOUT_SECS must be a number, got {}", raw))
            })?;
        }

        Ok(Self {
            gemini,
            draft_dir: non_empty("DRAFT_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "key")])).unwrap();
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini.api_url.as_str(), DEFAULT_GEMINI_API_URL);
        assert_eq!(config.gemini.timeout_secs, 120);
        assert!(config.draft_dir.is_none());
    }

    #[test]
    fn test_api_key_fallback() {
        let config = AppConfig::from_lookup(lookup(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.gemini.api_key, "legacy");
    }

    #[test]
    fn test_missing_key_is_error() {
        let err = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_API_URL", "http://127.0.0.1:8080/v1beta/"),
            ("GEMINI_TIMEOUT_SECS", "30"),
            ("DRAFT_DIR", "/tmp/vidprompt"),
        ]))
        .unwrap();

        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.api_url.port(), Some(8080));
        assert_eq!(config.gemini.timeout_secs, 30);
        assert_eq!(config.draft_dir, Some(PathBuf::from("/tmp/vidprompt")));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_API_URL", "not a url"),
        ]))
        .is_err());
        assert!(AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]))
        .is_err());
    }

    #[test]
    fn test_default_api_url_parses() {
        let url = parse_api_url(DEFAULT_GEMINI_API_URL).unwrap();
        assert_eq!(url.host_str(), Some("generativelanguage.googleapis.com"));
        assert!(matches!(
            parse_api_url("::"),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let url = Url::parse(DEFAULT_GEMINI_API_URL).unwrap();
        let rendered = format!("{:?}", GeminiConfig::new("secret-key", url));
        assert!(!rendered.contains("secret-key"));
    }
}
