#[cfg(feature = "ssr")]
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Upper bound on one model round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[cfg(feature = "ssr")]
pub static CHAT_CONFIG: LazyLock<ChatConfig> = LazyLock::new(ChatConfig::from_env);

/// Settings for the hosted chat model, read from the server environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_blank("GEMINI_API_KEY").or_else(|| non_blank("API_KEY")),
            model: non_blank("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: non_blank("GEMINI_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            temperature: defaults.temperature,
            timeout: non_blank("GEMINI_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ChatConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ChatConfig::default());
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_bad_timeout_keeps_default() {
        for value in ["0", "soon", "-3"] {
            let config = ChatConfig::from_lookup(lookup(&[("GEMINI_TIMEOUT_SECS", value)]));
            assert_eq!(config.timeout, DEFAULT_TIMEOUT, "{value}");
        }
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = ChatConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_key_fallback_and_overrides() {
        let config = ChatConfig::from_lookup(lookup(&[
            ("API_KEY", "legacy"),
            ("GEMINI_MODEL", "gemini-2.0-pro"),
            ("GEMINI_ENDPOINT", "http://localhost:8080/"),
            ("GEMINI_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.generate_url(),
            "http://localhost:8080/models/gemini-2.0-pro:generateContent"
        );

        let config = ChatConfig::from_lookup(lookup(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "new")]));
        assert_eq!(config.api_key.as_deref(), Some("new"));
    }
}
