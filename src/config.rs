use serde::Deserialize;

const DEFAULT_AI_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_AI_MODEL: &str = "google/gemini-2.0-flash-lite-preview-02-05:free";
const DEFAULT_SITE_URL: &str = "http://localhost:3000";
const SITE_NAME: &str = "Aaharai";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Completion provider settings. `api_key == None` puts every AI route in mock mode.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub site_url: String,
    pub site_name: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub ai: AiConfig,
    pub weather: WeatherConfig,
}

impl AiConfig {
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: get("OPENROUTER_API_KEY")
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            base_url: get("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_AI_BASE_URL.into()),
            model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.into()),
            site_url: get("NEXT_PUBLIC_SITE_URL")
                .or_else(|| get("SITE_URL"))
                .unwrap_or_else(|| DEFAULT_SITE_URL.into()),
            site_name: SITE_NAME.into(),
            timeout_secs: get("AI_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl WeatherConfig {
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: get("WEATHER_BASE_URL").unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.into()),
            timeout_secs: get("WEATHER_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let lookup = |key: &str| std::env::var(key).ok();
        Ok(Self {
            database_url,
            ai: AiConfig::from_lookup(lookup),
            weather: WeatherConfig::from_lookup(lookup),
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn ai_defaults_to_mock_mode_without_key() {
        let cfg = AiConfig::from_lookup(lookup(&[]));
        assert!(!cfg.has_credential());
        assert_eq!(cfg.base_url, DEFAULT_AI_BASE_URL);
        assert_eq!(cfg.model, DEFAULT_AI_MODEL);
        assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
        assert_eq!(cfg.site_name, "Aaharai");
        assert_eq!(cfg.timeout_secs, 60);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = AiConfig::from_lookup(lookup(&[("OPENROUTER_API_KEY", "   ")]));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn ai_reads_overrides() {
        let cfg = AiConfig::from_lookup(lookup(&[
            ("OPENROUTER_API_KEY", "sk-or-123"),
            ("OPENROUTER_MODEL", "some/model"),
            ("SITE_URL", "https://aaharai.example"),
            ("AI_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-or-123"));
        assert_eq!(cfg.model, "some/model");
        assert_eq!(cfg.site_url, "https://aaharai.example");
        assert_eq!(cfg.timeout_secs, 15);
    }

    #[test]
    fn public_site_url_wins_over_site_url() {
        let cfg = AiConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_SITE_URL", "https://public.example"),
            ("SITE_URL", "https://private.example"),
        ]));
        assert_eq!(cfg.site_url, "https://public.example");
    }

    #[test]
    fn weather_timeout_falls_back_on_garbage() {
        let cfg = WeatherConfig::from_lookup(lookup(&[("WEATHER_TIMEOUT_SECS", "soon")]));
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url, DEFAULT_WEATHER_BASE_URL);
    }
}
