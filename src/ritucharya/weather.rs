use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::WeatherConfig;

/// Current temperature lookup. Best effort: callers treat any error as "unknown".
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_temperature(&self, latitude: f64, longitude: f64) -> anyhow::Result<f64>;
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

/// Open-Meteo forecast API (no key required).
#[derive(Clone)]
pub struct OpenMeteo {
    http: Client,
    base_url: String,
}

impl OpenMeteo {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("build weather http client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteo {
    async fn current_temperature(&self, latitude: f64, longitude: f64) -> anyhow::Result<f64> {
        let forecast = self
            .http
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .context("open-meteo request")?
            .error_for_status()
            .context("open-meteo status")?
            .json::<ForecastResponse>()
            .await
            .context("open-meteo body")?;
        Ok(forecast.current_weather.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_body_decodes() {
        let body = r#"{"latitude":28.6,"longitude":77.2,"current_weather":{"temperature":31.4,"windspeed":7.2}}"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.current_weather.temperature, 31.4);
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let source = OpenMeteo::new(&WeatherConfig {
            base_url: "http://127.0.0.1:9/v1/".into(),
            timeout_secs: 1,
        })
        .unwrap();
        assert!(source.current_temperature(28.6, 77.2).await.is_err());
    }
}
