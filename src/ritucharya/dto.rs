use serde::{Deserialize, Serialize};

use crate::ayurveda::Dosha;
use crate::error::present;

/// Raw query values; blank or non-numeric coordinates count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
}

fn coordinate(raw: Option<&str>) -> Option<f64> {
    present(raw)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl SeasonQuery {
    pub fn latitude(&self) -> Option<f64> {
        coordinate(self.lat.as_deref())
    }

    pub fn longitude(&self) -> Option<f64> {
        coordinate(self.lon.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct Advice {
    pub ritual: &'static str,
    pub food: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SeasonalResponse {
    pub temperature: Option<f64>,
    pub season: Dosha,
    pub advice: Advice,
    pub location: &'static str,
}
