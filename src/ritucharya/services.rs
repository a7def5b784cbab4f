use tracing::warn;

use super::weather::WeatherSource;
use crate::ayurveda::Dosha;

/// New Delhi, used when the client sends no coordinates.
pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalAdvisory {
    pub season: Dosha,
    pub ritual: &'static str,
    pub food: &'static str,
}

const KAPHA_SEASON: SeasonalAdvisory = SeasonalAdvisory {
    season: Dosha::Kapha,
    ritual: "Focus on vigorous movement and early rising to clear spring congestion.",
    food: "Prioritize pungent, bitter, and astringent tastes. Honey and ginger are your allies.",
};

const PITTA_SEASON: SeasonalAdvisory = SeasonalAdvisory {
    season: Dosha::Pitta,
    ritual: "Seek shade and avoid intense midday heat. Cooling moonlight walks are recommended.",
    food: "Focus on sweet, bitter, and cooling foods. Coconut water and fresh fruits are ideal.",
};

const VATA_SEASON: SeasonalAdvisory = SeasonalAdvisory {
    season: Dosha::Vata,
    ritual: "Maintain a strict routine and keep the body warm. Self-massage with warm oil is vital.",
    food: "Prioritize warm, cooked, unctuous foods. Avoid cold salads and dry snacks.",
};

/// Month index is zero-based (0 = January). Northern-hemisphere/Indian calendar:
/// Feb-May Kapha (Shishira/Vasanta), Jun-Aug Pitta (Grishma), Sep-Jan Vata.
/// Indices past 11 wrap around.
pub fn advisory_for_month(month_index: u8) -> SeasonalAdvisory {
    match month_index % 12 {
        1..=4 => KAPHA_SEASON,
        5..=7 => PITTA_SEASON,
        _ => VATA_SEASON,
    }
}

pub fn month_index(month: time::Month) -> u8 {
    u8::from(month) - 1
}

/// Temperature for the advisory; `None` when the weather service is unavailable.
pub async fn temperature_at(source: &dyn WeatherSource, latitude: f64, longitude: f64) -> Option<f64> {
    match source.current_temperature(latitude, longitude).await {
        Ok(t) => Some(t),
        Err(e) => {
            warn!(error = format!("{e:#}"), latitude, longitude, "weather lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedWeather;
    use time::Month;

    #[test]
    fn april_is_kapha() {
        assert_eq!(advisory_for_month(3).season, Dosha::Kapha);
    }

    #[test]
    fn july_is_pitta() {
        assert_eq!(advisory_for_month(6).season, Dosha::Pitta);
    }

    #[test]
    fn december_is_vata() {
        assert_eq!(advisory_for_month(11).season, Dosha::Vata);
    }

    #[test]
    fn season_boundaries() {
        assert_eq!(advisory_for_month(0).season, Dosha::Vata);
        assert_eq!(advisory_for_month(1).season, Dosha::Kapha);
        assert_eq!(advisory_for_month(4).season, Dosha::Kapha);
        assert_eq!(advisory_for_month(5).season, Dosha::Pitta);
        assert_eq!(advisory_for_month(7).season, Dosha::Pitta);
        assert_eq!(advisory_for_month(8).season, Dosha::Vata);
    }

    #[test]
    fn calendar_months_map_to_zero_based_index() {
        assert_eq!(month_index(Month::January), 0);
        assert_eq!(month_index(Month::April), 3);
        assert_eq!(month_index(Month::December), 11);
    }

    #[tokio::test]
    async fn weather_failure_only_drops_temperature() {
        assert_eq!(temperature_at(&FixedWeather(Some(31.5)), 1.0, 2.0).await, Some(31.5));
        assert_eq!(temperature_at(&FixedWeather(None), 1.0, 2.0).await, None);
    }
}
