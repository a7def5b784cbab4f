use lazy_static::lazy_static;
use regex::Regex;

use super::dto::MealAnalysis;
use crate::ai::{with_schema, FeatureId, PromptedFeature, Prompt};
use crate::ayurveda::FoodQuality;

const INSTRUCTIONS: &str = r#"Analyze this food image as a Master Ayurvedic Nutritionist. Perform a deep Satvik analysis:

1. Identify all visible ingredients and assess their freshness/processing level.
2. Classify the overall meal as Satvik (Pure, Fresh, Harmonious), Rajasic (Stimulating, Spicy, Heavy), or Tamasic (Stale, Over-processed, Dull).
3. Calculate a 'Prana Score' (0-100) based on:
   - Freshness (30%)
   - Ingredient Quality (30%)
   - Balancing potential for Doshas (20%)
   - Processing level (20%)
4. Provide a 'breakdown' explaining the logic and an 'advice' snippet from a Gurukul perspective (e.g., 'Add ghee to balance dryness' or 'Reduce spice to calm Pitta')."#;

const SCHEMA: &str = r#"{
  "score": number,
  "category": "Satvik" | "Rajasic" | "Tamasic",
  "breakdown": "string",
  "advice": "string",
  "items": ["string"]
}"#;

lazy_static! {
    static ref DATA_URI_RE: Regex =
        Regex::new(r"^data:image/[A-Za-z0-9.+-]+;base64,(.*)$").unwrap();
}

/// A meal photo ready to be sent to the vision model.
#[derive(Debug, Clone)]
pub struct MealScan {
    image_url: String,
}

impl MealScan {
    /// Accepts a `data:image/...;base64,` URI or bare base64 (assumed JPEG).
    /// Returns `None` when there is no image payload at all.
    pub fn from_upload(image: &str) -> Option<Self> {
        let image = image.trim();
        if let Some(caps) = DATA_URI_RE.captures(image) {
            let payload = caps.get(1).map_or("", |m| m.as_str());
            if payload.trim().is_empty() {
                return None;
            }
            return Some(Self {
                image_url: image.to_string(),
            });
        }
        if image.is_empty() || image.starts_with("data:") {
            return None;
        }
        Some(Self {
            image_url: format!("data:image/jpeg;base64,{image}"),
        })
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl PromptedFeature for MealScan {
    type Output = MealAnalysis;
    const FEATURE: FeatureId = FeatureId::MealAnalysis;

    fn prompt(&self) -> Prompt {
        Prompt::vision(
            Self::FEATURE,
            with_schema(INSTRUCTIONS, SCHEMA),
            self.image_url.clone(),
        )
    }

    fn mock(&self) -> MealAnalysis {
        MealAnalysis {
            score: 85,
            category: FoodQuality::Satvik,
            breakdown: "This meal contains fresh mung dal, steamed rice, and ghee-sautéed vegetables."
                .into(),
            advice: "Perfectly balanced! Adding a pinch of black pepper would improve digestion further."
                .into(),
            items: vec![
                "Mung Dal".into(),
                "Rice".into(),
                "Carrots".into(),
                "Ghee".into(),
            ],
        }
    }
}
