use super::dto::FoodSwap;
use crate::ai::{with_schema, FeatureId, PromptedFeature, Prompt};

const SYSTEM: &str = "You are a creative Ayurvedic chef. JSON only.";

const SCHEMA: &str = r#"{
  "name": "Creative Name of the Dish",
  "description": "Short mouth-watering description",
  "why": "Why this is better (Ayurvedic logic)",
  "ingredients": ["Key Ingredient 1", "Key Ingredient 2"]
}"#;

#[derive(Debug, Clone)]
pub struct CravingSwap {
    pub craving: String,
    pub dosha: Option<String>,
}

impl CravingSwap {
    fn body(&self) -> String {
        let mut body = format!(
            "The user is craving: \"{}\".\nSuggest a healthy, Satvik Indian alternative that satisfies the same taste profile (texture, flavor).\n",
            self.craving
        );
        if let Some(dosha) = &self.dosha {
            body.push_str(&format!("The alternative should also suit a {dosha} constitution.\n"));
        }
        body.push_str(
            "\nRules:\n\
             1. Must be Satvik (no onion or garlic if possible, fresh ingredients).\n\
             2. Must be Indian-fusion or traditional.\n\
             3. Keep the ingredient list short.",
        );
        body
    }
}

impl PromptedFeature for CravingSwap {
    type Output = FoodSwap;
    const FEATURE: FeatureId = FeatureId::Swap;

    fn prompt(&self) -> Prompt {
        Prompt::text(Self::FEATURE, SYSTEM, with_schema(&self.body(), SCHEMA))
    }

    fn mock(&self) -> FoodSwap {
        FoodSwap {
            name: "Ragi & Vegetable Utopia".into(),
            description:
                "A crisp finger-millet base topped with farm-fresh bell peppers, tomatoes, and herbs."
                    .into(),
            why: "Satisfies the crunch and savory craving without the refined flour and grease."
                .into(),
            ingredients: ["Ragi Flour", "Tomatoes", "Basil", "Olive Oil"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::normalize::{conform, MalformedReply};
    use serde_json::json;

    #[test]
    fn prompt_names_the_craving() {
        let prompt = CravingSwap {
            craving: "Pizza".into(),
            dosha: None,
        }
        .prompt();
        assert_eq!(prompt.system.as_deref(), Some(SYSTEM));
        assert!(prompt.instruction().contains("craving: \"Pizza\""));
        assert!(!prompt.instruction().contains("constitution"));
    }

    #[test]
    fn empty_ingredient_list_is_rejected() {
        let reply = json!({
            "name": "Makhana Crunch",
            "description": "Roasted fox nuts",
            "why": "Light and crisp",
            "ingredients": []
        });
        let err = conform::<FoodSwap>(FeatureId::Swap, reply).unwrap_err();
        assert!(matches!(err, MalformedReply::SchemaMismatch { .. }));
    }

    #[test]
    fn mock_round_trips_through_schema() {
        let mock = CravingSwap {
            craving: "chips".into(),
            dosha: None,
        }
        .mock();
        let back: FoodSwap = conform(FeatureId::Swap, serde_json::to_value(&mock).unwrap()).unwrap();
        assert_eq!(back, mock);
    }
}
