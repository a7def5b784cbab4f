use super::dto::{MealPlan, PlannedMeal};
use crate::ai::{with_schema, FeatureId, PromptedFeature, Prompt};
use crate::ayurveda::Dosha;

const SYSTEM: &str = "You are a helpful Ayurvedic assistant that outputs only JSON.";

const SCHEMA: &str = r#"{
  "breakfast": { "name": "...", "description": "...", "benefits": "..." },
  "lunch": { "name": "...", "description": "...", "benefits": "..." },
  "dinner": { "name": "...", "description": "...", "benefits": "..." }
}"#;

#[derive(Debug, Clone)]
pub struct DayPlan {
    pub dosha: String,
}

impl DayPlan {
    fn body(&self) -> String {
        format!(
            r#"You are an expert Ayurvedic Nutritionist.
Create a 1-day sample meal plan (Breakfast, Lunch, Dinner) for a person with a dominant "{dosha}" dosha.

Rules:
1. STRICTLY Vegetarian (Satvik). No eggs, no meat.
2. Use ancient Indian ingredients (e.g., Jowar, Bajra, Ghee, Mung Dal).
3. Explain WHY this food is good for {dosha} (1 sentence)."#,
            dosha = self.dosha
        )
    }
}

fn meal(name: &str, description: &str, benefits: &str) -> PlannedMeal {
    PlannedMeal {
        name: name.into(),
        description: description.into(),
        benefits: benefits.into(),
    }
}

/// Fallback plan per dosha; anything unrecognised gets the Vata plan.
pub fn mock_plan(dosha: &str) -> MealPlan {
    match dosha.parse::<Dosha>().unwrap_or(Dosha::Vata) {
        Dosha::Vata => MealPlan {
            breakfast: meal(
                "Warm Oatmeal with Ghee & Almonds",
                "Cooked oats with a spoonful of ghee, cinnamon, and soaked almonds.",
                "Warm, heavy, and oily qualities balance Vata's dryness.",
            ),
            lunch: meal(
                "Kitchari (Moong Dal & Rice)",
                "Basmati rice and moong dal cooked soft with cumin and ginger.",
                "Easy to digest and grounding.",
            ),
            dinner: meal(
                "Pumpkin Soup",
                "Creamy pumpkin soup with coconut milk and nutmeg.",
                "Soothing and warm for the evening.",
            ),
        },
        Dosha::Pitta => MealPlan {
            breakfast: meal(
                "Cooling Fruit Bowl",
                "Sweet apples, pears, and pomegranate seeds with mint.",
                "Naturally sweet and cooling to reduce body heat.",
            ),
            lunch: meal(
                "Quinoa & Cucumber Salad",
                "Quinoa with cucumber, cilantro, and lime dressing.",
                "Light and refreshing without being spicy.",
            ),
            dinner: meal(
                "Steamed Vegetables & Rice",
                "Steamed broccoli, zucchini, and white basmati rice.",
                "Mild and easy on the digestive fire.",
            ),
        },
        Dosha::Kapha => MealPlan {
            breakfast: meal(
                "Spiced Quinoa Porridge",
                "Quinoa cooked with ginger, cloves, and honey (no milk).",
                "Light, warm, and spicy to stimulate metabolism.",
            ),
            lunch: meal(
                "Millet Roti & Bitter Gourd Sabzi",
                "Bajra roti with light karela sabzi.",
                "Bitter and pungent tastes reduce Kapha heaviness.",
            ),
            dinner: meal(
                "Lentil Soup",
                "Spicy masoor dal soup with black pepper.",
                "Light and protein-rich.",
            ),
        },
    }
}

impl PromptedFeature for DayPlan {
    type Output = MealPlan;
    const FEATURE: FeatureId = FeatureId::MealPlan;

    fn prompt(&self) -> Prompt {
        Prompt::text(Self::FEATURE, SYSTEM, with_schema(&self.body(), SCHEMA))
    }

    fn mock(&self) -> MealPlan {
        mock_plan(&self.dosha)
    }
}
