use super::dto::Remedy;
use crate::ai::{with_schema, FeatureId, PromptedFeature, Prompt};

const SYSTEM: &str = "You are a wise Ayurvedic practitioner. JSON only.";

const SCHEMA: &str = r#"{
  "title": "Name of Remedy",
  "procedure": "Step-by-step instructions",
  "why": "The Ayurvedic logic behind it",
  "warning": "When to avoid this or see a doctor"
}"#;

#[derive(Debug, Clone)]
pub struct Nuskha {
    pub symptom: String,
    pub dosha: Option<String>,
}

impl Nuskha {
    fn body(&self) -> String {
        let mut body = format!(
            "The user is feeling: \"{}\".\nSuggest a safe, traditional Indian Home Remedy (Nuskha) using common kitchen ingredients.\n",
            self.symptom
        );
        if let Some(dosha) = &self.dosha {
            body.push_str(&format!(
                "The user's dominant dosha is \"{dosha}\"; prefer ingredients that do not aggravate {dosha}.\n"
            ));
        }
        body.push_str(
            "\nRules:\n\
             1. Use only natural ingredients found in an Indian kitchen.\n\
             2. Keep it simple and easy to prepare.\n\
             3. MUST include a small safety disclaimer.",
        );
        body
    }
}

impl PromptedFeature for Nuskha {
    type Output = Remedy;
    const FEATURE: FeatureId = FeatureId::Remedy;

    fn prompt(&self) -> Prompt {
        Prompt::text(Self::FEATURE, SYSTEM, with_schema(&self.body(), SCHEMA))
    }

    fn mock(&self) -> Remedy {
        Remedy {
            title: "Warm Ginger & Honey Elixir".into(),
            procedure: "Grate 1 inch of fresh ginger, extract the juice, and mix with a spoonful of raw honey."
                .into(),
            why: "Ginger reduces inflammation while honey coats the throat and boosts immunity.".into(),
            warning: "Avoid if you have high acidity.".into(),
        }
    }
}
