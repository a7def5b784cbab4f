use super::dto::{Ritual, Routine};
use crate::ai::{with_schema, FeatureId, PromptedFeature, Prompt};

const SYSTEM: &str = "You are an Ayurvedic Life Coach. JSON only.";

const SCHEMA: &str = r#"{
  "rituals": [
    { "time": "HH:MM AM/PM", "activity": "Name", "description": "Short explanation" }
  ]
}"#;

/// Dinacharya request: a dosha and the time the user wakes up.
#[derive(Debug, Clone)]
pub struct DailyRoutine {
    pub wake_up_time: String,
    pub dosha: String,
}

impl DailyRoutine {
    fn body(&self) -> String {
        format!(
            r#"Create a personalized Ayurvedic Daily Routine (Dinacharya) for a person with a dominant "{dosha}" dosha who wakes up at {wake}.

Include:
1. Morning cleansing rituals (Kriyas).
2. Best time for the heaviest meal.
3. Specific activity adjustments for the {dosha} nature.
4. Evening wind-down rituals."#,
            dosha = self.dosha,
            wake = self.wake_up_time,
        )
    }
}

fn ritual(time: &str, activity: &str, description: &str) -> Ritual {
    Ritual {
        time: time.into(),
        activity: activity.into(),
        description: description.into(),
    }
}

impl PromptedFeature for DailyRoutine {
    type Output = Routine;
    const FEATURE: FeatureId = FeatureId::Routine;

    fn prompt(&self) -> Prompt {
        Prompt::text(Self::FEATURE, SYSTEM, with_schema(&self.body(), SCHEMA))
    }

    fn mock(&self) -> Routine {
        Routine {
            rituals: vec![
                ritual(
                    "05:30 AM",
                    "Brahma Muhurta",
                    "Wake up in the ambrosial hours for peak mental clarity.",
                ),
                ritual(
                    "06:00 AM",
                    "Jivha Nirlekhana",
                    "Tongue scraping to remove toxins (Ama) accumulated overnight.",
                ),
                ritual(
                    "07:30 AM",
                    "Vyayama",
                    "Physical exercise at 50% capacity to stoke the digestive fire.",
                ),
            ],
        }
    }
}
