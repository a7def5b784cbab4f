use serde::Serialize;

use crate::ayurveda::Dosha;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizOption {
    pub label: &'static str,
    pub dosha: Dosha,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizQuestion {
    pub id: u8,
    pub question: &'static str,
    pub options: [QuizOption; 3],
}

const fn option(label: &'static str, dosha: Dosha) -> QuizOption {
    QuizOption { label, dosha }
}

pub static QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        question: "How would you describe your natural body frame?",
        options: [
            option("Thin, lean, I struggle to gain weight", Dosha::Vata),
            option("Medium build, athletic, easy to gain muscle", Dosha::Pitta),
            option("Broad, solid, I gain weight easily", Dosha::Kapha),
        ],
    },
    QuizQuestion {
        id: 2,
        question: "What is your skin typically like?",
        options: [
            option("Dry, rough, or cold to touch", Dosha::Vata),
            option("Sensitive, reddish, or oily T-zone", Dosha::Pitta),
            option("Smooth, thick, soft, and cool", Dosha::Kapha),
        ],
    },
    QuizQuestion {
        id: 3,
        question: "How is your appetite and digestion?",
        options: [
            option("Irregular – sometimes hungry, sometimes not", Dosha::Vata),
            option("Strong, sharp – I get 'hangry' if I miss a meal", Dosha::Pitta),
            option("Slow but steady – I can skip meals easily", Dosha::Kapha),
        ],
    },
    QuizQuestion {
        id: 4,
        question: "How do you usually sleep?",
        options: [
            option("Light sleeper, I wake up often", Dosha::Vata),
            option("Sound sleep, about 6-7 hours is enough", Dosha::Pitta),
            option("Deep, heavy sleep, I love sleeping in", Dosha::Kapha),
        ],
    },
    QuizQuestion {
        id: 5,
        question: "When under stress, how do you react?",
        options: [
            option("I get anxious, worried, or fearful", Dosha::Vata),
            option("I get irritable, angry, or critical", Dosha::Pitta),
            option("I withdraw, get quiet, or stubborn", Dosha::Kapha),
        ],
    },
];
