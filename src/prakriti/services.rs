use serde::Serialize;

use crate::ayurveda::Dosha;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    #[serde(rename = "Vata")]
    pub vata: u32,
    #[serde(rename = "Pitta")]
    pub pitta: u32,
    #[serde(rename = "Kapha")]
    pub kapha: u32,
}

impl Tally {
    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    fn bump(&mut self, dosha: Dosha) -> u32 {
        let slot = match dosha {
            Dosha::Vata => &mut self.vata,
            Dosha::Pitta => &mut self.pitta,
            Dosha::Kapha => &mut self.kapha,
        };
        *slot += 1;
        *slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub dosha: Dosha,
    pub tally: Tally,
}

/// Counts answers left to right. The leader only changes when a count
/// strictly exceeds the current best, so on a tie the dosha that reached
/// the top count first wins. `None` for an empty answer sheet.
pub fn score_answers(answers: &[Dosha]) -> Option<QuizOutcome> {
    let mut tally = Tally::default();
    let mut leader: Option<(Dosha, u32)> = None;
    for &answer in answers {
        let count = tally.bump(answer);
        if leader.map_or(true, |(_, best)| count > best) {
            leader = Some((answer, count));
        }
    }
    leader.map(|(dosha, _)| QuizOutcome { dosha, tally })
}
