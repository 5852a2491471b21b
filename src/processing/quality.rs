//! Answer quality classification: decides when an answer deserves a pushback

use crate::config::VaguenessPolicy;
use crate::interview::phase::Phase;
use crate::processing::text_utils::{has_digit, word_count};

const HEDGE_PHRASES: &[&str] = &[
    "helped", "assisted", "worked on", "was involved", "contributed to", "various",
    "multiple", "many", "some", "stuff", "things", "etc", "responsible for", "duties",
];

/// Why an answer was judged vague
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VagueReason {
    TooShort,
    HedgeWithoutNumbers,
    ShortWithoutNumbers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub word_count: usize,
    pub has_numbers: bool,
    pub reasons: Vec<VagueReason>,
}

impl Assessment {
    pub fn is_vague(&self) -> bool {
        !self.reasons.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QualityClassifier {
    policy: VaguenessPolicy,
}

impl QualityClassifier {
    pub fn new(policy: VaguenessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> VaguenessPolicy {
        self.policy
    }

    pub fn is_vague(&self, answer: &str, phase: Phase) -> bool {
        self.assess(answer, phase).is_vague()
    }

    /// Only achievement answers are ever challenged
    pub fn assess(&self, answer: &str, phase: Phase) -> Assessment {
        let words = word_count(answer);
        let has_numbers = has_digit(answer);
        let mut reasons = Vec::new();

        if phase == Phase::Achievements {
            match self.policy {
                VaguenessPolicy::WordCount => {
                    if words < 5 {
                        reasons.push(VagueReason::TooShort);
                    }
                }
                VaguenessPolicy::HedgeAndDigits => {
                    if words < 6 {
                        reasons.push(VagueReason::TooShort);
                    } else {
                        if !has_numbers && contains_hedge(answer) {
                            reasons.push(VagueReason::HedgeWithoutNumbers);
                        }
                        if !has_numbers && words < 10 {
                            reasons.push(VagueReason::ShortWithoutNumbers);
                        }
                    }
                }
            }
        }

        Assessment {
            word_count: words,
            has_numbers,
            reasons,
        }
    }
}

impl Default for QualityClassifier {
    fn default() -> Self {
        Self::new(VaguenessPolicy::WordCount)
    }
}

fn contains_hedge(answer: &str) -> bool {
    let lowered = answer.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .collect();

    HEDGE_PHRASES.iter().any(|phrase| {
        let parts: Vec<&str> = phrase.split(' ').collect();
        words.windows(parts.len()).any(|window| window == parts.as_slice())
    })
}
