use serde::{Deserialize, Serialize};

/// Slider bounds for the setup form.
pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 20;
pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 30;

/// Number of answer options every question must carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// One multiple-choice question. Created as part of a generated or
/// fallback batch and immutable afterwards; `id` is always the 1-based
/// position within its batch, regardless of what the model returned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// Settings captured once in the setup form; immutable for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub topic: String,
    pub num_questions: usize,
    pub duration_minutes: u32,
    pub instructions: String,
}

impl QuizConfig {
    pub fn duration_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Setup,
    Quiz,
    Results,
}
