use std::sync::mpsc::Receiver;

use crate::generate::GenerationError;
use crate::model::{AppState, QuizConfig, QuizQuestion};
use crate::timer::Countdown;

pub mod actions;
pub mod queries;

pub use crate::view_models::ResultRow;

pub type GenerationResult = Result<Vec<QuizQuestion>, GenerationError>;

/// Draft of the setup form, edited in place by the Setup view and
/// turned into a [`QuizConfig`] on submit.
#[derive(Clone, Debug)]
pub struct SetupForm {
    pub topic: String,
    pub num_questions: usize,
    pub duration_minutes: u32,
    pub instructions: String,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            num_questions: 5,
            duration_minutes: 5,
            instructions: String::new(),
        }
    }
}

impl SetupForm {
    pub fn is_valid(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    pub fn to_config(&self) -> QuizConfig {
        QuizConfig {
            topic: self.topic.trim().to_owned(),
            num_questions: self.num_questions,
            duration_minutes: self.duration_minutes,
            instructions: self.instructions.clone(),
        }
    }
}

/// The whole quiz session: configuration capture, question traversal,
/// answer recording, countdown, scoring. Mutated only through the
/// operations in `actions.rs`; the UI layer reads state and calls
/// those operations.
pub struct QuizApp {
    pub state: AppState,
    pub form: SetupForm,
    pub config: Option<QuizConfig>,
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub selected_answers: Vec<String>,
    pub score: usize,
    pub countdown: Countdown,
    /// Short advisory shown to the user (e.g. the fallback notice).
    /// Diagnostic detail goes to the log, never here.
    pub message: String,

    // In-flight generation call, at most one per session. The config
    // is held back until the result arrives; dropping the receiver on
    // restart orphans any stale send.
    pending_config: Option<QuizConfig>,
    generation_rx: Option<Receiver<GenerationResult>>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            state: AppState::Setup,
            form: SetupForm::default(),
            config: None,
            questions: Vec::new(),
            current_index: 0,
            selected_answers: Vec::new(),
            score: 0,
            countdown: Countdown::default(),
            message: String::new(),
            pending_config: None,
            generation_rx: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
