use super::*;

impl QuizApp {
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn selected_for_current(&self) -> &str {
        self.selected_answers
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn current_question_answered(&self) -> bool {
        !self.selected_for_current().is_empty()
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Fraction for the quiz progress bar: how far into the question
    /// list the user is, counting the current one.
    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            0.0
        } else {
            (self.current_index + 1) as f32 / self.questions.len() as f32
        }
    }

    pub fn score_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            0.0
        } else {
            self.score as f32 / self.questions.len() as f32
        }
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.questions
            .iter()
            .zip(&self.selected_answers)
            .enumerate()
            .map(|(i, (q, selected))| ResultRow {
                number: i + 1,
                question: q.question.clone(),
                selected: selected.clone(),
                correct_answer: q.correct_answer.clone(),
                is_correct: *selected == q.correct_answer,
            })
            .collect()
    }
}
