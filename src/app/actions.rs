use super::*;
use crate::data;

impl QuizApp {
    /// Full reset to the initial state, legal from any phase.
    pub fn start_setup(&mut self) {
        *self = QuizApp::new();
    }

    /// Abandon (from Quiz) or play-again (from Results) path.
    pub fn restart(&mut self) {
        self.start_setup();
    }

    pub fn is_generation_pending(&self) -> bool {
        self.generation_rx.is_some()
    }

    /// Kicks off the generation call for `config` and stays in Setup
    /// until the result lands (see [`Self::poll_generation`]). A second
    /// submit while one is in flight is rejected.
    pub fn submit_config(&mut self, config: QuizConfig) {
        if self.state != AppState::Setup || self.is_generation_pending() {
            return;
        }
        self.message.clear();

        let (tx, rx) = std::sync::mpsc::channel::<GenerationResult>();
        self.generation_rx = Some(rx);
        self.pending_config = Some(config.clone());

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result =
                crate::generate::fetch_questions(&config.topic, config.num_questions, &config.instructions);
            let _ = tx.send(result);
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result =
                crate::generate::fetch_questions(&config.topic, config.num_questions, &config.instructions)
                    .await;
            let _ = tx.send(result);
        });
    }

    /// Checks for a finished generation call; called once per frame.
    pub fn poll_generation(&mut self, now: f64) {
        let outcome = self
            .generation_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(result) = outcome {
            self.generation_rx = None;
            if let Some(config) = self.pending_config.take() {
                self.apply_generation_outcome(config, result, now);
            }
        }
    }

    /// The Setup → Quiz transition. A generation failure is advisory
    /// only: the bundled sample questions are substituted so the quiz
    /// always starts.
    pub fn apply_generation_outcome(
        &mut self,
        config: QuizConfig,
        result: GenerationResult,
        now: f64,
    ) {
        let questions = match result {
            Ok(questions) => questions,
            Err(err) => {
                log::warn!("question generation failed: {err}");
                self.message =
                    "Failed to generate questions. Using sample questions instead.".to_owned();
                data::sample_questions(config.num_questions)
            }
        };

        self.selected_answers = vec![String::new(); questions.len()];
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.countdown.start(config.duration_seconds(), now);
        self.config = Some(config);
        self.state = AppState::Quiz;
    }

    /// Records `option` for the current question, overwriting any
    /// earlier pick. Reselecting the same option changes nothing.
    pub fn select_answer(&mut self, option: &str) {
        if self.state != AppState::Quiz {
            return;
        }
        if let Some(slot) = self.selected_answers.get_mut(self.current_index) {
            if slot != option {
                *slot = option.to_owned();
            }
        }
    }

    /// Advances to the next question, or finishes from the last one.
    /// Unavailable until the current question has a selection.
    pub fn go_next(&mut self) {
        if self.state != AppState::Quiz || !self.current_question_answered() {
            return;
        }
        if self.current_index + 1 >= self.questions.len() {
            self.finish();
        } else {
            self.current_index += 1;
        }
    }

    pub fn go_previous(&mut self) {
        if self.state == AppState::Quiz && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Scores the session and moves to Results. Reached manually from
    /// the last question or automatically on timer expiry.
    pub fn finish(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        self.score = self
            .questions
            .iter()
            .zip(&self.selected_answers)
            .filter(|(q, answer)| q.correct_answer == **answer)
            .count();
        self.countdown.stop();
        self.state = AppState::Results;
    }

    /// Drives the countdown; finishes the session when it expires.
    pub fn tick_timer(&mut self, now: f64) {
        if self.state == AppState::Quiz && self.countdown.tick(now) {
            self.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GenerationError;
    use crate::model::QuizQuestion;

    fn test_config(num_questions: usize) -> QuizConfig {
        QuizConfig {
            topic: "Test".to_owned(),
            num_questions,
            duration_minutes: 1,
            instructions: String::new(),
        }
    }

    fn generated_questions(n: usize) -> Vec<QuizQuestion> {
        (1..=n)
            .map(|i| QuizQuestion {
                id: i as u32,
                question: format!("Question {i}?"),
                options: vec![
                    "right".to_owned(),
                    "wrong a".to_owned(),
                    "wrong b".to_owned(),
                    "wrong c".to_owned(),
                ],
                correct_answer: "right".to_owned(),
            })
            .collect()
    }

    fn active_app(n: usize) -> QuizApp {
        let mut app = QuizApp::new();
        app.apply_generation_outcome(test_config(n), Ok(generated_questions(n)), 0.0);
        app
    }

    #[test]
    fn successful_generation_enters_quiz() {
        let app = active_app(4);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.questions.len(), 4);
        assert_eq!(app.selected_answers, vec![String::new(); 4]);
        assert_eq!(app.seconds_remaining(), 60);
        assert!(app.countdown.is_running());
        assert!(app.message.is_empty());
    }

    #[test]
    fn failed_generation_falls_back_to_samples() {
        let mut app = QuizApp::new();
        app.apply_generation_outcome(test_config(3), Err(GenerationError::EmptyResponse), 0.0);

        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.questions.len(), 3);
        assert_eq!(
            app.message,
            "Failed to generate questions. Using sample questions instead."
        );
        assert!(app.countdown.is_running());
    }

    #[test]
    fn duplicate_submit_is_rejected_while_pending() {
        let mut app = QuizApp::new();
        let (_tx, rx) = std::sync::mpsc::channel::<GenerationResult>();
        app.generation_rx = Some(rx);
        app.pending_config = Some(test_config(3));

        app.submit_config(test_config(5));
        assert_eq!(
            app.pending_config.as_ref().map(|c| c.num_questions),
            Some(3)
        );
        assert_eq!(app.state, AppState::Setup);
    }

    #[test]
    fn poll_applies_a_delivered_result() {
        let mut app = QuizApp::new();
        let (tx, rx) = std::sync::mpsc::channel::<GenerationResult>();
        app.generation_rx = Some(rx);
        app.pending_config = Some(test_config(2));

        app.poll_generation(0.0);
        assert_eq!(app.state, AppState::Setup);

        tx.send(Ok(generated_questions(2))).unwrap();
        app.poll_generation(1.0);
        assert_eq!(app.state, AppState::Quiz);
        assert!(!app.is_generation_pending());
    }

    #[test]
    fn select_answer_overwrites_and_is_idempotent() {
        let mut app = active_app(2);
        app.select_answer("wrong a");
        assert_eq!(app.selected_answers[0], "wrong a");
        app.select_answer("wrong a");
        assert_eq!(app.selected_answers[0], "wrong a");
        app.select_answer("right");
        assert_eq!(app.selected_answers[0], "right");
        assert_eq!(app.selected_answers[1], "");
    }

    #[test]
    fn select_answer_outside_quiz_is_a_no_op() {
        let mut app = QuizApp::new();
        app.select_answer("right");
        assert!(app.selected_answers.is_empty());
    }

    #[test]
    fn next_is_unavailable_without_a_selection() {
        let mut app = active_app(2);
        app.go_next();
        assert_eq!(app.current_index, 0);

        app.select_answer("right");
        app.go_next();
        assert_eq!(app.current_index, 1);
    }

    #[test]
    fn previous_stops_at_the_first_question() {
        let mut app = active_app(3);
        app.go_previous();
        assert_eq!(app.current_index, 0);

        app.select_answer("right");
        app.go_next();
        app.go_previous();
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn next_from_last_question_finishes() {
        let mut app = active_app(2);
        app.select_answer("right");
        app.go_next();
        app.select_answer("wrong b");
        app.go_next();

        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.score, 1);
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn score_counts_exact_string_matches() {
        let mut app = active_app(3);
        // Unanswered questions score nothing.
        app.finish();
        assert_eq!(app.score, 0);

        let mut app = active_app(3);
        for _ in 0..3 {
            app.select_answer("right");
            app.go_next();
        }
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.score, 3);
    }

    #[test]
    fn timer_expiry_finishes_exactly_once() {
        let mut app = active_app(2);
        app.select_answer("right");

        app.tick_timer(59.0);
        assert_eq!(app.state, AppState::Quiz);

        app.tick_timer(60.0);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.score, 1);
        assert!(!app.countdown.is_running());

        // Later ticks change nothing.
        app.tick_timer(120.0);
        assert_eq!(app.state, AppState::Results);
    }

    #[test]
    fn restart_returns_every_field_to_initial_values() {
        let mut app = active_app(3);
        app.select_answer("right");
        app.go_next();
        app.message = "something".to_owned();
        app.restart();

        assert_eq!(app.state, AppState::Setup);
        assert!(app.config.is_none());
        assert!(app.questions.is_empty());
        assert_eq!(app.current_index, 0);
        assert!(app.selected_answers.is_empty());
        assert_eq!(app.score, 0);
        assert_eq!(app.seconds_remaining(), 0);
        assert!(!app.countdown.is_running());
        assert!(app.message.is_empty());
        assert!(!app.is_generation_pending());
    }

    #[test]
    fn restart_orphans_a_stale_generation_result() {
        let mut app = QuizApp::new();
        let (tx, rx) = std::sync::mpsc::channel::<GenerationResult>();
        app.generation_rx = Some(rx);
        app.pending_config = Some(test_config(3));

        app.restart();
        // The receiver was dropped with the old session.
        assert!(tx.send(Ok(generated_questions(3))).is_err());
        app.poll_generation(0.0);
        assert_eq!(app.state, AppState::Setup);
        assert!(app.questions.is_empty());
    }

    #[test]
    fn finish_outside_quiz_is_a_no_op() {
        let mut app = QuizApp::new();
        app.finish();
        assert_eq!(app.state, AppState::Setup);
    }
}
