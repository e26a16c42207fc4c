mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::QuizApp;
use crate::model::AppState;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.poll_generation(now);
        self.tick_timer(now);

        match self.state {
            AppState::Setup => views::setup::ui_setup(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        // Keep repainting while something is counting down or loading;
        // egui only repaints on input otherwise.
        if self.is_generation_pending() || self.countdown.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
