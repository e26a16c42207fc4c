use egui::{Button, Context, RichText, Slider, TextEdit};

use crate::QuizApp;
use crate::model::{MAX_DURATION_MINUTES, MAX_QUESTIONS, MIN_DURATION_MINUTES, MIN_QUESTIONS};
use crate::ui::layout::centered_panel;

pub fn ui_setup(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("💡 Topic Quiz");
        });
        ui.add_space(12.0);

        ui.label("Quiz Topic");
        ui.add(
            TextEdit::singleline(&mut app.form.topic)
                .hint_text("e.g., World Geography, Science, History")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.label(format!("Number of Questions: {}", app.form.num_questions));
        ui.add(Slider::new(
            &mut app.form.num_questions,
            MIN_QUESTIONS..=MAX_QUESTIONS,
        ));
        ui.add_space(8.0);

        ui.label(format!("Duration (minutes): {}", app.form.duration_minutes));
        ui.add(Slider::new(
            &mut app.form.duration_minutes,
            MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES,
        ));
        ui.add_space(8.0);

        ui.label("Custom Instructions (Optional)");
        ui.add(
            TextEdit::multiline(&mut app.form.instructions)
                .hint_text("Any specific instructions or focus areas for the quiz...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(14.0);

        let pending = app.is_generation_pending();
        let can_start = app.form.is_valid() && !pending;
        ui.vertical_centered(|ui| {
            let start = ui.add_enabled(
                can_start,
                Button::new("Start Quiz ➡").min_size([220.0, 40.0].into()),
            );
            if start.clicked() {
                let config = app.form.to_config();
                app.submit_config(config);
            }

            if pending {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Generating questions…");
                });
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
            }
        });
    });
}
