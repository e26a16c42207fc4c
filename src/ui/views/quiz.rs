use egui::{Button, Context, ProgressBar, RichText};

use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::format_time;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let question = match app.current_question() {
        Some(q) => q.clone(),
        None => {
            // No questions should be unreachable in Quiz; bail out
            // instead of panicking on an index.
            app.restart();
            return;
        }
    };

    centered_panel(ctx, 480.0, 640.0, |ui| {
        let panel_width = ui.available_width();

        ui.add(ProgressBar::new(app.progress_fraction()).desired_height(6.0));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(format!("⏱ {}", format_time(app.seconds_remaining())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Question {} of {}",
                    app.current_index + 1,
                    app.questions.len()
                ));
            });
        });
        ui.add_space(12.0);

        ui.heading(&question.question);
        ui.add_space(12.0);

        let selected = app.selected_for_current().to_owned();
        for option in &question.options {
            let is_selected = *option == selected;
            let text = if is_selected {
                RichText::new(format!("✔ {option}")).strong()
            } else {
                RichText::new(option)
            };
            let mut button = Button::new(text).min_size([panel_width, 36.0].into());
            if is_selected {
                button = button.fill(ui.visuals().selection.bg_fill);
            }
            if ui.add(button).clicked() {
                app.select_answer(option);
            }
            ui.add_space(6.0);
        }
        ui.add_space(10.0);

        let next_label = if app.is_last_question() {
            "✅ Finish"
        } else {
            "Next ➡"
        };
        let (previous, next) = two_button_row(
            ui,
            panel_width,
            Button::new("⬅ Previous"),
            app.current_index > 0,
            Button::new(next_label),
            app.current_question_answered(),
        );
        if previous.clicked() {
            app.go_previous();
        }
        if next.clicked() {
            app.go_next();
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            if ui.button("🏠 Abandon quiz").clicked() {
                app.restart();
            }
        });

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
        }
    });
}
