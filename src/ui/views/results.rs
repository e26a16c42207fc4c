use egui::{Button, Context, ProgressBar, RichText, ScrollArea};

use crate::QuizApp;
use crate::ui::layout::centered_panel;
use crate::view_models::ResultRow;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 560.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏆 Quiz Results");
            ui.add_space(4.0);
            ui.label(format!(
                "You scored {} out of {}",
                app.score,
                app.questions.len()
            ));
        });
        ui.add_space(8.0);
        ui.add(ProgressBar::new(app.score_fraction()).desired_height(8.0));
        ui.add_space(12.0);

        let rows: Vec<ResultRow> = app.result_rows();
        ScrollArea::vertical().max_height(340.0).show(ui, |ui| {
            for row in &rows {
                result_row(ui, row);
            }
        });

        ui.add_space(14.0);
        ui.vertical_centered(|ui| {
            let again = ui.add(Button::new("🔄 Create New Quiz").min_size([220.0, 40.0].into()));
            if again.clicked() {
                app.restart();
            }
        });
    });
}

fn result_row(ui: &mut egui::Ui, row: &ResultRow) {
    let mark = if row.is_correct { "✅" } else { "❌" };
    ui.label(RichText::new(format!("{}. {}", row.number, row.question)).strong());
    let answer = if row.selected.is_empty() {
        "(no answer)"
    } else {
        &row.selected
    };
    ui.label(format!("{mark} Your answer: {answer}"));
    if !row.is_correct {
        ui.label(
            RichText::new(format!("Correct answer: {}", row.correct_answer))
                .color(egui::Color32::from_rgb(0x2e, 0xb0, 0x62)),
        );
    }
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}
