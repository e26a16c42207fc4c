use egui::{Button, CentralPanel, Context, Frame, Response, Ui};

/// Card-style panel centered vertically, with a content width cap.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Two equally sized buttons side by side; returns both responses.
pub fn two_button_row(
    ui: &mut Ui,
    width: f32,
    left: Button<'_>,
    left_enabled: bool,
    right: Button<'_>,
    right_enabled: bool,
) -> (Response, Response) {
    let button_width = (width - 8.0) / 2.0;
    ui.horizontal(|ui| {
        let l = ui.add_enabled(left_enabled, left.min_size([button_width, 36.0].into()));
        let r = ui.add_enabled(right_enabled, right.min_size([button_width, 36.0].into()));
        (l, r)
    })
    .inner
}
