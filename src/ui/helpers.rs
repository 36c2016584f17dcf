// src/ui/helpers.rs
use egui::{Button, Color32, Frame, RichText, Ui, Vec2};

/// Panel centrado con ancho máximo; `inner` pinta el contenido.
pub fn centered_panel(
    ctx: &egui::Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    egui::CentralPanel::default().show(ctx, |ui| {
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

/// Panel de contenido sin centrado vertical, para vistas largas con scroll.
pub fn simple_panel(ctx: &egui::Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    egui::CentralPanel::default().show(ctx, |ui| {
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
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Botón de opción de respuesta. Con la elección bloqueada marca la opción
/// correcta y, si procede, la elegida incorrecta; el resto queda inerte.
pub fn answer_button(
    ui: &mut Ui,
    label: &str,
    width: f32,
    locked: bool,
    is_correct: bool,
    is_selected: bool,
) -> bool {
    let text = if locked && is_correct {
        format!("✅ {label}")
    } else if locked && is_selected {
        format!("❌ {label}")
    } else {
        label.to_string()
    };

    let mut button = Button::new(text).min_size(Vec2::new(width, 40.0));
    if is_selected {
        button = button.fill(ui.visuals().selection.bg_fill);
    }
    ui.add_enabled(!locked, button).clicked()
}

/// Mensaje destacado (errores e info), en el estilo de toda la app.
pub fn notice_label(ui: &mut Ui, message: &str) {
    ui.label(RichText::new(message).color(Color32::YELLOW).strong());
}
