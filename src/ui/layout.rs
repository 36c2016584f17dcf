use crate::app::MedQuizApp;
use crate::model::{AppLanguage, View};
use egui::{Context, Visuals};

/// Barra superior: navegación, idioma y copias de seguridad.
/// Navegar fuera del quiz descarta el progreso en curso.
pub fn top_panel(app: &mut MedQuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let t = app.t();

            if ui.button(t.nav_dashboard).clicked() {
                app.navigate(View::Dashboard);
            }
            if ui.button(t.nav_generate).clicked() {
                app.navigate(View::Generator);
            }
            if ui.button(t.nav_stats).clicked() {
                app.navigate(View::Stats);
            }

            ui.separator();

            // Selector de idioma EN/AR
            let lang = app.data.ui_language;
            if ui
                .selectable_label(lang == AppLanguage::En, "EN")
                .clicked()
            {
                app.set_language(AppLanguage::En);
            }
            if ui
                .selectable_label(lang == AppLanguage::Ar, "AR")
                .clicked()
            {
                app.set_language(AppLanguage::Ar);
            }

            ui.separator();

            if ui.button(t.export_data).clicked() {
                app.export_backup();
            }
            if ui.button(t.restore_data).clicked() {
                app.show_restore = !app.show_restore;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}
