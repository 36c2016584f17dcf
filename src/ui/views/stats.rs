use crate::app::MedQuizApp;
use crate::app::view_models::{format_date, format_duration};
use crate::ui::helpers::simple_panel;
use egui::{Context, Grid, ProgressBar, ScrollArea};

pub fn ui_stats(app: &mut MedQuizApp, ctx: &Context) {
    let t = app.t();

    simple_panel(ctx, 720.0, |ui| {
        ui.heading(t.stats_title);
        ui.add_space(8.0);

        if app.data.results.is_empty() {
            ui.label(t.no_results);
            return;
        }

        // ----------- RESUMEN GLOBAL -----------
        ui.horizontal(|ui| {
            ui.label(format!("{}: {}", t.quizzes_taken, app.data.results.len()));
            ui.separator();
            ui.label(format!(
                "{}: {:.0}%",
                t.avg_accuracy,
                app.overall_accuracy() * 100.0
            ));
        });

        ui.add_space(12.0);
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            // ----------- POR ASIGNATURA -----------
            ui.add_space(8.0);
            ui.strong(t.by_subject);
            ui.add_space(4.0);

            Grid::new("subject_stats_grid")
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(t.subject);
                    ui.label(t.attempts);
                    ui.label(t.accuracy);
                    ui.end_row();

                    for stats in app.subject_stats() {
                        ui.label(&stats.name);
                        ui.label(stats.attempts.to_string());
                        ui.add(
                            ProgressBar::new(stats.accuracy())
                                .desired_width(180.0)
                                .show_percentage(),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(16.0);
            ui.separator();

            // ----------- HISTÓRICO -----------
            ui.add_space(8.0);
            ui.strong(t.history);
            ui.add_space(4.0);

            Grid::new("history_grid")
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(t.quiz_title);
                    ui.label(t.score);
                    ui.label(t.date);
                    ui.label(t.time_spent);
                    ui.end_row();

                    for row in app.result_rows() {
                        ui.label(&row.quiz_title);
                        ui.label(format!("{}/{}", row.score, row.total));
                        ui.label(format_date(row.date));
                        ui.label(format_duration(row.time_spent));
                        ui.end_row();
                    }
                });
        });
    });
}
