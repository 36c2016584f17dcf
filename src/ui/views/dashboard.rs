use crate::app::MedQuizApp;
use crate::model::View;
use crate::ui::helpers::{notice_label, simple_panel, two_button_row};
use egui::{Button, Context, Grid, ScrollArea};

pub fn ui_dashboard(app: &mut MedQuizApp, ctx: &Context) {
    let t = app.t();

    simple_panel(ctx, 760.0, |ui| {
        ui.heading(t.app_name);
        ui.add_space(6.0);

        if !app.message.is_empty() {
            notice_label(ui, &app.message.clone());
            ui.add_space(6.0);
        }

        ScrollArea::vertical().show(ui, |ui| {
            // ----------- ASIGNATURAS Y TEMAS -----------
            ui.add_space(8.0);
            ui.strong(t.subjects);
            ui.add_space(4.0);

            let subjects: Vec<(String, String, Vec<String>)> = app
                .data
                .subjects
                .iter()
                .map(|s| {
                    (
                        s.id.clone(),
                        s.name.clone(),
                        s.chapters.iter().map(|c| c.name.clone()).collect(),
                    )
                })
                .collect();

            let mut add_chapter_to: Option<(String, String)> = None;
            for (subject_id, name, chapters) in &subjects {
                egui::CollapsingHeader::new(name)
                    .id_salt(subject_id)
                    .show(ui, |ui| {
                        if chapters.is_empty() {
                            ui.label(t.no_chapters);
                        }
                        for chapter in chapters {
                            ui.label(format!("• {chapter}"));
                        }
                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            let draft = app.chapter_drafts.entry(subject_id.clone()).or_default();
                            ui.add(
                                egui::TextEdit::singleline(draft)
                                    .hint_text(t.new_chapter_hint)
                                    .desired_width(220.0),
                            );
                            if ui.button(t.add_chapter).clicked() && !draft.trim().is_empty() {
                                add_chapter_to = Some((subject_id.clone(), draft.clone()));
                            }
                        });
                    });
            }
            if let Some((subject_id, name)) = add_chapter_to {
                app.add_chapter(&subject_id, &name);
                app.chapter_drafts.remove(&subject_id);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut app.new_subject_name)
                        .hint_text(t.new_subject_hint)
                        .desired_width(220.0),
                );
                if ui.button(t.add_subject).clicked() {
                    let name = app.new_subject_name.clone();
                    app.add_subject(&name);
                    app.new_subject_name.clear();
                }
            });

            ui.add_space(16.0);
            ui.separator();

            // ----------- QUIZZES RECIENTES -----------
            ui.add_space(8.0);
            ui.strong(t.recent_quizzes);
            ui.add_space(4.0);

            let rows = app.quiz_rows();
            if rows.is_empty() {
                ui.label(t.no_quizzes);
                ui.add_space(8.0);
                let (go_generate, go_stats) = two_button_row(ui, 420.0, t.nav_generate, t.nav_stats);
                if go_generate {
                    app.navigate(View::Generator);
                }
                if go_stats {
                    app.navigate(View::Stats);
                }
            } else {
                let mut start: Option<String> = None;
                Grid::new("recent_quizzes_grid")
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for row in &rows {
                            ui.label(&row.title);
                            ui.label(&row.subject);
                            ui.label(format!("{} {}", row.question_count, t.questions_word));
                            ui.label(crate::locales::difficulty_label(t, row.difficulty));
                            if ui.add(Button::new(t.take_quiz)).clicked() {
                                start = Some(row.id.clone());
                            }
                            ui.end_row();
                        }
                    });
                if let Some(id) = start {
                    app.start_quiz(&id);
                }
            }

            ui.add_space(16.0);
            ui.separator();

            // ----------- IMPORTAR POR CÓDIGO -----------
            ui.add_space(8.0);
            ui.strong(t.import_title);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut app.import_code)
                        .hint_text(t.import_hint)
                        .desired_width(380.0),
                );
                if ui.button(t.import_button).clicked() {
                    let code = app.import_code.clone();
                    if app.import_quiz_by_code(&code) {
                        app.import_code.clear();
                        app.message = t.quiz_imported.to_string();
                    } else {
                        app.message = t.invalid_code.to_string();
                    }
                }
            });
        });
    });
}

/// Diálogo de restauración; sustituir el documento pide confirmación explícita.
pub fn ui_restore_dialog(app: &mut MedQuizApp, ctx: &Context) {
    let t = app.t();
    egui::Window::new(t.restore_data)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(t.confirm_restore);
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut app.restore_input)
                    .hint_text(t.restore_hint)
                    .desired_rows(4)
                    .desired_width(360.0),
            );
            ui.add_space(6.0);
            let (restore, cancel) = two_button_row(ui, 360.0, t.restore_data, t.cancel);
            if restore {
                app.restore_from_input();
            }
            if cancel {
                app.show_restore = false;
                app.restore_input.clear();
            }
        });
}
