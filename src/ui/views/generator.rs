use crate::app::MedQuizApp;
use crate::gateway::MAX_TEXT_CHARS;
use crate::locales::{difficulty_label, question_type_label};
use crate::model::{Difficulty, QuestionType, TargetLanguage};
use crate::ui::helpers::{notice_label, simple_panel};
use egui::{Button, Context, ScrollArea, Slider};

pub fn ui_generator(app: &mut MedQuizApp, ctx: &Context) {
    let t = app.t();

    simple_panel(ctx, 720.0, |ui| {
        ui.heading(t.quiz_architect);
        ui.label(t.upload_desc);
        ui.add_space(8.0);

        if let Some(error) = app.form.error.clone() {
            notice_label(ui, &error);
            ui.add_space(8.0);
        }

        ScrollArea::vertical().show(ui, |ui| {
            // ----------- MATERIAL DE ESTUDIO -----------
            ui.strong(t.study_material);
            ui.add_space(4.0);
            ScrollArea::vertical()
                .id_salt("source_text_scroll")
                .max_height(220.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut app.form.source_text)
                            .hint_text(t.paste_hint)
                            .desired_rows(10)
                            .desired_width(f32::INFINITY),
                    );
                });
            let chars = app.form.source_text.chars().count();
            ui.small(format!("{}/{} ", chars.min(MAX_TEXT_CHARS), MAX_TEXT_CHARS));

            ui.add_space(12.0);
            ui.separator();

            // ----------- CONFIGURACIÓN -----------
            ui.add_space(8.0);
            ui.strong(t.configuration);
            ui.add_space(4.0);

            ui.add(
                egui::TextEdit::singleline(&mut app.form.title)
                    .hint_text(t.title_hint)
                    .desired_width(320.0),
            );

            ui.add_space(8.0);

            let subjects: Vec<(String, String)> = app
                .data
                .subjects
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect();
            let selected_subject_name = subjects
                .iter()
                .find(|(id, _)| *id == app.form.subject_id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default();

            egui::ComboBox::from_label(t.subject)
                .selected_text(selected_subject_name)
                .show_ui(ui, |ui| {
                    for (id, name) in &subjects {
                        ui.selectable_value(&mut app.form.subject_id, id.clone(), name);
                    }
                });

            // Si cambió la asignatura, el tema seleccionado debe seguir colgando de ella
            let chapters: Vec<(String, String)> = app
                .subject(&app.form.subject_id)
                .map(|s| {
                    s.chapters
                        .iter()
                        .map(|c| (c.id.clone(), c.name.clone()))
                        .collect()
                })
                .unwrap_or_default();
            if !chapters.iter().any(|(id, _)| *id == app.form.chapter_id) {
                app.form.chapter_id = chapters
                    .first()
                    .map(|(id, _)| id.clone())
                    .unwrap_or_default();
            }
            let selected_chapter_name = chapters
                .iter()
                .find(|(id, _)| *id == app.form.chapter_id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default();

            egui::ComboBox::from_label(t.chapter)
                .selected_text(selected_chapter_name)
                .show_ui(ui, |ui| {
                    for (id, name) in &chapters {
                        ui.selectable_value(&mut app.form.chapter_id, id.clone(), name);
                    }
                });

            ui.add_space(8.0);

            egui::ComboBox::from_label(t.difficulty)
                .selected_text(difficulty_label(t, app.form.difficulty))
                .show_ui(ui, |ui| {
                    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                        ui.selectable_value(&mut app.form.difficulty, d, difficulty_label(t, d));
                    }
                });

            egui::ComboBox::from_label(t.target_language)
                .selected_text(target_language_label(t, app.form.target_language))
                .show_ui(ui, |ui| {
                    for l in [
                        TargetLanguage::Source,
                        TargetLanguage::English,
                        TargetLanguage::Arabic,
                    ] {
                        ui.selectable_value(
                            &mut app.form.target_language,
                            l,
                            target_language_label(t, l),
                        );
                    }
                });

            ui.add_space(8.0);
            ui.label(t.question_style);
            ui.horizontal(|ui| {
                for qt in [QuestionType::Mcq, QuestionType::TrueFalse, QuestionType::Mixed] {
                    if ui
                        .selectable_label(app.form.question_type == qt, question_type_label(t, qt))
                        .clicked()
                    {
                        app.form.question_type = qt;
                    }
                }
            });

            ui.add_space(8.0);
            ui.add(Slider::new(&mut app.form.count, 1..=50).text(t.question_count));
            // La proporción es orientativa y solo aplica al estilo mixto
            if app.form.question_type == QuestionType::Mixed {
                ui.add(Slider::new(&mut app.form.mcq_ratio, 0..=100).text(t.mcq_ratio));
            }

            ui.add_space(16.0);

            // ----------- GENERAR -----------
            let pending = app.is_generation_pending();
            ui.horizontal(|ui| {
                let generate = ui.add_enabled(
                    !pending,
                    Button::new(if pending { t.generating } else { t.generate })
                        .min_size(egui::vec2(220.0, 40.0)),
                );
                if pending {
                    ui.spinner();
                }
                if generate.clicked() {
                    app.start_generation();
                }
            });
        });
    });
}

fn target_language_label(
    t: &'static crate::locales::Locale,
    lang: TargetLanguage,
) -> &'static str {
    match lang {
        TargetLanguage::Source => t.lang_source,
        TargetLanguage::English => t.lang_en,
        TargetLanguage::Arabic => t.lang_ar,
    }
}
