use crate::app::MedQuizApp;
use crate::locales::difficulty_label;
use crate::model::{QuestionKind, View};
use crate::session::Phase;
use crate::share;
use crate::ui::helpers::{answer_button, centered_panel, notice_label, simple_panel};
use egui::{Button, Context, ProgressBar};

enum QuizAction {
    Answer(String),
    Advance,
    Share,
    GoDashboard,
    GoStats,
}

pub fn ui_quiz(app: &mut MedQuizApp, ctx: &Context) {
    let Some(runner) = app.runner.as_ref() else {
        // Sin quiz en curso no hay nada que pintar aquí
        app.navigate(View::Dashboard);
        return;
    };

    let action = if runner.phase() == Phase::Finished {
        ui_finished(app, ctx)
    } else {
        ui_question(app, ctx)
    };

    match action {
        Some(QuizAction::Answer(value)) => {
            if let Some(runner) = app.runner.as_mut() {
                runner.answer(&value);
            }
        }
        Some(QuizAction::Advance) => app.advance_runner(),
        Some(QuizAction::Share) => share_current_quiz(app, ctx),
        Some(QuizAction::GoDashboard) => app.navigate(View::Dashboard),
        Some(QuizAction::GoStats) => app.navigate(View::Stats),
        None => {}
    }
}

fn ui_question(app: &MedQuizApp, ctx: &Context) -> Option<QuizAction> {
    let t = app.t();
    let runner = app.runner.as_ref()?;
    let question = runner.current_question()?.clone();
    let quiz_title = runner.quiz().title.clone();
    let difficulty = runner.quiz().difficulty;
    let index = runner.index();
    let total = runner.total();
    let locked = runner.phase() == Phase::AnswerRevealed;
    let chosen = runner.answer_for(&question.id).map(str::to_string);

    let mut action = None;

    simple_panel(ctx, 680.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading(&quiz_title);
            ui.label(difficulty_label(t, difficulty));
        });
        ui.label(format!(
            "{} {} {} {}",
            t.question_word,
            index + 1,
            t.of_word,
            total
        ));
        ui.add_space(4.0);
        ui.add(ProgressBar::new((index + 1) as f32 / total.max(1) as f32));
        ui.add_space(12.0);

        ui.label(egui::RichText::new(&question.question).size(18.0).strong());
        ui.add_space(12.0);

        let width = ui.available_width();

        // Las opciones de una TF son las fichas del idioma de la UI; en una
        // MCQ, el propio texto de la opción es la clave de respuesta
        let options: Vec<String> = match question.kind {
            QuestionKind::Mcq => question.options.clone().unwrap_or_default(),
            QuestionKind::Tf => crate::locales::tf_tokens(app.data.ui_language)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        for option in &options {
            let is_correct = *option == question.correct_answer;
            let is_selected = chosen.as_deref() == Some(option.as_str());
            if answer_button(ui, option, width, locked, is_correct, is_selected) {
                action = Some(QuizAction::Answer(option.clone()));
            }
            ui.add_space(6.0);
        }

        // ----------- EXPLICACIÓN -----------
        if locked {
            ui.add_space(8.0);
            ui.separator();
            ui.strong(t.insight);
            ui.label(&question.explanation);
            ui.add_space(8.0);

            let last = index + 1 >= total;
            let label = if last { t.results } else { t.next };
            if ui.add_sized([width, 36.0], Button::new(label)).clicked() {
                action = Some(QuizAction::Advance);
            }
        }
    });

    action
}

fn ui_finished(app: &MedQuizApp, ctx: &Context) -> Option<QuizAction> {
    let t = app.t();
    let runner = app.runner.as_ref()?;
    let score = runner.score();
    let total = runner.total() as u32;
    let percentage = if total == 0 {
        0
    } else {
        (score * 100 + total / 2) / total
    };

    let mut action = None;

    centered_panel(ctx, 420.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(t.completed);
            ui.add_space(12.0);

            ui.label(format!("{}: {score}/{total}", t.score));
            ui.label(format!("{}: {percentage}%", t.accuracy));
            ui.add_space(16.0);

            let width = (ui.available_width() - 16.0).min(320.0);
            if ui
                .add_sized([width, 40.0], Button::new(t.share_quiz))
                .clicked()
            {
                action = Some(QuizAction::Share);
            }
            ui.add_space(6.0);
            if ui
                .add_sized([width, 40.0], Button::new(t.back_dashboard))
                .clicked()
            {
                action = Some(QuizAction::GoDashboard);
            }
            ui.add_space(6.0);
            if ui
                .add_sized([width, 40.0], Button::new(t.view_stats))
                .clicked()
            {
                action = Some(QuizAction::GoStats);
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                notice_label(ui, &app.message);
            }
        });
    });

    action
}

/// Copia al portapapeles un enlace de importación (wasm) o el token pelado
/// (nativo, donde no hay URL base que compartir).
fn share_current_quiz(app: &mut MedQuizApp, ctx: &Context) {
    let Some(runner) = app.runner.as_ref() else {
        return;
    };
    match share::encode_quiz(runner.quiz()) {
        Ok(token) => {
            let payload = share_payload(token);
            ctx.copy_text(payload);
            app.message = app.t().link_copied.to_string();
        }
        Err(err) => {
            // quizzes enormes pueden no caber en una URL; no hay troceo
            app.message = err.to_string();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn share_payload(token: String) -> String {
    share::current_base()
        .map(|base| share::share_url(&base, &token))
        .unwrap_or(token)
}

#[cfg(not(target_arch = "wasm32"))]
fn share_payload(token: String) -> String {
    token
}
