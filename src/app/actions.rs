use super::*;
use crate::gateway::{self, GenerationRequest};
use crate::ids;
use crate::model::{Chapter, QuizResult, QuizSession, Subject};
use crate::share;

impl MedQuizApp {
    /// Navegar descarta cualquier quiz en curso; no queda resultado parcial.
    pub fn navigate(&mut self, view: View) {
        self.runner = None;
        self.view = view;
    }

    pub fn set_language(&mut self, lang: crate::model::AppLanguage) {
        self.data.ui_language = lang;
        self.persist();
    }

    /// Las asignaturas se añaden al final; los logs de quizzes/resultados
    /// van por delante (ver `save_quiz`/`save_result`).
    pub fn add_subject(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.data.subjects.push(Subject {
            id: ids::next("s"),
            name: name.to_string(),
            chapters: Vec::new(),
        });
        self.persist();
    }

    /// El id del tema deriva del id de la asignatura madre, así queda único
    /// dentro de ella aunque se creen varios en el mismo milisegundo.
    pub fn add_chapter(&mut self, subject_id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let Some(subject) = self.data.subjects.iter_mut().find(|s| s.id == subject_id) else {
            return;
        };
        subject.chapters.push(Chapter {
            id: ids::next(subject_id),
            name: name.to_string(),
        });
        self.persist();
    }

    /// Prepend: el quiz más reciente queda en `quizzes[0]`, nada se sobrescribe.
    pub fn save_quiz(&mut self, quiz: QuizSession) {
        self.data.quizzes.insert(0, quiz);
        self.persist();
    }

    /// Prepend, igual que `save_quiz`; los resultados son solo-añadir.
    pub fn save_result(&mut self, result: QuizResult) {
        self.data.results.insert(0, result);
        self.persist();
    }

    /// Importa un quiz desde un código compartido. Si el código no decodifica,
    /// el documento queda intacto y se devuelve `false`.
    pub fn import_quiz_by_code(&mut self, code: &str) -> bool {
        match share::decode_quiz(code) {
            Ok(quiz) => {
                self.save_quiz(quiz);
                true
            }
            Err(_) => false,
        }
    }

    /// Arranca el runner para un quiz guardado.
    pub fn start_quiz(&mut self, quiz_id: &str) {
        let Some(quiz) = self.quiz_by_id(quiz_id).cloned() else {
            self.message = self.t().quiz_not_found.to_string();
            return;
        };
        self.runner = Some(SessionRunner::new(quiz, ids::now_ms()));
        self.view = View::Quiz;
    }

    /// Avanza el runner; al terminar el resultado se registra en el almacén.
    pub fn advance_runner(&mut self) {
        let result = self.runner.as_mut().and_then(|r| r.advance(ids::now_ms()));
        if let Some(result) = result {
            self.save_result(result);
        }
    }

    /// Lanza la generación en segundo plano; el resultado llega por el canal
    /// y se recoge en `poll_generation` en un frame posterior.
    pub fn start_generation(&mut self) {
        if self.is_generation_pending() {
            return;
        }
        let t = self.t();
        if self.form.source_text.trim().is_empty() {
            self.form.error = Some(t.provide_text.to_string());
            return;
        }
        if self.form.title.trim().is_empty() {
            self.form.error = Some(t.provide_title.to_string());
            return;
        }
        self.form.error = None;

        let request = GenerationRequest {
            text: self.form.source_text.clone(),
            count: self.form.count,
            difficulty: self.form.difficulty,
            question_type: self.form.question_type,
            mcq_ratio: self.form.mcq_ratio,
            target_language: self.form.target_language,
        };

        let (tx, rx) = std::sync::mpsc::channel();
        self.pending_generation = Some(rx);

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(gateway::generate_questions(&request));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(gateway::generate_questions(&request).await);
        });
    }

    /// Sondea el canal de generación; al completar crea el quiz, lo guarda
    /// y arranca el runner. No hay cancelación: si el usuario navegó fuera
    /// del generador, el resultado se descarta cuando por fin llega.
    pub fn poll_generation(&mut self) {
        let maybe = self
            .pending_generation
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());
        let Some(result) = maybe else {
            return;
        };
        self.pending_generation = None;

        if self.view != View::Generator {
            log::info!("Generación completada tras abandonar el formulario; se descarta");
            return;
        }

        match result {
            Ok(questions) => {
                let quiz = QuizSession {
                    id: ids::next("quiz"),
                    title: self.form.title.trim().to_string(),
                    subject_id: self.form.subject_id.clone(),
                    chapter_id: self.form.chapter_id.clone(),
                    difficulty: self.form.difficulty,
                    questions,
                    created_at: ids::now_ms(),
                };
                let quiz_id = quiz.id.clone();
                self.save_quiz(quiz);
                self.start_quiz(&quiz_id);
            }
            Err(err) => {
                log::warn!("La generación falló: {err}");
                self.form.error = Some(err.to_string());
            }
        }
    }

    /// Copia de seguridad del documento completo.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_backup(&mut self) {
        let json = store::export_json(&self.data);
        let name = store::backup_file_name(ids::now_ms());
        match std::fs::write(&name, &json) {
            Ok(()) => self.message = format!("{} ({name})", self.t().data_saved),
            Err(err) => self.message = err.to_string(),
        }
    }

    /// En wasm la descarga se dispara con un ancla `data:` efímera,
    /// como hace el navegador con cualquier export de un SPA.
    #[cfg(target_arch = "wasm32")]
    pub fn export_backup(&mut self) {
        use wasm_bindgen::JsCast;

        let json = store::export_json(&self.data);
        let name = store::backup_file_name(ids::now_ms());
        let href = format!(
            "data:application/json;charset=utf-8,{}",
            urlencoding::encode(&json)
        );

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(element) = document.create_element("a") else {
            return;
        };
        let _ = element.set_attribute("href", &href);
        let _ = element.set_attribute("download", &name);
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlElement>() {
            anchor.click();
            self.message = self.t().data_saved.to_string();
        }
    }

    /// Restaura desde el cuadro de diálogo: JSON pegado, o una ruta de
    /// fichero en el binario nativo.
    pub fn restore_from_input(&mut self) {
        let raw = self.restore_input.trim().to_string();
        if raw.is_empty() {
            return;
        }
        let Some(json) = read_restore_payload(&raw) else {
            self.message = self.t().invalid_code.to_string();
            return;
        };
        match store::restore_from_json(&json) {
            Ok(data) => {
                self.data = data;
                self.persist();
                self.restore_input.clear();
                self.show_restore = false;
                self.form = GeneratorForm::for_data(&self.data);
                self.message = self.t().data_restored.to_string();
            }
            Err(_) => self.message = self.t().invalid_code.to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_restore_payload(raw: &str) -> Option<String> {
    if raw.starts_with('{') {
        Some(raw.to_string())
    } else {
        std::fs::read_to_string(raw).ok()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_restore_payload(raw: &str) -> Option<String> {
    raw.starts_with('{').then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppLanguage, Difficulty, Question, QuestionKind};

    fn test_app(dir: &tempfile::TempDir) -> MedQuizApp {
        MedQuizApp::with_store(Store::at_path(dir.path().join("state.json")))
    }

    fn quiz(id: &str) -> QuizSession {
        QuizSession {
            id: id.into(),
            title: format!("quiz {id}"),
            subject_id: "1".into(),
            chapter_id: "1-1".into(),
            difficulty: Difficulty::Easy,
            questions: vec![Question {
                id: format!("{id}-q1"),
                kind: QuestionKind::Tf,
                question: "The liver is an organ".into(),
                options: None,
                correct_answer: "True".into(),
                explanation: "It is.".into(),
            }],
            created_at: 0,
        }
    }

    #[test]
    fn saving_quizzes_prepends_and_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.save_quiz(quiz("quiz-a"));
        app.save_quiz(quiz("quiz-b"));

        assert_eq!(app.data.quizzes.len(), 2);
        assert_eq!(app.data.quizzes[0].id, "quiz-b");
        assert_eq!(app.data.quizzes[1].id, "quiz-a");
    }

    #[test]
    fn saving_results_prepends_and_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let result = |id: &str| QuizResult {
            id: id.into(),
            quiz_id: "quiz-a".into(),
            score: 1,
            total: 1,
            time_spent: 10,
            date: 10,
            user_answers: Default::default(),
        };
        app.save_result(result("r-1"));
        app.save_result(result("r-2"));

        assert_eq!(app.data.results[0].id, "r-2");
        assert_eq!(app.data.results[1].id, "r-1");
    }

    #[test]
    fn add_chapter_creates_single_chapter_with_distinct_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.data.subjects = vec![Subject {
            id: "1".into(),
            name: "Anatomy".into(),
            chapters: vec![],
        }];

        app.add_chapter("1", "Cardio");

        let subject = &app.data.subjects[0];
        assert_eq!(subject.chapters.len(), 1);
        assert_eq!(subject.chapters[0].name, "Cardio");
        assert_ne!(subject.chapters[0].id, "1");
        assert!(subject.chapters[0].id.starts_with("1-"));
    }

    #[test]
    fn add_chapter_to_unknown_subject_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let before = app.data.clone();

        app.add_chapter("missing", "Cardio");

        assert_eq!(app.data, before);
    }

    #[test]
    fn import_with_invalid_code_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.save_quiz(quiz("quiz-a"));
        let before = app.data.clone();

        assert!(!app.import_quiz_by_code("definitely not a token"));

        assert_eq!(app.data, before);
    }

    #[test]
    fn import_with_valid_code_prepends_imported_quiz() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.save_quiz(quiz("quiz-a"));

        let token = share::encode_quiz(&quiz("quiz-b")).unwrap();
        assert!(app.import_quiz_by_code(&token));

        assert_eq!(app.data.quizzes.len(), 2);
        assert!(app.data.quizzes[0].id.starts_with("imported-"));
        assert_eq!(app.data.quizzes[1].id, "quiz-a");
    }

    #[test]
    fn set_language_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        {
            let mut app = MedQuizApp::with_store(Store::at_path(&path));
            app.set_language(AppLanguage::Ar);
        }
        let reloaded = Store::at_path(&path).load();
        assert_eq!(reloaded.ui_language, AppLanguage::Ar);
    }

    #[test]
    fn restore_replaces_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.save_quiz(quiz("quiz-a"));

        app.restore_input = r#"{"subjects":[],"quizzes":[]}"#.to_string();
        app.restore_from_input();

        assert!(app.data.subjects.is_empty());
        assert!(app.data.quizzes.is_empty());
        assert_eq!(app.message, app.t().data_restored);
    }

    #[test]
    fn restore_with_invalid_payload_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let before = app.data.clone();

        app.restore_input = r#"{"subjects":[]}"#.to_string();
        app.restore_from_input();

        assert_eq!(app.data, before);
        assert_eq!(app.message, app.t().invalid_code);
    }
}
