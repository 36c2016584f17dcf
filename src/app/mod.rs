use crate::gateway::GenerationError;
use crate::locales::{self, Locale};
use crate::model::{AppData, Difficulty, Question, QuestionType, TargetLanguage, View};
use crate::session::SessionRunner;
use crate::store::{self, Store};
use std::collections::HashMap;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod queries;
pub mod view_models;

/// Estado del formulario del generador; transitorio, nunca se persiste.
pub struct GeneratorForm {
    pub title: String,
    pub subject_id: String,
    pub chapter_id: String,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub count: u32,
    pub mcq_ratio: u8,
    pub target_language: TargetLanguage,
    pub source_text: String,
    pub error: Option<String>,
}

impl GeneratorForm {
    /// Formulario con la primera asignatura/tema preseleccionados.
    pub fn for_data(data: &AppData) -> Self {
        let subject = data.subjects.first();
        Self {
            title: String::new(),
            subject_id: subject.map(|s| s.id.clone()).unwrap_or_default(),
            chapter_id: subject
                .and_then(|s| s.chapters.first())
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            difficulty: Difficulty::Medium,
            question_type: QuestionType::Mixed,
            count: 20,
            mcq_ratio: 70,
            target_language: TargetLanguage::Source,
            source_text: String::new(),
            error: None,
        }
    }
}

/// La aplicación entera. `data` es el documento persistido; todo lo demás es
/// estado de sesión que muere con la pestaña. Las mutaciones del documento
/// pasan únicamente por los métodos de `actions.rs`, nunca por los campos.
pub struct MedQuizApp {
    pub data: AppData,
    pub store: Store,
    pub view: View,
    pub runner: Option<SessionRunner>,
    pub form: GeneratorForm,
    pub message: String,
    pub import_code: String,
    pub new_subject_name: String,
    pub chapter_drafts: HashMap<String, String>,
    pub restore_input: String,
    pub show_restore: bool,
    pending_generation: Option<Receiver<Result<Vec<Question>, GenerationError>>>,
}

impl MedQuizApp {
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    pub fn with_store(store: Store) -> Self {
        let data = store.load();
        // Aplica dir/lang del documento HTML también al arrancar, no solo al guardar
        store::apply_document_language(data.ui_language);

        let form = GeneratorForm::for_data(&data);
        let mut app = Self {
            data,
            store,
            view: View::default(),
            runner: None,
            form,
            message: String::new(),
            import_code: String::new(),
            new_subject_name: String::new(),
            chapter_drafts: HashMap::new(),
            restore_input: String::new(),
            show_restore: false,
            pending_generation: None,
        };

        app.consume_import_param();
        app
    }

    pub fn t(&self) -> &'static Locale {
        locales::t(self.data.ui_language)
    }

    /// Persiste el documento completo; se llama tras cada mutación.
    pub fn persist(&self) {
        self.store.save(&self.data);
    }

    pub fn is_generation_pending(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Consume el parámetro `?import=` una sola vez al arrancar y limpia la
    /// URL visible sin recargar (solo wasm).
    #[cfg(target_arch = "wasm32")]
    fn consume_import_param(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(search) = window.location().search() else {
            return;
        };
        let query = search.strip_prefix('?').unwrap_or(search.as_str());

        let mut token = None;
        for pair in query.split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            if key == "import" {
                token = urlencoding::decode(value).ok().map(|v| v.into_owned());
            }
        }

        let Some(token) = token else {
            return;
        };

        if self.import_quiz_by_code(&token) {
            self.message = self.t().quiz_imported.to_string();
        } else {
            self.message = self.t().invalid_code.to_string();
        }

        // Quita el parámetro de la barra de direcciones, con o sin éxito
        let location = window.location();
        if let (Ok(origin), Ok(pathname), Ok(hash)) =
            (location.origin(), location.pathname(), location.hash())
        {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&format!("{origin}{pathname}{hash}")),
                );
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn consume_import_param(&mut self) {}
}
