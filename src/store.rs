use crate::data::default_app_data;
use crate::model::{AppData, AppLanguage};

/// Clave del slot: localStorage en wasm, nombre de fichero en nativo.
pub const STORAGE_KEY: &str = "medicine_quiz_app_state_v2";

/// Almacén persistente: un único slot con el documento completo.
pub struct Store {
    #[cfg(not(target_arch = "wasm32"))]
    path: std::path::PathBuf,
}

impl Store {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            path: std::path::PathBuf::from(format!("{STORAGE_KEY}.json")),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self {}
    }

    /// Slot en una ruta alternativa, solo nativo (lo usan los tests).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn at_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Carga el documento completo; si el slot está vacío o ilegible
    /// vuelve al estado semilla sin avisar al usuario.
    pub fn load(&self) -> AppData {
        match self.read_slot() {
            Some(json) => match serde_json::from_str::<AppData>(&json) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!("Estado guardado ilegible, se usa el estado semilla: {err}");
                    default_app_data()
                }
            },
            None => default_app_data(),
        }
    }

    /// Reescribe el slot entero; se llama tras cada mutación.
    pub fn save(&self, data: &AppData) {
        match serde_json::to_string(data) {
            Ok(json) => self.write_slot(&json),
            Err(err) => log::error!("No se pudo serializar el estado: {err}"),
        }
        apply_document_language(data.ui_language);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_slot(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_slot(&self, json: &str) {
        if let Err(err) = std::fs::write(&self.path, json) {
            log::error!("No se pudo escribir {}: {err}", self.path.display());
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn read_slot(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn write_slot(&self, json: &str) {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(STORAGE_KEY, json).is_err() {
                log::error!("No se pudo escribir en localStorage");
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RestoreError {
    Invalid,
}

impl std::fmt::Display for RestoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the backup file is not a valid app state document")
    }
}

impl std::error::Error for RestoreError {}

/// Serialización del documento completo, idéntica byte a byte a la persistida.
pub fn export_json(data: &AppData) -> String {
    serde_json::to_string(data).unwrap_or_default()
}

/// Nombre del fichero de copia de seguridad para el instante dado.
pub fn backup_file_name(now_ms: u64) -> String {
    let date = chrono::DateTime::from_timestamp_millis(now_ms as i64)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    format!("medicine_quiz_backup_{date}.json")
}

/// Acepta una copia de seguridad solo si parsea y trae al menos las claves
/// `subjects` y `quizzes`; sustituye el documento entero, nunca fusiona.
pub fn restore_from_json(json: &str) -> Result<AppData, RestoreError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|_| RestoreError::Invalid)?;
    if value.get("subjects").is_none() || value.get("quizzes").is_none() {
        return Err(RestoreError::Invalid);
    }
    serde_json::from_value(value).map_err(|_| RestoreError::Invalid)
}

/// Ajusta dirección de texto e idioma del documento HTML (solo wasm).
#[cfg(target_arch = "wasm32")]
pub fn apply_document_language(lang: AppLanguage) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", if lang.is_rtl() { "rtl" } else { "ltr" });
        let _ = root.set_attribute("lang", lang.tag());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_language(_lang: AppLanguage) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use std::collections::HashMap;

    fn store_in(dir: &tempfile::TempDir) -> Store {
        Store::at_path(dir.path().join("state.json"))
    }

    fn sample_data() -> AppData {
        let mut user_answers = HashMap::new();
        user_answers.insert("q-1".to_string(), "True".to_string());
        AppData {
            subjects: vec![Subject {
                id: "1".into(),
                name: "Anatomy".into(),
                chapters: vec![],
            }],
            results: vec![QuizResult {
                id: "r-1".into(),
                quiz_id: "quiz-1".into(),
                score: 1,
                total: 1,
                time_spent: 1200,
                date: 1_700_000_000_000,
                user_answers,
            }],
            quizzes: vec![QuizSession {
                id: "quiz-1".into(),
                title: "Cardio basics".into(),
                subject_id: "1".into(),
                chapter_id: "1-1".into(),
                difficulty: Difficulty::Hard,
                questions: vec![Question {
                    id: "q-1".into(),
                    kind: QuestionKind::Tf,
                    question: "The heart has four chambers".into(),
                    options: None,
                    correct_answer: "True".into(),
                    explanation: "Two atria, two ventricles.".into(),
                }],
                created_at: 1_700_000_000_000,
            }],
            ui_language: AppLanguage::En,
        }
    }

    #[test]
    fn load_returns_seed_state_when_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let data = store_in(&dir).load();
        assert_eq!(data.subjects.len(), 2);
        assert_eq!(data.subjects[0].name, "Anatomy");
        assert!(data.quizzes.is_empty());
        assert!(data.results.is_empty());
    }

    #[test]
    fn load_returns_seed_state_when_slot_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json at all").unwrap();
        let data = Store::at_path(&path).load();
        assert_eq!(data.subjects.len(), 2);
        assert!(data.quizzes.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let data = sample_data();
        store.save(&data);
        assert_eq!(store.load(), data);
    }

    #[test]
    fn export_matches_persisted_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = Store::at_path(&path);
        let data = sample_data();
        store.save(&data);
        let persisted = std::fs::read_to_string(&path).unwrap();
        assert_eq!(export_json(&data), persisted);
    }

    #[test]
    fn restore_requires_subjects_and_quizzes() {
        assert_eq!(restore_from_json("not json"), Err(RestoreError::Invalid));
        assert_eq!(
            restore_from_json(r#"{"subjects":[]}"#),
            Err(RestoreError::Invalid)
        );
        assert_eq!(
            restore_from_json(r#"{"quizzes":[]}"#),
            Err(RestoreError::Invalid)
        );
        let restored = restore_from_json(r#"{"subjects":[],"quizzes":[]}"#).unwrap();
        assert!(restored.subjects.is_empty());
        assert!(restored.results.is_empty());
        assert_eq!(restored.ui_language, AppLanguage::En);
    }

    #[test]
    fn backup_file_name_embeds_iso_date() {
        // 2023-11-14T22:13:20Z
        assert_eq!(
            backup_file_name(1_700_000_000_000),
            "medicine_quiz_backup_2023-11-14.json"
        );
    }
}
