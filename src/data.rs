// src/data.rs

use crate::model::{AppData, AppLanguage, Subject};

/// Asignaturas semilla embebidas; el estado por defecto cuando no hay nada guardado.
pub fn seed_subjects() -> Vec<Subject> {
    let file_content = include_str!("data/default_subjects.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el YAML de asignaturas semilla")
}

pub fn default_app_data() -> AppData {
    AppData {
        subjects: seed_subjects(),
        results: Vec::new(),
        quizzes: Vec::new(),
        ui_language: AppLanguage::En,
    }
}
