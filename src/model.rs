use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{s}")
    }
}

/// Estilo de cuestionario pedido al generador (no el tipo de una pregunta concreta).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "True/False")]
    TrueFalse,
    #[serde(rename = "Mixed")]
    Mixed,
}

/// Tipo de una pregunta ya generada, tal y como viaja en el JSON.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuestionKind {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "TF")]
    Tf,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AppLanguage {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ar")]
    Ar,
}

impl Default for AppLanguage {
    fn default() -> Self {
        AppLanguage::En
    }
}

impl AppLanguage {
    pub fn is_rtl(self) -> bool {
        matches!(self, AppLanguage::Ar)
    }

    /// Etiqueta para el atributo `lang` del documento.
    pub fn tag(self) -> &'static str {
        match self {
            AppLanguage::En => "en",
            AppLanguage::Ar => "ar",
        }
    }
}

/// Idioma en el que se pide el cuestionario al modelo.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetLanguage {
    #[serde(rename = "Source")]
    Source,
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Arabic")]
    Arabic,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: String,
}

impl Question {
    /// Chequeo estructural en fronteras de confianza: una MCQ necesita
    /// opciones no vacías que contengan la respuesta correcta.
    pub fn is_valid(&self) -> bool {
        if self.question.trim().is_empty() || self.correct_answer.is_empty() {
            return false;
        }
        match self.kind {
            QuestionKind::Mcq => self
                .options
                .as_ref()
                .map(|opts| !opts.is_empty() && opts.contains(&self.correct_answer))
                .unwrap_or(false),
            QuestionKind::Tf => true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    pub id: String,
    pub title: String,
    pub subject_id: String,
    pub chapter_id: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub created_at: u64,
}

impl QuizSession {
    pub fn is_valid(&self) -> bool {
        !self.questions.is_empty() && self.questions.iter().all(Question::is_valid)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: String,
    pub quiz_id: String,
    pub score: u32,
    pub total: u32,
    pub time_spent: u64,
    pub date: u64,
    pub user_answers: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub chapters: Vec<Chapter>,
}

/// Documento completo persistido: la única fuente de verdad.
/// `quizzes` y `results` son logs ordenados por inserción (lo nuevo delante),
/// nunca se mutan tras crearse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub results: Vec<QuizResult>,
    pub quizzes: Vec<QuizSession>,
    #[serde(default)]
    pub ui_language: AppLanguage,
}

/// Vista activa de la interfaz; no se persiste.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Generator,
    Quiz,
    Stats,
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(options: &[&str], correct: &str) -> Question {
        Question {
            id: "q-1".into(),
            kind: QuestionKind::Mcq,
            question: "Which muscle flexes the elbow?".into(),
            options: Some(options.iter().map(|s| s.to_string()).collect()),
            correct_answer: correct.into(),
            explanation: "The biceps brachii is the main elbow flexor.".into(),
        }
    }

    #[test]
    fn mcq_without_matching_option_is_invalid() {
        assert!(mcq(&["a", "b"], "a").is_valid());
        assert!(!mcq(&["a", "b"], "c").is_valid());
        assert!(!mcq(&[], "a").is_valid());
    }

    #[test]
    fn tf_question_needs_no_options() {
        let q = Question {
            id: "q-2".into(),
            kind: QuestionKind::Tf,
            question: "The femur is a bone".into(),
            options: None,
            correct_answer: "True".into(),
            explanation: "It is the longest one.".into(),
        };
        assert!(q.is_valid());
    }

    #[test]
    fn persisted_document_uses_original_field_names() {
        let data = AppData {
            subjects: vec![Subject {
                id: "1".into(),
                name: "Anatomy".into(),
                chapters: vec![Chapter {
                    id: "1-1".into(),
                    name: "Muscular System".into(),
                }],
            }],
            results: vec![],
            quizzes: vec![QuizSession {
                id: "quiz-1".into(),
                title: "Finals Prep".into(),
                subject_id: "1".into(),
                chapter_id: "1-1".into(),
                difficulty: Difficulty::Easy,
                questions: vec![],
                created_at: 7,
            }],
            ui_language: AppLanguage::Ar,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"subjectId\":\"1\""));
        assert!(json.contains("\"createdAt\":7"));
        assert!(json.contains("\"uiLanguage\":\"ar\""));
        assert!(json.contains("\"difficulty\":\"Easy\""));
    }

    #[test]
    fn question_kind_serializes_as_short_tokens() {
        let q = mcq(&["a"], "a");
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"type\":\"MCQ\""));
        assert!(json.contains("\"correctAnswer\":\"a\""));
    }
}
