use crate::ids;
use crate::model::QuizSession;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

#[derive(Debug, PartialEq, Eq)]
pub enum ShareError {
    Encode,
    Decode,
}

impl std::fmt::Display for ShareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShareError::Encode => write!(f, "the quiz could not be encoded for sharing"),
            ShareError::Decode => write!(f, "the share code is not a valid quiz"),
        }
    }
}

impl std::error::Error for ShareError {}

/// Token opaco apto para URL: JSON → percent-encoding → base64.
/// El percent-encoding intermedio deja el texto en bytes seguros, también
/// para preguntas en escrituras no latinas.
pub fn encode_quiz(quiz: &QuizSession) -> Result<String, ShareError> {
    let json = serde_json::to_string(quiz).map_err(|_| ShareError::Encode)?;
    Ok(BASE64.encode(urlencoding::encode(&json).as_bytes()))
}

/// Cadena inversa de `encode_quiz`. Al admitir el quiz se le reasigna un id
/// nuevo `imported-…` y se desvinculan las referencias de asignatura/tema
/// para no chocar con la taxonomía local.
pub fn decode_quiz(token: &str) -> Result<QuizSession, ShareError> {
    let bytes = BASE64.decode(token.trim()).map_err(|_| ShareError::Decode)?;
    let encoded = String::from_utf8(bytes).map_err(|_| ShareError::Decode)?;
    let json = urlencoding::decode(&encoded).map_err(|_| ShareError::Decode)?;
    let mut quiz: QuizSession = serde_json::from_str(&json).map_err(|_| ShareError::Decode)?;
    if !quiz.is_valid() {
        return Err(ShareError::Decode);
    }
    quiz.id = ids::next("imported");
    quiz.subject_id = String::new();
    quiz.chapter_id = String::new();
    Ok(quiz)
}

/// Enlace completo para compartir: `<origen><ruta>?import=<token>#/`.
pub fn share_url(origin_and_path: &str, token: &str) -> String {
    format!("{origin_and_path}?import={}#/", urlencoding::encode(token))
}

/// Origen y ruta actuales del navegador (solo wasm).
#[cfg(target_arch = "wasm32")]
pub fn current_base() -> Option<String> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let pathname = location.pathname().ok()?;
    Some(format!("{origin}{pathname}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Question, QuestionKind};

    fn sample_quiz() -> QuizSession {
        QuizSession {
            id: "quiz-1".into(),
            title: "أساسيات القلب".into(),
            subject_id: "1".into(),
            chapter_id: "1-1".into(),
            difficulty: Difficulty::Medium,
            questions: vec![
                Question {
                    id: "q-1".into(),
                    kind: QuestionKind::Mcq,
                    question: "Which valve separates the left atrium and ventricle?".into(),
                    options: Some(vec![
                        "Mitral".into(),
                        "Tricuspid".into(),
                        "Aortic".into(),
                        "Pulmonary".into(),
                    ]),
                    correct_answer: "Mitral".into(),
                    explanation: "The mitral valve sits between them.".into(),
                },
                Question {
                    id: "q-2".into(),
                    kind: QuestionKind::Tf,
                    question: "القلب يحتوي على أربع حجرات".into(),
                    options: None,
                    correct_answer: "صح".into(),
                    explanation: "أذينان وبطينان.".into(),
                },
            ],
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn round_trip_keeps_content_and_reassigns_identity() {
        let quiz = sample_quiz();
        let token = encode_quiz(&quiz).unwrap();
        let decoded = decode_quiz(&token).unwrap();

        assert_eq!(decoded.title, quiz.title);
        assert_eq!(decoded.questions, quiz.questions);
        assert_eq!(decoded.difficulty, quiz.difficulty);
        assert_eq!(decoded.created_at, quiz.created_at);

        assert!(decoded.id.starts_with("imported-"));
        assert_ne!(decoded.id, quiz.id);
        assert!(decoded.subject_id.is_empty());
        assert!(decoded.chapter_id.is_empty());
    }

    #[test]
    fn token_is_url_safe_after_query_escaping() {
        let token = encode_quiz(&sample_quiz()).unwrap();
        let url = share_url("https://example.com/app", &token);
        assert!(url.starts_with("https://example.com/app?import="));
        assert!(url.ends_with("#/"));
        // el token escapado no introduce separadores de query
        assert_eq!(url.matches('?').count(), 1);
        assert!(!url[url.find('=').unwrap()..].contains('+'));
    }

    #[test]
    fn decode_rejects_garbage_tokens() {
        assert_eq!(decode_quiz("%%% not base64 %%%"), Err(ShareError::Decode));
        // base64 válido pero el contenido no es un quiz
        let token = BASE64.encode(b"plain text, not json");
        assert_eq!(decode_quiz(&token), Err(ShareError::Decode));
    }

    #[test]
    fn decode_rejects_structurally_invalid_quizzes() {
        // una MCQ cuya respuesta no figura entre las opciones no se admite
        let mut quiz = sample_quiz();
        quiz.questions[0].correct_answer = "Semilunar".into();
        let token = encode_quiz(&quiz).unwrap();
        assert_eq!(decode_quiz(&token), Err(ShareError::Decode));

        // un quiz sin preguntas tampoco
        let mut empty = sample_quiz();
        empty.questions.clear();
        let token = encode_quiz(&empty).unwrap();
        assert_eq!(decode_quiz(&token), Err(ShareError::Decode));
    }
}
