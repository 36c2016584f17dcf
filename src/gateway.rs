use crate::ids;
use crate::model::{Difficulty, Question, QuestionKind, QuestionType, TargetLanguage};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Presupuesto máximo de caracteres del texto fuente enviado al modelo.
pub const MAX_TEXT_CHARS: usize = 30_000;

const GEMINI_MODEL: &str = "gemini-3-pro-preview";

fn endpoint() -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{GEMINI_MODEL}:generateContent"
    )
}

#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub text: String,
    pub count: u32,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    /// Proporción orientativa de MCQ (0–100); solo se usa con `Mixed` y el
    /// modelo no la garantiza.
    pub mcq_ratio: u8,
    pub target_language: TargetLanguage,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GenerationError {
    MissingApiKey,
    Transport(String),
    InvalidResponse(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::MissingApiKey => {
                write!(f, "No API key configured. Set GEMINI_API_KEY and restart.")
            }
            GenerationError::Transport(msg) => {
                write!(f, "Failed to reach the generation service: {msg}")
            }
            GenerationError::InvalidResponse(msg) => write!(
                f,
                "Failed to generate questions ({msg}). Please try again with a shorter text or fewer questions."
            ),
        }
    }
}

impl std::error::Error for GenerationError {}

fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn api_key() -> Option<String> {
    option_env!("MED_QUIZ_API_KEY")
        .and_then(normalize_key)
        .or_else(|| std::env::var("GEMINI_API_KEY").ok().as_deref().and_then(normalize_key))
}

#[cfg(target_arch = "wasm32")]
fn api_key() -> Option<String> {
    key_from_build_env()
        .or_else(key_from_querystring)
        .or_else(key_from_meta)
        .or_else(key_from_local_storage)
}

#[cfg(target_arch = "wasm32")]
fn key_from_build_env() -> Option<String> {
    option_env!("MED_QUIZ_API_KEY").and_then(normalize_key)
}

#[cfg(target_arch = "wasm32")]
fn key_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        if key == "api_key" {
            let decoded = urlencoding::decode(value).ok()?;
            return normalize_key(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn key_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='med-quiz-api-key']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_key)
}

#[cfg(target_arch = "wasm32")]
fn key_from_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("med_quiz_api_key")
        .ok()?
        .as_deref()
        .and_then(normalize_key)
}

fn system_instruction(req: &GenerationRequest) -> String {
    let language_instruction = match req.target_language {
        TargetLanguage::Arabic => {
            "MANDATORY: All output (questions, options, and explanations) MUST be in ARABIC language."
        }
        TargetLanguage::English => {
            "MANDATORY: All output (questions, options, and explanations) MUST be in ENGLISH language."
        }
        TargetLanguage::Source => "Output should be in the same language as the source text.",
    };

    let type_line = match req.question_type {
        QuestionType::Mixed => format!(
            "A mix of MCQ and True/False (approximately {}% MCQ)",
            req.mcq_ratio
        ),
        QuestionType::Mcq => "MCQ".to_string(),
        QuestionType::TrueFalse => "True/False".to_string(),
    };

    format!(
        "You are an expert medical educator. Generate a set of {count} high-quality medical questions based on the provided text.\n\
         Difficulty Level: {difficulty}.\n\
         Question Type: {type_line}.\n\n\
         {language_instruction}\n\n\
         Ensure all questions are medically accurate and relevant to the provided text.\n\
         For MCQ, provide 4 options.\n\
         For True/False, the correct answer must be exactly \"True\" or \"False\" (in the target language if applicable, e.g., 'صح' or 'خطأ' if Arabic is requested).\n\
         Provide a brief explanation for each correct answer.",
        count = req.count,
        difficulty = req.difficulty,
    )
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": { "type": "STRING", "enum": ["MCQ", "TF"] },
                "question": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Required for MCQ, empty for TF"
                },
                "correctAnswer": { "type": "STRING" },
                "explanation": { "type": "STRING" }
            },
            "required": ["type", "question", "correctAnswer", "explanation"]
        }
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    system_instruction: ContentPayload,
    contents: Vec<ContentPayload>,
    generation_config: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ContentPayload {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

fn build_body(req: &GenerationRequest) -> GenerateContentBody {
    // El texto se recorta al presupuesto ANTES de salir por la red
    let text: String = req.text.chars().take(MAX_TEXT_CHARS).collect();

    GenerateContentBody {
        system_instruction: ContentPayload {
            parts: vec![TextPart {
                text: system_instruction(req),
            }],
        },
        contents: vec![ContentPayload {
            parts: vec![TextPart {
                text: format!(
                    "Generate medical questions from this text. Maintain professional medical terminology. Text: \n\n{text}"
                ),
            }],
        }],
        generation_config: json!({
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
            "temperature": 0.7,
        }),
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Pregunta cruda tal y como la devuelve el modelo (sin id).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(rename = "type")]
    kind: QuestionKind,
    question: String,
    #[serde(default)]
    options: Option<Vec<String>>,
    correct_answer: String,
    explanation: String,
}

fn parse_response(body: &str) -> Result<Vec<Question>, GenerationError> {
    let resp: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| GenerationError::InvalidResponse(format!("unreadable response: {err}")))?;

    let text = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| GenerationError::InvalidResponse("no candidates returned".into()))?;

    let raw: Vec<RawQuestion> = serde_json::from_str(&text)
        .map_err(|err| GenerationError::InvalidResponse(format!("malformed question list: {err}")))?;

    if raw.is_empty() {
        return Err(GenerationError::InvalidResponse(
            "the model returned no questions".into(),
        ));
    }

    let questions: Vec<Question> = raw
        .into_iter()
        .map(|r| Question {
            id: ids::next("q"),
            kind: r.kind,
            question: r.question,
            // el modelo manda `options: []` en las de verdadero/falso
            options: r.options.filter(|opts| !opts.is_empty()),
            correct_answer: r.correct_answer,
            explanation: r.explanation,
        })
        .collect();

    // Chequeo estructural antes de admitir nada al estado
    if questions.iter().any(|q| !q.is_valid()) {
        return Err(GenerationError::InvalidResponse(
            "a question failed shape validation".into(),
        ));
    }

    Ok(questions)
}

/// Una única petición al servicio de generación; sin reintentos internos.
/// Reintentar, si procede, es cosa del que llama.
#[cfg(not(target_arch = "wasm32"))]
pub fn generate_questions(req: &GenerationRequest) -> Result<Vec<Question>, GenerationError> {
    let key = api_key().ok_or(GenerationError::MissingApiKey)?;
    let body = build_body(req);

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(endpoint())
        .query(&[("key", key.as_str())])
        .json(&body)
        .send()
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

    if !status.is_success() {
        return Err(GenerationError::Transport(format!(
            "HTTP {status}: {}",
            text.trim()
        )));
    }

    parse_response(&text)
}

#[cfg(target_arch = "wasm32")]
pub async fn generate_questions(req: &GenerationRequest) -> Result<Vec<Question>, GenerationError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let key = api_key().ok_or(GenerationError::MissingApiKey)?;
    let body = build_body(req);
    let payload_json = serde_json::to_string(&body)
        .map_err(|err| GenerationError::Transport(format!("payload serialization: {err}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload_json));

    let url = format!("{}?key={}", endpoint(), urlencoding::encode(&key));
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| GenerationError::Transport(format!("{err:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| GenerationError::Transport(format!("{err:?}")))?;

    let window = web_sys::window()
        .ok_or_else(|| GenerationError::Transport("no window in WASM environment".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| GenerationError::Transport(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| GenerationError::Transport("fetch did not return a Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| GenerationError::Transport(format!("{err:?}")))?;
    let text_js = JsFuture::from(text_promise)
        .await
        .map_err(|err| GenerationError::Transport(format!("{err:?}")))?;
    let text = text_js
        .as_string()
        .ok_or_else(|| GenerationError::Transport("response body is not text".into()))?;

    if !response.ok() {
        return Err(GenerationError::Transport(format!(
            "HTTP {}: {}",
            response.status(),
            text.trim()
        )));
    }

    parse_response(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            text: "The heart pumps blood.".into(),
            count: 5,
            difficulty: Difficulty::Hard,
            question_type: QuestionType::Mixed,
            mcq_ratio: 70,
            target_language: TargetLanguage::Arabic,
        }
    }

    #[test]
    fn system_instruction_embeds_all_constraints() {
        let text = system_instruction(&request());
        assert!(text.contains("a set of 5"));
        assert!(text.contains("Difficulty Level: Hard."));
        assert!(text.contains("approximately 70% MCQ"));
        assert!(text.contains("MUST be in ARABIC"));
    }

    #[test]
    fn single_type_requests_do_not_mention_a_ratio() {
        let mut req = request();
        req.question_type = QuestionType::TrueFalse;
        let text = system_instruction(&req);
        assert!(text.contains("Question Type: True/False."));
        assert!(!text.contains("approximately"));
    }

    #[test]
    fn body_truncates_source_text_to_the_budget() {
        let mut req = request();
        req.text = "x".repeat(MAX_TEXT_CHARS + 500);
        let body = build_body(&req);
        let sent = &body.contents[0].parts[0].text;
        let budget: String = "x".repeat(MAX_TEXT_CHARS);
        assert!(sent.ends_with(&budget));
        assert!(!sent.ends_with(&"x".repeat(MAX_TEXT_CHARS + 1)));
    }

    #[test]
    fn parse_response_assigns_fresh_ids() {
        let inner = r#"[
            {"type":"MCQ","question":"Which bone is in the thigh?",
             "options":["Femur","Tibia","Ulna","Radius"],
             "correctAnswer":"Femur","explanation":"The femur."},
            {"type":"TF","question":"The femur is in the arm","options":[],
             "correctAnswer":"False","explanation":"It is in the thigh."}
        ]"#;
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": inner }] } }]
        })
        .to_string();

        let questions = parse_response(&body).unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].id.starts_with("q-"));
        assert_ne!(questions[0].id, questions[1].id);
        assert_eq!(questions[0].kind, QuestionKind::Mcq);
        // las opciones vacías de una TF se normalizan a ausentes
        assert_eq!(questions[1].options, None);
    }

    #[test]
    fn parse_response_rejects_empty_candidates() {
        let body = r#"{"candidates":[]}"#;
        assert!(matches!(
            parse_response(body),
            Err(GenerationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn parse_response_rejects_shape_violations() {
        // MCQ cuya respuesta correcta no está entre las opciones
        let inner = r#"[
            {"type":"MCQ","question":"?","options":["a","b"],
             "correctAnswer":"c","explanation":"x"}
        ]"#;
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": inner }] } }]
        })
        .to_string();
        assert!(matches!(
            parse_response(&body),
            Err(GenerationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn normalize_key_discards_blank_values() {
        assert_eq!(normalize_key("  "), None);
        assert_eq!(normalize_key(" abc "), Some("abc".to_string()));
    }
}
