use crate::ids;
use crate::model::{Question, QuizResult, QuizSession};
use std::collections::HashMap;

/// Fases del runner. La transición es lineal: sin saltos, sin vuelta atrás
/// y sin reanudación; abandonar a mitad descarta todo el progreso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    AnswerRevealed,
    Finished,
}

/// Recorre la lista fija de preguntas de un quiz, registra las respuestas
/// y calcula el resultado final.
pub struct SessionRunner {
    quiz: QuizSession,
    index: usize,
    answers: HashMap<String, String>,
    phase: Phase,
    started_at: u64,
}

impl SessionRunner {
    pub fn new(quiz: QuizSession, now_ms: u64) -> Self {
        Self {
            quiz,
            index: 0,
            answers: HashMap::new(),
            phase: Phase::InProgress,
            started_at: now_ms,
        }
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.index)
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Registra la respuesta de la pregunta actual y bloquea la elección.
    /// Solo es legal en `InProgress`; en cualquier otra fase se ignora.
    pub fn answer(&mut self, value: &str) {
        if self.phase != Phase::InProgress {
            return;
        }
        let Some(q) = self.quiz.questions.get(self.index) else {
            return;
        };
        self.answers.insert(q.id.clone(), value.to_string());
        self.phase = Phase::AnswerRevealed;
    }

    /// Avanza a la siguiente pregunta, o finaliza y devuelve el resultado.
    /// Solo es legal en `AnswerRevealed`.
    pub fn advance(&mut self, now_ms: u64) -> Option<QuizResult> {
        if self.phase != Phase::AnswerRevealed {
            return None;
        }
        if self.index + 1 < self.quiz.questions.len() {
            self.index += 1;
            self.phase = Phase::InProgress;
            None
        } else {
            self.phase = Phase::Finished;
            Some(self.build_result(now_ms))
        }
    }

    /// Una pregunta cuenta solo si la respuesta registrada coincide
    /// exactamente con `correct_answer` (sensible a mayúsculas, sin recortes).
    pub fn score(&self) -> u32 {
        self.quiz
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id).map(String::as_str) == Some(q.correct_answer.as_str()))
            .count() as u32
    }

    fn build_result(&self, now_ms: u64) -> QuizResult {
        QuizResult {
            id: ids::next("r"),
            quiz_id: self.quiz.id.clone(),
            score: self.score(),
            total: self.quiz.questions.len() as u32,
            time_spent: now_ms.saturating_sub(self.started_at),
            date: now_ms,
            user_answers: self.answers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionKind};

    fn tf(id: &str, correct: &str) -> Question {
        Question {
            id: id.into(),
            kind: QuestionKind::Tf,
            question: format!("statement {id}"),
            options: None,
            correct_answer: correct.into(),
            explanation: "because".into(),
        }
    }

    fn quiz_of(questions: Vec<Question>) -> QuizSession {
        QuizSession {
            id: "quiz-1".into(),
            title: "TF drill".into(),
            subject_id: "1".into(),
            chapter_id: "1-1".into(),
            difficulty: Difficulty::Easy,
            questions,
            created_at: 0,
        }
    }

    #[test]
    fn score_counts_exact_matches_only() {
        let quiz = quiz_of(vec![
            tf("q-1", "True"),
            tf("q-2", "False"),
            tf("q-3", "True"),
        ]);
        let mut runner = SessionRunner::new(quiz, 1_000);

        runner.answer("True");
        assert!(runner.advance(2_000).is_none());
        runner.answer("False");
        assert!(runner.advance(3_000).is_none());
        runner.answer("true"); // distinta capitalización: no puntúa
        let result = runner.advance(4_000).expect("last advance must finish");

        assert_eq!(result.score, 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.time_spent, 3_000);
        assert_eq!(result.date, 4_000);
        assert_eq!(result.quiz_id, "quiz-1");
        assert_eq!(result.user_answers.len(), 3);
        assert_eq!(runner.phase(), Phase::Finished);
    }

    #[test]
    fn wrong_tf_token_scores_zero_of_one() {
        let quiz = quiz_of(vec![tf("q-1", "True")]);
        let mut runner = SessionRunner::new(quiz, 0);

        runner.answer("False");
        let result = runner.advance(10).expect("single question finishes");

        assert_eq!(result.score, 0);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn answer_is_locked_once_revealed() {
        let quiz = quiz_of(vec![tf("q-1", "True")]);
        let mut runner = SessionRunner::new(quiz, 0);

        runner.answer("False");
        assert_eq!(runner.phase(), Phase::AnswerRevealed);
        // re-responder antes de avanzar no está permitido
        runner.answer("True");
        assert_eq!(runner.answer_for("q-1"), Some("False"));

        let result = runner.advance(5).unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn advance_is_illegal_before_answering() {
        let quiz = quiz_of(vec![tf("q-1", "True"), tf("q-2", "True")]);
        let mut runner = SessionRunner::new(quiz, 0);

        assert!(runner.advance(1).is_none());
        assert_eq!(runner.index(), 0);
        assert_eq!(runner.phase(), Phase::InProgress);
    }

    #[test]
    fn finished_runner_ignores_further_input() {
        let quiz = quiz_of(vec![tf("q-1", "True")]);
        let mut runner = SessionRunner::new(quiz, 0);

        runner.answer("True");
        assert!(runner.advance(1).is_some());

        runner.answer("False");
        assert!(runner.advance(2).is_none());
        assert_eq!(runner.score(), 1);
    }

    #[test]
    fn mcq_scoring_uses_option_text_as_key() {
        let quiz = quiz_of(vec![Question {
            id: "q-1".into(),
            kind: QuestionKind::Mcq,
            question: "First-line for strep throat?".into(),
            options: Some(vec!["Penicillin".into(), "Vancomycin".into()]),
            correct_answer: "Penicillin".into(),
            explanation: "Still first-line.".into(),
        }]);
        let mut runner = SessionRunner::new(quiz, 0);

        runner.answer("Penicillin");
        let result = runner.advance(1).unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.user_answers.get("q-1").unwrap(), "Penicillin");
    }
}
