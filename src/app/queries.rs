use super::*;
use crate::model::{QuizResult, QuizSession, Subject};

impl MedQuizApp {
    // Accesos de solo lectura; las referencias débiles (subjectId, quizId…)
    // pueden colgar y entonces devuelven None.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.data.subjects.iter().find(|s| s.id == id)
    }

    pub fn subject_name(&self, id: &str) -> Option<&str> {
        self.subject(id).map(|s| s.name.as_str())
    }

    pub fn chapter_name(&self, subject_id: &str, chapter_id: &str) -> Option<&str> {
        self.subject(subject_id)?
            .chapters
            .iter()
            .find(|c| c.id == chapter_id)
            .map(|c| c.name.as_str())
    }

    pub fn quiz_by_id(&self, id: &str) -> Option<&QuizSession> {
        self.data.quizzes.iter().find(|q| q.id == id)
    }

    pub fn results_for_quiz(&self, quiz_id: &str) -> Vec<&QuizResult> {
        self.data
            .results
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .collect()
    }
}
