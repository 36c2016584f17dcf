use super::*;
use std::collections::BTreeMap;

/// Fila del listado de quizzes del panel principal.
pub struct QuizRow {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub question_count: usize,
    pub difficulty: Difficulty,
}

/// Fila del histórico de resultados.
pub struct ResultRow {
    pub quiz_title: String,
    pub score: u32,
    pub total: u32,
    pub date: u64,
    pub time_spent: u64,
}

/// Agregado por asignatura para la vista de estadísticas.
pub struct SubjectStats {
    pub name: String,
    pub attempts: usize,
    pub correct: u32,
    pub answered: u32,
}

impl SubjectStats {
    pub fn accuracy(&self) -> f32 {
        if self.answered == 0 {
            0.0
        } else {
            self.correct as f32 / self.answered as f32
        }
    }
}

impl MedQuizApp {
    pub fn quiz_rows(&self) -> Vec<QuizRow> {
        let unknown = self.t().unknown;
        self.data
            .quizzes
            .iter()
            .map(|q| QuizRow {
                id: q.id.clone(),
                title: q.title.clone(),
                subject: self
                    .subject_name(&q.subject_id)
                    .unwrap_or(unknown)
                    .to_string(),
                question_count: q.questions.len(),
                difficulty: q.difficulty,
            })
            .collect()
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        let unknown = self.t().unknown;
        self.data
            .results
            .iter()
            .map(|r| ResultRow {
                quiz_title: self
                    .quiz_by_id(&r.quiz_id)
                    .map(|q| q.title.clone())
                    .unwrap_or_else(|| unknown.to_string()),
                score: r.score,
                total: r.total,
                date: r.date,
                time_spent: r.time_spent,
            })
            .collect()
    }

    /// Agrupa los resultados por asignatura a través del quiz de origen.
    /// Los resultados cuyo quiz ya no resuelve caen bajo "desconocido".
    pub fn subject_stats(&self) -> Vec<SubjectStats> {
        let unknown = self.t().unknown;
        let mut grouped: BTreeMap<String, SubjectStats> = BTreeMap::new();

        for result in &self.data.results {
            let subject = self
                .quiz_by_id(&result.quiz_id)
                .and_then(|q| self.subject_name(&q.subject_id))
                .unwrap_or(unknown);

            let entry = grouped
                .entry(subject.to_string())
                .or_insert_with(|| SubjectStats {
                    name: subject.to_string(),
                    attempts: 0,
                    correct: 0,
                    answered: 0,
                });
            entry.attempts += 1;
            entry.correct += result.score;
            entry.answered += result.total;
        }

        grouped.into_values().collect()
    }

    /// Precisión media sobre todos los resultados (0–1).
    pub fn overall_accuracy(&self) -> f32 {
        let answered: u32 = self.data.results.iter().map(|r| r.total).sum();
        if answered == 0 {
            return 0.0;
        }
        let correct: u32 = self.data.results.iter().map(|r| r.score).sum();
        correct as f32 / answered as f32
    }
}

/// Fecha corta legible para las tablas (UTC).
pub fn format_date(ms: u64) -> String {
    chrono::DateTime::from_timestamp_millis(ms as i64)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Duración compacta tipo "4m 05s".
pub fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}m {:02}s", secs / 60, secs % 60)
}
