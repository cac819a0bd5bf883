//! Exercise types.
//!
//! Provides exercises, answer submissions and graded results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::course::DifficultyLevel;

/// Exercise format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    /// Pick one of `opciones_json`.
    #[serde(rename = "opcion_multiple")]
    MultipleChoice,
    /// Free-form worked answer.
    #[serde(rename = "desarrollo")]
    OpenEnded,
    /// True or false.
    #[serde(rename = "verdadero_falso")]
    TrueFalse,
    /// Fill in the blank.
    #[serde(rename = "completar")]
    FillInBlank,
}

/// Exercise as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise id.
    pub id: i64,

    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,

    /// Problem statement.
    #[serde(rename = "enunciado")]
    pub statement: String,

    /// Format.
    #[serde(rename = "tipo_ejercicio")]
    pub kind: ExerciseType,

    /// Difficulty.
    #[serde(rename = "nivel_dificultad")]
    pub level: DifficultyLevel,

    /// Points for a correct answer.
    #[serde(rename = "puntos_otorgados")]
    pub points: i64,

    /// Time limit in seconds.
    #[serde(rename = "tiempo_limite", default)]
    pub time_limit: Option<i64>,

    /// Expected answer, when the server exposes it.
    #[serde(rename = "respuesta_correcta", default)]
    pub correct_answer: Option<String>,

    /// Worked explanation.
    #[serde(rename = "explicacion", default)]
    pub explanation: Option<String>,

    /// Position within the lesson.
    #[serde(rename = "orden")]
    pub position: i64,

    /// Whether the exercise is published.
    #[serde(rename = "activo")]
    pub active: bool,

    /// Owning lesson.
    #[serde(rename = "leccion_id")]
    pub lesson_id: i64,

    /// JSON-encoded list of choices for multiple-choice exercises.
    #[serde(rename = "opciones_json", default)]
    pub options_json: Option<String>,

    /// LaTeX rendering of the formula involved.
    #[serde(default)]
    pub formula_latex: Option<String>,
}

impl Exercise {
    /// Decodes `options_json`. Empty when the exercise has no choices.
    ///
    /// # Errors
    ///
    /// Returns an error if `options_json` is not a JSON list of strings.
    pub fn options(&self) -> Result<Vec<String>, serde_json::Error> {
        match self.options_json.as_deref() {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw),
            _ => Ok(Vec::new()),
        }
    }
}

/// Body of `POST /ejercicios/{id}/responder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    /// Exercise being answered.
    #[serde(rename = "ejercicio_id")]
    pub exercise_id: i64,

    /// The user's answer.
    #[serde(rename = "respuesta_usuario")]
    pub answer: String,
}

impl AnswerSubmission {
    /// Creates a submission.
    #[must_use]
    pub fn new(exercise_id: i64, answer: impl Into<String>) -> Self {
        Self {
            exercise_id,
            answer: answer.into(),
        }
    }
}

/// Graded answer returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Answer record id.
    pub id: i64,

    /// The answer as recorded.
    #[serde(rename = "respuesta_usuario")]
    pub answer: String,

    /// Whether the answer was accepted.
    #[serde(rename = "es_correcta")]
    pub correct: bool,

    /// Points credited.
    #[serde(rename = "puntos_obtenidos")]
    pub points_earned: i64,

    /// Response time in seconds.
    #[serde(rename = "tiempo_respuesta", default)]
    pub response_time: Option<i64>,

    /// Grading timestamp (UTC).
    #[serde(rename = "fecha_respuesta")]
    pub answered_at: NaiveDateTime,

    /// Exercise answered.
    #[serde(rename = "ejercicio_id")]
    pub exercise_id: i64,
}
