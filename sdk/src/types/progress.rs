//! Progress types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Progress of one lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressState {
    /// Not opened yet.
    #[serde(rename = "no_iniciado")]
    NotStarted,
    /// Started but not completed.
    #[serde(rename = "en_progreso")]
    InProgress,
    /// Completed.
    #[serde(rename = "completado")]
    Completed,
}

/// One user's progress record for one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    /// Record id; absent for lessons never opened.
    #[serde(default)]
    pub id: Option<i64>,

    /// Lesson.
    #[serde(rename = "leccion_id")]
    pub lesson_id: i64,

    /// State.
    #[serde(rename = "estado")]
    pub state: ProgressState,

    /// When the lesson was started (UTC).
    #[serde(rename = "fecha_inicio", default)]
    pub started_at: Option<NaiveDateTime>,

    /// When the lesson was completed (UTC).
    #[serde(rename = "fecha_completion", default)]
    pub completed_at: Option<NaiveDateTime>,

    /// Time spent in minutes.
    #[serde(rename = "tiempo_dedicado", default)]
    pub minutes_spent: Option<i64>,

    /// Points credited.
    #[serde(rename = "puntos_obtenidos", default)]
    pub points_earned: Option<i64>,
}

/// Response of `GET /usuarios/me/progreso/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Course.
    #[serde(rename = "curso_id")]
    pub course_id: i64,

    /// Completed lessons over total, in percent.
    #[serde(rename = "progreso_porcentaje")]
    pub percent: f64,

    /// Active lessons in the course.
    #[serde(rename = "lecciones_totales")]
    pub total_lessons: i64,

    /// Lessons completed.
    #[serde(rename = "lecciones_completadas")]
    pub completed_lessons: i64,

    /// Points earned in the course.
    #[serde(rename = "puntos_obtenidos", default)]
    pub points_earned: Option<i64>,

    /// Per-lesson records.
    #[serde(rename = "progreso_lecciones", default)]
    pub lessons: Vec<LessonProgress>,
}

impl CourseProgress {
    /// Returns true once every lesson is completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_lessons > 0 && self.completed_lessons >= self.total_lessons
    }

    /// Lessons still to complete.
    #[must_use]
    pub fn remaining_lessons(&self) -> i64 {
        (self.total_lessons - self.completed_lessons).max(0)
    }
}
