//! Lesson types.

use serde::{Deserialize, Serialize};

/// Lesson as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson id.
    pub id: i64,

    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,

    /// Description.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    /// Body text.
    #[serde(rename = "contenido", default)]
    pub content: Option<String>,

    /// Video URL.
    #[serde(default)]
    pub video_url: Option<String>,

    /// Points awarded on completion.
    #[serde(rename = "puntos_otorgados")]
    pub points: i64,

    /// Estimated time in minutes.
    #[serde(rename = "tiempo_estimado", default)]
    pub estimated_minutes: Option<i64>,

    /// Position within the course.
    #[serde(rename = "orden")]
    pub position: i64,

    /// Whether the lesson is published.
    #[serde(rename = "activa")]
    pub active: bool,

    /// Owning course.
    #[serde(rename = "curso_id")]
    pub course_id: i64,
}

/// Response of `POST /lecciones/{id}/completar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCompletion {
    /// Confirmation from the server.
    pub message: String,

    /// Points credited for the lesson.
    #[serde(rename = "puntos_obtenidos", default)]
    pub points_earned: Option<i64>,
}
