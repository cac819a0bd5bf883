//! Course types.
//!
//! Provides math areas, courses and the course listing filters.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::user::User;

/// Difficulty of a course or exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Introductory.
    #[serde(rename = "basico")]
    Basic,
    /// Intermediate.
    #[serde(rename = "intermedio")]
    Intermediate,
    /// Advanced.
    #[serde(rename = "avanzado")]
    Advanced,
}

impl DifficultyLevel {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basico",
            Self::Intermediate => "intermedio",
            Self::Advanced => "avanzado",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject area grouping courses (algebra, geometry, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathArea {
    /// Area id.
    pub id: i64,

    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Description.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    /// Icon identifier.
    #[serde(rename = "icono", default)]
    pub icon: Option<String>,

    /// Display color.
    #[serde(default)]
    pub color: Option<String>,

    /// Sort position.
    #[serde(rename = "orden")]
    pub position: i64,
}

/// Course as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course id.
    pub id: i64,

    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,

    /// Description.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    /// Learning objectives.
    #[serde(rename = "objetivos", default)]
    pub objectives: Option<String>,

    /// Difficulty.
    #[serde(rename = "nivel_dificultad")]
    pub level: DifficultyLevel,

    /// Estimated duration in hours.
    #[serde(rename = "duracion_estimada", default)]
    pub estimated_hours: Option<i64>,

    /// Owning math area.
    #[serde(rename = "area_matematica_id")]
    pub area_id: i64,

    /// Creation timestamp (UTC).
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,

    /// Whether the course is published.
    #[serde(rename = "activo")]
    pub active: bool,

    /// Cover image URL.
    #[serde(rename = "imagen_portada", default)]
    pub cover_image: Option<String>,

    /// Embedded math area, when the server includes it.
    #[serde(rename = "area_matematica", default)]
    pub area: Option<MathArea>,

    /// Embedded teacher profile, when the server includes it.
    #[serde(rename = "profesor", default)]
    pub teacher: Option<User>,
}

/// Query filters for `GET /cursos`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseFilters {
    /// Restrict to one math area.
    pub area_id: Option<i64>,
    /// Restrict to one difficulty.
    pub level: Option<DifficultyLevel>,
    /// Number of courses to skip.
    pub skip: Option<u32>,
    /// Maximum number of courses.
    pub limit: Option<u32>,
}

impl CourseFilters {
    /// No filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the math area.
    #[must_use]
    pub fn with_area(mut self, area_id: i64) -> Self {
        self.area_id = Some(area_id);
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_level(mut self, level: DifficultyLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Renders the set filters as a query string without the leading `?`.
    /// Empty when no filter is set.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();

        if let Some(area_id) = self.area_id {
            params.push(format!("area_id={}", area_id));
        }
        if let Some(level) = self.level {
            params.push(format!("nivel={}", level));
        }
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        params.join("&")
    }
}
