//! User types.
//!
//! Provides user profiles, registration payloads and learning statistics.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    /// Learner.
    #[serde(rename = "estudiante")]
    Student,
    /// Course author.
    #[serde(rename = "profesor")]
    Teacher,
    /// Platform administrator.
    #[serde(rename = "admin")]
    Admin,
}

impl UserType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "estudiante",
            Self::Teacher => "profesor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id.
    pub id: i64,

    /// Given name.
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name.
    #[serde(rename = "apellido")]
    pub last_name: String,

    /// Login email.
    pub email: String,

    /// Account role.
    #[serde(rename = "tipo_usuario")]
    pub user_type: UserType,

    /// Date of birth.
    #[serde(rename = "fecha_nacimiento", default)]
    pub birth_date: Option<NaiveDateTime>,

    /// Registration timestamp (UTC).
    #[serde(rename = "fecha_registro")]
    pub registered_at: NaiveDateTime,

    /// Points accumulated across all courses.
    #[serde(rename = "puntos_totales")]
    pub total_points: i64,

    /// Current level.
    #[serde(rename = "nivel_actual")]
    pub level: i64,

    /// Whether the account is enabled.
    #[serde(rename = "activo")]
    pub active: bool,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Returns `"<first> <last>"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /auth/registro`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Given name.
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name.
    #[serde(rename = "apellido")]
    pub last_name: String,

    /// Login email.
    pub email: String,

    /// Plain-text password; hashed by the server.
    pub password: String,

    /// Account role.
    #[serde(rename = "tipo_usuario")]
    pub user_type: UserType,

    /// Date of birth.
    #[serde(
        rename = "fecha_nacimiento",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDateTime>,
}

impl NewUser {
    /// Creates a student registration.
    #[must_use]
    pub fn student(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            user_type: UserType::Student,
            birth_date: None,
        }
    }

    /// Sets the account role.
    #[must_use]
    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Sets the date of birth.
    #[must_use]
    pub fn with_birth_date(mut self, birth_date: NaiveDateTime) -> Self {
        self.birth_date = Some(birth_date);
        self
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user_type", &self.user_type)
            .field("birth_date", &self.birth_date)
            .finish()
    }
}

/// Learning statistics of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// User id.
    #[serde(rename = "usuario_id")]
    pub user_id: i64,

    /// Courses enrolled in.
    #[serde(rename = "cursos_inscritos")]
    pub courses_enrolled: i64,

    /// Courses at 100% progress.
    #[serde(rename = "cursos_completados")]
    pub courses_completed: i64,

    /// Lessons completed.
    #[serde(rename = "lecciones_completadas")]
    pub lessons_completed: i64,

    /// Exercises answered.
    #[serde(rename = "ejercicios_resueltos")]
    pub exercises_answered: i64,

    /// Exercises answered correctly.
    #[serde(rename = "ejercicios_correctos")]
    pub exercises_correct: i64,

    /// Points accumulated.
    #[serde(rename = "puntos_totales")]
    pub total_points: i64,

    /// Total study time in minutes.
    #[serde(rename = "tiempo_total_estudio")]
    pub study_minutes: i64,

    /// Consecutive study days.
    #[serde(rename = "racha_actual")]
    pub current_streak: i64,

    /// Achievements unlocked.
    #[serde(rename = "logros_obtenidos")]
    pub achievements: i64,
}

impl UserStats {
    /// Share of answered exercises that were correct, in percent.
    /// `None` before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.exercises_answered <= 0 {
            return None;
        }
        Some(self.exercises_correct as f64 / self.exercises_answered as f64 * 100.0)
    }
}
