//! Request and response schemas for the MatEdu API.
//!
//! Wire field names follow the server (`nombre`, `nivel_dificultad`, ...);
//! Rust field names are their English equivalents.

pub mod auth;
pub mod common;
pub mod course;
pub mod exercise;
pub mod lesson;
pub mod progress;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use common::MessageResponse;
pub use course::{Course, CourseFilters, DifficultyLevel, MathArea};
pub use exercise::{AnswerResult, AnswerSubmission, Exercise, ExerciseType};
pub use lesson::{Lesson, LessonCompletion};
pub use progress::{CourseProgress, LessonProgress, ProgressState};
pub use user::{NewUser, User, UserStats, UserType};
