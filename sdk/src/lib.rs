//! MatEdu SDK - Rust client library for the MatEdu math-learning API.
//!
//! This crate wraps the MatEdu REST API: a generic authenticated request
//! helper, a persisted bearer-token session, and typed schemas for the
//! platform's users, courses, lessons, exercises and progress.
//!
//! # Modules
//!
//! - [`client`] — [`MatEduClient`], its configuration and error types
//! - [`session`] — the shared credential holder and token stores
//! - [`types`] — request and response schemas
//!
//! # Example
//!
//! ```rust,ignore
//! use matedu_sdk::{ClientConfig, CourseFilters, DifficultyLevel, MatEduClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MatEduClient::new(ClientConfig::from_env())?;
//!
//!     client.login("juan@estudiante.com", "estudiante123").await?;
//!
//!     let filters = CourseFilters::new().with_level(DifficultyLevel::Basic);
//!     for course in client.courses(&filters).await? {
//!         println!("{} - {}", course.id, course.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod session;
pub mod types;

pub use client::{ClientConfig, ClientError, MatEduClient, RequestOptions};
pub use session::{
    FileTokenStore, MemoryTokenStore, Session, SessionState, StoreError, TokenStore,
};
pub use types::{
    AnswerResult, AnswerSubmission, Course, CourseFilters, CourseProgress, DifficultyLevel,
    Exercise, ExerciseType, Lesson, LessonCompletion, LessonProgress, LoginRequest,
    LoginResponse, MathArea, MessageResponse, NewUser, ProgressState, User, UserStats, UserType,
};
