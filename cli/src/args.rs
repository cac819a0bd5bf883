//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use matedu_sdk::{CourseFilters, DifficultyLevel, UserType};

#[derive(Debug, Parser)]
#[command(name = "matedu", version, about = "MatEdu math-learning API client")]
pub struct Cli {
    /// API base URL including the /api/v1 prefix [env: MATEDU_API_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session file holding the access token [env: MATEDU_TOKEN_FILE]
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and persist the access token
    Login(LoginArgs),
    /// Forget the stored access token
    Logout,
    /// Create a new account
    Register(RegisterArgs),
    /// Show the logged-in user's profile
    Me,
    /// Show a user's learning statistics
    Stats {
        /// User id
        user_id: i64,
    },
    /// List math areas
    Areas,
    /// List courses
    Courses(CoursesArgs),
    /// Show one course
    Course {
        /// Course id
        course_id: i64,
    },
    /// Enroll in a course
    Enroll {
        /// Course id
        course_id: i64,
    },
    /// List the courses you are enrolled in
    MyCourses,
    /// List the lessons of a course
    Lessons {
        /// Course id
        course_id: i64,
    },
    /// Mark a lesson as started
    StartLesson {
        /// Lesson id
        lesson_id: i64,
    },
    /// Mark a lesson as completed
    CompleteLesson {
        /// Lesson id
        lesson_id: i64,
    },
    /// List the exercises of a lesson
    Exercises {
        /// Lesson id
        lesson_id: i64,
    },
    /// Submit an answer to an exercise
    Answer {
        /// Exercise id
        exercise_id: i64,
        /// Your answer
        answer: String,
    },
    /// Show your progress in a course
    Progress {
        /// Course id
        course_id: i64,
    },
    /// Show whether a token is stored
    Status,
}

#[derive(Debug, Parser)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "MATEDU_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Parser)]
pub struct RegisterArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "MATEDU_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Account role
    #[arg(long, value_enum, default_value = "student")]
    pub role: Role,
}

#[derive(Debug, Parser)]
pub struct CoursesArgs {
    /// Only courses of this math area
    #[arg(long)]
    pub area: Option<i64>,

    /// Only courses of this difficulty
    #[arg(long, value_enum)]
    pub level: Option<Level>,

    /// Number of courses to skip
    #[arg(long)]
    pub skip: Option<u32>,

    /// Maximum number of courses
    #[arg(long)]
    pub limit: Option<u32>,
}

impl CoursesArgs {
    pub fn filters(&self) -> CourseFilters {
        CourseFilters {
            area_id: self.area,
            level: self.level.map(DifficultyLevel::from),
            skip: self.skip,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl From<Level> for DifficultyLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Basic => Self::Basic,
            Level::Intermediate => Self::Intermediate,
            Level::Advanced => Self::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl From<Role> for UserType {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Teacher => Self::Teacher,
            Role::Admin => Self::Admin,
        }
    }
}
