//! HTTP client implementation.
//!
//! Provides the main HTTP client for interacting with the MatEdu REST API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use super::config::ClientConfig;
use super::error::{ClientError, GENERIC_API_ERROR};
use super::options::RequestOptions;
use crate::session::{FileTokenStore, Session, SessionState, TokenStore};
use crate::types::{
    AnswerResult, AnswerSubmission, Course, CourseFilters, CourseProgress, Exercise, Lesson,
    LessonCompletion, LoginRequest, LoginResponse, MathArea, MessageResponse, NewUser, User,
    UserStats,
};

/// HTTP client for the MatEdu REST API.
///
/// Clones share one [`Session`], so a login through any clone authenticates
/// all of them.
#[derive(Debug, Clone)]
pub struct MatEduClient {
    config: ClientConfig,
    http: reqwest::Client,
    session: Arc<Session>,
}

impl MatEduClient {
    /// Creates a new client with the given configuration, backed by a
    /// [`FileTokenStore`] at `config.token_path` or the platform default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be created, or the persisted token cannot be read.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let store = match config.token_path {
            Some(ref path) => FileTokenStore::new(path.clone()),
            None => FileTokenStore::default_location()?,
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Creates a new client whose session is backed by `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be created, or the store cannot be read.
    pub fn with_store(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Transport)?;

        let session = Session::open(store)?;
        debug!(base_url = %config.base_url, "client initialized");

        Ok(Self {
            config,
            http,
            session: Arc::new(session),
        })
    }

    /// Creates a new client from `MATEDU_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the shared session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current bearer token, if any.
    pub async fn token(&self) -> Option<String> {
        self.session.token().await
    }

    /// Returns the current session state.
    pub async fn state(&self) -> SessionState {
        self.session.state().await
    }

    /// Returns true if a token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.state().await == SessionState::Authenticated
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Performs one round trip against `endpoint`, relative to the base URL.
    ///
    /// The token is read once when the call starts; a concurrent login or
    /// logout does not affect a request already in flight. Use
    /// `T = serde_json::Value` to receive the payload without a schema.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the round trip fails,
    /// [`ClientError::MalformedResponse`] if a success body cannot be decoded
    /// into `T`, and [`ClientError::Api`] for non-success statuses.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = self.url(endpoint);
        let token = self.session.token().await;
        let headers = merge_headers(&options.headers, token.as_deref())?;

        debug!(
            method = %options.method,
            url = %url,
            authenticated = token.is_some(),
            "sending request"
        );

        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(method = %options.method, url = %url, error = %e, "API transport error");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "failed to read response body");
            ClientError::Transport(e)
        })?;

        if status.is_success() {
            return decode_payload(&body).map_err(|e| {
                error!(url = %url, error = %e, "malformed response body");
                ClientError::MalformedResponse(e.to_string())
            });
        }

        let message = error_message(&body);
        error!(
            method = %options.method,
            url = %url,
            status = status.as_u16(),
            detail = %message,
            "API error"
        );
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Makes a GET request to the given path.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(path, RequestOptions::get()).await
    }

    /// Makes a body-less POST request to the given path.
    async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(path, RequestOptions::post()).await
    }

    /// Makes a POST request with a JSON body.
    async fn post_json<T, B>(&self, path: &str, payload: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::post().with_json(payload)?)
            .await
    }

    /// Authenticates with email and password.
    ///
    /// When the response carries a non-empty `access_token`, it is persisted and then
    /// attached to every later request from this session. A failed login
    /// leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let credentials = LoginRequest::new(email, password);
        let response: LoginResponse = self.post_json("/auth/login", &credentials).await?;

        if let Some(token) = response.access_token.as_ref().filter(|t| !t.is_empty()) {
            self.session.set_token(token.clone()).await?;
            info!("session authenticated");
        }

        Ok(response)
    }

    /// Drops the session token locally and from the store. The server is not
    /// contacted. Calling this while logged out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted copy cannot be removed.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.session.clear().await?;
        info!("session cleared");
        Ok(())
    }

    /// Registers a new account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn register(&self, user: &NewUser) -> Result<User, ClientError> {
        self.post_json("/auth/registro", user).await
    }

    /// Gets the profile of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn me(&self) -> Result<User, ClientError> {
        self.get("/usuarios/me").await
    }

    /// Gets a user's learning statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user is not found.
    pub async fn user_stats(&self, user_id: i64) -> Result<UserStats, ClientError> {
        self.get(&format!("/usuarios/{}/estadisticas", user_id))
            .await
    }

    /// Lists all math areas.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn areas(&self) -> Result<Vec<MathArea>, ClientError> {
        self.get("/areas-matematicas").await
    }

    /// Lists active courses matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn courses(&self, filters: &CourseFilters) -> Result<Vec<Course>, ClientError> {
        let query = filters.to_query();
        let path = if query.is_empty() {
            "/cursos".to_string()
        } else {
            format!("/cursos?{}", query)
        };
        self.get(&path).await
    }

    /// Gets a course by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the course is not found.
    pub async fn course(&self, course_id: i64) -> Result<Course, ClientError> {
        self.get(&format!("/cursos/{}", course_id)).await
    }

    /// Enrolls the logged-in user in a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user is already enrolled.
    pub async fn enroll(&self, course_id: i64) -> Result<MessageResponse, ClientError> {
        self.post(&format!("/cursos/{}/inscribirse", course_id))
            .await
    }

    /// Lists the courses the logged-in user is enrolled in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn my_courses(&self) -> Result<Vec<Course>, ClientError> {
        self.get("/usuarios/me/cursos").await
    }

    /// Lists the lessons of a course, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the course is not found.
    pub async fn course_lessons(&self, course_id: i64) -> Result<Vec<Lesson>, ClientError> {
        self.get(&format!("/cursos/{}/lecciones", course_id)).await
    }

    /// Marks a lesson as started.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the lesson is not found.
    pub async fn start_lesson(&self, lesson_id: i64) -> Result<MessageResponse, ClientError> {
        self.post(&format!("/lecciones/{}/iniciar", lesson_id)).await
    }

    /// Marks a lesson as completed and collects its points.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the lesson is not found.
    pub async fn complete_lesson(&self, lesson_id: i64) -> Result<LessonCompletion, ClientError> {
        self.post(&format!("/lecciones/{}/completar", lesson_id))
            .await
    }

    /// Lists the exercises of a lesson, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the lesson is not found.
    pub async fn lesson_exercises(&self, lesson_id: i64) -> Result<Vec<Exercise>, ClientError> {
        self.get(&format!("/lecciones/{}/ejercicios", lesson_id))
            .await
    }

    /// Submits an answer to an exercise and returns the server's grading.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the exercise is not found.
    pub async fn submit_answer(
        &self,
        exercise_id: i64,
        answer: &str,
    ) -> Result<AnswerResult, ClientError> {
        let submission = AnswerSubmission::new(exercise_id, answer);
        self.post_json(&format!("/ejercicios/{}/responder", exercise_id), &submission)
            .await
    }

    /// Gets the logged-in user's progress in a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user is not enrolled.
    pub async fn course_progress(&self, course_id: i64) -> Result<CourseProgress, ClientError> {
        self.get(&format!("/usuarios/me/progreso/{}", course_id))
            .await
    }
}

/// Builds the outgoing header set: JSON content type, then caller overrides,
/// then the bearer token.
fn merge_headers(
    overrides: &[(String, String)],
    token: Option<&str>,
) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
        headers.insert(name, value);
    }

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ClientError::InvalidHeader(format!("authorization: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Decodes a success body. An empty body decodes as JSON `null`.
fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    if body.trim().is_empty() {
        serde_json::from_str("null")
    } else {
        serde_json::from_str(body)
    }
}

/// Extracts the server's `detail` from a failure body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(Value::Null) | Some(Value::String(_)) | None => GENERIC_API_ERROR.to_string(),
            Some(other) => other.to_string(),
        },
        _ => GENERIC_API_ERROR.to_string(),
    }
}
