//! Client behaviour against a live in-process backend.
//!
//! Each test starts an axum server on a random port that answers with canned
//! MatEdu payloads and records every request it receives, then drives a
//! `MatEduClient` against it over real HTTP.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use matedu_sdk::{
    ClientConfig, ClientError, CourseFilters, DifficultyLevel, FileTokenStore, MatEduClient,
    MemoryTokenStore, NewUser, RequestOptions, SessionState, TokenStore,
};
use serde_json::{json, Value};
use tempfile::TempDir;

const PREFIX: &str = "/api/v1";
const GOOD_TOKEN: &str = "T-ana";

/// One request as seen by the backend.
#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    uri: String,
    authorization: Option<String>,
    content_type: Option<String>,
    headers: HeaderMap,
    body: String,
}

#[derive(Clone, Default)]
struct Backend {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Backend {
    fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn last(&self) -> Seen {
        self.requests().pop().expect("no request reached the backend")
    }
}

fn user_json() -> Value {
    json!({
        "id": 3,
        "nombre": "Ana",
        "apellido": "Gómez",
        "email": "ana@edumath.com",
        "tipo_usuario": "estudiante",
        "fecha_nacimiento": null,
        "fecha_registro": "2024-03-01T10:15:30",
        "puntos_totales": 120,
        "nivel_actual": 2,
        "activo": true,
        "avatar_url": null
    })
}

fn courses_json() -> Value {
    json!([
        {
            "id": 1,
            "titulo": "Álgebra Básica",
            "descripcion": "Fundamentos del álgebra",
            "objetivos": null,
            "nivel_dificultad": "basico",
            "duracion_estimada": 20,
            "area_matematica_id": 2,
            "fecha_creacion": "2024-01-10T08:00:00",
            "activo": true,
            "imagen_portada": null,
            "area_matematica": null,
            "profesor": null
        },
        {
            "id": 2,
            "titulo": "Geometría Plana",
            "descripcion": null,
            "objetivos": "Áreas y perímetros",
            "nivel_dificultad": "basico",
            "duracion_estimada": null,
            "area_matematica_id": 3,
            "fecha_creacion": "2024-01-12T08:00:00",
            "activo": true,
            "imagen_portada": null,
            "area_matematica": null,
            "profesor": null
        }
    ])
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (status, axum::Json(body)).into_response()
}

fn detail(status: StatusCode, message: &str) -> Response {
    json_response(status, json!({ "detail": message }))
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let authorization = header_text(header::AUTHORIZATION);
    backend.seen.lock().unwrap().push(Seen {
        method: method.clone(),
        uri: uri.to_string(),
        authorization: authorization.clone(),
        content_type: header_text(header::CONTENT_TYPE),
        headers: headers.clone(),
        body: body.clone(),
    });

    let expected = format!("Bearer {}", GOOD_TOKEN);
    let authenticated = authorization.as_deref() == Some(expected.as_str());
    let path = uri.path().strip_prefix(PREFIX).unwrap_or_default();

    match (method, path) {
        (Method::POST, "/auth/login") => {
            let credentials: Value = serde_json::from_str(&body).unwrap_or_default();
            if credentials["email"] == "ana@edumath.com" && credentials["password"] == "secreto" {
                json_response(
                    StatusCode::OK,
                    json!({ "access_token": GOOD_TOKEN, "token_type": "bearer" }),
                )
            } else if credentials["email"] == "vacio@token.com" {
                json_response(
                    StatusCode::OK,
                    json!({ "access_token": "", "token_type": "bearer" }),
                )
            } else if credentials["email"] == "sin@token.com" {
                json_response(StatusCode::OK, json!({ "status": "pending" }))
            } else {
                detail(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
        }
        (Method::POST, "/auth/registro") => json_response(StatusCode::CREATED, user_json()),
        (Method::GET, "/usuarios/me") if authenticated => json_response(StatusCode::OK, user_json()),
        (Method::GET, "/usuarios/me") => detail(
            StatusCode::UNAUTHORIZED,
            "No se pudieron validar las credenciales",
        ),
        (Method::GET, "/usuarios/3/estadisticas") => json_response(
            StatusCode::OK,
            json!({
                "usuario_id": 3,
                "cursos_inscritos": 2,
                "cursos_completados": 0,
                "lecciones_completadas": 1,
                "ejercicios_resueltos": 4,
                "ejercicios_correctos": 3,
                "puntos_totales": 120,
                "tiempo_total_estudio": 45,
                "racha_actual": 0,
                "logros_obtenidos": 0
            }),
        ),
        (Method::GET, "/areas-matematicas") => json_response(
            StatusCode::OK,
            json!([{ "id": 2, "nombre": "Álgebra", "orden": 1 }]),
        ),
        (Method::GET, "/cursos") => json_response(StatusCode::OK, courses_json()),
        (Method::GET, "/cursos/1") => json_response(StatusCode::OK, courses_json()[0].clone()),
        (Method::GET, "/cursos/99") => detail(StatusCode::NOT_FOUND, "Curso no encontrado"),
        (Method::POST, "/cursos/1/inscribirse") => {
            json_response(StatusCode::CREATED, json!({ "message": "Inscripción exitosa" }))
        }
        (Method::POST, "/cursos/2/inscribirse") => {
            detail(StatusCode::BAD_REQUEST, "Ya estás inscrito en este curso")
        }
        (Method::GET, "/usuarios/me/cursos") => json_response(StatusCode::OK, courses_json()),
        (Method::GET, "/cursos/1/lecciones") => json_response(
            StatusCode::OK,
            json!([{
                "id": 11,
                "titulo": "Variables y expresiones",
                "puntos_otorgados": 10,
                "orden": 1,
                "activa": true,
                "curso_id": 1
            }]),
        ),
        (Method::POST, "/lecciones/11/iniciar") => {
            json_response(StatusCode::OK, json!({ "message": "Lección iniciada" }))
        }
        (Method::POST, "/lecciones/11/completar") => json_response(
            StatusCode::OK,
            json!({ "message": "Lección completada", "puntos_obtenidos": 10 }),
        ),
        (Method::GET, "/lecciones/11/ejercicios") => json_response(
            StatusCode::OK,
            json!([{
                "id": 5,
                "titulo": "Coeficientes",
                "enunciado": "¿Cuál es el coeficiente de 3x + 7?",
                "tipo_ejercicio": "opcion_multiple",
                "nivel_dificultad": "basico",
                "puntos_otorgados": 5,
                "respuesta_correcta": "3",
                "orden": 1,
                "activo": true,
                "leccion_id": 11,
                "opciones_json": "[\"3\", \"x\", \"7\", \"+\"]"
            }]),
        ),
        (Method::POST, "/ejercicios/5/responder") => {
            let submission: Value = serde_json::from_str(&body).unwrap_or_default();
            let correct = submission["respuesta_usuario"] == "3";
            json_response(
                StatusCode::OK,
                json!({
                    "id": 40,
                    "respuesta_usuario": submission["respuesta_usuario"],
                    "es_correcta": correct,
                    "puntos_obtenidos": if correct { 5 } else { 0 },
                    "tiempo_respuesta": null,
                    "fecha_respuesta": "2024-03-02T09:00:00",
                    "ejercicio_id": 5
                }),
            )
        }
        (Method::GET, "/usuarios/me/progreso/1") => json_response(
            StatusCode::OK,
            json!({
                "curso_id": 1,
                "progreso_porcentaje": 100.0,
                "lecciones_totales": 1,
                "lecciones_completadas": 1,
                "puntos_obtenidos": 10,
                "progreso_lecciones": [{ "id": 9, "leccion_id": 11, "estado": "completado" }]
            }),
        ),
        (Method::GET, "/hola") => {
            json_response(StatusCode::OK, json!({ "mensaje": "¡Hola! Esta es una ruta de prueba" }))
        }
        (Method::GET, "/broken") => (StatusCode::OK, "<html>oops</html>").into_response(),
        (Method::DELETE, "/empty") => (StatusCode::NO_CONTENT, Body::empty()).into_response(),
        (Method::GET, "/crash") => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
        (Method::GET, "/validation") => json_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "detail": [{ "loc": ["query", "nivel"], "msg": "invalid" }] }),
        ),
        _ => detail(StatusCode::NOT_FOUND, "Not Found"),
    }
}

async fn spawn_backend() -> (SocketAddr, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .fallback(handle)
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    (addr, backend)
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, PREFIX)
}

fn memory_client(addr: SocketAddr, store: MemoryTokenStore) -> MatEduClient {
    MatEduClient::with_store(ClientConfig::new(base_url(addr)), Arc::new(store))
        .expect("client creation")
}

fn file_client(addr: SocketAddr, dir: &TempDir) -> MatEduClient {
    let config = ClientConfig::new(base_url(addr)).with_token_path(dir.path().join("session.json"));
    MatEduClient::new(config).expect("client creation")
}

// --- authorization header ---

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    client.areas().await.unwrap();
    client.courses(&CourseFilters::new()).await.unwrap();
    let _ = client.me().await;

    let seen = backend.requests();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|s| s.authorization.is_none()));
}

#[tokio::test]
async fn authenticated_requests_carry_exact_bearer_token() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::with_token(GOOD_TOKEN));

    let me = client.me().await.unwrap();
    assert_eq!(me.email, "ana@edumath.com");
    client.course_lessons(1).await.unwrap();

    for seen in backend.requests() {
        assert_eq!(seen.authorization.as_deref(), Some("Bearer T-ana"));
    }
}

#[tokio::test]
async fn requests_default_to_json_content_type() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    client.areas().await.unwrap();

    assert_eq!(
        backend.last().content_type.as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn header_overrides_are_merged() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::with_token(GOOD_TOKEN));

    let options = RequestOptions::get()
        .with_header("Content-Type", "text/plain")
        .with_header("X-Request-Id", "abc-123");
    let _: Value = client.request("/hola", options).await.unwrap();

    let seen = backend.last();
    assert_eq!(seen.content_type.as_deref(), Some("text/plain"));
    assert_eq!(seen.headers.get("x-request-id").unwrap(), "abc-123");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer T-ana"));
}

// --- login / logout lifecycle ---

#[tokio::test]
async fn login_authenticates_and_persists_token() {
    let (addr, backend) = spawn_backend().await;
    let dir = TempDir::new().unwrap();
    let client = file_client(addr, &dir);
    assert_eq!(client.state().await, SessionState::Anonymous);

    let response = client.login("ana@edumath.com", "secreto").await.unwrap();

    assert_eq!(response.access_token.as_deref(), Some(GOOD_TOKEN));
    assert_eq!(response.token_type.as_deref(), Some("bearer"));
    assert_eq!(client.state().await, SessionState::Authenticated);
    assert_eq!(client.token().await.as_deref(), Some(GOOD_TOKEN));

    let store = FileTokenStore::new(dir.path().join("session.json"));
    assert_eq!(store.load().unwrap().as_deref(), Some(GOOD_TOKEN));

    let login = backend.last();
    assert_eq!(login.method, Method::POST);
    assert_eq!(login.uri, "/api/v1/auth/login");
    assert!(login.authorization.is_none());
    let body: Value = serde_json::from_str(&login.body).unwrap();
    assert_eq!(body, json!({ "email": "ana@edumath.com", "password": "secreto" }));

    client.me().await.unwrap();
    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer T-ana"));
}

#[tokio::test]
async fn persisted_login_survives_a_new_client() {
    let (addr, backend) = spawn_backend().await;
    let dir = TempDir::new().unwrap();

    file_client(addr, &dir)
        .login("ana@edumath.com", "secreto")
        .await
        .unwrap();

    let restarted = file_client(addr, &dir);
    assert!(restarted.is_authenticated().await);
    restarted.me().await.unwrap();
    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer T-ana"));
}

#[tokio::test]
async fn login_without_token_leaves_session_unchanged() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let response = client.login("sin@token.com", "x").await.unwrap();

    assert!(response.access_token.is_none());
    assert_eq!(response.extra["status"], "pending");
    assert_eq!(client.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn login_with_empty_token_stays_anonymous() {
    let (addr, backend) = spawn_backend().await;
    let dir = TempDir::new().unwrap();
    let client = file_client(addr, &dir);

    let response = client.login("vacio@token.com", "x").await.unwrap();

    assert_eq!(response.access_token.as_deref(), Some(""));
    assert_eq!(client.state().await, SessionState::Anonymous);
    assert!(!dir.path().join("session.json").exists());

    client.areas().await.unwrap();
    assert!(backend.last().authorization.is_none());
}

#[tokio::test]
async fn corrupt_session_file_does_not_block_the_client() {
    let (addr, backend) = spawn_backend().await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{\"access_token\": \"T").unwrap();

    let client = file_client(addr, &dir);
    assert_eq!(client.state().await, SessionState::Anonymous);
    client.areas().await.unwrap();
    assert!(backend.last().authorization.is_none());

    client.logout().await.unwrap();
    assert!(!path.exists());

    std::fs::write(&path, "{\"access_token\": \"T").unwrap();
    file_client(addr, &dir)
        .login("ana@edumath.com", "secreto")
        .await
        .unwrap();
    let store = FileTokenStore::new(&path);
    assert_eq!(store.load().unwrap().as_deref(), Some(GOOD_TOKEN));
}

#[tokio::test]
async fn failed_login_reports_detail_and_keeps_token() {
    let (addr, _backend) = spawn_backend().await;

    let anonymous = memory_client(addr, MemoryTokenStore::default());
    let err = anonymous.login("x@x.com", "bad").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Api { status: 401, ref message } if message == "Invalid credentials"
    ));
    assert!(anonymous.token().await.is_none());

    let authenticated = memory_client(addr, MemoryTokenStore::with_token("previous"));
    let err = authenticated.login("x@x.com", "bad").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(authenticated.token().await.as_deref(), Some("previous"));
}

#[tokio::test]
async fn logout_clears_memory_and_store() {
    let (addr, backend) = spawn_backend().await;
    let dir = TempDir::new().unwrap();
    let client = file_client(addr, &dir);
    client.login("ana@edumath.com", "secreto").await.unwrap();
    let requests_before = backend.requests().len();

    client.logout().await.unwrap();

    assert_eq!(client.state().await, SessionState::Anonymous);
    let store = FileTokenStore::new(dir.path().join("session.json"));
    assert!(store.load().unwrap().is_none());
    assert_eq!(backend.requests().len(), requests_before);

    client.areas().await.unwrap();
    assert!(backend.last().authorization.is_none());
}

#[tokio::test]
async fn logout_is_idempotent() {
    let (addr, _backend) = spawn_backend().await;
    let dir = TempDir::new().unwrap();
    let client = file_client(addr, &dir);
    client.login("ana@edumath.com", "secreto").await.unwrap();

    client.logout().await.unwrap();
    client.logout().await.unwrap();

    assert_eq!(client.state().await, SessionState::Anonymous);
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn register_does_not_touch_session() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let user = client
        .register(&NewUser::student("Ana", "Gómez", "ana@edumath.com", "secreto"))
        .await
        .unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(client.state().await, SessionState::Anonymous);
    let body: Value = serde_json::from_str(&backend.last().body).unwrap();
    assert_eq!(body["nombre"], "Ana");
    assert_eq!(body["tipo_usuario"], "estudiante");
}

// --- endpoint wrappers ---

#[tokio::test]
async fn courses_with_level_filter_builds_query() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let filters = CourseFilters::new().with_level(DifficultyLevel::Basic);
    let courses = client.courses(&filters).await.unwrap();

    let seen = backend.last();
    assert_eq!(seen.method, Method::GET);
    assert_eq!(seen.uri, "/api/v1/cursos?nivel=basico");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].title, "Álgebra Básica");
    assert_eq!(courses[1].objectives.as_deref(), Some("Áreas y perímetros"));
}

#[tokio::test]
async fn pass_through_returns_payload_unmodified() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let payload: Value = client
        .request("/cursos?nivel=basico", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(payload, courses_json());
}

#[tokio::test]
async fn courses_without_filters_has_no_query() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    client.courses(&CourseFilters::new()).await.unwrap();

    assert_eq!(backend.last().uri, "/api/v1/cursos");
}

#[tokio::test]
async fn endpoint_paths_and_methods() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::with_token(GOOD_TOKEN));

    let stats = client.user_stats(3).await.unwrap();
    assert_eq!(stats.exercises_correct, 3);
    let areas = client.areas().await.unwrap();
    assert_eq!(areas[0].name, "Álgebra");
    let course = client.course(1).await.unwrap();
    assert_eq!(course.id, 1);
    let enrolled = client.enroll(1).await.unwrap();
    assert_eq!(enrolled.message, "Inscripción exitosa");
    assert_eq!(client.my_courses().await.unwrap().len(), 2);
    let lessons = client.course_lessons(1).await.unwrap();
    assert_eq!(lessons[0].id, 11);
    assert_eq!(client.start_lesson(11).await.unwrap().message, "Lección iniciada");
    assert_eq!(client.complete_lesson(11).await.unwrap().points_earned, Some(10));
    let exercises = client.lesson_exercises(11).await.unwrap();
    assert_eq!(exercises[0].options().unwrap().len(), 4);
    let progress = client.course_progress(1).await.unwrap();
    assert!(progress.is_complete());

    let calls: Vec<(Method, String)> = backend
        .requests()
        .into_iter()
        .map(|s| (s.method, s.uri))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Method::GET, "/api/v1/usuarios/3/estadisticas".to_string()),
            (Method::GET, "/api/v1/areas-matematicas".to_string()),
            (Method::GET, "/api/v1/cursos/1".to_string()),
            (Method::POST, "/api/v1/cursos/1/inscribirse".to_string()),
            (Method::GET, "/api/v1/usuarios/me/cursos".to_string()),
            (Method::GET, "/api/v1/cursos/1/lecciones".to_string()),
            (Method::POST, "/api/v1/lecciones/11/iniciar".to_string()),
            (Method::POST, "/api/v1/lecciones/11/completar".to_string()),
            (Method::GET, "/api/v1/lecciones/11/ejercicios".to_string()),
            (Method::GET, "/api/v1/usuarios/me/progreso/1".to_string()),
        ]
    );
}

#[tokio::test]
async fn submit_answer_sends_exercise_and_answer() {
    let (addr, backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::with_token(GOOD_TOKEN));

    let graded = client.submit_answer(5, "3").await.unwrap();
    assert!(graded.correct);
    assert_eq!(graded.points_earned, 5);

    let seen = backend.last();
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.uri, "/api/v1/ejercicios/5/responder");
    let body: Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body, json!({ "ejercicio_id": 5, "respuesta_usuario": "3" }));

    let wrong = client.submit_answer(5, "7").await.unwrap();
    assert!(!wrong.correct);
    assert_eq!(wrong.points_earned, 0);
}

// --- failures ---

#[tokio::test]
async fn not_found_carries_server_detail() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let err = client.course(99).await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API error (404): Curso no encontrado");
}

#[tokio::test]
async fn duplicate_enrollment_is_an_api_error() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::with_token(GOOD_TOKEN));

    let err = client.enroll(2).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Api { status: 400, ref message } if message == "Ya estás inscrito en este curso"
    ));
}

#[tokio::test]
async fn failure_without_detail_uses_generic_message() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let err = client
        .request::<Value>("/crash", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Api { status: 500, ref message } if message == "API error"
    ));
}

#[tokio::test]
async fn structured_detail_is_rendered_as_json() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let err = client
        .request::<Value>("/validation", RequestOptions::get())
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 422);
            assert!(message.contains("invalid"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_error() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let err = client
        .request::<Value>("/broken", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn empty_success_body_decodes_as_null() {
    let (addr, _backend) = spawn_backend().await;
    let client = memory_client(addr, MemoryTokenStore::default());

    let payload: Value = client
        .request("/empty", RequestOptions::get().with_method(Method::DELETE))
        .await
        .unwrap();

    assert_eq!(payload, Value::Null);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = memory_client(addr, MemoryTokenStore::with_token(GOOD_TOKEN));

    let err = client.areas().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_transport());
    assert!(client.is_authenticated().await);
}
