#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;
use trivia_core::domain::{CategoryRef, Difficulty, NewQuestion, QuestionFilter, QuestionId};
use trivia_migration::{Migrator, MigratorTrait};
use trivia_server::repository::{
    QuestionRecord, QuestionRepository, SeaOrmCategoryRepository, SeaOrmQuestionRepository,
};
use trivia_server::{AppState, create_router};

pub const FIXTURE_QUESTIONS: [(&str, &str, i32, &str); 13] = [
    (
        "What is the heaviest organ in the human body?",
        "The Liver",
        4,
        "1",
    ),
    ("Who discovered penicillin?", "Alexander Fleming", 3, "1"),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        4,
        "1",
    ),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        1,
        "2",
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, "2"),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, "3"),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        "3",
    ),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        2,
        "4",
    ),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, "4"),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, "4"),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        "5",
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        3,
        "6",
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        4,
        "6",
    ),
];

/// Fresh in-memory SQLite store with the real migrations applied. A single
/// pooled connection keeps every query on the same in-memory database.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

pub async fn seed_questions(db: &DatabaseConnection) -> Vec<QuestionRecord> {
    let repository = SeaOrmQuestionRepository::new(db.clone());
    let mut records = Vec::with_capacity(FIXTURE_QUESTIONS.len());

    for (question, answer, difficulty, category) in FIXTURE_QUESTIONS {
        let new_question = NewQuestion::new(
            Some(question.to_string()),
            Some(answer.to_string()),
            Some(Difficulty::new(difficulty)),
            Some(CategoryRef::new(category)),
        )
        .expect("fixture question is valid");

        records.push(
            repository
                .create(new_question)
                .await
                .expect("insert fixture question"),
        );
    }

    records
}

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub questions: Vec<QuestionRecord>,
}

pub async fn seeded_app() -> TestApp {
    let db = memory_db().await;
    let questions = seed_questions(&db).await;

    TestApp {
        router: create_router(AppState::new(db.clone())),
        db,
        questions,
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    dispatch(router, request).await
}

pub async fn send_raw(
    router: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("build request");

    dispatch(router, request).await
}

async fn dispatch(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read response body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };

    (status, body)
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}

/// Question store whose writes always fail, for exercising the 500 path.
#[derive(Clone, Default)]
pub struct FailingQuestionRepository;

#[async_trait]
impl QuestionRepository for FailingQuestionRepository {
    async fn create(&self, _new_question: NewQuestion) -> Result<QuestionRecord> {
        Err(anyhow!("disk I/O error"))
    }

    async fn delete(&self, _question_id: QuestionId) -> Result<bool> {
        Err(anyhow!("disk I/O error"))
    }

    async fn find_by_id(&self, _question_id: QuestionId) -> Result<Option<QuestionRecord>> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>> {
        Ok(Vec::new())
    }

    async fn find_where(&self, _filter: QuestionFilter) -> Result<Vec<QuestionRecord>> {
        Ok(Vec::new())
    }
}

pub async fn failing_app() -> Router {
    let db = memory_db().await;
    let state = AppState::with_repositories(
        Arc::new(SeaOrmCategoryRepository::new(db)),
        Arc::new(FailingQuestionRepository),
    );
    create_router(state)
}
