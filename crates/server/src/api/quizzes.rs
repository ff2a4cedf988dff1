//! 测验 API 路由。

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use tracing::debug;
use trivia_api_types::{QuestionDto, QuizRequest, QuizResponse};
use trivia_core::domain::{CategoryRef, QuestionFilter, QuestionId, pick_random};

use super::body::JsonBody;
use super::error::{ApiError, method_not_allowed};
use super::state::AppState;

/// 创建测验 API 路由。
pub fn create_quizzes_router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/quizzes",
        post(next_quiz_question).fallback(method_not_allowed),
    )
}

/// 从未答过的题目中随机抽取一道。
///
/// 候选池为空时响应不含 `question` 字段，表示测验结束。
async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {

    let previous = request
        .previous_questions
        .iter()
        .flatten()
        .copied()
        .map(QuestionId::new);
    let mut filter = QuestionFilter::new().excluding(previous);
    if let Some(category) = request.category_filter() {
        filter = filter.in_category(CategoryRef::new(category));
    }

    let pool = state.questions.find_where(filter).await?;
    debug!(candidates = pool.len(), "quiz pool loaded");

    let question = pick_random(pool, &mut rand::thread_rng()).map(QuestionDto::from);

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
