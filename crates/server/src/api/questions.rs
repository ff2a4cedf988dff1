//! 题目 API 路由：列表、创建、删除与文本搜索。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::{delete, get, post},
};
use tracing::{debug, info};
use trivia_api_types::{
    CreateQuestionRequest, MessageResponse, NumberOrString, QuestionListResponse,
    QuestionsPageResponse, SearchQuestionsRequest,
};
use trivia_core::domain::{
    CategoryRef, Difficulty, DomainError, NewQuestion, QuestionFilter, QuestionId,
};

use super::body::JsonBody;
use super::error::{ApiError, method_not_allowed};
use super::format::{category_map, paginate};
use super::state::AppState;
use super::{PageQuery, path_id};

/// 创建题目 API 路由。
pub fn create_questions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(list_questions)
                .post(create_question)
                .fallback(method_not_allowed),
        )
        // 静态路径优先于 `{question_id}` 匹配。
        .route(
            "/questions/stringsearch",
            post(search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/{question_id}",
            delete(delete_question).fallback(method_not_allowed),
        )
}

/// 分页列出全部题目，同时附带分类映射。
async fn list_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionsPageResponse>, ApiError> {
    let page = PageQuery::page(query);
    debug!(page = page.number(), "listing questions");

    let questions = state.questions.find_all().await?;
    let categories = state.categories.find_all().await?;
    let (questions, total_questions) = paginate(page, questions);

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
        categories: category_map(categories),
    }))
}

/// 创建题目。`question` 与 `answer` 必须非空，难度与分类原样保存。
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<CreateQuestionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let difficulty = request.difficulty.as_ref().map(parse_difficulty);
    let category = request
        .category
        .as_ref()
        .map(|category| CategoryRef::new(category.to_text()));

    // 先校验必填字段，再处理难度。
    let mut new_question = NewQuestion::new(request.question, request.answer, None, category)?;
    new_question.difficulty = difficulty.transpose()?;

    let created = state.questions.create(new_question).await?;
    info!(question_id = %created.id, "question created");

    Ok(Json(MessageResponse::ok("Question was created")))
}

fn parse_difficulty(value: &NumberOrString) -> Result<Difficulty, DomainError> {
    match value {
        NumberOrString::Number(number) => Difficulty::try_from(*number),
        NumberOrString::Text(text) => text.parse(),
    }
}

/// 删除题目，不存在时返回 416。
async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(raw_id) = question_id?;
    let Some(question_id) = path_id(&raw_id)?.map(QuestionId::new) else {
        debug!(%raw_id, "question id is out of range");
        return Err(ApiError::OutOfRange);
    };

    if state.questions.find_by_id(question_id).await?.is_none() {
        debug!(%question_id, "question to delete does not exist");
        return Err(ApiError::OutOfRange);
    }

    if !state.questions.delete(question_id).await? {
        return Err(ApiError::OutOfRange);
    }

    info!(%question_id, "question deleted");
    Ok(Json(MessageResponse::ok("Question was deleted")))
}

/// 按题干做不区分大小写的子串搜索，缺省搜索词匹配全部题目。
async fn search_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    JsonBody(request): JsonBody<SearchQuestionsRequest>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = PageQuery::page(query);
    let term = request.search_term.unwrap_or_default();
    debug!(%term, page = page.number(), "searching questions");

    let questions = state
        .questions
        .find_where(QuestionFilter::new().question_contains(term))
        .await?;
    let (questions, total_questions) = paginate(page, questions);

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
    }))
}
