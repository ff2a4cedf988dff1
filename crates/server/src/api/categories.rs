//! 分类 API 路由。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};
use tracing::debug;
use trivia_api_types::{CategoriesResponse, QuestionListResponse};
use trivia_core::domain::{CategoryId, CategoryRef, QuestionFilter};

use super::error::{ApiError, method_not_allowed};
use super::format::{category_map, paginate};
use super::state::AppState;
use super::{PageQuery, path_id};

/// 创建分类 API 路由。
pub fn create_categories_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/categories",
            get(list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/{category_id}/questions",
            get(list_category_questions).fallback(method_not_allowed),
        )
}

/// 列出全部分类。
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories.find_all().await?;
    let total_categories = categories.len();

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
        total_categories,
    }))
}

/// 分页列出某一分类下的题目。
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Path(raw_id) = category_id?;
    let page = PageQuery::page(query);
    debug!(%raw_id, page = page.number(), "listing questions by category");

    // 超出范围的分类 id 不可能存在，直接返回空列表。
    let questions = match path_id(&raw_id)? {
        Some(category_id) => {
            let category = CategoryRef::from(CategoryId::new(category_id));
            state
                .questions
                .find_where(QuestionFilter::new().in_category(category))
                .await?
        }
        None => Vec::new(),
    };
    let (questions, total_questions) = paginate(page, questions);

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
    }))
}
