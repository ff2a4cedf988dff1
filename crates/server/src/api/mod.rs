//! API 路由模块。
//!
//! 汇总分类、题目与测验路由，并统一挂载 CORS 与请求追踪。

mod body;
pub mod categories;
pub mod error;
mod format;
pub mod questions;
pub mod quizzes;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, rejection::QueryRejection},
    http::{Method, header},
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use trivia_core::domain::Page;

pub use categories::create_categories_router;
pub use error::ApiError;
pub use questions::create_questions_router;
pub use quizzes::create_quizzes_router;
pub use state::AppState;

/// 组装完整的 HTTP 路由。
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_categories_router())
        .merge(create_questions_router())
        .merge(create_quizzes_router())
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(Arc::new(state))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// 分页查询参数。
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    /// 页码，非整数时按第一页处理。
    page: Option<String>,
}

impl PageQuery {
    fn page(query: Result<Query<PageQuery>, QueryRejection>) -> Page {
        let query = query.map(|Query(query)| query).unwrap_or_default();
        Page::parse_or_first(query.page.as_deref())
    }
}

/// 解析路径中的 id，只接受十进制数字。
///
/// 超出 `i32` 范围的 id 合法但不可能存在，返回 `None`。
fn path_id(raw: &str) -> Result<Option<i32>, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }

    Ok(raw.parse().ok())
}
