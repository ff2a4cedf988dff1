//! JSON 请求体提取。

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::ApiError;

/// 强类型 JSON 请求体。
///
/// 缺失、无法解析或为空值（`null`、`false`、`0`、`""`、`[]`、`{}`）的请求体
/// 视为 MissingBody；结构不符的请求体视为 InvalidEntity。
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        if is_blank(&value) {
            return Err(ApiError::MissingBody);
        }

        serde_json::from_value(value).map(JsonBody).map_err(|err| {
            warn!(error = %err, "request body has an unexpected shape");
            ApiError::InvalidEntity
        })
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::is_blank;
    use serde_json::json;

    #[test]
    fn empty_values_are_blank() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_blank(&value), "{value} should be blank");
        }
    }

    #[test]
    fn populated_values_are_not_blank() {
        for value in [json!({ "searchTerm": null }), json!([1]), json!("x"), json!(2)] {
            assert!(!is_blank(&value), "{value} should not be blank");
        }
    }
}
