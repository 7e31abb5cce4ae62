//! 业务层结果
//!
//! 远端服务把成功与否写在 HTTP 200 的响应体里，这里统一解码为
//! [`ApiOutcome`]，与传输层错误分开处理。

use serde_json::Value;

/// 响应体无法识别时的失败原因
pub const INVALID_RESPONSE: &str = "Invalid response";

/// 业务层结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// 成功
    Success(T),
    /// 失败，附带原因
    Failure(String),
}

impl<T> ApiOutcome<T> {
    /// 响应体无法识别
    pub fn invalid() -> Self {
        Self::Failure(INVALID_RESPONSE.to_string())
    }

    /// 以 `reason` 失败，`reason` 为空时使用默认原因
    pub(crate) fn failure_or_invalid(reason: Option<String>) -> Self {
        Self::Failure(reason.unwrap_or_else(|| INVALID_RESPONSE.to_string()))
    }
}

/// 将 JSON 值转为展示文本
///
/// null、false、0、空字符串视为无值
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
