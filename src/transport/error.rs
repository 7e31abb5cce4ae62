//! 传输层错误定义

use thiserror::Error;

/// 传输层错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 只支持 GET / POST，不重试
    #[error("不支持的请求方法: {0}")]
    UnsupportedMethod(http::Method),

    /// 连接、超时、DNS 等网络错误
    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 非 2xx 响应
    #[error("HTTP 状态异常: {status} {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type TransportResult<T> = Result<T, TransportError>;
