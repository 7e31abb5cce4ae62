//! HTTP 传输层
//!
//! 只支持 GET / POST，网络错误与非 2xx 响应按 [`RetryPolicy`] 重试，
//! 尝试次数用尽后返回最后一次的错误。

pub mod error;
pub mod retry;

pub use error::{TransportError, TransportResult};
pub use retry::{retry_with_backoff, RetryPolicy};

use http::Method;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};

/// 发送请求，失败时按策略退避重试
///
/// # Arguments
/// * `method` - 仅 GET / POST，其他方法立即失败且不重试
/// * `payload` - POST 的 JSON 请求体，GET 时忽略
/// * `headers` - 每次尝试都会附带的请求头
pub async fn request_with_retry(
    client: &Client,
    method: &Method,
    url: &str,
    payload: Option<&serde_json::Value>,
    headers: &HeaderMap,
    policy: &RetryPolicy,
) -> TransportResult<Response> {
    if method != Method::GET && method != Method::POST {
        return Err(TransportError::UnsupportedMethod(method.clone()));
    }

    retry_with_backoff(policy, |attempt| {
        send_once(client, method, url, payload, headers, attempt)
    })
    .await
}

/// 单次发送，非 2xx 视为失败
async fn send_once(
    client: &Client,
    method: &Method,
    url: &str,
    payload: Option<&serde_json::Value>,
    headers: &HeaderMap,
    attempt: u32,
) -> TransportResult<Response> {
    tracing::debug!("{} {} (第 {} 次)", method, url, attempt);

    let mut builder = client.request(method.clone(), url).headers(headers.clone());
    if method == Method::POST {
        if let Some(body) = payload {
            builder = builder.json(body);
        }
    }

    let response = builder.send().await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(TransportError::Status { status, body });
    }

    Ok(response)
}
