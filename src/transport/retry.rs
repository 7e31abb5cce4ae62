//! 重试与退避
//!
//! 失败后等待 `initial_backoff`，之后每次重试前等待时间乘以 `factor`，不加抖动。

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// 默认最大尝试次数
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// 默认首次退避时间（毫秒）
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 2000;

/// 默认退避倍率
pub const DEFAULT_BACKOFF_FACTOR: f64 = 1.5;

/// 重试策略
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// 总尝试次数（含首次）
    pub max_attempts: u32,
    /// 首次重试前的等待时间
    pub initial_backoff: Duration,
    /// 每次重试后的等待倍率
    pub factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(DEFAULT_INITIAL_BACKOFF_MS),
            factor: DEFAULT_BACKOFF_FACTOR,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff_ms: u64, factor: f64) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::from_millis(initial_backoff_ms),
            factor,
        }
    }

    /// 第 `retry` 次重试（从 1 开始）之前的等待时间
    ///
    /// `initial_backoff * factor^(retry - 1)`
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        let exp = retry.saturating_sub(1) as i32;
        let millis = self.initial_backoff.as_millis() as f64 * self.factor.powi(exp);
        Duration::from_millis(millis.round() as u64)
    }

    /// 至少尝试一次
    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// 按策略执行 `op`，直到成功或尝试次数用尽
///
/// `op` 接收当前尝试序号（从 1 开始）。用尽后返回最后一次的错误。
pub async fn retry_with_backoff<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let attempts = policy.attempts();
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                let delay = policy.delay_before_retry(attempt);
                tracing::debug!(
                    "第 {}/{} 次尝试失败: {}，{}ms 后重试",
                    attempt,
                    attempts,
                    e,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
