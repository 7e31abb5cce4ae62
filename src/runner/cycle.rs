//! 整轮遍历
//!
//! 按文件顺序逐个处理账号，账号之间互不影响

use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use super::account::AccountProcessor;
use super::settings::RunSettings;
use crate::cess::Connector;
use crate::http_client::ProxyConfig;

/// 一轮的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub total: usize,
    /// 完整执行了所有步骤
    pub completed: usize,
    /// 状态查询失败而中止
    pub aborted: usize,
    /// 无法创建客户端或处理时意外崩溃
    pub crashed: usize,
}

/// 整轮遍历
pub struct CycleRunner<C: Connector> {
    connector: C,
    processor: AccountProcessor,
}

impl<C: Connector> CycleRunner<C> {
    pub fn new(connector: C, processor: AccountProcessor) -> Self {
        Self {
            connector,
            processor,
        }
    }

    #[cfg(test)]
    pub(crate) fn connector(&self) -> &C {
        &self.connector
    }

    /// 处理全部账号一次
    ///
    /// 开启代理时第 i 个账号使用 `proxies[i % proxies.len()]`
    pub async fn run_cycle(&self, tokens: &[String], settings: &RunSettings) -> CycleSummary {
        let mut summary = CycleSummary {
            total: tokens.len(),
            ..Default::default()
        };

        if tokens.is_empty() {
            tracing::error!("token 列表为空，跳过本轮");
            return summary;
        }

        for (index, token) in tokens.iter().enumerate() {
            let label = format!("[{}/{}]", index + 1, tokens.len());
            tracing::info!("{} 开始处理账号", label);

            let proxy = settings.proxy_for(index).and_then(ProxyConfig::from_url);
            let api = match self.connector.connect(proxy.as_ref()) {
                Ok(api) => api,
                Err(e) => {
                    tracing::error!("{} 创建客户端失败: {:#}", label, e);
                    summary.crashed += 1;
                    continue;
                }
            };

            let result = AssertUnwindSafe(self.processor.process(&api, token, &label))
                .catch_unwind()
                .await;

            match result {
                Ok(report) if report.aborted => summary.aborted += 1,
                Ok(_) => summary.completed += 1,
                Err(_) => {
                    tracing::error!("{} 账号处理异常，继续下一个账号", label);
                    summary.crashed += 1;
                }
            }
        }

        summary
    }
}
