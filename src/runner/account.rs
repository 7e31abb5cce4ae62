//! 单账号流程
//!
//! 顺序执行：查询状态 → 输出身份与出口 IP → 签到 → 循环上传 → 查询最终积分。
//! 只有状态查询失败会中止本账号，其余步骤失败只记录日志。

use std::time::Duration;

use crate::cess::model::{AccountInfo, ApiOutcome, UploadForm};
use crate::cess::CessApi;
use crate::model::config::Config;

/// 出口 IP 查询响应中没有 ip 字段
pub const IP_NOT_FOUND: &str = "IP not found";

/// 出口 IP 查询失败
pub const IP_ERROR: &str = "Error fetching IP";

/// 图片种子上限（不含）
const IMAGE_SEED_LIMIT: u32 = 100_000;

/// 单账号处理结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountReport {
    /// 状态查询失败，后续步骤未执行
    pub aborted: bool,
    pub ip: Option<String>,
    pub checked_in: bool,
    pub uploads_attempted: u32,
    pub uploads_succeeded: u32,
    /// 最终积分
    pub points: Option<String>,
}

/// 单账号流程
#[derive(Debug, Clone)]
pub struct AccountProcessor {
    upload_rounds: u32,
    upload_pause: Duration,
}

impl AccountProcessor {
    pub fn new(upload_rounds: u32, upload_pause: Duration) -> Self {
        Self {
            upload_rounds,
            upload_pause,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.upload_rounds,
            Duration::from_secs(config.upload_pause_secs),
        )
    }

    /// 处理一个账号
    ///
    /// 所有步骤的错误都在这里转为日志，不会向外返回
    pub async fn process<A: CessApi + ?Sized>(
        &self,
        api: &A,
        token: &str,
        label: &str,
    ) -> AccountReport {
        let mut report = AccountReport::default();

        let account = match api.fetch_status(token).await {
            Ok(account) => {
                tracing::info!("{} 账号状态获取成功", label);
                account
            }
            Err(e) => {
                tracing::error!("{} 获取账号状态失败: {:#}", label, e);
                report.aborted = true;
                return report;
            }
        };

        tracing::info!("{} 用户名: {}", label, account.username());
        tracing::info!("{} UUID  : {}", label, account.uuid);
        tracing::info!("{} 钱包  : {}", label, account.wallet);

        let ip = probe_ip(api).await;
        tracing::info!("{} 出口 IP: {}", label, ip);
        report.ip = Some(ip);

        report.checked_in = self.checkin(api, token, label).await;

        for round in 1..=self.upload_rounds {
            report.uploads_attempted += 1;
            match upload_once(api, &account).await {
                Ok(ApiOutcome::Success(())) => {
                    report.uploads_succeeded += 1;
                    tracing::info!("{} 图片 {}/{} 上传成功", label, round, self.upload_rounds);
                }
                Ok(ApiOutcome::Failure(reason)) => {
                    tracing::warn!(
                        "{} 图片 {}/{} 上传失败: {}",
                        label,
                        round,
                        self.upload_rounds,
                        reason
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "{} 图片 {}/{} 上传失败: {:#}",
                        label,
                        round,
                        self.upload_rounds,
                        e
                    );
                }
            }
            tokio::time::sleep(self.upload_pause).await;
        }

        match api.fetch_status(token).await {
            Ok(account) => {
                let points = account.points_text();
                tracing::info!("{} 总积分: {}", label, points);
                report.points = Some(points);
            }
            Err(e) => tracing::error!("{} 获取积分失败: {:#}", label, e),
        }

        report
    }

    async fn checkin<A: CessApi + ?Sized>(&self, api: &A, token: &str, label: &str) -> bool {
        match api.checkin(token).await {
            Ok(ApiOutcome::Success(reward)) => {
                tracing::info!("{} 签到成功，奖励: {}", label, reward);
                true
            }
            Ok(ApiOutcome::Failure(reason)) => {
                tracing::warn!("{} 签到失败: {}", label, reason);
                false
            }
            Err(e) => {
                tracing::error!("{} 签到失败: {:#}", label, e);
                false
            }
        }
    }
}

/// 查询出口 IP，失败不影响后续步骤
async fn probe_ip<A: CessApi + ?Sized>(api: &A) -> String {
    match api.public_ip().await {
        Ok(Some(ip)) => ip,
        Ok(None) => IP_NOT_FOUND.to_string(),
        Err(e) => {
            tracing::debug!("出口 IP 查询失败: {:#}", e);
            IP_ERROR.to_string()
        }
    }
}

/// 下载一张随机图片并上传
async fn upload_once<A: CessApi + ?Sized>(
    api: &A,
    account: &AccountInfo,
) -> anyhow::Result<ApiOutcome<()>> {
    let seed = fastrand::u32(..IMAGE_SEED_LIMIT);
    let image = api.fetch_image(seed).await?;
    let form = UploadForm::new(image, seed, account);
    api.upload(form).await
}
