//! 远端服务接口抽象
//!
//! 账号流程只依赖这里的 trait，便于在测试中替换为内存实现

use async_trait::async_trait;
use bytes::Bytes;

use super::model::{AccountInfo, ApiOutcome, UploadForm};
use crate::http_client::ProxyConfig;

/// 单个账号可用的远端操作
///
/// 实现方持有该账号的出口（直连或代理）
#[async_trait]
pub trait CessApi: Send + Sync {
    /// 查询账号状态
    async fn fetch_status(&self, token: &str) -> anyhow::Result<AccountInfo>;

    /// 查询出口 IP，响应中没有 ip 字段时返回 `None`
    async fn public_ip(&self) -> anyhow::Result<Option<String>>;

    /// 每日签到
    async fn checkin(&self, token: &str) -> anyhow::Result<ApiOutcome<String>>;

    /// 下载指定种子的随机图片
    async fn fetch_image(&self, seed: u32) -> anyhow::Result<Bytes>;

    /// 上传文件
    async fn upload(&self, form: UploadForm) -> anyhow::Result<ApiOutcome<()>>;
}

/// 按代理创建 [`CessApi`] 实例
pub trait Connector: Send + Sync {
    type Api: CessApi;

    fn connect(&self, proxy: Option<&ProxyConfig>) -> anyhow::Result<Self::Api>;
}
