//! CESS API Provider
//!
//! 负责与 CESS 服务通信，状态、签到、IP 查询走带重试的传输层，
//! 图片下载与上传只尝试一次

use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;

use super::api::{CessApi, Connector};
use super::model::{
    AccountInfo, ApiOutcome, CheckinResponse, IpResponse, StatusResponse, UploadForm,
    UploadResponse,
};
use crate::http_client::{build_client, ProxyConfig};
use crate::model::config::Config;
use crate::transport::{request_with_retry, RetryPolicy};

/// 随机选用的浏览器 User-Agent
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/105.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Firefox/102.0",
];

/// 认证 token 所在的请求头
const TOKEN_HEADER: &str = "token";

fn random_user_agent() -> &'static str {
    USER_AGENTS[fastrand::usize(..USER_AGENTS.len())]
}

/// CESS API Provider
pub struct CessProvider {
    /// 账号出口，按需走代理
    client: Client,
    /// 直连，用于下载图片
    direct: Client,
    config: Config,
    policy: RetryPolicy,
}

impl CessProvider {
    /// 创建 Provider，`proxy` 为空时直连
    pub fn new(config: Config, proxy: Option<&ProxyConfig>) -> anyhow::Result<Self> {
        let client = build_client(proxy, config.request_timeout_secs)?;
        let direct = build_client(None, config.request_timeout_secs)?;
        let policy = config.retry_policy();

        Ok(Self {
            client,
            direct,
            config,
            policy,
        })
    }

    /// 构建请求头
    ///
    /// multipart 请求不设置 Content-Type，由 reqwest 填入 boundary
    fn build_headers(
        token: Option<&str>,
        multipart: bool,
        config: &Config,
    ) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        if !multipart {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers.insert(ORIGIN, HeaderValue::from_str(&config.origin)?);
        headers.insert(REFERER, HeaderValue::from_str(&config.referer())?);

        if let Some(token) = token {
            headers.insert(TOKEN_HEADER, HeaderValue::from_str(token)?);
        }

        Ok(headers)
    }
}

#[async_trait]
impl CessApi for CessProvider {
    async fn fetch_status(&self, token: &str) -> anyhow::Result<AccountInfo> {
        let headers = Self::build_headers(Some(token), false, &self.config)?;
        let response = request_with_retry(
            &self.client,
            &Method::GET,
            &self.config.status_url,
            None,
            &headers,
            &self.policy,
        )
        .await?;

        let status: StatusResponse = response.json().await?;
        Ok(status.into_account())
    }

    async fn public_ip(&self) -> anyhow::Result<Option<String>> {
        let headers = Self::build_headers(None, false, &self.config)?;
        let response = request_with_retry(
            &self.client,
            &Method::GET,
            &self.config.ip_echo_url,
            None,
            &headers,
            &self.policy,
        )
        .await?;

        let ip: IpResponse = response.json().await?;
        Ok(ip.ip)
    }

    async fn checkin(&self, token: &str) -> anyhow::Result<ApiOutcome<String>> {
        let headers = Self::build_headers(Some(token), false, &self.config)?;
        let body = serde_json::json!({});
        let response = request_with_retry(
            &self.client,
            &Method::POST,
            &self.config.checkin_url,
            Some(&body),
            &headers,
            &self.policy,
        )
        .await?;

        let text = response.text().await?;
        Ok(CheckinResponse::decode(&text))
    }

    async fn fetch_image(&self, seed: u32) -> anyhow::Result<Bytes> {
        let url = self.config.image_url_for(seed);
        tracing::debug!("下载图片: {}", url);

        let image = self
            .direct
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(image)
    }

    async fn upload(&self, form: UploadForm) -> anyhow::Result<ApiOutcome<()>> {
        let headers = Self::build_headers(None, true, &self.config)?;
        tracing::debug!("上传文件: {} ({} 字节)", form.filename, form.file.len());

        let response = self
            .client
            .post(&self.config.upload_url)
            .headers(headers)
            .multipart(form.into_multipart()?)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        Ok(UploadResponse::decode(&text))
    }
}

/// 为每个账号按代理创建 [`CessProvider`]
#[derive(Debug, Clone)]
pub struct ProviderConnector {
    config: Config,
}

impl ProviderConnector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Connector for ProviderConnector {
    type Api = CessProvider;

    fn connect(&self, proxy: Option<&ProxyConfig>) -> anyhow::Result<CessProvider> {
        CessProvider::new(self.config.clone(), proxy)
    }
}
