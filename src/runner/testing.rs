//! 测试用的内存实现

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

use crate::cess::model::{AccountInfo, ApiOutcome, UploadForm};
use crate::cess::{CessApi, Connector};
use crate::http_client::ProxyConfig;

/// 调用记录
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// 内存版 [`CessApi`]
///
/// token 以 `bad` 开头时状态查询失败，以 `panic` 开头时直接 panic
pub struct FakeApi {
    pub log: CallLog,
    pub ip: Result<Option<String>, String>,
    pub checkin: Result<ApiOutcome<String>, String>,
    /// 返回错误的上传序号（从 1 开始）
    pub failing_uploads: Vec<usize>,
    /// 返回业务失败的上传序号（从 1 开始）
    pub rejected_uploads: Vec<usize>,
    pub fail_final_status: bool,
    status_calls: AtomicUsize,
    upload_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ip: Ok(Some("203.0.113.7".to_string())),
            checkin: Ok(ApiOutcome::Success("10".to_string())),
            failing_uploads: Vec::new(),
            rejected_uploads: Vec::new(),
            fail_final_status: false,
            status_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
        }
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.lock().unwrap().push(entry.into());
    }
}

#[async_trait]
impl CessApi for FakeApi {
    async fn fetch_status(&self, token: &str) -> anyhow::Result<AccountInfo> {
        self.record(format!("status:{}", token));
        if token.starts_with("panic") {
            panic!("unexpected payload for {}", token);
        }
        if token.starts_with("bad") {
            anyhow::bail!("HTTP 状态异常: 401 Unauthorized");
        }

        let n = self.status_calls.fetch_add(1, Ordering::SeqCst);
        if n > 0 && self.fail_final_status {
            anyhow::bail!("请求失败: timeout");
        }

        Ok(AccountInfo {
            username: Some(format!("user-{}", token)),
            uuid: format!("uuid-{}", token),
            wallet: format!("wallet-{}", token),
            points: json!(100 * (n + 1)),
        })
    }

    async fn public_ip(&self) -> anyhow::Result<Option<String>> {
        self.record("ip");
        self.ip.clone().map_err(|e| anyhow::anyhow!(e))
    }

    async fn checkin(&self, token: &str) -> anyhow::Result<ApiOutcome<String>> {
        self.record(format!("checkin:{}", token));
        self.checkin.clone().map_err(|e| anyhow::anyhow!(e))
    }

    async fn fetch_image(&self, seed: u32) -> anyhow::Result<Bytes> {
        assert!(seed < 100_000);
        self.record("image");
        Ok(Bytes::from_static(b"\x89PNG\r\n"))
    }

    async fn upload(&self, form: UploadForm) -> anyhow::Result<ApiOutcome<()>> {
        let n = self.upload_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.record(format!("upload:{}:{}", n, form.user_uuid));
        if self.failing_uploads.contains(&n) {
            anyhow::bail!("connection reset");
        }
        if self.rejected_uploads.contains(&n) {
            return Ok(ApiOutcome::Failure("file too large".to_string()));
        }
        Ok(ApiOutcome::Success(()))
    }
}

/// 内存版 [`Connector`]，记录每次分配到的代理
pub struct FakeConnector {
    pub log: CallLog,
    pub proxies: Arc<Mutex<Vec<Option<String>>>>,
    /// 代理地址包含该片段时连接失败
    pub refuse_proxy: Option<String>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            proxies: Arc::default(),
            refuse_proxy: None,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn assigned_proxies(&self) -> Vec<Option<String>> {
        self.proxies.lock().unwrap().clone()
    }
}

impl Connector for FakeConnector {
    type Api = FakeApi;

    fn connect(&self, proxy: Option<&ProxyConfig>) -> anyhow::Result<FakeApi> {
        let url = proxy.map(|p| p.url.clone());
        self.proxies.lock().unwrap().push(url.clone());

        if let (Some(url), Some(refuse)) = (&url, &self.refuse_proxy) {
            if url.contains(refuse.as_str()) {
                anyhow::bail!("无法创建代理客户端: {}", url);
            }
        }

        Ok(FakeApi::new(self.log.clone()))
    }
}
