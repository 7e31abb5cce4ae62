use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::transport::retry::{
    RetryPolicy, DEFAULT_BACKOFF_FACTOR, DEFAULT_INITIAL_BACKOFF_MS, DEFAULT_MAX_ATTEMPTS,
};

/// 应用配置
///
/// 所有字段都有默认值，没有配置文件时按默认值运行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// 账号状态接口
    #[serde(default = "default_status_url")]
    pub status_url: String,

    /// 签到接口
    #[serde(default = "default_checkin_url")]
    pub checkin_url: String,

    /// 上传接口
    #[serde(default = "default_upload_url")]
    pub upload_url: String,

    /// 出口 IP 查询接口
    #[serde(default = "default_ip_echo_url")]
    pub ip_echo_url: String,

    /// 随机图片来源，`{seed}` 会被替换为随机种子
    #[serde(default = "default_image_url")]
    pub image_url: String,

    /// Origin / Referer 使用的站点地址
    #[serde(default = "default_origin")]
    pub origin: String,

    /// 单次请求超时（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// 每个请求的最大尝试次数
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// 首次重试前的等待时间（毫秒）
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// 退避倍率
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    /// 每个账号每轮上传次数
    #[serde(default = "default_upload_rounds")]
    pub upload_rounds: u32,

    /// 两次上传之间的间隔（秒）
    #[serde(default = "default_upload_pause_secs")]
    pub upload_pause_secs: u64,

    /// 两轮之间的间隔（秒）
    #[serde(default = "default_cycle_interval_secs")]
    pub cycle_interval_secs: u64,

    /// token 文件，每行一个
    #[serde(default = "default_token_file")]
    pub token_file: String,

    /// 代理文件，每行一个
    #[serde(default = "default_proxy_file")]
    pub proxy_file: String,
}

impl Config {
    /// 从环境变量覆盖配置
    pub fn override_from_env(&mut self) {
        if let Ok(path) = env::var("TOKEN_FILE") {
            self.token_file = path;
        }
        if let Ok(path) = env::var("PROXY_FILE") {
            self.proxy_file = path;
        }
        if let Ok(secs) = env::var("CYCLE_INTERVAL_SECS") {
            if let Ok(s) = secs.parse() {
                self.cycle_interval_secs = s;
            }
        }
        if let Ok(secs) = env::var("REQUEST_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                self.request_timeout_secs = s;
            }
        }
    }

    /// 请求重试策略
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.initial_backoff_ms, self.backoff_factor)
    }

    /// 指定种子的图片地址
    pub fn image_url_for(&self, seed: u32) -> String {
        self.image_url.replace("{seed}", &seed.to_string())
    }

    /// Referer 头，站点地址加结尾斜杠
    pub fn referer(&self) -> String {
        format!("{}/", self.origin.trim_end_matches('/'))
    }
}

fn default_status_url() -> String {
    "https://merklev2.cess.network/merkle/task/status".to_string()
}

fn default_checkin_url() -> String {
    "https://merklev2.cess.network/merkle/task/checkin".to_string()
}

fn default_upload_url() -> String {
    "https://filepool.cess.network/group1/upload".to_string()
}

fn default_ip_echo_url() -> String {
    "https://api.ipify.org?format=json".to_string()
}

fn default_image_url() -> String {
    "https://picsum.photos/seed/{seed}/500/500".to_string()
}

fn default_origin() -> String {
    "https://cess.network".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_initial_backoff_ms() -> u64 {
    DEFAULT_INITIAL_BACKOFF_MS
}

fn default_backoff_factor() -> f64 {
    DEFAULT_BACKOFF_FACTOR
}

fn default_upload_rounds() -> u32 {
    3
}

fn default_upload_pause_secs() -> u64 {
    1
}

fn default_cycle_interval_secs() -> u64 {
    24 * 60 * 60
}

fn default_token_file() -> String {
    "token.txt".to_string()
}

fn default_proxy_file() -> String {
    "proxy.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_url: default_status_url(),
            checkin_url: default_checkin_url(),
            upload_url: default_upload_url(),
            ip_echo_url: default_ip_echo_url(),
            image_url: default_image_url(),
            origin: default_origin(),
            request_timeout_secs: default_request_timeout_secs(),
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            backoff_factor: default_backoff_factor(),
            upload_rounds: default_upload_rounds(),
            upload_pause_secs: default_upload_pause_secs(),
            cycle_interval_secs: default_cycle_interval_secs(),
            token_file: default_token_file(),
            proxy_file: default_proxy_file(),
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
