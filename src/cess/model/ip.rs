use serde::Deserialize;

/// 出口 IP 查询响应 `{ "ip": "..." }`
#[derive(Debug, Clone, Deserialize)]
pub struct IpResponse {
    #[serde(default)]
    pub ip: Option<String>,
}
