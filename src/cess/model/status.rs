//! 账号状态响应

use serde::Deserialize;
use serde_json::Value;

/// 账号状态响应
///
/// `{ "data": { "account": { ... } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub data: StatusData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusData {
    pub account: AccountInfo,
}

/// 账号信息
///
/// `uuid` 与钱包地址是上传表单的必填项，缺失时整个响应解析失败，按状态查询失败处理
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    /// 用户名
    #[serde(default)]
    pub username: Option<String>,
    /// 用户唯一标识
    pub uuid: String,
    /// 钱包地址
    #[serde(rename = "account")]
    pub wallet: String,
    /// 积分，服务端可能返回数字或字符串
    #[serde(default)]
    pub points: Value,
}

impl StatusResponse {
    pub fn into_account(self) -> AccountInfo {
        self.data.account
    }
}

impl AccountInfo {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("-")
    }

    /// 积分展示文本
    pub fn points_text(&self) -> String {
        match &self.points {
            Value::Null => "-".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        let json = r#"{
            "code": 200,
            "data": {
                "account": {
                    "username": "alice",
                    "uuid": "9f0c1d",
                    "account": "cXf3walletaddr",
                    "points": 1250,
                    "extra": true
                }
            }
        }"#;

        let account = serde_json::from_str::<StatusResponse>(json)
            .unwrap()
            .into_account();
        assert_eq!(account.username(), "alice");
        assert_eq!(account.uuid, "9f0c1d");
        assert_eq!(account.wallet, "cXf3walletaddr");
        assert_eq!(account.points_text(), "1250");
    }

    #[test]
    fn test_parse_status_missing_optional() {
        let json = r#"{"data": {"account": {"uuid": "u", "account": "w"}}}"#;
        let account = serde_json::from_str::<StatusResponse>(json)
            .unwrap()
            .into_account();
        assert_eq!(account.username(), "-");
        assert_eq!(account.points_text(), "-");
    }

    #[test]
    fn test_parse_status_missing_identity() {
        let json = r#"{"data": {"account": {"username": "alice", "account": "w"}}}"#;
        assert!(serde_json::from_str::<StatusResponse>(json).is_err());

        let json = r#"{"data": {"account": {"username": "alice", "uuid": "u"}}}"#;
        assert!(serde_json::from_str::<StatusResponse>(json).is_err());
    }

    #[test]
    fn test_parse_status_without_account() {
        let json = r#"{"code": 401, "data": null}"#;
        assert!(serde_json::from_str::<StatusResponse>(json).is_err());
    }
}
