//! 每日签到响应

use serde::Deserialize;
use serde_json::Value;

use super::outcome::{value_text, ApiOutcome};

/// 签到成功的业务码
pub const CHECKIN_SUCCESS_CODE: i64 = 200;

/// 签到响应 `{ "code": 200, "data": <奖励或失败原因> }`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub data: Value,
}

impl CheckinResponse {
    /// 从响应体解码签到结果，成功时携带奖励文本
    ///
    /// 以响应体中的业务码为准，不看 HTTP 状态码
    pub fn decode(body: &str) -> ApiOutcome<String> {
        match serde_json::from_str::<Self>(body) {
            Ok(resp) => resp.into_outcome(),
            Err(_) => ApiOutcome::invalid(),
        }
    }

    pub fn into_outcome(self) -> ApiOutcome<String> {
        if self.code == Some(CHECKIN_SUCCESS_CODE) {
            let reward = match &self.data {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            ApiOutcome::Success(reward)
        } else {
            ApiOutcome::failure_or_invalid(value_text(&self.data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let outcome = CheckinResponse::decode(r#"{"code":200,"msg":"ok","data":15}"#);
        assert_eq!(outcome, ApiOutcome::Success("15".to_string()));
    }

    #[test]
    fn test_decode_business_failure() {
        let outcome = CheckinResponse::decode(r#"{"code":400,"data":"already checked in today"}"#);
        assert_eq!(
            outcome,
            ApiOutcome::Failure("already checked in today".to_string())
        );
    }

    #[test]
    fn test_decode_failure_without_reason() {
        let outcome = CheckinResponse::decode(r#"{"code":500,"data":null}"#);
        assert_eq!(outcome, ApiOutcome::invalid());
    }

    #[test]
    fn test_decode_not_json() {
        assert_eq!(CheckinResponse::decode("<html>gateway</html>"), ApiOutcome::invalid());
    }
}
