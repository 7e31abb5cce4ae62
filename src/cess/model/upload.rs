//! 文件上传表单与响应

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;

use super::outcome::{value_text, ApiOutcome};
use super::status::AccountInfo;

/// 上传成功的状态值
pub const UPLOAD_SUCCESS_STATUS: &str = "ok";

/// 上传表单
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// 图片内容
    pub file: Bytes,
    /// 生成的文件名 `image_{毫秒时间戳}_{种子}.png`
    pub filename: String,
    pub user_uuid: String,
    pub user_wallet: String,
}

impl UploadForm {
    /// 用图片内容和账号信息构建上传表单
    pub fn new(file: Bytes, seed: u32, account: &AccountInfo) -> Self {
        Self {
            file,
            filename: generate_filename(chrono::Utc::now().timestamp_millis(), seed),
            user_uuid: account.uuid.clone(),
            user_wallet: account.wallet.clone(),
        }
    }

    /// 转为 multipart 表单
    pub fn into_multipart(self) -> anyhow::Result<Form> {
        let part = Part::bytes(self.file.to_vec())
            .file_name(self.filename.clone())
            .mime_str("image/png")?;

        Ok(Form::new()
            .part("file", part)
            .text("user_uuid", self.user_uuid)
            .text("output", "json2")
            .text("filename", self.filename)
            .text("user_wallet", self.user_wallet))
    }
}

/// 上传文件名
pub fn generate_filename(timestamp_millis: i64, seed: u32) -> String {
    format!("image_{}_{}.png", timestamp_millis, seed)
}

/// 上传响应 `{ "status": "ok", ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// 服务端可能返回非字符串的 status
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub message: Value,
}

impl UploadResponse {
    /// 从响应体解码上传结果
    pub fn decode(body: &str) -> ApiOutcome<()> {
        match serde_json::from_str::<Self>(body) {
            Ok(resp) => resp.into_outcome(),
            Err(_) => ApiOutcome::invalid(),
        }
    }

    pub fn into_outcome(self) -> ApiOutcome<()> {
        if self.status.as_str() == Some(UPLOAD_SUCCESS_STATUS) {
            ApiOutcome::Success(())
        } else {
            ApiOutcome::failure_or_invalid(value_text(&self.message))
        }
    }
}
