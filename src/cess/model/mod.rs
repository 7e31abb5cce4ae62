//! CESS 数据模型
//!
//! 包含远端服务的响应类型与上传表单：
//! - `outcome`: 业务层成功/失败结果
//! - `status`: 账号状态
//! - `checkin`: 每日签到
//! - `upload`: 文件上传
//! - `ip`: 出口 IP 查询

pub mod checkin;
pub mod ip;
pub mod outcome;
pub mod status;
pub mod upload;

pub use checkin::CheckinResponse;
pub use ip::IpResponse;
pub use outcome::ApiOutcome;
pub use status::{AccountInfo, StatusResponse};
pub use upload::{UploadForm, UploadResponse};
