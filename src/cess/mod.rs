//! CESS 远端服务
//!
//! - `api`: 账号流程依赖的接口抽象
//! - `provider`: 基于 reqwest 的实现
//! - `model`: 请求与响应类型

pub mod api;
pub mod model;
pub mod provider;

pub use api::{CessApi, Connector};
pub use provider::ProviderConnector;
