//! 运行设置

/// 本次运行的代理设置
///
/// 启动时确定，之后只读，作为参数传给每一轮
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    use_proxy: bool,
    proxies: Vec<String>,
}

impl RunSettings {
    /// 选择使用代理但列表为空时，退回直连
    pub fn new(use_proxy: bool, proxies: Vec<String>) -> Self {
        if use_proxy && proxies.is_empty() {
            tracing::warn!("代理列表为空，本次运行不使用代理");
            return Self::direct();
        }
        if !use_proxy {
            return Self::direct();
        }

        Self { use_proxy, proxies }
    }

    /// 不使用代理
    pub fn direct() -> Self {
        Self::default()
    }

    pub fn use_proxy(&self) -> bool {
        self.use_proxy
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    /// 第 `index` 个账号使用的代理，按账号序号轮询
    pub fn proxy_for(&self, index: usize) -> Option<&str> {
        if !self.use_proxy || self.proxies.is_empty() {
            return None;
        }
        Some(self.proxies[index % self.proxies.len()].as_str())
    }
}
