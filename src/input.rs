//! 输入文件读取
//!
//! token 与代理文件都是每行一项，首尾空白会被去掉，空行忽略

use std::fs;
use std::path::Path;

/// 按行读取文件
///
/// 文件不存在或无法读取时记录错误并返回空列表
pub fn load_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => parse_lines(&content),
        Err(e) => {
            tracing::error!("读取 {} 失败: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// 解析每行一项的文本
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
