use clap::Parser;

/// CESS 每日签到与文件上传客户端
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 是否使用代理 (y/n)，不指定时启动后询问
    #[arg(long)]
    pub proxy: Option<String>,

    /// 只执行一轮后退出
    #[arg(long)]
    pub once: bool,
}
