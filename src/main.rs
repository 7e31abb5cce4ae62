mod cess;
mod http_client;
mod input;
mod model;
mod prompt;
mod runner;
mod transport;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cess::ProviderConnector;
use model::arg::Args;
use model::config::Config;
use runner::{AccountProcessor, CycleRunner, RunSettings, Scheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)?;
    config.override_from_env();

    tracing::info!("CESS 每日签到与文件上传");

    let use_proxy = match args.proxy.as_deref() {
        Some(answer) => prompt::is_yes(answer),
        None => prompt::ask_use_proxy()?,
    };
    let proxies = if use_proxy {
        input::load_lines(&config.proxy_file)
    } else {
        Vec::new()
    };
    let settings = RunSettings::new(use_proxy, proxies);
    if settings.use_proxy() {
        tracing::info!("已加载 {} 个代理", settings.proxy_count());
    }

    let runner = CycleRunner::new(
        ProviderConnector::new(config.clone()),
        AccountProcessor::from_config(&config),
    );
    let scheduler = Scheduler::new(
        runner,
        settings,
        config.token_file.clone(),
        Duration::from_secs(config.cycle_interval_secs),
    );

    scheduler.run(args.once.then_some(1)).await;
    Ok(())
}
