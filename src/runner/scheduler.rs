//! 定时重复执行
//!
//! 每轮开始时重新读取 token 文件，轮与轮之间固定间隔。
//! 不记录上次运行时间，进程重启后间隔重新计算。

use std::path::PathBuf;
use std::time::Duration;

use super::cycle::{CycleRunner, CycleSummary};
use super::settings::RunSettings;
use crate::cess::Connector;
use crate::input::load_lines;

pub struct Scheduler<C: Connector> {
    runner: CycleRunner<C>,
    settings: RunSettings,
    token_file: PathBuf,
    interval: Duration,
}

impl<C: Connector> Scheduler<C> {
    pub fn new(
        runner: CycleRunner<C>,
        settings: RunSettings,
        token_file: impl Into<PathBuf>,
        interval: Duration,
    ) -> Self {
        Self {
            runner,
            settings,
            token_file: token_file.into(),
            interval,
        }
    }

    /// 读取 token 并执行一轮
    pub async fn run_once(&self) -> CycleSummary {
        let tokens = load_lines(&self.token_file);
        let summary = self.runner.run_cycle(&tokens, &self.settings).await;
        tracing::info!(
            "本轮结束: 共 {} 个账号，完成 {}，中止 {}，异常 {}",
            summary.total,
            summary.completed,
            summary.aborted,
            summary.crashed
        );
        summary
    }

    /// 循环执行
    ///
    /// `max_cycles` 为 `None` 时永不返回；否则执行指定轮数后返回，最后一轮后不再等待
    pub async fn run(&self, max_cycles: Option<usize>) {
        let mut cycles = 0;
        loop {
            self.run_once().await;
            cycles += 1;
            if max_cycles.is_some_and(|max| cycles >= max) {
                return;
            }

            tracing::info!("本轮完成，{} 秒后开始下一轮", self.interval.as_secs());
            tokio::time::sleep(self.interval).await;
        }
    }
}
