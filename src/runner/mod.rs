//! 账号流程调度
//!
//! 提供单账号流程、整轮遍历和定时重复执行

pub mod account;
pub mod cycle;
pub mod scheduler;
pub mod settings;

pub use account::AccountProcessor;
pub use cycle::CycleRunner;
pub use scheduler::Scheduler;
pub use settings::RunSettings;

#[cfg(test)]
pub(crate) mod testing;
