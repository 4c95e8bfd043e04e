//! 运行入口的错误类型

use thiserror::Error;

use super::config::ConfigError;
use crate::sim::SimError;

#[derive(Debug, Error)]
pub enum TheaterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sim(#[from] SimError),

    /// 截止时间前没有任何顾客入座，平均值无意义。
    #[error("no journey completed before the horizon; average wait is undefined")]
    NoCompletedJourneys,
}
