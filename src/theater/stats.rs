//! 等待时间统计
//!
//! 每个顾客入座时记录一次（按完成顺序），只增不删。

use std::fmt;

use serde::Serialize;

use super::error::TheaterError;
use crate::sim::SimTime;

/// 一个顾客从到达到入座的总耗时
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitSample {
    pub customer: u64,
    pub seated_at: SimTime,
    /// 分钟
    pub wait: f64,
}

/// 平均等待时间（整数分钟 + 四舍六入五成双的秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaitSummary {
    pub minutes: u64,
    pub seconds: u64,
}

impl WaitSummary {
    pub fn from_mean(mean: f64) -> Self {
        let minutes = mean.floor();
        let seconds = ((mean - minutes) * 60.0).round_ties_even();
        Self {
            minutes: minutes as u64,
            seconds: seconds as u64,
        }
    }
}

impl fmt::Display for WaitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes and {} seconds", self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WaitStats {
    samples: Vec<WaitSample>,
}

impl WaitStats {
    pub fn record(&mut self, sample: WaitSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[WaitSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total: f64 = self.samples.iter().map(|s| s.wait).sum();
        Some(total / self.samples.len() as f64)
    }

    pub fn summarize(&self) -> Result<WaitSummary, TheaterError> {
        self.mean()
            .map(WaitSummary::from_mean)
            .ok_or(TheaterError::NoCompletedJourneys)
    }
}
