//! 仿真时间类型
//!
//! 定义仿真时间及其单位转换。

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

/// 仿真时间（分钟，实数）。
///
/// 只允许有限值参与排序；`Ord` 基于 `f64::total_cmp`，保证在堆里有全序。
/// `-0.0` 与 `0.0` 视为同一时刻。
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    pub fn from_minutes(m: f64) -> SimTime {
        SimTime(m)
    }

    /// 秒换算成分钟：`s / 60`
    pub fn from_seconds(s: f64) -> SimTime {
        SimTime(s / 60.0)
    }

    pub fn as_minutes(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        // `-0.0 + 0.0 == +0.0`，其余值不变
        (self.0 + 0.0).total_cmp(&(other.0 + 0.0))
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for SimTime {
    type Output = SimTime;

    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl Sub for SimTime {
    type Output = SimTime;

    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 - rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}min", self.0)
    }
}
