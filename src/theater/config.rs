//! 仿真配置
//!
//! 一次运行的全部参数；运行期间不可变。可以从（部分）JSON 文件加载，缺省字段取默认值。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::resource::ResourceKind;
use super::staffing::Staffing;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{resource} capacity must be at least 1")]
    ZeroCapacity { resource: ResourceKind },

    #[error("horizon must be a finite, non-negative number of minutes (got {horizon})")]
    InvalidHorizon { horizon: f64 },

    #[error("arrival interval must be a finite, positive number of minutes (got {interval})")]
    InvalidArrivalInterval { interval: f64 },

    #[error("{what} range is empty: [{lo}, {hi}]")]
    InvalidServiceRange { what: &'static str, lo: u32, hi: u32 },

    #[error("read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 服务时长（分钟/秒，闭区间整数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTimes {
    /// 买票时长（分钟）
    pub ticket_minutes: (u32, u32),
    /// 检票时长（秒）
    pub check_seconds: u32,
    /// 买零食时长（分钟）
    pub food_minutes: (u32, u32),
}

impl Default for ServiceTimes {
    fn default() -> Self {
        Self {
            ticket_minutes: (1, 3),
            check_seconds: 3,
            food_minutes: (1, 5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub cashier_count: u32,
    pub server_count: u32,
    pub usher_count: u32,
    pub seed: u64,
    /// 仿真截止时间（分钟）
    pub horizon: f64,
    /// 顾客到达间隔（分钟）
    pub arrival_interval: f64,
    /// t=0 时已在门口的顾客数
    pub initial_population: u64,
    pub service: ServiceTimes,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cashier_count: 1,
            server_count: 1,
            usher_count: 1,
            seed: 42,
            horizon: 90.0,
            arrival_interval: 0.20,
            initial_population: 3,
            service: ServiceTimes::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn staffing(&self) -> Staffing {
        Staffing {
            cashiers: self.cashier_count,
            servers: self.server_count,
            ushers: self.usher_count,
        }
    }

    pub fn with_staffing(mut self, staffing: Staffing) -> Self {
        self.cashier_count = staffing.cashiers;
        self.server_count = staffing.servers;
        self.usher_count = staffing.ushers;
        self
    }

    pub fn capacity(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Cashier => self.cashier_count,
            ResourceKind::Usher => self.usher_count,
            ResourceKind::Server => self.server_count,
        }
    }

    /// 运行前校验；任何一项不满足都拒绝启动。
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in ResourceKind::ALL {
            if self.capacity(kind) == 0 {
                return Err(ConfigError::ZeroCapacity { resource: kind });
            }
        }
        if !self.horizon.is_finite() || self.horizon < 0.0 {
            return Err(ConfigError::InvalidHorizon {
                horizon: self.horizon,
            });
        }
        if !self.arrival_interval.is_finite() || self.arrival_interval <= 0.0 {
            return Err(ConfigError::InvalidArrivalInterval {
                interval: self.arrival_interval,
            });
        }
        for (what, (lo, hi)) in [
            ("ticket_minutes", self.service.ticket_minutes),
            ("food_minutes", self.service.food_minutes),
        ] {
            if lo > hi {
                return Err(ConfigError::InvalidServiceRange { what, lo, hi });
            }
        }
        Ok(())
    }
}
