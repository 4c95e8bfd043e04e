use serde::{Deserialize, Serialize};

use crate::theater::ResourceKind;

/// 追踪事件类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEventKind {
    /// 顾客到达（记录到达时间）
    Arrived,
    /// 资源已满，进入等待队列（`waiting` 含自己）
    Queued { resource: ResourceKind, waiting: usize },
    /// 拿到资源（立即获得，或由前一位归还时交接）
    Acquired { resource: ResourceKind, in_use: u32 },
    /// 归还资源；`in_use` 是交接给下一位之后的占用数
    Released { resource: ResourceKind, in_use: u32 },
    /// 检票后决定是否买零食
    FoodDecision { buys_food: bool },
    /// 入座，`wait_min` 即该顾客的等待样本
    Seated { wait_min: f64 },
}

/// 一条追踪事件（JSON）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// 仿真时间（分钟，和 `SimTime.0` 同口径）
    pub t_min: f64,
    pub customer: u64,
    #[serde(flatten)]
    pub kind: TraceEventKind,
}

/// 一个简单的事件收集器（存内存，仿真结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct TraceLogger {
    pub events: Vec<TraceEvent>,
}

impl TraceLogger {
    pub fn push(&mut self, ev: TraceEvent) {
        self.events.push(ev);
    }

    /// 某位顾客的全部事件（按发生顺序）
    pub fn for_customer(&self, customer: u64) -> impl Iterator<Item = &TraceEvent> {
        self.events.iter().filter(move |e| e.customer == customer)
    }
}
