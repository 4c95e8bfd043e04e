//! 有限容量资源（收银台 / 检票员 / 小卖部）
//!
//! 容量满时请求按到达顺序排队（FIFO），不区分优先级，也没有等待超时。

use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use crate::sim::SimError;

/// 剧院里的三类资源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Cashier,
    Usher,
    Server,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Cashier, ResourceKind::Usher, ResourceKind::Server];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Cashier => "cashier",
            ResourceKind::Usher => "usher",
            ResourceKind::Server => "server",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 占用凭证。只能由 `Resource` 发出，`release` 时按值交回，因此同一个令牌不能归还两次。
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceToken {
    kind: ResourceKind,
    serial: u64,
}

impl ResourceToken {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// `acquire` 的结果：立即拿到令牌，或者进入等待队列（等待者由资源保管）。
#[derive(Debug)]
pub enum Acquire<W> {
    Granted(W, ResourceToken),
    Queued,
}

/// 资源统计（运行结束时的快照）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceStats {
    pub capacity: u32,
    /// 累计发放的令牌数
    pub grants: u64,
    pub peak_in_use: u32,
    pub peak_waiting: usize,
    /// 仿真停止时仍被占用的数量
    pub in_use: u32,
    /// 仿真停止时仍在排队的数量
    pub waiting: usize,
}

/// 有限容量、FIFO 排队的共享资源。`W` 是排队者（通常是被挂起的顾客流程）。
#[derive(Debug)]
pub struct Resource<W> {
    kind: ResourceKind,
    capacity: u32,
    in_use: u32,
    next_serial: u64,
    outstanding: HashSet<u64>,
    waiters: VecDeque<W>,
    grants: u64,
    peak_in_use: u32,
    peak_waiting: usize,
}

impl<W> Resource<W> {
    /// 容量必须 >= 1，否则排队者永远等不到资源。
    pub fn new(kind: ResourceKind, capacity: u32) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity { resource: kind });
        }
        Ok(Self {
            kind,
            capacity,
            in_use: 0,
            next_serial: 0,
            outstanding: HashSet::new(),
            waiters: VecDeque::new(),
            grants: 0,
            peak_in_use: 0,
            peak_waiting: 0,
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    pub fn waiting(&self) -> usize {
        self.waiters.len()
    }

    /// 有空位则立即占用（不消耗仿真时间），否则排到队尾。
    pub fn acquire(&mut self, waiter: W) -> Acquire<W> {
        if self.in_use < self.capacity {
            let token = self.grant();
            Acquire::Granted(waiter, token)
        } else {
            self.waiters.push_back(waiter);
            self.peak_waiting = self.peak_waiting.max(self.waiters.len());
            Acquire::Queued
        }
    }

    /// 归还令牌；若有人排队，则把空出来的位置直接交给队首，并返回它和它的新令牌。
    ///
    /// 调用方负责在当前时刻恢复返回的排队者。
    pub fn release(&mut self, token: ResourceToken) -> Result<Option<(W, ResourceToken)>, SimError> {
        if token.kind != self.kind {
            return Err(SimError::ForeignToken {
                expected: self.kind.to_string(),
                got: token.kind.to_string(),
            });
        }
        if !self.outstanding.remove(&token.serial) {
            return Err(SimError::UnknownToken {
                resource: self.kind.to_string(),
                serial: token.serial,
            });
        }
        self.in_use -= 1;

        Ok(self.waiters.pop_front().map(|next| {
            let token = self.grant();
            (next, token)
        }))
    }

    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            capacity: self.capacity,
            grants: self.grants,
            peak_in_use: self.peak_in_use,
            peak_waiting: self.peak_waiting,
            in_use: self.in_use,
            waiting: self.waiters.len(),
        }
    }

    fn grant(&mut self) -> ResourceToken {
        debug_assert!(self.in_use < self.capacity);
        self.in_use += 1;
        self.grants += 1;
        self.peak_in_use = self.peak_in_use.max(self.in_use);

        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1);
        self.outstanding.insert(serial);
        ResourceToken {
            kind: self.kind,
            serial,
        }
    }
}
