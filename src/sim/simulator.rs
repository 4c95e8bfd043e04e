//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间与事件队列。

use super::error::SimError;
use super::event::Event;
use super::time::SimTime;
use super::world::World;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// 队列中的一项：到期时间 + 入队序号。
struct Pending {
    at: SimTime,
    seq: u64,
    ev: Box<dyn Event>,
}

// BinaryHeap 是大顶堆：反向比较，让 (at, seq) 最小的先出队
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.at, other.seq).cmp(&(self.at, self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// 事件驱动仿真器：维护当前时间与事件队列。
///
/// 时间只会在 `advance` 弹出事件时前进；同一时刻的事件按调度顺序执行。
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    executed: u64,
    q: BinaryHeap<Pending>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 队列中最早事件的时间
    pub fn peek_time(&self) -> Option<SimTime> {
        self.q.peek().map(|top| top.at)
    }

    /// 尚未执行的事件数
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 已执行的事件数
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// 调度事件在指定时间执行；时间必须是有限值且不早于当前时间。
    #[tracing::instrument(skip(self, ev), fields(event_type = std::any::type_name::<E>(), schedule_at = %at))]
    pub fn schedule_at<E: Event>(&mut self, at: SimTime, ev: E) -> Result<(), SimError> {
        if !at.is_finite() {
            return Err(SimError::InvalidTime { at });
        }
        if at < self.now {
            return Err(SimError::ScheduleInPast { at, now: self.now });
        }
        self.push(at, ev);
        Ok(())
    }

    /// 调度事件在 `now + delay` 执行；负延迟属于使用错误。
    pub fn schedule_in<E: Event>(&mut self, delay: SimTime, ev: E) -> Result<(), SimError> {
        if !delay.is_finite() || delay < SimTime::ZERO {
            return Err(SimError::NegativeDelay { delay });
        }
        let at = self.now + delay;
        self.push(at, ev);
        Ok(())
    }

    /// 零延迟调度：排在当前时刻已到期事件之后。
    pub fn schedule_now<E: Event>(&mut self, ev: E) {
        let at = self.now;
        self.push(at, ev);
    }

    fn push<E: Event>(&mut self, at: SimTime, ev: E) {
        let seq = self.next_seq;
        trace!(now = %self.now, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(Pending {
            at,
            seq,
            ev: Box::new(ev),
        });

        debug!(queue_size = self.q.len(), "事件已加入队列");
    }

    /// 弹出最早的事件，推进时钟并执行它。队列为空时返回 `Ok(false)`。
    pub fn advance(&mut self, world: &mut dyn World) -> Result<bool, SimError> {
        let Some(item) = self.q.pop() else {
            return Ok(false);
        };
        self.now = item.at;
        self.executed += 1;

        trace!(
            event_num = self.executed,
            now = %self.now,
            seq = item.seq,
            remaining_queue = self.q.len(),
            "执行事件"
        );

        item.ev.execute(self, world)?;
        Ok(true)
    }

    /// 运行直到事件队列为空或下一个事件晚于 `until`（恰好在 `until` 的事件会执行）。
    ///
    /// 时钟停在最后执行的事件上，不会被拨到 `until`。
    #[tracing::instrument(skip(self, world))]
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) -> Result<(), SimError> {
        info!("▶️  开始运行仿真");
        debug!(now = %self.now, queue_size = self.q.len(), "初始状态");

        let start = self.executed;
        while let Some(at) = self.peek_time() {
            if at > until {
                break;
            }
            self.advance(world)?;
        }

        info!(
            total_events = self.executed - start,
            final_time = %self.now,
            abandoned_events = self.q.len(),
            "✅ 仿真完成"
        );
        Ok(())
    }
}
