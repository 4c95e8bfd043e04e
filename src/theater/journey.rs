//! 顾客流程（Customer Journey）
//!
//! 每个顾客是一个线性状态机：
//! 到达 -> 等收银 -> 买票 -> 等检票 -> 检票 -> (等零食 -> 买零食)? -> 入座。
//!
//! 流程只在两处挂起：定时占用（调度一个 `Resume`）和资源排队（流程本身被资源保管，
//! 由 `release` 把位置交给它后在当前时刻恢复）。

use tracing::debug;

use super::resource::{Acquire, ResourceKind, ResourceToken};
use super::stats::WaitSample;
use super::world::TheaterWorld;
use crate::sim::{Event, SimError, SimTime, Simulator, World};
use crate::trace::TraceEventKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Arrived,
    AwaitCashier,
    BuyingTicket,
    AwaitUsher,
    TicketCheck,
    AwaitServer,
    BuyingFood,
    Seated,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Arrived => "arrived",
            Stage::AwaitCashier => "await_cashier",
            Stage::BuyingTicket => "buying_ticket",
            Stage::AwaitUsher => "await_usher",
            Stage::TicketCheck => "ticket_check",
            Stage::AwaitServer => "await_server",
            Stage::BuyingFood => "buying_food",
            Stage::Seated => "seated",
        }
    }
}

#[derive(Debug)]
pub struct Journey {
    id: u64,
    arrival: SimTime,
    stage: Stage,
    held: Option<ResourceToken>,
}

impl Journey {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            arrival: SimTime::ZERO,
            stage: Stage::Arrived,
            held: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn arrival(&self) -> SimTime {
        self.arrival
    }

    /// 从当前阶段一直执行到下一个挂起点（或入座）。
    pub fn resume(mut self, sim: &mut Simulator, w: &mut TheaterWorld) -> Result<(), SimError> {
        loop {
            match self.stage {
                Stage::Arrived => {
                    self.arrival = sim.now();
                    debug!(customer = self.id, now = %sim.now(), "顾客到达");
                    w.note(sim.now(), self.id, TraceEventKind::Arrived);
                    self.stage = Stage::AwaitCashier;
                }
                Stage::AwaitCashier => {
                    let Some(mut me) = self.claim(ResourceKind::Cashier, sim, w) else {
                        return Ok(());
                    };
                    let (lo, hi) = w.service.ticket_minutes;
                    let minutes = w.rng().uniform_int(lo, hi);
                    me.stage = Stage::BuyingTicket;
                    return me.hold(SimTime::from_minutes(minutes as f64), sim);
                }
                Stage::BuyingTicket => {
                    self.finish_hold(ResourceKind::Cashier, sim, w)?;
                    self.stage = Stage::AwaitUsher;
                }
                Stage::AwaitUsher => {
                    let Some(mut me) = self.claim(ResourceKind::Usher, sim, w) else {
                        return Ok(());
                    };
                    let check = SimTime::from_seconds(w.service.check_seconds as f64);
                    me.stage = Stage::TicketCheck;
                    return me.hold(check, sim);
                }
                Stage::TicketCheck => {
                    self.finish_hold(ResourceKind::Usher, sim, w)?;
                    let buys_food = w.rng().coin();
                    w.note(sim.now(), self.id, TraceEventKind::FoodDecision { buys_food });
                    self.stage = if buys_food {
                        Stage::AwaitServer
                    } else {
                        Stage::Seated
                    };
                }
                Stage::AwaitServer => {
                    let Some(mut me) = self.claim(ResourceKind::Server, sim, w) else {
                        return Ok(());
                    };
                    let (lo, hi) = w.service.food_minutes;
                    let minutes = w.rng().uniform_int(lo, hi);
                    me.stage = Stage::BuyingFood;
                    return me.hold(SimTime::from_minutes(minutes as f64), sim);
                }
                Stage::BuyingFood => {
                    self.finish_hold(ResourceKind::Server, sim, w)?;
                    self.stage = Stage::Seated;
                }
                Stage::Seated => {
                    let now = sim.now();
                    let wait = (now - self.arrival).as_minutes();
                    debug!(customer = self.id, now = %now, wait, "顾客入座");
                    w.stats.record(WaitSample {
                        customer: self.id,
                        seated_at: now,
                        wait,
                    });
                    w.note(now, self.id, TraceEventKind::Seated { wait_min: wait });
                    return Ok(());
                }
            }
        }
    }

    /// 申请资源：已经通过交接拿到令牌则直接返回；容量已满则交给资源排队，返回 `None`。
    fn claim(self, kind: ResourceKind, sim: &Simulator, w: &mut TheaterWorld) -> Option<Journey> {
        if self.held.is_some() {
            return Some(self);
        }
        let id = self.id;
        let resource = w.resource_mut(kind);
        match resource.acquire(self) {
            Acquire::Granted(mut me, token) => {
                let in_use = resource.in_use();
                me.held = Some(token);
                w.note(sim.now(), id, TraceEventKind::Acquired { resource: kind, in_use });
                Some(me)
            }
            Acquire::Queued => {
                let waiting = resource.waiting();
                debug!(customer = id, resource = %kind, waiting, "资源已满，排队等待");
                w.note(sim.now(), id, TraceEventKind::Queued { resource: kind, waiting });
                None
            }
        }
    }

    fn hold(self, duration: SimTime, sim: &mut Simulator) -> Result<(), SimError> {
        sim.schedule_in(duration, Resume { journey: self })
    }

    /// 定时占用结束：归还令牌，若有人排队则在当前时刻恢复队首。
    fn finish_hold(&mut self, kind: ResourceKind, sim: &mut Simulator, w: &mut TheaterWorld) -> Result<(), SimError> {
        let token = self.held.take().ok_or(SimError::MissingToken {
            customer: self.id,
            stage: self.stage.name(),
        })?;
        let resource = w.resource_mut(kind);
        let handoff = resource.release(token)?;
        let in_use = resource.in_use();
        w.note(sim.now(), self.id, TraceEventKind::Released { resource: kind, in_use });

        if let Some((mut next, token)) = handoff {
            next.held = Some(token);
            w.note(sim.now(), next.id, TraceEventKind::Acquired { resource: kind, in_use });
            sim.schedule_now(Resume { journey: next });
        }
        Ok(())
    }
}

/// 事件：恢复一个被挂起的顾客流程。
#[derive(Debug)]
pub struct Resume {
    pub journey: Journey,
}

impl Event for Resume {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) -> Result<(), SimError> {
        let Resume { journey } = *self;
        let w = TheaterWorld::from_world(world)?;
        journey.resume(sim, w)
    }
}
