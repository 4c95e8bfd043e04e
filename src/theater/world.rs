//! 剧院世界
//!
//! 持有三类资源、共享随机源、等待统计和可选的事件追踪。

use std::any::Any;

use super::config::{ConfigError, ServiceTimes, SimulationConfig};
use super::journey::Journey;
use super::random::RandomSource;
use super::resource::{Resource, ResourceKind};
use super::stats::WaitStats;
use crate::sim::{SimError, SimTime, World};
use crate::trace::{TraceEvent, TraceEventKind, TraceLogger};

pub struct TheaterWorld {
    pub cashier: Resource<Journey>,
    pub usher: Resource<Journey>,
    pub server: Resource<Journey>,
    pub service: ServiceTimes,
    pub stats: WaitStats,
    pub trace: Option<TraceLogger>,
    /// 已生成的顾客数
    pub spawned: u64,
    rng: Box<dyn RandomSource>,
}

impl TheaterWorld {
    pub fn new(config: &SimulationConfig, rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        Ok(Self {
            cashier: Resource::new(ResourceKind::Cashier, config.cashier_count)?,
            usher: Resource::new(ResourceKind::Usher, config.usher_count)?,
            server: Resource::new(ResourceKind::Server, config.server_count)?,
            service: config.service.clone(),
            stats: WaitStats::default(),
            trace: None,
            spawned: 0,
            rng,
        })
    }

    /// 从 `dyn World` 取回剧院世界
    pub fn from_world(world: &mut dyn World) -> Result<&mut TheaterWorld, SimError> {
        world.downcast_mut::<TheaterWorld>()
    }

    pub fn resource(&self, kind: ResourceKind) -> &Resource<Journey> {
        match kind {
            ResourceKind::Cashier => &self.cashier,
            ResourceKind::Usher => &self.usher,
            ResourceKind::Server => &self.server,
        }
    }

    pub fn resource_mut(&mut self, kind: ResourceKind) -> &mut Resource<Journey> {
        match kind {
            ResourceKind::Cashier => &mut self.cashier,
            ResourceKind::Usher => &mut self.usher,
            ResourceKind::Server => &mut self.server,
        }
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    pub(crate) fn note(&mut self, at: SimTime, customer: u64, kind: TraceEventKind) {
        if let Some(t) = self.trace.as_mut() {
            t.push(TraceEvent {
                t_min: at.as_minutes(),
                customer,
                kind,
            });
        }
    }
}

impl World for TheaterWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
