//! 运行入口
//!
//! `run` 是对外的唯一核心接口：给定配置，返回平均等待时间。
//! `simulate` 额外暴露完整的运行报告，并允许替换随机源。

use serde::Serialize;
use tracing::info;

use super::arrivals::Opening;
use super::config::SimulationConfig;
use super::error::TheaterError;
use super::random::{RandomSource, SeededRandom};
use super::resource::ResourceStats;
use super::stats::{WaitStats, WaitSummary};
use super::world::TheaterWorld;
use crate::sim::{SimTime, Simulator};
use crate::trace::TraceLogger;

/// 一次运行的结果快照
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub stats: WaitStats,
    pub cashier: ResourceStats,
    pub usher: ResourceStats,
    pub server: ResourceStats,
    pub spawned: u64,
    /// 截止时仍在流程中的顾客（被原地放弃，不计入统计）
    pub in_flight: u64,
    pub final_time: SimTime,
    pub events: u64,
    #[serde(skip)]
    pub trace: Option<TraceLogger>,
}

impl RunReport {
    pub fn summary(&self) -> Result<WaitSummary, TheaterError> {
        self.stats.summarize()
    }
}

pub fn run(config: &SimulationConfig) -> Result<WaitSummary, TheaterError> {
    let rng = Box::new(SeededRandom::new(config.seed));
    simulate(config, rng, false)?.summary()
}

/// 运行到 `config.horizon`。截止时仍挂起的顾客与到达循环随世界一起丢弃。
pub fn simulate(
    config: &SimulationConfig,
    rng: Box<dyn RandomSource>,
    trace: bool,
) -> Result<RunReport, TheaterError> {
    config.validate()?;

    let mut world = TheaterWorld::new(config, rng)?;
    if trace {
        world.trace = Some(TraceLogger::default());
    }

    info!(
        cashiers = config.cashier_count,
        servers = config.server_count,
        ushers = config.usher_count,
        seed = config.seed,
        horizon = config.horizon,
        "🎬 剧院仿真开始"
    );

    let mut sim = Simulator::default();
    sim.schedule_now(Opening {
        initial_population: config.initial_population,
        interval: SimTime::from_minutes(config.arrival_interval),
    });
    sim.run_until(SimTime::from_minutes(config.horizon), &mut world)?;

    let seated = world.stats.len() as u64;
    info!(
        spawned = world.spawned,
        seated,
        final_time = %sim.now(),
        "🎬 剧院仿真结束"
    );

    Ok(RunReport {
        cashier: world.cashier.stats(),
        usher: world.usher.stats(),
        server: world.server.stats(),
        spawned: world.spawned,
        in_flight: world.spawned - seated,
        final_time: sim.now(),
        events: sim.executed(),
        trace: world.trace.take(),
        stats: world.stats,
    })
}
