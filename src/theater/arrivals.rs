//! 顾客到达
//!
//! `Opening` 在 t=0 放入初始顾客并启动 `Arrival` 循环；`Arrival` 每隔固定间隔生成一个顾客，
//! 自己没有终止条件，由仿真截止时间截断。

use tracing::debug;

use super::journey::{Journey, Resume};
use super::world::TheaterWorld;
use crate::sim::{Event, SimError, SimTime, Simulator, World};

/// 开门：顾客编号 `0..initial_population`，随后每隔 `interval` 到达一位。
#[derive(Debug)]
pub struct Opening {
    pub initial_population: u64,
    pub interval: SimTime,
}

impl Event for Opening {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) -> Result<(), SimError> {
        let Opening {
            initial_population,
            interval,
        } = *self;
        let w = TheaterWorld::from_world(world)?;
        for id in 0..initial_population {
            spawn(id, sim, w);
        }
        sim.schedule_in(
            interval,
            Arrival {
                next_id: initial_population,
                interval,
            },
        )
    }
}

/// 到达循环的一步
#[derive(Debug)]
pub struct Arrival {
    pub next_id: u64,
    pub interval: SimTime,
}

impl Event for Arrival {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) -> Result<(), SimError> {
        let Arrival { next_id, interval } = *self;
        let w = TheaterWorld::from_world(world)?;
        spawn(next_id, sim, w);
        sim.schedule_in(
            interval,
            Arrival {
                next_id: next_id + 1,
                interval,
            },
        )
    }
}

/// 新顾客在当前时刻开始自己的流程（零延迟，排在已到期事件之后）。
fn spawn(id: u64, sim: &mut Simulator, w: &mut TheaterWorld) {
    debug!(customer = id, now = %sim.now(), "生成顾客");
    w.spawned += 1;
    sim.schedule_now(Resume {
        journey: Journey::new(id),
    });
}
