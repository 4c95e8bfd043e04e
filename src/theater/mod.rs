//! 剧院排队仿真
//!
//! 顾客依次争用收银台、检票员、零食柜台三类有限资源，统计从到达到入座的平均等待时间。

mod arrivals;
mod config;
mod error;
mod journey;
mod random;
mod resource;
mod run;
mod staffing;
mod stats;
mod world;

pub use arrivals::{Arrival, Opening};
pub use config::{ConfigError, ServiceTimes, SimulationConfig};
pub use error::TheaterError;
pub use journey::{Journey, Resume, Stage};
pub use random::{RandomSource, SeededRandom};
pub use resource::{Acquire, Resource, ResourceKind, ResourceStats, ResourceToken};
pub use run::{RunReport, run, simulate};
pub use staffing::{Staffing, parse_staffing, staffing_or_default};
pub use stats::{WaitSample, WaitStats, WaitSummary};
pub use world::TheaterWorld;
