//! 事件 trait
//!
//! 定义仿真事件接口。

use super::error::SimError;
use super::simulator::Simulator;
use super::world::World;

/// 事件：可被调度执行。使用 `self: Box<Self>` 以支持 move/所有权转移。
///
/// 事件本身就是被挂起进程的续体（continuation）：执行时可以改写世界状态、
/// 再调度新的事件；返回 `Err` 表示使用错误，仿真立即停止。
pub trait Event: Send + 'static {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) -> Result<(), SimError>;
}
