//! 世界 trait
//!
//! 事件只拿到 `&mut dyn World`，需要业务状态时按具体类型取回。

use std::any::{Any, type_name};

use super::error::SimError;

/// 仿真世界：资源、统计等业务状态的持有者。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn World {
    /// 按具体类型取回世界；类型不符说明事件被投递到了错误的世界。
    pub fn downcast_mut<T: World>(&mut self) -> Result<&mut T, SimError> {
        self.as_any_mut()
            .downcast_mut::<T>()
            .ok_or(SimError::WorldMismatch {
                expected: type_name::<T>(),
            })
    }
}
