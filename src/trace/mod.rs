//! 顾客事件追踪（用于离线回放/审计）
//!
//! 用结构化 JSON 事件而不是解析文本日志；仿真结束后一次性写出。

mod types;

pub use types::{TraceEvent, TraceEventKind, TraceLogger};
