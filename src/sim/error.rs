//! 仿真错误
//!
//! 引擎层面的使用错误：都是调用方的编程错误，发生后本次仿真不再继续。

use thiserror::Error;

use super::time::SimTime;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("negative scheduling delay: {delay}")]
    NegativeDelay { delay: SimTime },

    #[error("invalid event time: {at}")]
    InvalidTime { at: SimTime },

    #[error("cannot schedule at {at}, clock is already at {now}")]
    ScheduleInPast { at: SimTime, now: SimTime },

    #[error("world must be {expected}")]
    WorldMismatch { expected: &'static str },

    #[error("token for {got} released to {expected}")]
    ForeignToken { expected: String, got: String },

    #[error("token #{serial} is not outstanding on {resource} (double release?)")]
    UnknownToken { resource: String, serial: u64 },

    #[error("customer {customer} resumed in stage {stage} without holding a token")]
    MissingToken { customer: u64, stage: &'static str },
}
