//! 随机数源
//!
//! 一次仿真只有一个共享随机源；抽样顺序固定（顾客创建 -> 各步骤的时长/抛硬币），
//! 同一种子可以逐位复现。具体算法固定为 ChaCha8，不随 rand 版本变化。

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// 闭区间 `[lo, hi]` 上的均匀整数
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32;
    /// 公平硬币
    fn coin(&mut self) -> bool;
}

/// 基于 `ChaCha8Rng` 的可复现随机源
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
