use std::collections::VecDeque;

use crate::theater::RandomSource;

/// 64 位 LCG：与 `rand` 版本无关，便于固定回归值。
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

impl RandomSource for Lcg {
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next() % (hi - lo + 1) as u64) as u32
    }

    fn coin(&mut self) -> bool {
        self.next() & 1 == 1
    }
}

/// 按脚本出值；脚本用完后取区间下界 / 不买零食。
#[derive(Default)]
pub struct Scripted {
    pub ints: VecDeque<u32>,
    pub coins: VecDeque<bool>,
}

impl Scripted {
    pub fn new(ints: &[u32], coins: &[bool]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            coins: coins.iter().copied().collect(),
        }
    }
}

impl RandomSource for Scripted {
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        let v = self.ints.pop_front().unwrap_or(lo);
        assert!((lo..=hi).contains(&v), "scripted {v} outside [{lo}, {hi}]");
        v
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(false)
    }
}
