use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const COMPETITOR_RANGE: std::ops::RangeInclusive<u8> = 1..=10;
pub const RENT_RANGE: std::ops::RangeInclusive<u32> = 1500..=4000;
pub const AREA_AVG_CHECK_RANGE: std::ops::RangeInclusive<u32> = 300..=700;
pub const JITTER_SPAN: f64 = 10.0;

/// One district's worth of synthetic metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistrictDraws {
    /// Uniform in `[0, 1)`.
    pub traffic: f64,
    pub competitors: u8,
    pub rent: u32,
    pub area_avg_check: u32,
    /// Uniform in `[0, 10)`.
    pub jitter: f64,
}

impl DistrictDraws {
    /// Centre of every sampling range.
    pub const fn midpoint() -> Self {
        Self {
            traffic: 0.5,
            competitors: 5,
            rent: 2750,
            area_avg_check: 500,
            jitter: 5.0,
        }
    }
}

/// Supplies the random inputs for scoring.
pub trait DrawSource {
    fn draw(&mut self) -> DistrictDraws;
}

/// Samples every metric independently from its uniform range.
#[derive(Debug, Clone)]
pub struct RandomDraws<R> {
    rng: R,
}

impl<R: Rng> RandomDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDraws<ChaCha8Rng> {
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Reproducible sequence for demos and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RandomDraws<R> {
    fn draw(&mut self) -> DistrictDraws {
        let traffic = self.rng.gen::<f64>();
        let competitors = self.rng.gen_range(COMPETITOR_RANGE);
        let rent = self.rng.gen_range(RENT_RANGE);
        let area_avg_check = self.rng.gen_range(AREA_AVG_CHECK_RANGE);
        let jitter = self.rng.gen_range(0.0..JITTER_SPAN);

        DistrictDraws {
            traffic,
            competitors,
            rent,
            area_avg_check,
            jitter,
        }
    }
}

/// Replays a fixed queue of draws, then repeats the midpoint.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    queue: VecDeque<DistrictDraws>,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = DistrictDraws>) -> Self {
        Self {
            queue: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self) -> DistrictDraws {
        self.queue
            .pop_front()
            .unwrap_or_else(DistrictDraws::midpoint)
    }
}
