use crate::mood::Mood;
use crate::quotes::{Quote, QuoteStore};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` is never zero.
    fn next(&mut self, bound: usize) -> usize;
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

/// Pick one quote tagged `mood`, uniformly at random.
///
/// Returns `None` without drawing from `rng` when the mood has no quotes.
pub fn pick_quote<'a, R>(mood: Mood, store: &'a QuoteStore, rng: &mut R) -> Option<&'a Quote>
where
    R: RandomSource + ?Sized,
{
    let candidates = store.quotes_for(mood);
    if candidates.is_empty() {
        return None;
    }
    let index = rng.next(candidates.len());
    candidates.get(index).copied()
}
