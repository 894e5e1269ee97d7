//! Weighted-choice table used for behavior assignment and browse-step dispatch.

use rand::Rng;

/// A table of items with relative integer weights.
///
/// Zero-weight entries are dropped at insertion so `choose` only has to deal
/// with a positive total.
#[derive(Debug, Clone, Default)]
pub struct WeightedTable<T> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
        }
    }

    pub fn push(&mut self, item: T, weight: u32) {
        if weight == 0 {
            return;
        }
        self.entries.push((item, weight));
        self.total += weight;
    }

    /// Draw one item; each entry's probability is weight / total.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        if self.total == 0 {
            return None;
        }
        let mut roll = rng.gen_range(0..self.total);
        for (item, weight) in &self.entries {
            if roll < *weight {
                return Some(item);
            }
            roll -= weight;
        }
        None
    }
}
