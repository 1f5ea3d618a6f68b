use rand::Rng;

use crate::config::WeightPolicy;
use crate::error::SamplerError;
use crate::walker::AliasSampler;

/// Payloads paired with weights; an internal [`AliasSampler`] picks the index.
///
/// Item `i` always lives at sampler index `i`, so a payload is only stored
/// once its weight has been accepted.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    sampler: AliasSampler,
    items: Vec<T>,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::with_policy(WeightPolicy::default())
    }

    pub fn with_policy(policy: WeightPolicy) -> Self {
        Self {
            sampler: AliasSampler::with_policy(policy),
            items: Vec::new(),
        }
    }

    /// Build from any `(item, weight)` iterator and refresh once.
    ///
    /// # Errors
    /// * [`SamplerError::Empty`] if there are no pairs.
    /// * [`SamplerError::NonFiniteWeight`] for `NaN`/∞ weights.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SamplerError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        if items.is_empty() {
            return Err(SamplerError::Empty);
        }
        let sampler = AliasSampler::from_weights(weights)?;
        Ok(Self { sampler, items })
    }

    /// Add one entry. Same refresh contract as [`AliasSampler::add_weight`].
    pub fn add(&mut self, item: T, weight: f64, skip_refresh: bool) -> Result<(), SamplerError> {
        self.sampler.add_weight(weight, skip_refresh)?;
        self.items.push(item);
        Ok(())
    }

    pub fn refresh(&mut self) {
        self.sampler.refresh();
    }

    /// Sample an item **by reference**, `None` if nothing has been built.
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> Option<&'a T> {
        self.sampler.sample(rng).map(|i| &self.items[i])
    }

    /// Sample an item **by value** (clones the chosen element).
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T>
    where
        T: Clone,
    {
        self.sample(rng).cloned()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn weight(&self, index: usize) -> Result<f64, SamplerError> {
        self.sampler.get_weight(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn sampler(&self) -> &AliasSampler {
        &self.sampler
    }

    /// Number of entries, including ones not yet refreshed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.sampler.clear();
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn smoke_pairs() {
        let table = FrequencyTable::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
        let mut rng = rand::rng();
        assert!(matches!(table.sample(&mut rng), Some(&"a") | Some(&"b")));
        assert_eq!(table.len(), 2);
        assert_eq!(table.weight(1), Ok(3.0));
    }

    #[test]
    fn rejects_empty_pairs() {
        let pairs: [(u8, f64); 0] = [];
        assert!(matches!(
            FrequencyTable::from_pairs(pairs),
            Err(SamplerError::Empty)
        ));
    }

    #[test]
    fn rejected_weight_keeps_items_aligned() {
        let mut table = FrequencyTable::with_policy(WeightPolicy::Reject);
        table.add("sword", 2.0, true).unwrap();
        assert!(table.add("cursed", -1.0, true).is_err());
        table.add("shield", 0.0, true).unwrap();
        table.refresh();

        assert_eq!(table.items(), &["sword", "shield"]);
        assert_eq!(table.sampler().weight_count(), 2);

        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1000 {
            assert_eq!(table.sample_owned(&mut rng), Some("sword"));
        }
    }

    #[test]
    fn empty_and_cleared_tables_sample_none() {
        let mut table: FrequencyTable<u32> = FrequencyTable::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(table.sample(&mut rng), None);

        table.add(10, 1.0, false).unwrap();
        assert_eq!(table.sample(&mut rng), Some(&10));

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.sample(&mut rng), None);
        assert_eq!(table.get(0), None);
    }
}
