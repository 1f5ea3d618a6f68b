//! Vose's alias method over a growable weight list: O(n) rebuild, O(1) draw.

use log::{trace, warn};
use rand::Rng;

use crate::IndexSampler;
use crate::config::WeightPolicy;
use crate::error::SamplerError;

/// Weighted index sampler backed by an alias table.
///
/// Weights are appended with [`add_weight`](Self::add_weight) /
/// [`add_weights`](Self::add_weights); the probability and alias tables are
/// only rebuilt by [`refresh`](Self::refresh), which the add methods call for
/// you unless `skip_refresh` is set. Between a mutation and the next refresh
/// the sampler keeps drawing from the previous table (see
/// [`is_stale`](Self::is_stale)).
///
/// Zero weights occupy an index but are never drawn. If every weight is
/// zero the table falls back to a uniform draw over all indices.
#[derive(Debug, Clone, Default)]
pub struct AliasSampler {
    policy: WeightPolicy,
    weights: Vec<f64>,
    total_weight: f64,
    prob: Vec<f64>,
    alias: Vec<usize>,
    stale: bool,
}

impl AliasSampler {
    /// Empty sampler with the default [`WeightPolicy::Clamp`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: WeightPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Build a ready-to-sample table from `weights`. O(n).
    ///
    /// # Errors
    /// [`SamplerError::NonFiniteWeight`] for `NaN`/∞ entries. Negative
    /// entries are clamped to zero.
    pub fn from_weights<I>(weights: I) -> Result<Self, SamplerError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sampler = Self::new();
        sampler.add_weights(weights, false)?;
        Ok(sampler)
    }

    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    /// Append one weight.
    ///
    /// Every call without `skip_refresh` pays a full O(n) rebuild; when
    /// loading many weights one at a time pass `true` and call
    /// [`refresh`](Self::refresh) once at the end.
    ///
    /// # Errors
    /// See [`WeightPolicy::admit`]. A rejected weight leaves the sampler
    /// untouched.
    pub fn add_weight(&mut self, weight: f64, skip_refresh: bool) -> Result<(), SamplerError> {
        let weight = self.policy.admit(self.weights.len(), weight)?;
        self.weights.push(weight);
        self.total_weight += weight;
        self.stale = true;

        if !skip_refresh {
            self.refresh();
        }
        Ok(())
    }

    /// Append a batch of weights, refreshing once at the end unless
    /// `skip_refresh` is set.
    ///
    /// # Errors
    /// If any element is rejected nothing from the batch is stored.
    pub fn add_weights<I>(&mut self, weights: I, skip_refresh: bool) -> Result<(), SamplerError>
    where
        I: IntoIterator<Item = f64>,
    {
        let iter = weights.into_iter();
        let base = self.weights.len();

        let mut admitted = Vec::with_capacity(iter.size_hint().0);
        for (offset, w) in iter.enumerate() {
            admitted.push(self.policy.admit(base + offset, w)?);
        }

        if !admitted.is_empty() {
            for &w in &admitted {
                self.total_weight += w;
            }
            self.weights.extend(admitted);
            self.stale = true;
        }

        if !skip_refresh {
            self.refresh();
        }
        Ok(())
    }

    /// Rebuild the probability and alias tables from the current weights. O(n).
    ///
    /// The new tables are built on the side and swapped in whole, and the
    /// running total is re-summed from the stored weights.
    pub fn refresh(&mut self) {
        let total: f64 = self.weights.iter().sum();
        let (prob, alias) = build_tables(&self.weights, total);

        self.total_weight = total;
        self.prob = prob;
        self.alias = alias;
        self.stale = false;
    }

    /// Draw one index in O(1), or `None` if the built table is empty.
    ///
    /// Consumes exactly one `f64` from `rng`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.prob.is_empty() {
            return None;
        }
        self.sample_unit(rng.random::<f64>())
    }

    /// Resolve a caller-supplied uniform value `u` in `[0, 1)` to an index.
    ///
    /// `u * n` picks the slot, its fractional part picks between the slot
    /// and its alias. Out-of-range `u` is clamped; `NaN` resolves through
    /// slot 0 rather than panicking.
    pub fn sample_unit(&self, u: f64) -> Option<usize> {
        let n = self.prob.len();
        if n == 0 {
            return None;
        }

        let r = u.clamp(0.0, 1.0) * n as f64;
        // `as` saturates (and maps NaN to 0); r == n can happen for u near 1
        let i = (r as usize).min(n - 1);
        let frac = r - i as f64;

        Some(if frac < self.prob[i] { i } else { self.alias[i] })
    }

    /// Draw `draws` samples, returning counts per index.
    #[cfg(test)]
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.prob.len()];
        for _ in 0..draws {
            if let Some(i) = self.sample(rng) {
                counts[i] += 1;
            }
        }
        counts
    }

    /// Stored (post-clamp) weight at `index`.
    ///
    /// # Errors
    /// [`SamplerError::IndexOutOfRange`] past the end of the weight list.
    pub fn get_weight(&self, index: usize) -> Result<f64, SamplerError> {
        self.weights
            .get(index)
            .copied()
            .ok_or(SamplerError::IndexOutOfRange {
                index,
                len: self.weights.len(),
            })
    }

    /// Number of stored weights, built or not.
    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Per-slot probability of keeping the slot's own index.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Per-slot fallback index.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }

    /// Number of indices in the built table.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Whether weights changed since the last [`refresh`](Self::refresh).
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Drop all weights and tables. The policy is kept.
    pub fn clear(&mut self) {
        self.weights.clear();
        self.prob.clear();
        self.alias.clear();
        self.total_weight = 0.0;
        self.stale = false;
    }
}

impl IndexSampler for AliasSampler {
    #[inline]
    fn len(&self) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        AliasSampler::len(self)
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        AliasSampler::sample(self, rng)
    }
}

/// Vose construction. `weights` are finite and non-negative, `total` is their sum.
fn build_tables(weights: &[f64], total: f64) -> (Vec<f64>, Vec<usize>) {
    let n = weights.len();
    if n == 0 {
        return (Vec::new(), Vec::new());
    }
    if total <= 0.0 {
        warn!("alias table: {n} weights with no mass, falling back to uniform");
        return (vec![1.0; n], (0..n).collect());
    }
    trace!("alias table: building n={n} total={total}");

    // Scale so average is 1.
    let mut scaled = normalize(weights, total);

    let mut heaviest = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w > weights[heaviest] {
            heaviest = i;
        }
    }

    let mut prob = vec![0.0f64; n];
    let mut alias: Vec<usize> = (0..n).collect();

    // One index buffer: the small stack grows up from the left,
    // the large stack grows down from the right.
    let mut work = vec![0usize; n];
    let mut small = 0;
    let mut large = n;
    for (i, &p) in scaled.iter().enumerate() {
        if p < 1.0 {
            work[small] = i;
            small += 1;
        } else {
            large -= 1;
            work[large] = i;
        }
    }

    while small > 0 && large < n {
        small -= 1;
        let s = work[small];
        let l = work[large];

        prob[s] = scaled[s]; // in [0,1)
        alias[s] = l;

        scaled[l] = (scaled[l] + scaled[s]) - 1.0;

        if scaled[l] < 1.0 {
            // l moves into the slot s just vacated
            large += 1;
            work[small] = l;
            small += 1;
        }
    }

    // Leftovers are rounding residue and own their whole slot. A zero
    // weight can only get here through drift; keep it unreachable.
    for &i in work[..small].iter().chain(&work[large..]) {
        if weights[i] > 0.0 {
            prob[i] = 1.0;
            alias[i] = i;
        } else {
            prob[i] = 0.0;
            alias[i] = heaviest;
        }
    }

    (prob, alias)
}

/// `weights[i] * n / total`, dividing by the largest weight first when the
/// plain factor would not be finite (sum overflowed, or subnormal total).
fn normalize(weights: &[f64], total: f64) -> Vec<f64> {
    let n = weights.len() as f64;
    let k = n / total;
    if total.is_finite() && k.is_finite() {
        return weights.iter().map(|&w| w * k).collect();
    }

    let max = weights.iter().copied().fold(0.0f64, f64::max);
    let rel_sum: f64 = weights.iter().map(|&w| w / max).sum();
    let k = n / rel_sum;
    weights.iter().map(|&w| (w / max) * k).collect()
}
