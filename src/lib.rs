//! # alias_sampler
//!
//! Weighted random index selection in O(1) per draw.
//!
//! [`AliasSampler`] keeps a growable list of non-negative weights and builds
//! [Vose's alias tables](https://en.wikipedia.org/wiki/Alias_method) from
//! them on [`refresh`](AliasSampler::refresh). Each draw then costs one
//! uniform `f64` and one branch, independent of the number of weights.
//!
//! The sampler only ever hands out indices. Mapping an index to a loot
//! rarity, a tile variant or anything else is up to the caller, or to
//! [`FrequencyTable`], which keeps payloads alongside their weights.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use alias_sampler::AliasSampler;
//!
//! # fn main() -> Result<(), alias_sampler::SamplerError> {
//! let mut sampler = AliasSampler::new();
//! for w in [1.0, 3.0, 6.0] {
//!     sampler.add_weight(w, true)?; // defer the O(n) rebuild
//! }
//! sampler.refresh();
//!
//! let mut rng = rand::rng();
//! let index = sampler.sample(&mut rng); // Some(0 | 1 | 2)
//! # Ok(()) }
//! ```
//!
//! ## Tables with payloads
//!
//! ```rust,ignore
//! use alias_sampler::{FrequencyTable, WeightedEnum};
//!
//! #[derive(Copy, Clone, Debug, WeightedEnum)]
//! enum Loot {
//!     #[weight(60)] Common,
//!     #[weight(30)] Uncommon,
//!     #[weight(9)]  Rare,
//!     #[weight(1)]  Legendary,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table: FrequencyTable<Loot> = Loot::frequency_table()?;
//! let mut rng = rand::rng();
//! let item = table.sample(&mut rng); // Option<&Loot>
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: O(n) per [`refresh`](AliasSampler::refresh).
//! * **Sample**: O(1) per draw (1 random number, 1 branch).
//! * **Space**: the weights plus 2 vectors of length `n` (f64 + usize).
//!
//! ## Gotchas
//! * Adding weights marks the table stale; draws keep using the previous
//!   table until the next refresh.
//! * Negative weights are clamped to zero by default; use
//!   [`WeightPolicy::Reject`] to turn them into errors. `NaN`/∞ are always rejected.
//! * All-zero weights sample uniformly over every index.
//! * Not synchronized. Share a built sampler behind `&` or wrap it in a lock
//!   if another thread may refresh it.

// lets the derive's `alias_sampler::` paths resolve inside this crate
extern crate self as alias_sampler;

mod config;
mod enums;
mod error;
mod table;
mod walker;

pub use config::WeightPolicy;
pub use enums::WeightedEnum;
pub use error::SamplerError;
pub use table::FrequencyTable;
pub use walker::AliasSampler;

/// Derive macro imported from `alias_sampler_macros`.
/// See the crate-level example for usage.
pub use alias_sampler_macros::WeightedEnum;

/// A minimal interface for “index samplers”, so callers can stay generic
/// over where their indices come from.
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    /// `None` when there is nothing to draw from.
    fn sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn draw_many<S: IndexSampler>(sampler: &S, draws: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = vec![0; sampler.len()];
        for _ in 0..draws {
            if let Some(i) = sampler.sample_index(&mut rng) {
                counts[i] += 1;
            }
        }
        counts
    }

    #[test]
    fn alias_sampler_through_trait() {
        let sampler = AliasSampler::from_weights([0.0, 1.0]).unwrap();
        assert_eq!(draw_many(&sampler, 500), vec![0, 500]);
        assert!(draw_many(&AliasSampler::new(), 10).is_empty());
    }
}
