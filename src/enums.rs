use crate::error::SamplerError;
use crate::table::FrequencyTable;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its weight is exposed via [`WeightedEnum::ENTRIES`],
/// which enables building a ready-to-sample [`FrequencyTable`].
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs for the enum, in declaration order.
    const ENTRIES: &'static [(Self, f64)];

    /// Build a [`FrequencyTable`] from the enum entries.
    ///
    /// # Errors
    /// See [`FrequencyTable::from_pairs`]: no variants, or a non-finite
    /// weight expression.
    fn frequency_table() -> Result<FrequencyTable<Self>, SamplerError>
    where
        Self: Copy,
    {
        FrequencyTable::from_pairs(Self::ENTRIES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alias_sampler_macros::WeightedEnum;
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Copy, Clone, Debug, PartialEq, WeightedEnum)]
    enum Rarity {
        #[weight(1/10)]
        Rare,
        #[weight(0)]
        Retired,
        #[weight(9 * 10 / 100)]
        Common,
    }

    #[test]
    fn derive_promotes_integer_weights() {
        assert_eq!(
            Rarity::ENTRIES,
            &[
                (Rarity::Rare, 0.1),
                (Rarity::Retired, 0.0),
                (Rarity::Common, 0.9)
            ]
        );
    }

    #[test]
    fn derived_table_samples_by_weight() {
        let table = Rarity::frequency_table().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;
        let mut rare = 0;
        for _ in 0..draws {
            match table.sample_owned(&mut rng) {
                Some(Rarity::Rare) => rare += 1,
                Some(Rarity::Common) => {}
                other => panic!("unexpected draw {other:?}"),
            }
        }
        let emp = rare as f64 / draws as f64;
        assert!((emp - 0.1).abs() < 0.01, "emp={emp}");
    }
}
