use alias_sampler::{AliasSampler, FrequencyTable, WeightedEnum};
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, WeightedEnum)]
enum Rarity {
    #[weight(1/1000)]
    Mythic,
    #[weight(1/100)]
    Legendary,
    #[weight(20/100)]
    Uncommon,
    #[weight(50/100)]
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rarity = Rarity::frequency_table()?;

    // Tile variants: weights loaded one by one, built once.
    let variants = ["grass", "grass_flowers", "grass_rocks", "grass_cracked"];
    let mut tiles = AliasSampler::with_capacity(variants.len());
    for w in [70.0, 15.0, 10.0, 5.0] {
        tiles.add_weight(w, true)?;
    }
    tiles.refresh();

    // Or mix arbitrary payloads with weights.
    let _custom: FrequencyTable<&'static str> =
        FrequencyTable::from_pairs([("sword", 1.0), ("shield", 3.0)])?;

    let mut rng = rand::rng();
    let mut hist: HashMap<Rarity, u64> = HashMap::default();
    let mut tile_hist = vec![0u64; variants.len()];
    for _ in 0..2_000_000 {
        if let Some(r) = rarity.sample_owned(&mut rng) {
            *hist.entry(r).or_default() += 1;
        }
        if let Some(i) = tiles.sample(&mut rng) {
            tile_hist[i] += 1;
        }
    }

    let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));
    for (rarity, count) in values {
        println!("{count: >8} {rarity:?}");
    }

    println!();
    for (name, count) in variants.iter().zip(tile_hist) {
        println!("{count: >8} {name}");
    }

    Ok(())
}
