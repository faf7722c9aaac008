//! Deterministic RNG derivation.
//!
//! One master seed expands into independent per-component sub-seeds via
//! BLAKE3 hashing. Derivation is order-independent: asking for the latency
//! stream before or after the fill stream yields the same seeds either way.
//! Seeding the tree once at simulation start makes every stochastic model
//! reproducible without shared global state.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Master seed expanded into named, numbered sub-streams.
#[derive(Debug, Clone, Copy)]
pub struct SeedTree {
    master_seed: u64,
}

impl SeedTree {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Deterministic sub-seed for a named component stream.
    pub fn sub_seed(&self, component: &str, stream: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(component.as_bytes());
        hasher.update(&stream.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Seeded `StdRng` for a named component stream.
    pub fn rng_for(&self, component: &str, stream: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(component, stream))
    }
}
