//! Random source for the candidate generator.
//!
//! Every policy takes `&mut dyn RngCore` and samples through `rand`'s `Rng`
//! and `SliceRandom` helpers. Production wires an entropy-seeded `StdRng`;
//! tests wire a seeded `StdRng` or one of the mock sources below.

use rand::{Rng, RngCore};
use uuid::Uuid;

/// 16 random bytes shaped into a v4 UUID, so a seeded source reproduces ids.
pub fn random_uuid(rng: &mut dyn RngCore) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Every draw is the lowest possible value: `choose` takes the first element,
/// `gen_range` the lower bound, `gen_bool(p)` is true for any `p > 0`.
#[cfg(test)]
pub fn lowest() -> rand::rngs::mock::StepRng {
    rand::rngs::mock::StepRng::new(0, 0)
}

/// Every draw is the highest possible value: `gen_bool(p)` is false for any
/// `p < 1` and float draws sit just below 1. Only for float and boolean
/// draws; integer range sampling rejects this value forever.
#[cfg(test)]
pub fn highest() -> rand::rngs::mock::StepRng {
    rand::rngs::mock::StepRng::new(u64::MAX, 0)
}
