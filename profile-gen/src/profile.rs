use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::reference::{AGE_RANGE, CITIES, DOMAINS, EMAIL_NUMBER_RANGE, FIRST_NAMES, LAST_NAMES};

/// A synthetic user record.
///
/// Field order here is the key order in the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub city: String,
}

/// Reference lists are non-empty statics, so `choose` always yields a value.
#[inline]
fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().expect("reference list is empty")
}

/// Draw one profile.
///
/// Every field is sampled independently and uniformly. The draw order is fixed
/// (first name, last name, email number, domain, age, city) so a seeded
/// generator always yields the same profile.
pub fn generate_profile<R: Rng>(rng: &mut R) -> Profile {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    let number = rng.gen_range(EMAIL_NUMBER_RANGE);
    let domain = pick(rng, &DOMAINS);
    let age = rng.gen_range(AGE_RANGE);
    let city = pick(rng, &CITIES);

    Profile {
        name: format!("{} {}", first, last),
        email: format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            number,
            domain
        ),
        age,
        city: city.to_string(),
    }
}

/// Draw `n` profiles in generation order.
pub fn generate_profiles<R: Rng>(rng: &mut R, n: usize) -> Vec<Profile> {
    (0..n).map(|_| generate_profile(rng)).collect()
}

/// Endless stream of profiles backed by an owned random source.
pub struct ProfileGenerator<R> {
    rng: R,
}

impl<R: Rng> ProfileGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ProfileGenerator<StdRng> {
    /// Reproducible generator: the same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl ProfileGenerator<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Iterator for ProfileGenerator<R> {
    type Item = Profile;

    fn next(&mut self) -> Option<Profile> {
        Some(generate_profile(&mut self.rng))
    }
}
