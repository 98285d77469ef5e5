use std::collections::HashSet;

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use tap::Tap;

use crate::model::{Candidate, Entry};

/// Uniform pick among candidates whose title is not in the gallery yet.
/// Falls back to the full pool once every title is taken, so selection
/// only fails on an empty pool.
pub fn choose<'a, R>(
    pool: &'a [Candidate],
    existing: &[Entry],
    rng: &mut R,
) -> Option<&'a Candidate>
where
    R: Rng + ?Sized,
{
    let taken: HashSet<&str> = existing.iter().map(|e| e.title.as_str()).collect();

    let fresh = pool
        .iter()
        .filter(|c| !taken.contains(c.title.as_str()))
        .collect_vec()
        .tap(|fresh| tracing::debug!("fresh = {} / {}", fresh.len(), pool.len()));

    if fresh.is_empty() {
        pool.choose(rng)
    } else {
        fresh.choose(rng).copied()
    }
}
