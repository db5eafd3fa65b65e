// builds the reply text from detected concerns

use rand::Rng;
use rand::seq::SliceRandom;

use super::concern::Concern;
use super::resources;

// cap on concern specific advice per reply
const MAX_RESOURCES: usize = 2;

/// Compose a reply for `concerns`, drawing every random pick from `rng`.
///
/// Sections, in order: crisis block (only when `Crisis` is present), one
/// supportive statement, up to two concern resources, a general resource when
/// `General` wasn't detected and fewer than two were added, one follow-up
/// question. Sections are separated by a blank line.
pub fn compose<R: Rng + ?Sized>(concerns: &[Concern], rng: &mut R) -> String {
    let mut parts: Vec<&'static str> = Vec::new();

    if concerns.contains(&Concern::Crisis) {
        parts.push(resources::CRISIS_OPENING);
        parts.push(pick(resources::CRISIS, rng));
        parts.push(resources::CRISIS_PROMPT);
    }

    parts.push(pick(resources::SUPPORTIVE, rng));

    let mut added = 0;
    for concern in concerns.iter().filter(|c| **c != Concern::Crisis) {
        if added >= MAX_RESOURCES {
            break;
        }
        if let Some(pool) = concern.resources() {
            parts.push(pick(pool, rng));
            added += 1;
        }
    }

    if !concerns.contains(&Concern::General) && added < MAX_RESOURCES {
        parts.push(pick(resources::GENERAL, rng));
    }

    parts.push(pick(resources::FOLLOW_UPS, rng));

    parts.join("\n\n")
}

pub(crate) fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
