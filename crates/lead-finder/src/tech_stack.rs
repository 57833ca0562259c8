//! Illustrative tech stack labels.
//!
//! Purely cosmetic: the label is drawn at random per record on every load
//! and never feeds into scoring or filtering.

use rand::Rng;

/// The catalog labels are drawn from.
pub const TECH_STACKS: [&str; 3] = [
    "AWS, React, Python",
    "GCP, Django, Postgres",
    "Azure, Node.js, MongoDB",
];

/// Draw one catalog label uniformly at random.
pub fn assign<R: Rng>(rng: &mut R) -> &'static str {
    TECH_STACKS[rng.gen_range(0..TECH_STACKS.len())]
}
