//! Sarcastic roast lines for plans that look too optimistic.
//!
//! A roast is one template from a fixed pool with each `{}` slot replaced
//! by a randomly chosen filler. The generator owns its RNG so callers can
//! seed it for reproducible wording or leave it on entropy.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

const ROAST_TEMPLATES: [&str; 5] = [
    "You're slower than a {} in {} – hustle up!",
    "If {} was a sport, you'd be MVP. Now snap out of it!",
    "Your task list is mocking you like a {}. Prove it wrong.",
    "Even a {} finishes faster. Embarrassing.",
    "Procrastination alert: You're one {} away from failure.",
];

const ROAST_FILLERS: [&str; 6] = [
    "snail",
    "dial-up modem",
    "lazy sloth",
    "broken robot",
    "turtle race",
    "Windows update",
];

/// Generator for roast one-liners.
pub struct RoastGenerator {
    rng: Mcg128Xsl64,
}

impl RoastGenerator {
    /// Create a generator seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible wording.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Produce one roast line.
    ///
    /// Template and fillers are drawn uniformly and independently, so the
    /// same filler may land in both slots of a two-slot template.
    pub fn generate(&mut self) -> String {
        let template = ROAST_TEMPLATES[self.rng.gen_range(0..ROAST_TEMPLATES.len())];
        let slots = template.matches("{}").count();
        let fillers: Vec<&str> = (0..slots)
            .map(|_| ROAST_FILLERS[self.rng.gen_range(0..ROAST_FILLERS.len())])
            .collect();
        fill(template, &fillers)
    }
}

impl Default for RoastGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute fillers into `{}` slots left to right.
fn fill(template: &str, fillers: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut fillers = fillers.iter();
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        if let Some(f) = fillers.next() {
            out.push_str(f);
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
