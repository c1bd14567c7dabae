use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matching::scorer::MatchResult;

/// Upper bound (exclusive) of the per-result display bump.
const MAX_BUMP: u8 = 5;
const DISPLAY_CEILING: u8 = 99;

/// Presentation-only perturbation so a dashboard doesn't show a wall of
/// identical percentages. Touches `display_score` only; `match_score` and
/// ordering are left as ranked.
pub struct FreshnessJitter {
    rng: StdRng,
}

impl FreshnessJitter {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn apply(&mut self, results: &mut [MatchResult]) {
        for result in results.iter_mut() {
            let bump = self.rng.random_range(0..MAX_BUMP);
            result.display_score = result.match_score.saturating_add(bump).min(DISPLAY_CEILING);
        }
    }
}
