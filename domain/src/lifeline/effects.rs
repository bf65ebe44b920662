//! Lifeline algorithms
//!
//! Pure functions over a question and a random source. The session decides
//! *whether* a lifeline may be used; these decide *what* it produces.

use crate::question::difficulty::Difficulty;
use crate::question::entities::OPTION_COUNT;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Output of a hint lifeline, pending display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LifelineResult {
    /// Suggested option index (may be wrong)
    ExpertHint { suggestion: usize },
    /// Vote percentages per option, summing to 100
    CrowdVote { stats: [u8; OPTION_COUNT] },
}

fn wrong_options(correct: usize) -> Vec<usize> {
    (0..OPTION_COUNT).filter(|i| *i != correct).collect()
}

/// Choose two of the three wrong options, uniformly.
pub fn eliminate_two<R: Rng + ?Sized>(correct: usize, rng: &mut R) -> [usize; 2] {
    let mut wrong = wrong_options(correct);
    let (picked, _) = wrong.partial_shuffle(rng, 2);
    let mut pair = [picked[0], picked[1]];
    pair.sort_unstable();
    pair
}

/// Expert suggestion: wrong with the band's error chance, else correct.
pub fn expert_hint<R: Rng + ?Sized>(correct: usize, difficulty: Difficulty, rng: &mut R) -> usize {
    if rng.random_bool(difficulty.expert_error_chance()) {
        let wrong = wrong_options(correct);
        wrong[rng.random_range(0..wrong.len())]
    } else {
        correct
    }
}

/// Crowd vote distribution.
///
/// The correct option receives the band's confidence share. The rest is
/// split among the wrong options by successive random partition in random
/// order; the last one takes whatever remains, so the total is exactly 100.
pub fn crowd_vote<R: Rng + ?Sized>(
    correct: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> [u8; OPTION_COUNT] {
    let mut stats = [0u8; OPTION_COUNT];
    let confident = difficulty.crowd_confidence_percent();
    stats[correct] = confident;

    let mut remaining = 100 - confident;
    let mut wrong = wrong_options(correct);
    wrong.shuffle(rng);

    let Some((last, rest)) = wrong.split_last() else {
        return stats;
    };
    for &index in rest {
        let share = rng.random_range(0..=remaining);
        stats[index] = share;
        remaining -= share;
    }
    stats[*last] = remaining;

    stats
}
