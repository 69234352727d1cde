//! Aggregation of a [Scoregrid] into match outcome probabilities.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoregrid::{Outcome, Score, Scoregrid, Side};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbs {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}
impl OutcomeProbs {
    pub fn sum(&self) -> f64 {
        self.home_win + self.draw + self.away_win
    }

    pub fn get(&self, outcome: &Outcome) -> Option<f64> {
        match outcome {
            Outcome::Win(Side::Home) => Some(self.home_win),
            Outcome::Draw => Some(self.draw),
            Outcome::Win(Side::Away) => Some(self.away_win),
            _ => None,
        }
    }
}

/// Orders scorelines by descending probability, then by ascending total goals, then by ascending
/// home goals.
fn rank(a: &(Score, f64), b: &(Score, f64)) -> Ordering {
    b.1.total_cmp(&a.1)
        .then_with(|| a.0.total().cmp(&b.0.total()))
        .then_with(|| a.0.home.cmp(&b.0.home))
}

/// Splits the grid into home win, draw and away win probabilities and picks the single most
/// likely scoreline.
///
/// Equally likely scorelines are resolved in favour of fewer total goals, then fewer home goals.
pub fn aggregate(scoregrid: &Scoregrid) -> (OutcomeProbs, Score) {
    let (mut home_win, mut draw, mut away_win) = (0.0, 0.0, 0.0);
    let mut most_likely = (Score::nil_all(), f64::NEG_INFINITY);
    for (score, prob) in scoregrid.iter() {
        match score.home.cmp(&score.away) {
            Ordering::Greater => home_win += prob,
            Ordering::Equal => draw += prob,
            Ordering::Less => away_win += prob,
        }
        let candidate = (score, prob);
        if rank(&candidate, &most_likely) == Ordering::Less {
            most_likely = candidate;
        }
    }
    let probs = OutcomeProbs {
        home_win,
        draw,
        away_win,
    };
    debug!("outcome probs: {probs:?}, most likely: {}", most_likely.0);
    (probs, most_likely.0)
}

/// The `n` most likely scorelines, in the same order that [aggregate] uses to select the most
/// likely one.
pub fn top_scores(scoregrid: &Scoregrid, n: usize) -> Vec<(Score, f64)> {
    let mut scores = scoregrid.iter().collect::<Vec<_>>();
    scores.sort_by(rank);
    scores.truncate(n);
    scores
}

/// Gathers the probability of each of the given outcomes. Outcomes that the grid is truncated
/// too early to settle are left out.
pub fn gather_all<'a>(
    scoregrid: &Scoregrid,
    outcomes: impl IntoIterator<Item = &'a Outcome>,
) -> FxHashMap<Outcome, f64> {
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome.gather(scoregrid) {
            Some(prob) => Some((outcome.clone(), prob)),
            None => {
                debug!("{outcome} is beyond a grid of k_max {}", scoregrid.k_max());
                None
            }
        })
        .collect()
}
