//! Joint probability grid of full-time scorelines.
//!
//! Rows index home goals and columns index away goals. The grid is built under the independence
//! assumption of the double Poisson model: given their rates, the goals scored by one side carry no
//! information about the goals scored by the other, so the probability of a scoreline is the
//! product of the two marginal probabilities.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::DimensionMismatch;
use crate::linear::Matrix;
use crate::poisson::GoalProbs;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self { home: 0, away: 0 }
    }

    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }

    pub fn flip(&self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scoregrid {
    matrix: Matrix,
}
impl Scoregrid {
    /// Combines two marginal goal distributions into a joint grid, treating the home and away goal
    /// counts as independent.
    pub fn from_independent(home: &GoalProbs, away: &GoalProbs) -> Result<Self, DimensionMismatch> {
        if home.len() != away.len() {
            return Err(DimensionMismatch {
                home: home.len(),
                away: away.len(),
            });
        }
        Ok(Self {
            matrix: Matrix::outer(home.as_slice(), away.as_slice()),
        })
    }

    /// The largest goal count represented on either side; the last row and column also absorb
    /// every higher count.
    pub fn k_max(&self) -> u8 {
        (self.matrix.rows() - 1) as u8
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn prob(&self, score: &Score) -> f64 {
        self.matrix[(score.home as usize, score.away as usize)]
    }

    pub fn total(&self) -> f64 {
        self.matrix.flatten().iter().sum()
    }

    /// The grid as seen from the away side's perspective.
    pub fn flip(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Iterates over every scoreline in row-major order alongside its probability.
    pub fn iter(&self) -> impl Iterator<Item = (Score, f64)> + '_ {
        let cols = self.matrix.cols();
        self.matrix
            .flatten()
            .iter()
            .enumerate()
            .map(move |(index, &prob)| (Score::new((index / cols) as u8, (index % cols) as u8), prob))
    }
}

impl Index<(usize, usize)> for Scoregrid {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.matrix[index]
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Draw,
    GoalsUnder(u8),
    GoalsOver(u8),
    CorrectScore(Score),
    BothTeamsToScore,
}
impl Outcome {
    /// Whether the outcome can be settled from a grid whose last row and column hold `k_max` or
    /// more goals. Goal lines must lie below the tail and a correct score must avoid the tail cells.
    pub fn is_resolvable(&self, k_max: u8) -> bool {
        match self {
            Outcome::Win(_) | Outcome::Draw | Outcome::BothTeamsToScore => true,
            Outcome::GoalsUnder(goals) => *goals <= k_max,
            Outcome::GoalsOver(goals) => *goals < k_max,
            Outcome::CorrectScore(score) => score.home < k_max && score.away < k_max,
        }
    }

    /// The probability of the outcome, or `None` if the grid is truncated too early to settle it.
    pub fn gather(&self, scoregrid: &Scoregrid) -> Option<f64> {
        if !self.is_resolvable(scoregrid.k_max()) {
            return None;
        }
        let matrix = scoregrid.matrix();
        let prob = match self {
            Outcome::Win(side) => Self::gather_win(side, matrix),
            Outcome::Draw => Self::gather_draw(matrix),
            Outcome::GoalsUnder(goals) => Self::gather_goals_under(*goals, matrix),
            Outcome::GoalsOver(goals) => Self::gather_goals_over(*goals, matrix),
            Outcome::CorrectScore(score) => matrix[(score.home as usize, score.away as usize)],
            Outcome::BothTeamsToScore => Self::gather_both_teams_to_score(matrix),
        };
        Some(prob)
    }

    fn gather_win(side: &Side, matrix: &Matrix) -> f64 {
        let mut prob = 0.0;
        match side {
            Side::Home => {
                for row in 1..matrix.rows() {
                    for col in 0..usize::min(row, matrix.cols()) {
                        prob += matrix[(row, col)];
                    }
                }
            }
            Side::Away => {
                for col in 1..matrix.cols() {
                    for row in 0..usize::min(col, matrix.rows()) {
                        prob += matrix[(row, col)];
                    }
                }
            }
        }
        prob
    }

    fn gather_draw(matrix: &Matrix) -> f64 {
        let mut prob = 0.0;
        for index in 0..usize::min(matrix.rows(), matrix.cols()) {
            prob += matrix[(index, index)];
        }
        prob
    }

    fn gather_goals_over(goals: u8, matrix: &Matrix) -> f64 {
        let goals = goals as usize;
        let mut prob = 0.0;
        for row in 0..matrix.rows() {
            for col in 0..matrix.cols() {
                if row + col > goals {
                    prob += matrix[(row, col)];
                }
            }
        }
        prob
    }

    fn gather_goals_under(goals: u8, matrix: &Matrix) -> f64 {
        let goals = goals as usize;
        let mut prob = 0.0;
        for row in 0..matrix.rows() {
            for col in 0..matrix.cols() {
                if row + col < goals {
                    prob += matrix[(row, col)];
                }
            }
        }
        prob
    }

    fn gather_both_teams_to_score(matrix: &Matrix) -> f64 {
        let mut prob = 0.0;
        for row in 1..matrix.rows() {
            for col in 1..matrix.cols() {
                prob += matrix[(row, col)];
            }
        }
        prob
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(Side::Home) => write!(f, "Home win"),
            Outcome::Win(Side::Away) => write!(f, "Away win"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::GoalsUnder(goals) => write!(f, "Under {}.5 goals", goals.saturating_sub(1)),
            Outcome::GoalsOver(goals) => write!(f, "Over {goals}.5 goals"),
            Outcome::CorrectScore(score) => write!(f, "Correct score {score}"),
            Outcome::BothTeamsToScore => write!(f, "Both teams to score"),
        }
    }
}

#[cfg(test)]
mod tests;
