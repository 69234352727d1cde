//! Reduction of a team's recent results into a [TeamForm].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_non_negative, check_positive, InvalidInput};
use crate::rate::TeamForm;

/// A finished match from the perspective of one team. Either score may be absent when the
/// provider has not recorded a full-time result; such matches are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub opponent: Option<String>,
    pub goals_for: Option<u8>,
    pub goals_against: Option<u8>,
}
impl MatchResult {
    pub fn new(goals_for: u8, goals_against: u8) -> Self {
        Self {
            opponent: None,
            goals_for: Some(goals_for),
            goals_against: Some(goals_against),
        }
    }

    pub fn points(&self) -> Option<u8> {
        let (goals_for, goals_against) = (self.goals_for?, self.goals_against?);
        Some(if goals_for > goals_against {
            3
        } else if goals_for == goals_against {
            1
        } else {
            0
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormCoefficients {
    /// Number of most recent results considered.
    pub window: usize,

    /// Change in the form multiplier per point per game above one.
    pub sensitivity: f64,

    pub min_multiplier: f64,

    pub home_advantage_factor: f64,

    /// Averages assumed when no usable results are available.
    pub fallback_scored: f64,
    pub fallback_conceded: f64,
    pub fallback_points_per_game: f64,
}
impl FormCoefficients {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.window == 0 {
            return Err(InvalidInput::new("form.window", 0.0, "must be at least 1"));
        }
        check_non_negative("form.sensitivity", self.sensitivity)?;
        check_positive("form.min_multiplier", self.min_multiplier)?;
        check_positive("form.home_advantage_factor", self.home_advantage_factor)?;
        check_non_negative("form.fallback_scored", self.fallback_scored)?;
        check_non_negative("form.fallback_conceded", self.fallback_conceded)?;
        check_non_negative("form.fallback_points_per_game", self.fallback_points_per_game)?;
        if self.fallback_points_per_game > 3.0 {
            return Err(InvalidInput::new(
                "form.fallback_points_per_game",
                self.fallback_points_per_game,
                "must not exceed 3",
            ));
        }
        Ok(())
    }
}

impl Default for FormCoefficients {
    fn default() -> Self {
        Self {
            window: 8,
            sensitivity: 0.1,
            min_multiplier: 0.5,
            home_advantage_factor: 1.0,
            fallback_scored: 1.2,
            fallback_conceded: 1.1,
            fallback_points_per_game: 1.5,
        }
    }
}

/// Rolling statistics over the most recent usable results.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSummary {
    pub matches: usize,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
    pub points_per_game: f64,
}
impl FormSummary {
    /// Points per game relative to one point, the return of a draw in every match.
    pub fn form_value(&self) -> f64 {
        self.points_per_game - 1.0
    }
}

/// Tallies the first `window` results that carry a full-time score. Results are expected in
/// most-recent-first order.
pub fn tally(results: &[MatchResult], window: usize) -> Option<FormSummary> {
    let (mut matches, mut scored, mut conceded, mut points) = (0usize, 0u32, 0u32, 0u32);
    for result in results {
        if matches == window {
            break;
        }
        let (Some(goals_for), Some(goals_against), Some(result_points)) =
            (result.goals_for, result.goals_against, result.points())
        else {
            continue;
        };
        matches += 1;
        scored += goals_for as u32;
        conceded += goals_against as u32;
        points += result_points as u32;
    }
    if matches == 0 {
        return None;
    }
    let games = matches as f64;
    Some(FormSummary {
        matches,
        avg_goals_scored: scored as f64 / games,
        avg_goals_conceded: conceded as f64 / games,
        points_per_game: points as f64 / games,
    })
}

/// Summarises `results` into a [TeamForm] for `team_id`, falling back to the configured averages
/// when no result is usable.
pub fn summarise(
    team_id: impl Into<String>,
    results: &[MatchResult],
    coefficients: &FormCoefficients,
) -> Result<TeamForm, InvalidInput> {
    coefficients.validate()?;
    let team_id: String = team_id.into();
    let summary = tally(results, coefficients.window).unwrap_or_else(|| {
        debug!("{team_id}: no usable results, assuming fallback averages");
        FormSummary {
            matches: 0,
            avg_goals_scored: coefficients.fallback_scored,
            avg_goals_conceded: coefficients.fallback_conceded,
            points_per_game: coefficients.fallback_points_per_game,
        }
    });
    let recent_form_multiplier = f64::max(
        coefficients.min_multiplier,
        1.0 + coefficients.sensitivity * summary.form_value(),
    );
    debug!("{team_id}: {summary:?}, form multiplier: {recent_form_multiplier:.3}");
    Ok(TeamForm::new(team_id, summary.avg_goals_scored, summary.avg_goals_conceded)
        .with_home_advantage_factor(coefficients.home_advantage_factor)
        .with_recent_form_multiplier(recent_form_multiplier))
}
