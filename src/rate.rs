//! Estimation of a team's scoring rate (λ) from its form, the opponent's form and the match
//! environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_non_negative, check_positive, InvalidInput};

/// Summary of a team's recent scoring tendencies, as supplied by a results provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamForm {
    pub team_id: String,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
    #[serde(default = "unit")]
    pub home_advantage_factor: f64,
    #[serde(default = "unit")]
    pub recent_form_multiplier: f64,
}
impl TeamForm {
    pub fn new(team_id: impl Into<String>, avg_goals_scored: f64, avg_goals_conceded: f64) -> Self {
        Self {
            team_id: team_id.into(),
            avg_goals_scored,
            avg_goals_conceded,
            home_advantage_factor: 1.0,
            recent_form_multiplier: 1.0,
        }
    }

    pub fn with_home_advantage_factor(mut self, home_advantage_factor: f64) -> Self {
        self.home_advantage_factor = home_advantage_factor;
        self
    }

    pub fn with_recent_form_multiplier(mut self, recent_form_multiplier: f64) -> Self {
        self.recent_form_multiplier = recent_form_multiplier;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_non_negative("avg_goals_scored", self.avg_goals_scored)?;
        check_non_negative("avg_goals_conceded", self.avg_goals_conceded)?;
        check_positive("home_advantage_factor", self.home_advantage_factor)?;
        check_positive("recent_form_multiplier", self.recent_form_multiplier)?;
        Ok(())
    }
}

/// Match-specific adjustments applied to one team's rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAdjustment {
    /// Multiplicative factor in (0, 1]; values below 1 dampen scoring in adverse weather.
    #[serde(default = "unit")]
    pub weather_penalty: f64,

    /// Values above 1 denote a weaker opponent, below 1 a stronger one.
    #[serde(default = "unit")]
    pub opponent_strength_factor: f64,
}
impl EnvironmentAdjustment {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_positive("weather_penalty", self.weather_penalty)?;
        if self.weather_penalty > 1.0 {
            return Err(InvalidInput::new(
                "weather_penalty",
                self.weather_penalty,
                "must not exceed 1",
            ));
        }
        check_positive("opponent_strength_factor", self.opponent_strength_factor)?;
        Ok(())
    }
}

impl Default for EnvironmentAdjustment {
    fn default() -> Self {
        Self {
            weather_penalty: 1.0,
            opponent_strength_factor: 1.0,
        }
    }
}

fn unit() -> f64 {
    1.0
}

/// Tunable constants of the rate estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    /// Weight of the team's own scoring average in the base rate; the opponent's conceding
    /// average takes the remainder.
    pub attack_weight: f64,

    /// Floor applied to the blended base rate, ahead of any multiplier.
    pub min_base_rate: f64,

    /// Floor applied to the final rate.
    pub min_rate: f64,

    /// Optional ceiling applied to the final rate.
    pub max_rate: Option<f64>,
}
impl Coefficients {
    /// Weights, floor and ceiling used by the earlier dashboard: 65% attack, a base rate of at
    /// least 0.2 goals before multipliers and a final rate of at most 3.2 goals.
    pub fn legacy() -> Self {
        Self {
            attack_weight: 0.65,
            min_base_rate: 0.2,
            min_rate: 0.0,
            max_rate: Some(3.2),
        }
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        const VALID_ATTACK_WEIGHT: std::ops::RangeInclusive<f64> = 0.0..=1.0;
        if !VALID_ATTACK_WEIGHT.contains(&self.attack_weight) {
            return Err(InvalidInput::new(
                "attack_weight",
                self.attack_weight,
                "must be in the range 0..=1",
            ));
        }
        check_non_negative("min_base_rate", self.min_base_rate)?;
        check_non_negative("min_rate", self.min_rate)?;
        if let Some(max_rate) = self.max_rate {
            check_non_negative("max_rate", max_rate)?;
            if max_rate < self.min_rate {
                return Err(InvalidInput::new("max_rate", max_rate, "must not be below min_rate"));
            }
        }
        Ok(())
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            attack_weight: 0.5,
            min_base_rate: 0.0,
            min_rate: 0.0,
            max_rate: None,
        }
    }
}

/// Estimates the expected number of goals `form` will score against `opponent_form`.
///
/// The base rate blends the team's scoring average with the opponent's conceding average and is
/// raised to `min_base_rate`. It is then scaled by the home advantage (only when `is_home`), the
/// recent form multiplier, the opponent strength factor and the weather penalty, in that order, and
/// finally clamped to `min_rate` and `max_rate` (if any).
pub fn estimate_rate(
    form: &TeamForm,
    opponent_form: &TeamForm,
    env: &EnvironmentAdjustment,
    is_home: bool,
    coefficients: &Coefficients,
) -> Result<f64, InvalidInput> {
    form.validate()?;
    opponent_form.validate()?;
    env.validate()?;
    coefficients.validate()?;

    let base = f64::max(
        coefficients.min_base_rate,
        coefficients.attack_weight * form.avg_goals_scored
            + (1.0 - coefficients.attack_weight) * opponent_form.avg_goals_conceded,
    );
    let mut rate = base;
    if is_home {
        rate *= form.home_advantage_factor;
    }
    rate *= form.recent_form_multiplier;
    rate *= env.opponent_strength_factor;
    rate *= env.weather_penalty;

    let mut rate = f64::max(coefficients.min_rate, rate);
    if let Some(max_rate) = coefficients.max_rate {
        rate = f64::min(max_rate, rate);
    }
    if !rate.is_finite() {
        return Err(InvalidInput::new("rate", rate, "must be finite"));
    }
    debug!(
        "{} vs {}: base: {base:.3}, rate: {rate:.3}, home: {is_home}",
        form.team_id, opponent_form.team_id
    );
    Ok(rate)
}

/// [estimate_rate] under the default [Coefficients].
pub fn estimate_rate_default(
    form: &TeamForm,
    opponent_form: &TeamForm,
    env: &EnvironmentAdjustment,
    is_home: bool,
) -> Result<f64, InvalidInput> {
    estimate_rate(form, opponent_form, env, is_home, &Coefficients::default())
}
