//! End-to-end match prediction: rates, goal distributions, scoregrid and outcome probabilities.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InvalidInput, PredictionError};
use crate::form::FormCoefficients;
use crate::outcome::{aggregate, OutcomeProbs};
use crate::poisson::{distribution, GoalProbs};
use crate::rate::{estimate_rate, Coefficients, EnvironmentAdjustment, TeamForm};
use crate::scoregrid::{Score, Scoregrid};
use crate::weather::WeatherPenalties;

pub const DEFAULT_K_MAX: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coefficients: Coefficients,
    #[serde(default = "default_k_max")]
    pub k_max: u8,
    #[serde(default)]
    pub weather: WeatherPenalties,
    #[serde(default)]
    pub form: FormCoefficients,
}
impl Config {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        self.coefficients.validate()?;
        if self.k_max < 1 {
            return Err(InvalidInput::new("k_max", self.k_max as f64, "must be at least 1"));
        }
        self.weather.validate()?;
        self.form.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            k_max: DEFAULT_K_MAX,
            weather: WeatherPenalties::default(),
            form: FormCoefficients::default(),
        }
    }
}

fn default_k_max() -> u8 {
    DEFAULT_K_MAX
}

/// Everything known about a fixture ahead of kick-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInputs {
    pub home_form: TeamForm,
    pub away_form: TeamForm,
    #[serde(default)]
    pub home_env: EnvironmentAdjustment,
    #[serde(default)]
    pub away_env: EnvironmentAdjustment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub home_rate: f64,
    pub away_rate: f64,
    pub home_distribution: GoalProbs,
    pub away_distribution: GoalProbs,
    pub scoregrid: Scoregrid,
    pub outcome_probs: OutcomeProbs,
    pub most_likely: Score,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predictor {
    config: Config,
}
impl Predictor {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn predict(&self, inputs: &MatchInputs) -> Result<Prediction, PredictionError> {
        let coefficients = &self.config.coefficients;
        let home_rate = estimate_rate(
            &inputs.home_form,
            &inputs.away_form,
            &inputs.home_env,
            true,
            coefficients,
        )?;
        let away_rate = estimate_rate(
            &inputs.away_form,
            &inputs.home_form,
            &inputs.away_env,
            false,
            coefficients,
        )?;
        predict_from_rates(home_rate, away_rate, self.config.k_max)
    }
}

impl TryFrom<Config> for Predictor {
    type Error = InvalidInput;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Predicts a match from precomputed scoring rates.
pub fn predict_from_rates(home_rate: f64, away_rate: f64, k_max: u8) -> Result<Prediction, PredictionError> {
    let home_distribution = distribution(home_rate, k_max)?;
    let away_distribution = distribution(away_rate, k_max)?;
    let scoregrid = Scoregrid::from_independent(&home_distribution, &away_distribution)?;
    let (outcome_probs, most_likely) = aggregate(&scoregrid);
    debug!(
        "home rate: {home_rate:.3}, away rate: {away_rate:.3}, k_max: {k_max}, most likely: {most_likely}"
    );
    Ok(Prediction {
        home_rate,
        away_rate,
        home_distribution,
        away_distribution,
        scoregrid,
        outcome_probs,
        most_likely,
    })
}

/// Predicts a match under the default rate [Coefficients], truncating goal counts at `k_max`.
pub fn predict_match(
    home_form: &TeamForm,
    away_form: &TeamForm,
    home_env: &EnvironmentAdjustment,
    away_env: &EnvironmentAdjustment,
    k_max: u8,
) -> Result<Prediction, PredictionError> {
    let predictor = Predictor::try_from(Config {
        k_max,
        ..Config::default()
    })?;
    predictor.predict(&MatchInputs {
        home_form: home_form.clone(),
        away_form: away_form.clone(),
        home_env: home_env.clone(),
        away_env: away_env.clone(),
    })
}
