//! Fixture descriptions as supplied by upstream providers, resolved into [MatchInputs].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InvalidInput;
use crate::form::{summarise, MatchResult};
use crate::predict::{Config, MatchInputs};
use crate::rate::{EnvironmentAdjustment, TeamForm};

/// Recent results of a team, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamResults {
    pub team_id: String,
    pub results: Vec<MatchResult>,
}

/// Either a ready-made [TeamForm] or a list of recent results to summarise. An object mixing the
/// fields of both is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamSource {
    Form(TeamForm),
    Results(TeamResults),
}
impl TeamSource {
    pub fn team_id(&self) -> &str {
        match self {
            TeamSource::Form(form) => &form.team_id,
            TeamSource::Results(team_results) => &team_results.team_id,
        }
    }

    pub fn resolve(&self, config: &Config, is_home: bool) -> Result<TeamForm, InvalidInput> {
        match self {
            TeamSource::Form(form) => Ok(form.clone()),
            TeamSource::Results(TeamResults { team_id, results }) => {
                let mut form = summarise(team_id.as_str(), results, &config.form)?;
                if !is_home {
                    form.home_advantage_factor = 1.0;
                }
                Ok(form)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: TeamSource,
    pub away: TeamSource,

    /// Free-text description of the conditions at the venue, e.g. "light rain".
    #[serde(default)]
    pub weather: Option<String>,

    #[serde(default)]
    pub home_env: EnvironmentAdjustment,

    #[serde(default)]
    pub away_env: EnvironmentAdjustment,
}
impl Fixture {
    /// Resolves team forms and folds the weather penalty (if a description is present) into both
    /// sides' environment adjustments.
    pub fn resolve(&self, config: &Config) -> Result<MatchInputs, InvalidInput> {
        let home_form = self.home.resolve(config, true)?;
        let away_form = self.away.resolve(config, false)?;
        let (mut home_env, mut away_env) = (self.home_env.clone(), self.away_env.clone());
        if let Some(weather) = &self.weather {
            let penalty = config.weather.penalty_for(weather);
            debug!("weather '{weather}' penalty: {penalty}");
            home_env.weather_penalty *= penalty;
            away_env.weather_penalty *= penalty;
        }
        Ok(MatchInputs {
            home_form,
            away_form,
            home_env,
            away_env,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    const FIXTURE: &str = r#"{
        "home": {
            "team_id": "burnley",
            "results": [
                {"opponent": "luton", "goals_for": 2, "goals_against": 1},
                {"goals_for": 0, "goals_against": 0},
                {"goals_for": null, "goals_against": null}
            ]
        },
        "away": {
            "team_id": "chelsea",
            "avg_goals_scored": 1.8,
            "avg_goals_conceded": 1.0,
            "home_advantage_factor": 1.12
        },
        "weather": "light rain",
        "away_env": {"opponent_strength_factor": 1.1}
    }"#;

    #[test]
    fn resolve_fixture() {
        let fixture: Fixture = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!("burnley", fixture.home.team_id());
        assert_eq!("chelsea", fixture.away.team_id());
        let config = Config::default();
        let inputs = fixture.resolve(&config).unwrap();
        assert_eq!(1.0, inputs.home_form.avg_goals_scored);
        assert_eq!(0.5, inputs.home_form.avg_goals_conceded);
        // 2 points per game
        assert_float_relative_eq!(1.1, inputs.home_form.recent_form_multiplier, 1e-12);
        assert_eq!(1.12, inputs.away_form.home_advantage_factor);
        assert_eq!(0.95, inputs.home_env.weather_penalty);
        assert_eq!(0.95, inputs.away_env.weather_penalty);
        assert_eq!(1.1, inputs.away_env.opponent_strength_factor);
        assert_eq!(1.0, inputs.home_env.opponent_strength_factor);
    }

    #[test]
    fn away_results_carry_no_home_advantage() {
        let config = Config {
            form: crate::form::FormCoefficients {
                home_advantage_factor: 1.12,
                ..Default::default()
            },
            ..Default::default()
        };
        let source = TeamSource::Results(TeamResults {
            team_id: "x".into(),
            results: vec![MatchResult::new(1, 0)],
        });
        assert_eq!(1.12, source.resolve(&config, true).unwrap().home_advantage_factor);
        assert_eq!(1.0, source.resolve(&config, false).unwrap().home_advantage_factor);
    }

    #[test]
    fn mixed_team_source_rejected() {
        let mixed = r#"{
            "team_id": "burnley",
            "avg_goals_scored": 1.0,
            "avg_goals_conceded": 1.5,
            "results": [{"goals_for": 2, "goals_against": 1}]
        }"#;
        assert!(serde_json::from_str::<TeamSource>(mixed).is_err());

        let source: TeamSource =
            serde_json::from_str(r#"{"team_id": "burnley", "avg_goals_scored": 1.0, "avg_goals_conceded": 1.5}"#)
                .unwrap();
        assert!(matches!(source, TeamSource::Form(_)));
        let source: TeamSource =
            serde_json::from_str(r#"{"team_id": "burnley", "results": []}"#).unwrap();
        assert!(matches!(source, TeamSource::Results(_)));
    }

    #[test]
    fn without_weather() {
        let fixture = Fixture {
            home: TeamSource::Form(TeamForm::new("a", 1.0, 1.0)),
            away: TeamSource::Form(TeamForm::new("b", 1.0, 1.0)),
            weather: None,
            home_env: Default::default(),
            away_env: Default::default(),
        };
        let inputs = fixture.resolve(&Config::default()).unwrap();
        assert_eq!(1.0, inputs.home_env.weather_penalty);
        assert_eq!(1.0, inputs.away_env.weather_penalty);
    }
}
