use super::*;
use crate::poisson;
use crate::testing::assert_sums_to_one;
use assert_float_eq::*;
use tinyrand::{RandRange, StdRand};

fn create_test_4x4_scoregrid() -> Scoregrid {
    let home = GoalProbs::try_from(vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let away = GoalProbs::try_from(vec![0.4, 0.3, 0.2, 0.1]).unwrap();
    Scoregrid::from_independent(&home, &away).unwrap()
}

#[test]
pub fn independent_cells_are_products() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_eq!(3, scoregrid.k_max());
    assert_float_relative_eq!(0.04, scoregrid[(0, 0)], 1e-12);
    assert_float_relative_eq!(0.03, scoregrid[(0, 1)], 1e-12);
    assert_float_relative_eq!(0.08, scoregrid[(1, 0)], 1e-12);
    assert_float_relative_eq!(0.04, scoregrid[(3, 3)], 1e-12);
    assert_float_relative_eq!(0.16, scoregrid.prob(&Score::new(3, 0)), 1e-12);
}

#[test]
pub fn outcome_win_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_relative_eq!(0.65, Outcome::Win(Side::Home).gather(&scoregrid).unwrap(), 1e-12);
    assert_float_relative_eq!(0.15, Outcome::Win(Side::Away).gather(&scoregrid).unwrap(), 1e-12);
}

#[test]
pub fn outcome_draw_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_relative_eq!(0.2, Outcome::Draw.gather(&scoregrid).unwrap(), 1e-12);
}

#[test]
pub fn outcome_goals_ou_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_relative_eq!(0.35, Outcome::GoalsUnder(3).gather(&scoregrid).unwrap(), 1e-12);
    assert_float_relative_eq!(0.65, Outcome::GoalsOver(2).gather(&scoregrid).unwrap(), 1e-12);
}

#[test]
pub fn outcome_correct_score_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_relative_eq!(
        0.04,
        Outcome::CorrectScore(Score::nil_all()).gather(&scoregrid).unwrap(),
        1e-12
    );
    assert_float_relative_eq!(
        0.09,
        Outcome::CorrectScore(Score::new(2, 1)).gather(&scoregrid).unwrap(),
        1e-12
    );
    // the last row and column hold 3 or more goals
    assert_eq!(None, Outcome::CorrectScore(Score::new(3, 2)).gather(&scoregrid));
    assert_eq!(None, Outcome::CorrectScore(Score::new(4, 0)).gather(&scoregrid));
}

#[test]
pub fn outcome_both_teams_to_score_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_relative_eq!(0.54, Outcome::BothTeamsToScore.gather(&scoregrid).unwrap(), 1e-12);
}

#[test]
pub fn goal_lines_beyond_tail_are_unresolved() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_eq!(None, Outcome::GoalsOver(3).gather(&scoregrid));
    assert_eq!(None, Outcome::GoalsUnder(4).gather(&scoregrid));

    let home = poisson::distribution(5.0, 1).unwrap();
    let away = poisson::distribution(5.0, 1).unwrap();
    let scoregrid = Scoregrid::from_independent(&home, &away).unwrap();
    assert_eq!(None, Outcome::GoalsOver(2).gather(&scoregrid));
    assert_eq!(None, Outcome::GoalsUnder(2).gather(&scoregrid));
    let nil_all = f64::exp(-10.0);
    assert_float_relative_eq!(1.0 - nil_all, Outcome::GoalsOver(0).gather(&scoregrid).unwrap(), 1e-9);
    assert_float_relative_eq!(nil_all, Outcome::GoalsUnder(1).gather(&scoregrid).unwrap(), 1e-9);
}

#[test]
pub fn goal_lines_agree_across_truncations() {
    let grid = |k_max| {
        let home = poisson::distribution(2.4, k_max).unwrap();
        let away = poisson::distribution(1.9, k_max).unwrap();
        Scoregrid::from_independent(&home, &away).unwrap()
    };
    let (coarse, fine) = (grid(4), grid(30));
    for goals in 0..4 {
        let over = Outcome::GoalsOver(goals).gather(&coarse).unwrap();
        assert_float_relative_eq!(Outcome::GoalsOver(goals).gather(&fine).unwrap(), over, 1e-9);
        let under = Outcome::GoalsUnder(goals + 1).gather(&coarse).unwrap();
        assert_float_relative_eq!(Outcome::GoalsUnder(goals + 1).gather(&fine).unwrap(), under, 1e-9);
        assert_float_relative_eq!(1.0, over + under, 1e-9);
    }
    assert!(Outcome::Win(Side::Home).is_resolvable(1));
    assert!(Outcome::GoalsOver(3).is_resolvable(4));
    assert!(!Outcome::GoalsOver(4).is_resolvable(4));
    assert!(Outcome::GoalsUnder(4).is_resolvable(4));
    assert!(!Outcome::CorrectScore(Score::new(0, 4)).is_resolvable(4));
}

#[test]
pub fn mismatched_dimensions_rejected() {
    let home = poisson::distribution(1.5, 6).unwrap();
    let away = poisson::distribution(1.0, 5).unwrap();
    assert_eq!(
        DimensionMismatch { home: 7, away: 6 },
        Scoregrid::from_independent(&home, &away).unwrap_err()
    );
}

#[test]
pub fn poisson_grid_sums_to_one() {
    let mut rand = StdRand::default();
    for _ in 0..200 {
        let home_rate = rand.next_range(0..5_000u32) as f64 / 1_000.0;
        let away_rate = rand.next_range(0..5_000u32) as f64 / 1_000.0;
        let k_max = rand.next_range(1..15u16) as u8;
        let home = poisson::distribution(home_rate, k_max).unwrap();
        let away = poisson::distribution(away_rate, k_max).unwrap();
        let scoregrid = Scoregrid::from_independent(&home, &away).unwrap();
        assert_sums_to_one(scoregrid.matrix().flatten(), 1e-9);
        assert_float_relative_eq!(1.0, scoregrid.total(), 1e-9);
    }
}

#[test]
pub fn flip_swaps_sides() {
    let scoregrid = create_test_4x4_scoregrid();
    let flipped = scoregrid.flip();
    for (score, prob) in scoregrid.iter() {
        assert_eq!(prob, flipped.prob(&score.flip()));
    }
    assert_eq!(
        Outcome::Win(Side::Home).gather(&scoregrid).unwrap(),
        Outcome::Win(Side::Away).gather(&flipped).unwrap()
    );
}

#[test]
pub fn iter_visits_every_score() {
    let scoregrid = create_test_4x4_scoregrid();
    let scores = scoregrid.iter().collect::<Vec<_>>();
    assert_eq!(16, scores.len());
    assert_eq!(Score::nil_all(), scores[0].0);
    assert_eq!(Score::new(0, 3), scores[3].0);
    assert_eq!(Score::new(3, 3), scores[15].0);
    assert_float_relative_eq!(0.16, scores[12].1, 1e-12);
}

#[test]
pub fn score_total_and_display() {
    let score = Score::new(3, 2);
    assert_eq!(5, score.total());
    assert_eq!(Score::new(2, 3), score.flip());
    assert_eq!("3-2", score.to_string());
    assert_eq!(510, Score::new(255, 255).total());
}

#[test]
pub fn outcome_display() {
    assert_eq!("Home win", Outcome::Win(Side::Home).to_string());
    assert_eq!("Over 2.5 goals", Outcome::GoalsOver(2).to_string());
    assert_eq!("Under 2.5 goals", Outcome::GoalsUnder(3).to_string());
    assert_eq!("Correct score 1-0", Outcome::CorrectScore(Score::new(1, 0)).to_string());
}
