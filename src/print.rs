use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::display::DisplayPercent;
use crate::predict::Prediction;
use crate::scoregrid::{Outcome, Score, Scoregrid, Side};

pub fn tabulate_rates(home_team: &str, away_team: &str, prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Team".into(), "Rate".into(), "Mean".into()],
        ));
    for (team, rate, distribution) in [
        (home_team, prediction.home_rate, &prediction.home_distribution),
        (away_team, prediction.away_rate, &prediction.away_distribution),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                team.to_string().into(),
                format!("{rate:.3}").into(),
                format!("{:.3}", distribution.mean()).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_outcomes(prediction: &Prediction) -> Table {
    let probs = &prediction.outcome_probs;
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Probability".into()],
        ));
    let secondary = [Outcome::GoalsOver(2), Outcome::BothTeamsToScore]
        .into_iter()
        .filter_map(|outcome| {
            let prob = outcome.gather(&prediction.scoregrid)?;
            Some((outcome, prob))
        });
    for (outcome, prob) in [
        (Outcome::Win(Side::Home), probs.home_win),
        (Outcome::Draw, probs.draw),
        (Outcome::Win(Side::Away), probs.away_win),
    ]
    .into_iter()
    .chain(secondary)
    {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{outcome}").into(),
                format!("{}", DisplayPercent(prob)).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_scores(scores: &[(Score, f64)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Score".into(), "Probability".into()],
        ));
    for (score, prob) in scores {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{score}").into(),
                format!("{:.2}", DisplayPercent(*prob)).into(),
            ],
        ));
    }
    table
}

/// Renders the grid with home goals down the rows and away goals across the columns. The last
/// row and column are labelled as open-ended since they hold the truncated tail.
pub fn tabulate_scoregrid(scoregrid: &Scoregrid) -> Table {
    let k_max = scoregrid.k_max() as usize;
    let label = |goals: usize| {
        if goals == k_max {
            format!("{goals}+")
        } else {
            format!("{goals}")
        }
    };
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(5))
                    .with(HAlign::Centred),
            )];
            for _ in 0..=k_max {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(7)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["H \\ A".into()];
            for away in 0..=k_max {
                header_cells.push(label(away).into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });
    for home in 0..=k_max {
        let mut row_cells = vec![label(home).into()];
        for away in 0..=k_max {
            row_cells.push(format!("{:.2}", DisplayPercent(scoregrid[(home, away)])).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}
