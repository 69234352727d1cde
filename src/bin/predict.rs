use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use scorecast::file::FromJsonFile;
use scorecast::fixture::Fixture;
use scorecast::outcome::top_scores;
use scorecast::predict::{Config, Predictor};
use scorecast::print;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file describing the fixture
    fixture: Option<PathBuf>,

    /// JSON file with model configuration
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// maximum number of goals per side before the tail is folded
    #[clap(short = 'k', long)]
    k_max: Option<u8>,

    /// number of most likely scorelines to list
    #[clap(short = 't', long, default_value_t = 5)]
    top: usize,

    /// print the full scoregrid
    #[clap(short = 'g', long)]
    grid: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.top == 0 {
            return Err(anyhow!("at least one scoreline must be listed"));
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let mut config = match &args.config {
        None => Config::default(),
        Some(path) => {
            debug!("loading config from {}", path.display());
            Config::from_json_file(path)?
        }
    };
    if let Some(k_max) = args.k_max {
        config.k_max = k_max;
    }
    let predictor = Predictor::try_from(config)?;

    let fixture_path = args
        .fixture
        .as_ref()
        .ok_or(anyhow!("fixture file must be specified"))?;
    let fixture = Fixture::from_json_file(fixture_path)?;
    let (home_team, away_team) = (fixture.home.team_id(), fixture.away.team_id());
    info!("predicting {home_team} vs {away_team} from {}", fixture_path.display());

    let inputs = fixture.resolve(predictor.config())?;
    let prediction = predictor.predict(&inputs)?;
    info!(
        "predicted scoreline: {home_team} {} {away_team}",
        prediction.most_likely
    );

    let console = Console::default();
    println!("Rates:\n{}", console.render(&print::tabulate_rates(home_team, away_team, &prediction)));
    println!("Outcomes:\n{}", console.render(&print::tabulate_outcomes(&prediction)));
    let top = top_scores(&prediction.scoregrid, args.top);
    println!("Most likely scorelines:\n{}", console.render(&print::tabulate_scores(&top)));
    if args.grid {
        println!("Scoregrid:\n{}", console.render(&print::tabulate_scoregrid(&prediction.scoregrid)));
    }
    Ok(())
}
