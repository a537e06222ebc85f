use std::{
    error::Error,
    io::{self, Write},
};

use clap::{Parser, Subcommand};
use moody_chart::{ChartConfig, MoodyChart, ShowConfig};
use moody_friction::{
    ColebrookConfig, FrictionFactor, FrictionModel, PointClassifier, PointEvaluation,
    RelativeRoughness, ReynoldsNumber, colebrook::DEFAULT_INITIAL_GUESS,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod prompt;

#[derive(Parser)]
#[command(name = "moody")]
#[command(about = "Moody chart and Darcy friction factor lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Moody chart
    Chart,
    /// Evaluate the friction factor at one point and mark it on the chart
    Point {
        /// Reynolds number (prompted for if omitted)
        re: Option<f64>,
        /// Relative roughness ε/d (prompted for if omitted)
        roughness: Option<f64>,
        /// Seed for transitional sampling, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Seed friction factor for the Colebrook solve
        #[arg(long, default_value_t = DEFAULT_INITIAL_GUESS)]
        initial_guess: f64,
        /// Print the result without opening the chart
        #[arg(long)]
        no_plot: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Chart) {
        Commands::Chart => cmd_chart(),
        Commands::Point {
            re,
            roughness,
            seed,
            initial_guess,
            no_plot,
        } => cmd_point(re, roughness, seed, initial_guess, no_plot),
    }
}

fn cmd_chart() -> Result<(), Box<dyn Error>> {
    let chart = MoodyChart::compute(&ChartConfig::default())?;
    chart.show(ShowConfig::new())?;
    Ok(())
}

fn cmd_point(
    re: Option<f64>,
    roughness: Option<f64>,
    seed: Option<u64>,
    initial_guess: f64,
    no_plot: bool,
) -> Result<(), Box<dyn Error>> {
    let re = ReynoldsNumber::new(value_or_prompt(re, "Enter Reynolds number: ")?)?;
    let roughness =
        RelativeRoughness::new(value_or_prompt(roughness, "Enter relative roughness value: ")?)?;

    if !roughness.is_charted() {
        warn!(
            roughness = roughness.value(),
            max = RelativeRoughness::CHARTED_MAX,
            "relative roughness lies above the charted range"
        );
    }

    let colebrook =
        ColebrookConfig::default().with_initial_guess(FrictionFactor::new(initial_guess)?);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut classifier = PointClassifier::new(FrictionModel::new(colebrook), rng);

    let point = classifier.classify_and_evaluate(re, roughness)?;
    info!(
        re = re.value(),
        roughness = roughness.value(),
        regime = %point.regime,
        "evaluated point"
    );
    print_point(&mut io::stdout().lock(), &point)?;

    if !no_plot {
        MoodyChart::compute(&ChartConfig::default())?
            .with_highlight(point)
            .show(ShowConfig::new())?;
    }

    Ok(())
}

fn value_or_prompt(value: Option<f64>, message: &str) -> Result<f64, prompt::PromptError> {
    match value {
        Some(value) => Ok(value),
        None => prompt::read_number(&mut io::stdin().lock(), &mut io::stdout(), message),
    }
}

fn print_point<W: Write>(out: &mut W, point: &PointEvaluation) -> io::Result<()> {
    writeln!(out, "Reynolds number:    {}", point.reynolds)?;
    writeln!(out, "Relative roughness: {}", point.roughness)?;
    writeln!(out, "Flow regime:        {}", point.regime)?;
    writeln!(out, "Friction factor:    {:.5}", point.factor.value())?;
    if !point.regime.is_deterministic() {
        writeln!(out, "(sampled from the transitional distribution)")?;
    }
    Ok(())
}
