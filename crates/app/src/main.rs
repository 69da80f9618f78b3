use std::path::PathBuf;

use cadence_core::{
    easing, tween, Chain, Component, Driver, DriverConfig, Parallel, Point, RunReport, Scenario, TweenParams,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> cadence_core::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { scenario, max_steps } => run_scenario(&scenario, max_steps),
        Commands::Demo { frames } => run_demo(frames),
    }
}

fn run_scenario(path: &PathBuf, max_steps: Option<u64>) -> cadence_core::Result<()> {
    tracing::info!(?path, "loading scenario");

    let mut scenario = Scenario::load(path)?;
    if let Some(max_steps) = max_steps {
        scenario.driver.max_steps = max_steps;
    }

    let mut driver = Driver::new(scenario.driver.clone());
    for component in scenario.build_components()? {
        driver.add(announce_completion(component));
    }

    log_report(&driver.run());
    Ok(())
}

fn run_demo(frames: u32) -> cadence_core::Result<()> {
    tracing::info!(frames, "running demo");

    let fade = tween::scalar(
        TweenParams {
            start: 0.0,
            end: 1.0,
            duration: frames,
            easing: Some(easing::in_out_cubic),
        },
        |opacity| tracing::debug!(opacity, "fade"),
    )
    .with_name("fade");
    let slide = tween::point(
        Point::new(0.0, 0.0),
        Point::new(320.0, 180.0),
        frames,
        Some(easing::out_expo),
        |position| tracing::debug!(x = position.x, y = position.y, "slide"),
    )
    .with_name("slide");
    let hold = tween::scalar(
        TweenParams {
            start: 1.0,
            end: 0.0,
            duration: frames / 2,
            easing: None,
        },
        |opacity| tracing::debug!(opacity, "fade out"),
    )
    .with_name("fade out");

    let intro = Chain::from_parts([Component::from(Parallel::from_parts([fade, slide])), hold.into()])?
        .with_name("demo")
        .with_on_start(|id| tracing::info!(%id, "demo started"));

    let mut driver = Driver::new(DriverConfig::default());
    driver.add(announce_completion(intro.into()));
    log_report(&driver.run());
    Ok(())
}

/// Wraps a top-level component so its completion is logged at info level.
fn announce_completion(component: Component) -> Component {
    let name = component.name().to_string();
    let kind = component.kind();
    component.with_on_complete(move |id| tracing::info!(%id, kind, name = %name, "component completed"))
}

fn log_report(report: &RunReport) {
    if report.finished {
        tracing::info!(steps = report.steps, seconds = report.elapsed_seconds, "all components completed");
    } else {
        tracing::warn!(steps = report.steps, seconds = report.elapsed_seconds, "stopped at step limit");
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive cooperative timer components frame by frame", long_about = None)]
struct Cli {
    /// Log every start, completion and tween value.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a JSON scenario and drive it until it completes.
    Run {
        /// Path to the scenario file.
        scenario: PathBuf,
        /// Overrides the step limit from the scenario.
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Drive a built-in fade and slide animation.
    Demo {
        /// Length of the main tween in frames.
        #[arg(long, default_value_t = 60)]
        frames: u32,
    },
}
