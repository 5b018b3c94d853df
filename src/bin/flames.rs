//! Command-line FLAMES calculator.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flames::{FlamesConfig, FlamesGame, LetterOccurrence, Reading};

#[derive(Parser, Debug)]
#[command(name = "flames", version, about = "Find out what two names are destined to be")]
struct Cli {
    /// First name
    name_a: String,

    /// Second name
    name_b: String,

    /// Seed for story selection
    #[arg(long)]
    seed: Option<u64>,

    /// Load configuration from a JSON file (flags override it)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Skip easter-egg detection
    #[arg(long)]
    no_easter_eggs: bool,

    /// Print the reading as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => FlamesConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => FlamesConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_story_seed(seed);
    }
    if cli.no_easter_eggs {
        config = config.with_easter_eggs(false);
    }

    let mut game = FlamesGame::new(config);
    let reading = game.calculate(&cli.name_a, &cli.name_b)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print_reading(&reading);
    }
    Ok(())
}

fn struck(occurrences: &[LetterOccurrence]) -> String {
    occurrences
        .iter()
        .map(|o| if o.cancelled { '-' } else { o.letter })
        .collect()
}

fn print_reading(reading: &Reading) {
    let c = &reading.cancellation;
    println!("{:>12}  {}", c.name_a, struck(&c.occurrences_a()));
    println!("{:>12}  {}", c.name_b, struck(&c.occurrences_b()));
    println!("   remaining  {}", c.remaining);

    let order: Vec<String> = reading.trace.eliminated().map(|l| l.to_string()).collect();
    println!("  eliminated  {}", order.join(" "));
    println!();
    println!("{} ({})", reading.meaning, reading.result);
    println!("{}", reading.story);

    if let Some(egg) = &reading.easter_egg {
        println!();
        println!("{} {}", egg.emoji, egg.message);
    }
}
