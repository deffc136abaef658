use clap::{Parser, Subcommand};
use fitness_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitjournal")]
#[command(about = "Console fitness journal: profile, goal, workouts and meals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a profile, goal, workout and meal, then print the report (default)
    Record {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// List nutrients alphabetically instead of in entry order
        #[arg(long)]
        sort_nutrients: bool,

        /// Fail on a workout type other than Cardio or Strength
        #[arg(long)]
        strict_workouts: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    fitness_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Record {
            json,
            sort_nutrients,
            strict_workouts,
        }) => cmd_record(config, json, sort_nutrients, strict_workouts),
        Some(Commands::Config) => cmd_config(&config),
        None => cmd_record(config, false, false, false),
    }
}

fn cmd_record(
    mut config: Config,
    json: bool,
    sort_nutrients: bool,
    strict_workouts: bool,
) -> Result<()> {
    // Flags override the config file
    if sort_nutrients {
        config.report.nutrient_order = NutrientOrder::Name;
    }
    if strict_workouts {
        config.workout.unknown_kind = UnknownWorkoutPolicy::Reject;
    }
    tracing::debug!("Effective config: {:?}", config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let user = collect_user(&mut prompter, &config)?;

    if json {
        println!("{}", render_json(&user)?);
    } else {
        println!();
        println!("{}", render_progress(&user, &config.report));
    }

    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
