mod input;
mod shell;

use clap::{Parser, Subcommand};
use fitlog_core::*;
use shell::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Log cardio and strength exercises with calorie estimates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override profile name
    #[arg(long, global = true)]
    name: Option<String>,

    /// Override profile age
    #[arg(long, global = true)]
    age: Option<u32>,

    /// Override profile body weight
    #[arg(long, global = true)]
    weight: Option<f64>,

    /// Override the MET used when none is entered
    #[arg(long, global = true)]
    default_met: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive exercise log (default)
    Log,

    /// Write a config file with the current settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fitlog_core::logging::init();

    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let config = apply_overrides(Config::load_or_default(&config_path)?, &cli);
    config.validate()?;

    match cli.command {
        Some(Commands::InitConfig { force }) => cmd_init_config(&config, config_path, force),
        Some(Commands::Log) | None => cmd_log(&config),
    }
}

/// Command-line profile flags win over the config file
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(name) = &cli.name {
        config.profile.name = name.clone();
    }
    if let Some(age) = cli.age {
        config.profile.age = age;
    }
    if let Some(weight) = cli.weight {
        config.profile.weight = weight;
    }
    if let Some(met) = cli.default_met {
        config.exercise.default_met = met;
    }
    config
}

fn cmd_log(config: &Config) -> Result<()> {
    let mut profile = UserProfile::from_config(&config.profile);
    tracing::info!(
        "Starting session for {} (age {}, weight {})",
        profile.name(),
        profile.age(),
        profile.weight()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), config.exercise.default_met).run(&mut profile)?;

    tracing::info!("Session ended with {} exercises logged", profile.len());
    Ok(())
}

fn cmd_init_config(config: &Config, path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    config.save_to(&path)?;
    println!("✓ Wrote config to {}", path.display());
    Ok(())
}
