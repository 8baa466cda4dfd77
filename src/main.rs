//! Mitchell-Schaeffer - cardiac cell model right-hand side
//!
//! Evaluates the model derivatives at a single state. Stepping the state in
//! time is left to whatever integrator consumes the numbers.
//!
//! # Usage
//!
//! ```bash
//! mitchell-schaeffer defaults > model.toml
//! mitchell-schaeffer eval --config model.toml --set tau_in=0.25 --u 0.5
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mitchell_schaeffer::{derivatives_with_currents, error::Result, ModelConfig};
use tracing::{debug, error, info};

/// Mitchell-Schaeffer cardiac cell model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default parameters and initial state as TOML
    Defaults,

    /// Evaluate the currents and derivatives at one state
    Eval {
        /// Path to a TOML parameter file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Override a parameter or state variable (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        overrides: Vec<String>,

        /// Membrane potential (overrides the config's initial state)
        #[arg(long, allow_negative_numbers = true)]
        u: Option<f64>,

        /// Gating variable (overrides the config's initial state)
        #[arg(long, allow_negative_numbers = true)]
        h: Option<f64>,

        /// Reject non-positive time constants and non-finite values
        #[arg(long, default_value_t = false)]
        validate: bool,
    },
}

fn main() {
    let args = Args::parse();

    let log_level_filter = args
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Defaults => {
            print!("{}", ModelConfig::default().to_toml_string()?);
            Ok(())
        }
        Command::Eval {
            config,
            overrides,
            u,
            h,
            validate,
        } => {
            let mut model = match config {
                Some(path) => ModelConfig::load(&path)?,
                None => {
                    debug!("No config file provided, using defaults");
                    ModelConfig::default()
                }
            };

            model.apply_overrides(&overrides)?;
            if let Some(u) = u {
                model.initial_state.u = u;
            }
            if let Some(h) = h {
                model.initial_state.h = h;
            }

            if validate {
                model.validate()?;
                info!("Config validated successfully");
            }

            for (name, value) in model.parameters.iter() {
                debug!("  {name:<9}: {value}");
            }

            let state = model.initial_state;
            let (currents, d) = derivatives_with_currents(&state, &model.parameters);

            println!("u     = {}", state.u);
            println!("h     = {}", state.h);
            println!("J_in  = {}", currents.j_in);
            println!("J_out = {}", currents.j_out);
            println!("du/dt = {}", d.du);
            println!("dh/dt = {}", d.dh);
            Ok(())
        }
    }
}
