//! Design pattern walkthrough.
//!
//! ```text
//! patterns                       comment + warning via the shared logger, dog and cat speak
//! patterns tour                  adds the stateless logger
//! patterns log <LEVEL> <MSG>     one entry; `error` exits with status 1
//! patterns speak <ANIMAL>...     build animals by name
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use patterns::config::{load_config, ColorMode, PatternsConfig};
use patterns::factory::AnimalFactory;
use patterns::logging::{stateless, LogLevel, SingletonLogger};
use patterns::observability::init_tracing;
use patterns::scenario;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Singleton logger, stateless logger and simple factory", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Severity colors (overrides the config file)
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the shared logger, the stateless logger and the factory
    Tour,
    /// Write a single log entry
    Log {
        /// comment, warning or error
        level: LogLevel,
        #[arg(allow_hyphen_values = true)]
        message: String,
        /// Which logger shape writes the entry
        #[arg(long, value_enum, default_value_t = Via::Shared)]
        via: Via,
    },
    /// Create animals by type name and make them speak
    Speak {
        #[arg(required = true)]
        animals: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Via {
    Shared,
    Static,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Usage errors exit 1 like every other failure; help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PatternsConfig::default(),
    };
    if let Some(color) = cli.color {
        config.console.color = color;
    }

    init_tracing(&config.diagnostics.filter);
    config.console.color.apply();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        None => {
            let mut out = io::stdout().lock();
            scenario::end_to_end(&mut out)?;
            out.flush()?;
        }
        Some(Commands::Tour) => {
            let mut out = io::stdout().lock();
            scenario::tour(&mut out)?;
            out.flush()?;
        }
        Some(Commands::Log {
            level,
            message,
            via,
        }) => match via {
            Via::Shared => SingletonLogger::instance().log(level, &message),
            Via::Static => stateless::log(level, &message),
        },
        Some(Commands::Speak { animals }) => {
            for name in &animals {
                match AnimalFactory::create_animal(name) {
                    Ok(animal) => animal.speak(),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
